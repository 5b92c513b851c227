//! Заполнение пропущенных значений

use std::collections::HashMap;

use crate::types::{PrepError, Table};

const MISSING: &str = "?";

/// Числовой разбор без словаря категорий: категориальный токен
/// здесь считается неудачей разбора
fn try_parse(raw: &str) -> Option<f64> {
    let value = raw.trim();
    if value.contains("more") {
        return value.split("more").next().unwrap_or("").trim().parse().ok();
    }
    value.replace(',', ".").parse().ok()
}

/// Перезаписывает каждый маркер "?" столбца средним числовых значений,
/// а если числовых значений нет - самой частой строкой (при равенстве
/// частот побеждает встреченная раньше). Таблица мутируется на месте
pub fn fill_missing_values(table: &mut Table) -> Result<(), PrepError> {
    let columns = match table.first() {
        Some(row) => row.len(),
        None => return Err(PrepError::EmptyTable),
    };
    let rows = table.len();

    for j in 0..columns {
        let mut frequency: HashMap<String, usize> = HashMap::new();
        let mut seen_order: Vec<String> = Vec::new();
        let mut total_sum = 0.0;
        let mut count = 0usize;

        for i in 0..rows {
            let cell = &table[i][j];
            if cell == MISSING {
                continue;
            }
            match try_parse(cell) {
                Some(num) => {
                    total_sum += num;
                    count += 1;
                }
                None => {
                    if !frequency.contains_key(cell) {
                        seen_order.push(cell.clone());
                    }
                    *frequency.entry(cell.clone()).or_insert(0) += 1;
                }
            }
        }

        let replacement = if count > 0 {
            // Debug-формат сохраняет десятичную точку: 4.0 -> "4.0"
            format!("{:?}", total_sum / count as f64)
        } else {
            let mut best: Option<(&String, usize)> = None;
            for value in &seen_order {
                let occurrences = frequency[value];
                if best.map_or(true, |(_, n)| occurrences > n) {
                    best = Some((value, occurrences));
                }
            }
            match best {
                Some((value, _)) => value.clone(),
                None => return Err(PrepError::EmptyColumn(j)),
            }
        };

        for row in table.iter_mut() {
            if row[j] == MISSING {
                row[j] = replacement.clone();
            }
        }
    }

    Ok(())
}

/// Дописывает в конец таблицы строки, целиком состоящие из маркеров
/// пропуска, шириной в число столбцов первой строки
pub fn grow_with_missing(table: &mut Table, extra_rows: usize) -> Result<(), PrepError> {
    let columns = match table.first() {
        Some(row) => row.len(),
        None => return Err(PrepError::EmptyTable),
    };
    for _ in 0..extra_rows {
        table.push(vec![MISSING.to_string(); columns]);
    }
    Ok(())
}
