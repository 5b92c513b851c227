//! One-hot кодирование категориального столбца CSV

use std::fs;
use std::path::Path;

use crate::stats::unique::UniqueValues;
use crate::types::PrepError;

/// Подставляется вместо отсутствующих ячеек короткой строки
const MISSING_FIELD: &str = "MISSING";

/// CSV-таблица: строка заголовков плюс строки данных
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Читает CSV-файл целиком и разбирает его
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<CsvTable, PrepError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_csv(&content))
}

/// Первая непустая строка - заголовок; ячейки разделяются запятыми,
/// короткие строки дополняются до ширины заголовка
pub fn parse_csv(content: &str) -> CsvTable {
    let mut lines = content.trim().lines();

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => header_line.trim().split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let mut row: Vec<String> = line.trim().split(',').map(str::to_string).collect();
        while row.len() < headers.len() {
            row.push(MISSING_FIELD.to_string());
        }
        rows.push(row);
    }

    CsvTable { headers, rows }
}

/// Заменяет категориальный столбец на битовые dummy-столбцы "0"/"1".
/// Категории перечисляются в порядке первого появления; при drop_first
/// первая встреченная категория не получает собственного столбца
pub fn one_hot_encode(csv: &mut CsvTable, column: &str, drop_first: bool) -> Result<(), PrepError> {
    let index = csv
        .headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| PrepError::UnknownColumn(column.to_string()))?;

    let mut categories: UniqueValues<String> = UniqueValues::new();
    for row in &csv.rows {
        categories.add(row[index].clone());
    }

    let retained: Vec<String> = categories
        .into_vec()
        .into_iter()
        .skip(if drop_first { 1 } else { 0 })
        .collect();

    for category in &retained {
        csv.headers.push(category.clone());
    }
    csv.headers.remove(index);

    for row in csv.rows.iter_mut() {
        let value = row[index].clone();
        for category in &retained {
            row.push(if &value == category {
                "1".to_string()
            } else {
                "0".to_string()
            });
        }
        row.remove(index);
    }

    Ok(())
}
