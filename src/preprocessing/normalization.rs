//! Нормализация данных

use crate::parsing::coercion;
use crate::stats::aggregates;
use crate::types::{PrepError, Table};

/// Линейное приведение каждого столбца к интервалу [a, b]:
/// ((b - a) * (x - min)) / (max - min) + a, запись с двумя знаками
/// после точки. Границы a и b не проверяются на порядок
pub fn normalize_into_intervals(table: &mut Table, a: f64, b: f64) -> Result<(), PrepError> {
    let min_values = aggregates::find_min(table)?;
    let max_values = aggregates::find_max(table)?;
    let rows = table.len();
    let columns = min_values.len();

    for j in 0..columns {
        if min_values[j] == max_values[j] {
            continue; // Вырожденный столбец не трогаем, иначе деление на ноль
        }
        for i in 0..rows {
            let parsed = coercion::to_float(&table[i][j]);
            let normalized =
                ((b - a) * (parsed - min_values[j])) / (max_values[j] - min_values[j]) + a;
            table[i][j] = format!("{:.2}", normalized);
        }
    }

    Ok(())
}

/// Z-оценка: (x - среднее) / стандартное отклонение, запись с двумя
/// знаками после точки. Столбцы с нулевым отклонением не трогаем
pub fn normalize(table: &mut Table) -> Result<(), PrepError> {
    let averages = aggregates::avg(table)?;
    let std_devs = aggregates::std_dev(table)?;
    let rows = table.len();
    let columns = averages.len();

    for j in 0..columns {
        if std_devs[j] == 0.0 {
            continue;
        }
        for i in 0..rows {
            let parsed = coercion::to_float(&table[i][j]);
            let normalized = (parsed - averages[j]) / std_devs[j];
            table[i][j] = format!("{:.2}", normalized);
        }
    }

    Ok(())
}
