//! Агрегаты по столбцам таблицы

use ndarray::Array1;

use crate::parsing::coercion;
use crate::types::{PrepError, Table};

/// Число столбцов берется из первой строки
fn column_count(table: &Table) -> Result<usize, PrepError> {
    match table.first() {
        Some(row) => Ok(row.len()),
        None => Err(PrepError::EmptyTable),
    }
}

/// Минимум по каждому столбцу; ячейки "" и "?" не участвуют
pub fn find_min(table: &Table) -> Result<Vec<f64>, PrepError> {
    let columns = column_count(table)?;
    let mut result = Vec::with_capacity(columns);

    for j in 0..columns {
        let eligible: Vec<f64> = table
            .iter()
            .filter(|row| {
                let raw = row[j].trim();
                !raw.is_empty() && raw != "?"
            })
            .map(|row| coercion::to_float(&row[j]))
            .collect();

        if eligible.is_empty() {
            return Err(PrepError::EmptyColumn(j));
        }
        result.push(eligible.into_iter().fold(f64::INFINITY, f64::min));
    }

    Ok(result)
}

/// Максимум по каждому столбцу; ячейки "" и "?" не участвуют
pub fn find_max(table: &Table) -> Result<Vec<f64>, PrepError> {
    let columns = column_count(table)?;
    let mut result = Vec::with_capacity(columns);

    for j in 0..columns {
        let eligible: Vec<f64> = table
            .iter()
            .filter(|row| {
                let raw = row[j].trim();
                !raw.is_empty() && raw != "?"
            })
            .map(|row| coercion::to_float(&row[j]))
            .collect();

        if eligible.is_empty() {
            return Err(PrepError::EmptyColumn(j));
        }
        result.push(eligible.into_iter().fold(f64::NEG_INFINITY, f64::max));
    }

    Ok(result)
}

/// Среднее по каждому столбцу. Считается по ВСЕМ строкам:
/// маркеры пропуска приводятся к 0.0 и входят в сумму
pub fn avg(table: &Table) -> Result<Vec<f64>, PrepError> {
    let columns = column_count(table)?;
    let rows = table.len() as f64;

    Ok((0..columns)
        .map(|j| {
            table
                .iter()
                .map(|row| coercion::to_float(&row[j]))
                .sum::<f64>()
                / rows
        })
        .collect())
}

/// Дисперсия по генеральной совокупности для каждого столбца (ddof = 0)
pub fn variance(table: &Table) -> Result<Vec<f64>, PrepError> {
    let columns = column_count(table)?;
    Ok((0..columns).map(|j| column_variance(table, j)).collect())
}

/// Стандартное отклонение по генеральной совокупности для каждого столбца
pub fn std_dev(table: &Table) -> Result<Vec<f64>, PrepError> {
    Ok(variance(table)?.into_iter().map(f64::sqrt).collect())
}

fn column_variance(table: &Table, column: usize) -> f64 {
    let values: Array1<f64> = table
        .iter()
        .map(|row| coercion::to_float(&row[column]))
        .collect();
    values.var(0.0)
}
