//! Уникальные значения с сохранением порядка вставки

use crate::parsing::coercion;
use crate::types::{PrepError, Table};

/// Дедуплицирующая последовательность: добавление уже сохраненного
/// значения игнорируется, итерация идет в порядке первого появления
#[derive(Debug, Clone)]
pub struct UniqueValues<T: PartialEq> {
    items: Vec<T>,
}

impl<T: PartialEq> UniqueValues<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, value: T) {
        if !self.items.contains(&value) {
            self.items.push(value);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> Default for UniqueValues<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> IntoIterator for UniqueValues<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Уникальные числовые значения по всей таблице
pub fn get_unique(table: &Table) -> UniqueValues<f64> {
    let mut result = UniqueValues::new();
    for row in table {
        for cell in row {
            result.add(coercion::to_float(cell));
        }
    }
    result
}

/// Уникальные числовые значения одного столбца; индекс проверяется
pub fn get_unique_for_column(table: &Table, column: usize) -> Result<UniqueValues<f64>, PrepError> {
    let columns = table.first().map(|row| row.len()).unwrap_or(0);
    if column >= columns {
        return Err(PrepError::ColumnOutOfRange {
            index: column,
            columns,
        });
    }

    let mut result = UniqueValues::new();
    for row in table {
        result.add(coercion::to_float(&row[column]));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn deduplicates_preserving_first_seen_order() {
        let mut set = UniqueValues::new();
        for v in [1.0, 2.0, 1.0, 3.0, 2.0] {
            set.add(v);
        }
        assert_eq!(set.into_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn collects_unique_over_whole_table() {
        let data = table(&[&["1", "2"], &["1", "3"]]);
        assert_eq!(get_unique(&data).into_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn collects_unique_for_single_column() {
        let data = table(&[&["1", "low"], &["3", "low"], &["1", "high"]]);
        let codes = get_unique_for_column(&data, 1).unwrap();
        assert_eq!(codes.into_vec(), vec![1.0, 3.0]);
    }

    #[test]
    fn column_index_is_validated() {
        let data = table(&[&["1", "2"]]);
        assert!(matches!(
            get_unique_for_column(&data, 2),
            Err(PrepError::ColumnOutOfRange { index: 2, columns: 2 })
        ));
    }

    #[test]
    fn works_with_string_items() {
        let mut set = UniqueValues::new();
        set.add("France".to_string());
        set.add("Spain".to_string());
        set.add("France".to_string());
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next().map(String::as_str), Some("France"));
    }
}
