//! Загрузка таблицы из текстового файла

use std::fs;
use std::path::Path;

use crate::types::{PrepError, Table};

/// Разбивает текст на строки по переводам строк и на ячейки по пробельным
/// символам; пустые строки и пустые ячейки отбрасываются. Равенство длин
/// строк не проверяется
pub fn parse_table(content: &str) -> Table {
    content
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// Читает файл целиком и разбирает его в таблицу
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table, PrepError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_table(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_rows_and_cells() {
        let table = parse_table("1 2 low\n3 4 high");
        assert_eq!(
            table,
            vec![
                vec!["1".to_string(), "2".to_string(), "low".to_string()],
                vec!["3".to_string(), "4".to_string(), "high".to_string()],
            ]
        );
    }

    #[test]
    fn blank_lines_are_dropped() {
        let table = parse_table("\n\n1 2\n\n   \n3 4\n\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table[0], vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn runs_of_whitespace_separate_cells() {
        let table = parse_table("  1\t\t2   low  ");
        assert_eq!(
            table,
            vec![vec!["1".to_string(), "2".to_string(), "low".to_string()]]
        );
    }

    #[test]
    fn empty_content_yields_empty_table() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("   \n  ").is_empty());
    }
}
