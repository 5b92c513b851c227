//! Сквозной сценарий: файл -> таблица -> статистики -> импутация -> нормализация

use std::io::Write;

use tabular_prep::{parsing, preprocessing, stats};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

#[test]
fn file_round_trip_with_aggregates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1 2 low").unwrap();
    writeln!(file, "3 4 high").unwrap();

    let table = parsing::load_table(file.path()).unwrap();
    assert_eq!(table, vec![row(&["1", "2", "low"]), row(&["3", "4", "high"])]);

    // Категориальные коды: low = 1, high = 3
    assert_eq!(stats::find_min(&table).unwrap(), vec![1.0, 2.0, 1.0]);
    assert_eq!(stats::find_max(&table).unwrap(), vec![3.0, 4.0, 3.0]);
    assert_eq!(stats::avg(&table).unwrap(), vec![2.0, 3.0, 2.0]);
}

#[test]
fn expansion_and_imputation_flow() {
    let table = parsing::parse_table("1 low\n3 low\n5 high");

    let mut working = table.clone();
    preprocessing::grow_with_missing(&mut working, 1).unwrap();
    preprocessing::fill_missing_values(&mut working).unwrap();

    // Числовой столбец получает среднее, категориальный - моду
    assert_eq!(working[3], row(&["3.0", "low"]));
    assert_eq!(working.len(), 4);
}

#[test]
fn interval_scaling_after_parsing() {
    let mut table = parsing::parse_table("1 2 low\n3 4 high");
    preprocessing::normalize_into_intervals(&mut table, 0.0, 1.0).unwrap();
    assert_eq!(
        table,
        vec![row(&["0.00", "0.00", "0.00"]), row(&["1.00", "1.00", "1.00"])]
    );
}

#[test]
fn standardization_after_parsing() {
    let mut table = parsing::parse_table("1 2 low\n3 4 high");
    preprocessing::normalize(&mut table).unwrap();
    assert_eq!(
        table,
        vec![
            row(&["-1.00", "-1.00", "-1.00"]),
            row(&["1.00", "1.00", "1.00"])
        ]
    );
}

#[test]
fn unique_values_across_the_table() {
    let table = parsing::parse_table("1 2\n1 3");
    let unique = stats::get_unique(&table);
    assert_eq!(unique.into_vec(), vec![1.0, 2.0, 3.0]);

    let classes = stats::get_unique_for_column(&table, 1).unwrap();
    assert_eq!(classes.into_vec(), vec![2.0, 3.0]);
}

#[test]
fn independent_transformations_require_cloning() {
    // Нормализации пишут в ту же таблицу, поэтому независимые
    // представления требуют явного клонирования
    let base = parsing::parse_table("1 2\n3 4");

    let mut scaled = base.clone();
    preprocessing::normalize_into_intervals(&mut scaled, 0.0, 1.0).unwrap();

    let mut standardized = base.clone();
    preprocessing::normalize(&mut standardized).unwrap();

    assert_eq!(base, vec![row(&["1", "2"]), row(&["3", "4"])]);
    assert_ne!(scaled, standardized);
}
