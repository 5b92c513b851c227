/// Модуль предобработки данных

pub mod encoding;
pub mod imputation;
pub mod normalization;

pub use encoding::{load_csv, one_hot_encode, parse_csv, CsvTable};
pub use imputation::{fill_missing_values, grow_with_missing};
pub use normalization::{normalize, normalize_into_intervals};
