/// Модуль разбора входных данных

pub mod coercion;
pub mod loader;

pub use coercion::{decision_class_label, to_float, to_int};
pub use loader::{load_table, parse_table};
