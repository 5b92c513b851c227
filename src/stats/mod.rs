/// Модуль статистик по таблице

pub mod aggregates;
pub mod unique;

pub use aggregates::{avg, find_max, find_min, std_dev, variance};
pub use unique::{get_unique, get_unique_for_column, UniqueValues};
