//! Tabular Prep - Rust библиотека предобработки табличных данных

pub mod types;
pub mod parsing;
pub mod stats;
pub mod preprocessing;

pub use types::*;
pub use parsing::*;
pub use stats::*;
pub use preprocessing::*;

// Re-export для удобства
pub use types::{PrepError, Table};
