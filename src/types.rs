/// Типы данных для модуля предобработки

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Таблица: упорядоченные строки из строковых ячеек, мутируется на месте
pub type Table = Vec<Vec<String>>;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Failed to convert '{0}' to integer")]
    Conversion(String),

    #[error("Empty dataset")]
    EmptyTable,

    #[error("Column {0} has no usable values")]
    EmptyColumn(usize),

    #[error("Column index {index} out of range ({columns} columns)")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseInput {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInput {
    pub rows: Table,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
    pub mean: Vec<f64>,
    pub variance: Vec<f64>,
    pub std_dev: Vec<f64>,
    pub decision_classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniqueInput {
    pub rows: Table,
    #[serde(default)]
    pub column: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniqueOutput {
    pub values: Vec<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImputeInput {
    pub rows: Table,
    #[serde(default)]
    pub grow_by: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleInput {
    pub rows: Table,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOutput {
    pub rows: Table,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeInput {
    pub headers: Vec<String>,
    pub rows: Table,
    pub column: String,
    #[serde(default = "default_drop_first")]
    pub drop_first: bool,
}

fn default_drop_first() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeOutput {
    pub headers: Vec<String>,
    pub rows: Table,
}
