// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatmapError>;

#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] calamine::Error),

    #[error("unknown element symbol: {symbol}")]
    InvalidElement { symbol: String },

    #[error("element listed twice: {symbol}")]
    DuplicateElement { symbol: String },

    #[error("no such property column: {column}")]
    UnknownColumn { column: String },

    #[error("row for {symbol} has {found} values, table has {expected} columns")]
    ColumnMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("unknown colormap: {name}")]
    UnknownColormap { name: String },

    #[error("nothing to save, call plot() first")]
    NoPlot,

    #[error("parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    #[error("render error: {0}")]
    Render(String),
}

impl HeatmapError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
