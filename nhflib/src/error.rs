//! Единый тип ошибок публичного API.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NhfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("can not open report {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("can not open result file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("row {row}: bad timestamp {value:?}: {reason}")]
    Timestamp {
        row: usize,
        value: String,
        reason: String,
    },

    #[error("row {row}: bad amount {value:?}: {reason}")]
    Amount {
        row: usize,
        value: String,
        reason: String,
    },

    #[error("daily total for {date} is out of range")]
    Overflow { date: chrono::NaiveDate },

    #[error("row {row}: expected at least 6 fields, got {fields}")]
    ShortRow { row: usize, fields: usize },
}

pub type Result<T> = std::result::Result<T, NhfError>;
