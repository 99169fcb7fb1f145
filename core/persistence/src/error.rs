//! FILENAME: core/persistence/src/error.rs

use tabula_engine::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Invalid row at line {line}: {source}")]
    Row { line: u64, source: TableError },

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
}
