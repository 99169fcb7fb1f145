//! FILENAME: core/engine/src/error.rs

use crate::value::Kind;
use thiserror::Error;

/// Failures raised by table operations. Every variant is detected before the
/// table is touched, so an `Err` always leaves the table as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid type: expected {expected}, found {found}")]
    InvalidType { expected: String, found: String },

    #[error("invalid time format: {0}")]
    TimestampFormat(String),
}

impl TableError {
    pub fn type_mismatch(expected: Kind, found: Kind) -> Self {
        TableError::InvalidType {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        TableError::IndexOutOfRange { index, len }
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
