use thiserror::Error;

/// Errors raised synchronously by grid construction and updates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimension: {0} (rows and columns must be positive integers)")]
    InvalidDimension(String),
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("not a well-formed cell: {0}")]
    TypeMismatch(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
