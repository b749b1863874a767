// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Dimension mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}

pub type MathResult<T> = Result<T, MathError>;
