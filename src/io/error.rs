// src/io/error.rs
use crate::math::error::MathError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldIoError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid station: {0}")]
    InvalidStation(#[from] MathError),

    #[error("No station carries a numeric '{value_field}' field")]
    NoStations { value_field: String },
}

pub type FieldIoResult<T> = Result<T, FieldIoError>;
