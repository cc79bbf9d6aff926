use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("cannot parse field {field:?} as an integer: {source}")]
    Parse {
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid label {label}: must be in [0, {limit})")]
    Range { label: i64, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot decode model: {0}")]
    Decoding(String),

    #[error("cannot encode model: {0}")]
    Encoding(String),

    #[error("vector length mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, NetError>;
