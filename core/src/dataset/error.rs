//! Error types for dataset loading

use thiserror::Error;

/// Errors while loading the static audit dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset JSON")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate clinic id '{id}'")]
    DuplicateId { id: String },

    #[error("clinic '{id}': {field} = {value} is outside {min}..={max}")]
    OutOfRange {
        id: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
