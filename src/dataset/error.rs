use std::path::PathBuf;

use crate::division::DivisionKey;

/// Errors that make a dataset unusable.
///
/// Any of these means the dataset must not be displayed at all.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected an array of districts or a {{\"divisions\": [...]}} object, got {0}")]
    InvalidShape(&'static str),

    #[error("dataset contains no divisions")]
    Empty,

    #[error("record {index}: name is empty")]
    EmptyName { index: usize },

    #[error("'{name}': population must be positive")]
    NonPositivePopulation { name: String },

    #[error("'{name}': area must be a non-negative number, got {area}")]
    NegativeArea { name: String, area: f64 },

    #[error("record {index}: invalid division type '{value}'")]
    InvalidType { index: usize, value: String },

    #[error("'{name}': lat and lon must be given together")]
    PartialCoordinates { name: String },

    #[error("'{name}': coordinates ({lat}, {lon}) are out of range")]
    CoordinateOutOfRange { name: String, lat: f64, lon: f64 },

    #[error("{with_id} records have an id but {without_id} do not")]
    MixedKeys { with_id: usize, without_id: usize },

    #[error("duplicate key '{key}' at records {first} and {second}")]
    DuplicateKey {
        key: DivisionKey,
        first: usize,
        second: usize,
    },
}
