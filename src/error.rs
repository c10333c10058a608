//! Error types.

use std::path::PathBuf;

/// Rejections raised before a simulation starts.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SimError {
    #[error("Invalid quantum {0}: must be at least 1")]
    InvalidQuantum(i64),

    #[error("Invalid arrival {arrival} for process {name:?}: must be non-negative")]
    InvalidArrival { name: String, arrival: i64 },

    #[error("Invalid burst {burst} for process {name:?}: must be positive")]
    InvalidBurst { name: String, burst: i64 },
}

/// Failures while turning a process file into descriptors.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Unsupported input format {0:?}: use .json or .csv")]
    UnsupportedFormat(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Invalid(#[from] SimError),
}
