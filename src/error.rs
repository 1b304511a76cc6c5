use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort loading a city's dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The city's CSV file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be read or decoded, or a required column is missing.
    #[error("Malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// A Start Time value could not be parsed, so Month and Day of Week
    /// cannot be derived.
    #[error("Invalid Start Time {value:?} on line {line}")]
    Timestamp { line: u64, value: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;
