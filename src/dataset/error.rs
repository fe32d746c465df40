//! Dataset error types
//!
//! Defines all errors that can occur while loading the launch table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dataset layer
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header column is absent
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row could not be turned into a launch record
    #[error("Malformed row at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    /// Payload range bounds are not finite or out of order
    #[error("Invalid payload range: [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
