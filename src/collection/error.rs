use std::num::ParseIntError;

use thiserror::Error;

/// A type alias for handling errors while collecting smart-log data.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// An error that ends a usage report. The display text of each variant is the
/// line shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// The utility could not be launched, or it exited unsuccessfully.
    #[error("Error executing nvme command: {0}")]
    Execution(String),
    /// The matched field was not an unsigned integer.
    #[error("Error converting data_units_written to integer: {0}")]
    Parse(#[from] ParseIntError),
    /// No usable line was found, or the counter read as zero.
    #[error("data_units_written not found in the output")]
    NotFound,
}

impl From<std::io::Error> for CollectionError {
    fn from(err: std::io::Error) -> Self {
        CollectionError::Execution(err.to_string())
    }
}
