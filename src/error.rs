//! Error types for path joining

use thiserror::Error;

/// The error type for path joining operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// No segment was supplied for a join step
    #[error("Missing path segment - every join requires a segment, even an empty one")]
    InvalidArgument,

    /// The joined path could not be allocated
    #[error("Allocation failed: could not reserve {requested} bytes for the joined path")]
    AllocationFailure { requested: usize },
}

/// Result type for path joining operations
pub type Result<T> = std::result::Result<T, JoinError>;
