//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum FinderError {
    /// Dispatched method name is not recognized
    #[error("Method {0} does not exist on finder")]
    UnknownMethod(String),

    /// Network transport error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },
}

/// Core layer result alias
pub type FinderResult<T> = Result<T, FinderError>;
