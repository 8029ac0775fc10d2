//! Error types for authorization header extraction.

use thiserror::Error;

/// Errors that can occur while extracting an API key from request headers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthHeaderError {
    /// No `Authorization` header present, or its value is empty.
    #[error("no authorization header included")]
    NoAuthHeader,

    /// Header present but not of the `ApiKey <token>` shape (wrong scheme,
    /// missing key, or a value that isn't readable as a string).
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, AuthHeaderError>;
