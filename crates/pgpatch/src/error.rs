//! Error types for pgpatch

use thiserror::Error;

/// Result type alias for pgpatch operations
pub type PatchResult<T> = Result<T, PatchError>;

/// Errors raised while building a SET clause.
///
/// Both variants are caller-input errors: a request layer should answer them
/// with a client error rather than treat them as internal faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// The payload is unusable (empty, or not a JSON object)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A resolved column name failed the strict column check
    #[error("Invalid column name: {0}")]
    InvalidColumn(String),
}

impl PatchError {
    /// The error raised for an empty update payload.
    pub fn no_data() -> Self {
        Self::BadRequest("No data".to_string())
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an invalid column error
    pub fn invalid_column(message: impl Into<String>) -> Self {
        Self::InvalidColumn(message.into())
    }

    /// Check if this is a bad request error
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }

    /// Check if this is an invalid column error
    pub fn is_invalid_column(&self) -> bool {
        matches!(self, Self::InvalidColumn(_))
    }
}
