//! Lookup error types

use thiserror::Error;

/// Ways a product lookup can fail
///
/// The `Display` text of each variant is exactly what the error banner shows.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    /// The service answered with a non-success status
    #[error("Product not found")]
    NotFound,

    /// The request never produced a response (unreachable, reset, timeout)
    #[error("{0}")]
    Transport(String),

    /// A success response whose body is not a product record
    #[error("{0}")]
    Parse(String),

    /// The upstream product database failed
    #[error("Error fetching data: {0}")]
    Upstream(String),

    /// The configured base URL cannot address a product
    #[error("Invalid lookup URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl crate::core::error_handling::ContextualError for LookupError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            LookupError::NotFound | LookupError::InvalidUrl { .. }
        )
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            LookupError::NotFound => Some("Product not found"),
            LookupError::InvalidUrl { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;
