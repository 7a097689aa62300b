//! # API Error Types
//!
//! Error types for the remote service boundary.
//!
//! ## Where Rejections Live
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A business-rule REJECTION is not an ApiError: the service returns     │
//! │  200 with `{ "error": true, "message": ... }` and the flows layer      │
//! │  surfaces that message verbatim.                                       │
//! │                                                                         │
//! │  ApiError covers everything below that envelope:                        │
//! │  • Transport  - connect/timeout/TLS failures                            │
//! │  • Status     - non-success HTTP status                                 │
//! │  • Decode     - response body that isn't the expected JSON              │
//! │  • InvalidBaseUrl - misconfigured service URL                           │
//! │                                                                         │
//! │  Callers treat all of these identically to a rejection: the attempt    │
//! │  lands in Failed and stays recoverable.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures at the remote boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid service URL: {0}")]
    InvalidBaseUrl(String),

    /// Network-level failure: connect, timeout, TLS.
    #[error("Connection to the loyalty service failed: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("Loyalty service returned status {code}")]
    Status { code: u16 },

    /// The response body could not be decoded as the expected shape.
    #[error("Unexpected response from the loyalty service: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for failures that the portal renders as a generic
    /// connection-error message (as opposed to a decode bug worth a
    /// louder log line).
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Status { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidBaseUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(ApiError::Transport("refused".into()).is_transport());
        assert!(ApiError::Status { code: 503 }.is_transport());
        assert!(!ApiError::Decode("bad json".into()).is_transport());
        assert!(!ApiError::InvalidBaseUrl("nope".into()).is_transport());
    }
}
