//! Error types for the remote event source.

use thiserror::Error;

/// Result type for remote-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while querying the remote event source.
///
/// These never cross the search-service boundary: the service recovers from
/// every variant by returning an empty result set.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport failure or undecodable response body.
    #[error("request to event source failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote source answered with a non-success HTTP status.
    #[error("event source returned HTTP {status}")]
    Status { status: u16 },

    /// The response body decoded but did not contain a result list.
    #[error("malformed event source response: {message}")]
    InvalidResponse { message: String },
}

impl SourceError {
    /// Creates a status error from an HTTP status code.
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = SourceError::status(401);
        assert_eq!(err.to_string(), "event source returned HTTP 401");
    }

    #[test]
    fn invalid_response_display() {
        let err = SourceError::invalid_response("no keywordSearch field in response");
        assert!(err.to_string().contains("no keywordSearch field"));
    }
}
