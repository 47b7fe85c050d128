//! Client Error Taxonomy
//!
//! Every failure a user action can run into, from the wire up to local validation.

use thiserror::Error;

/// Result type for data access and board operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by data-access calls and local validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected, connection refused)
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// The body was not valid JSON or did not fit the wire schema
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Input rejected before any request was sent
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        ApiError::Decode(msg.into())
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status_and_body() {
        let err = ApiError::Http { status: 403, body: "forbidden".to_string() };
        assert_eq!(err.to_string(), "request failed with status 403: forbidden");
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err: ApiError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
