//! Client error model.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type returned by every backend call.
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a backend call failed.
///
/// Transport failures keep the underlying `reqwest` error as their source; the
/// client never reinterprets them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, timeout, or any other transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// A 2xx response whose body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Transport(e) => e.status(),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_timeout())
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_expose_their_code() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: "Product not found".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_timeout());
        assert_eq!(err.to_string(), "HTTP 404 Not Found: Product not found");
    }

    #[test]
    fn decode_errors_have_no_status() {
        let err = ApiError::Decode("missing field `types`".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
