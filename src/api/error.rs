use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the external call boundary.
///
/// All variants carry plain strings so that results can be cloned into
/// notifications and scripted in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },

    /// The backend answered with a non-success status.
    #[error("{path} returned {status}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl ApiError {
    pub fn transport(path: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Transport {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
