use crate::error_code::ErrorKind;
use crate::transport::TransportErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the ShootProof client.
///
/// Every call returns either the decoded payload or exactly one of these values.
/// Nothing is retried internally; use [`ApiError::is_retryable`] (or
/// [`ApiError::kind`]) to drive an application-level retry policy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A documented required argument was empty or absent. Raised before any I/O.
    #[error("Missing required argument: {field}")]
    MissingArgument { field: String },

    /// An attachment path did not resolve to a readable regular file.
    #[error("Invalid attachment {}: {reason}", .path.display())]
    InvalidAttachment { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Connection or protocol failure; no HTTP response was read.
    #[error("Network transport error ({kind}): {message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    /// The server answered but the body was empty.
    #[error("The API did not return any response (HTTP {status})")]
    EmptyResponse { status: u16 },

    /// The body was received but `stat` was not `"ok"`, or it was not JSON at all.
    #[error("The API did not return an OK response: {message}")]
    Application {
        message: String,
        status: u16,
        raw_body: String,
    },
}

impl ApiError {
    pub fn missing_argument(field: impl Into<String>) -> Self {
        ApiError::MissingArgument {
            field: field.into(),
        }
    }

    pub fn invalid_attachment(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ApiError::InvalidAttachment {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        ApiError::Configuration {
            message: message.into(),
        }
    }

    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        ApiError::Transport {
            kind,
            message: message.into(),
        }
    }

    /// Stable classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MissingArgument { .. } => ErrorKind::MissingArgument,
            ApiError::InvalidAttachment { .. } => ErrorKind::InvalidAttachment,
            ApiError::Configuration { .. } => ErrorKind::Configuration,
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::EmptyResponse { .. } => ErrorKind::EmptyResponse,
            ApiError::Application { .. } => ErrorKind::Application,
        }
    }

    /// Whether retrying the same call later could plausibly succeed.
    ///
    /// Transport failures are retryable. An empty body is retryable only when the
    /// server signalled a server-side fault (5xx) or no status at all.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::EmptyResponse { status } => *status == 0 || *status >= 500,
            other => other.kind().retryable(),
        }
    }

    /// HTTP status of the response that produced this error, if one was read.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::EmptyResponse { status } | ApiError::Application { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Raw response body retained for diagnostics.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            ApiError::Application { raw_body, .. } => Some(raw_body.as_str()),
            _ => None,
        }
    }

    /// Raw response body decoded as JSON, when it is JSON.
    pub fn response_data(&self) -> Option<serde_json::Value> {
        self.raw_body()
            .and_then(|body| serde_json::from_str::<serde_json::Value>(body).ok())
            .filter(|value| !value.is_null())
    }
}
