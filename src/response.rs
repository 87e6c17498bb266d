//! Response classification.
//!
//! Turns a raw [`TransportOutcome`] into either a decoded [`ApiResponse`] or
//! one [`ApiError`]. The checks run in a fixed order and the first match wins:
//!
//! 1. transport failure            -> [`ApiError::Transport`]
//! 2. empty or non-UTF-8 body      -> [`ApiError::EmptyResponse`]
//! 3. JSON object with `stat: ok`  -> success
//! 4. JSON without `stat: ok`      -> [`ApiError::Application`] (`msg` or generic text)
//! 5. body that is not JSON        -> [`ApiError::Application`] ("malformed response")
//!
//! A transport failure always wins, whatever else the outcome carries, so the
//! caller can tell a transient network problem from the API rejecting the call.
//! HTTP status is informational only: the API's verdict is the `stat` field.

use crate::transport::TransportOutcome;
use crate::{ApiError, Result};
use serde_json::Value;

/// A decoded JSON object.
pub type JsonObject = serde_json::Map<String, Value>;

pub const STAT_FIELD: &str = "stat";
pub const STAT_OK: &str = "ok";
pub const MESSAGE_FIELD: &str = "msg";

pub const MALFORMED_RESPONSE: &str = "malformed response";
pub const UNKNOWN_FAILURE: &str = "unknown error";

/// Successful API response; `payload` is the full decoded body, untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub stat_ok: bool,
    pub payload: JsonObject,
    pub message: Option<String>,
}

pub struct ResponseClassifier;

impl ResponseClassifier {
    pub fn classify(outcome: TransportOutcome) -> Result<ApiResponse> {
        let (status, body) = match outcome {
            TransportOutcome::Failure(failure) => {
                return Err(ApiError::Transport {
                    kind: failure.kind,
                    message: failure.message,
                })
            }
            TransportOutcome::Response { status, body } => (status, body),
        };

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::EmptyResponse { status });
        }

        // Bytes that are not text cannot be a response body at all.
        let text = match std::str::from_utf8(&body) {
            Ok(text) => text,
            Err(_) => return Err(ApiError::EmptyResponse { status }),
        };
        let raw_body = text.to_string();
        let decoded = match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(_) => {
                return Err(ApiError::Application {
                    message: MALFORMED_RESPONSE.to_string(),
                    status,
                    raw_body,
                })
            }
        };

        let message = decoded
            .get(MESSAGE_FIELD)
            .and_then(message_text);

        match decoded {
            Value::Object(payload)
                if payload.get(STAT_FIELD).and_then(Value::as_str) == Some(STAT_OK) =>
            {
                Ok(ApiResponse {
                    status,
                    stat_ok: true,
                    payload,
                    message,
                })
            }
            _ => Err(ApiError::Application {
                message: message.unwrap_or_else(|| UNKNOWN_FAILURE.to_string()),
                status,
                raw_body,
            }),
        }
    }
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}
