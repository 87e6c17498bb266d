//! HTTP transport: one POST per call, raw status and body out.
//!
//! [`Transport`] is the seam between request assembly and the network. The
//! production implementation is [`HttpTransport`]; tests substitute their own.
//! Implementations never retry and never interpret the body.

mod http;

pub use http::{HttpTransport, WRAPPER_HEADER};

use crate::params::FlatParams;
use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;

/// Coarse cause of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// Could not establish a connection (DNS, refused, TLS, connect timeout).
    Connect,
    Timeout,
    /// The request could not be built or sent.
    Request,
    /// The response body could not be read.
    Body,
    Redirect,
    /// A local attachment could not be read while assembling the body.
    Io,
    Other,
}

impl TransportErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Request => "request",
            Self::Body => "body",
            Self::Redirect => "redirect",
            Self::Io => "io",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportFailure {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Result of a single POST, before any interpretation of the body.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportOutcome {
    Response { status: u16, body: Bytes },
    Failure(TransportFailure),
}

impl TransportOutcome {
    pub fn response(status: u16, body: impl Into<Bytes>) -> Self {
        TransportOutcome::Response {
            status,
            body: body.into(),
        }
    }

    pub fn failure(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        TransportOutcome::Failure(TransportFailure::new(kind, message))
    }
}

/// Executes a form POST against `url`.
///
/// Bodies must be `multipart/form-data` when `fields` contains a file and
/// `application/x-www-form-urlencoded` otherwise.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, fields: &FlatParams) -> TransportOutcome;
}
