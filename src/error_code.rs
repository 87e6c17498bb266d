//! Stable error codes for the five failure kinds the client can report.
//!
//! Every [`ApiError`](crate::ApiError) maps onto exactly one [`ErrorKind`].
//! The kind carries a canonical code string, a snake_case name and a coarse
//! category, so applications can log and route failures without matching on
//! individual error variants.
//!
//! | Code  | Kind               | Category    |
//! |-------|--------------------|-------------|
//! | SP101 | missing_argument   | client      |
//! | SP102 | invalid_attachment | client      |
//! | SP103 | configuration      | client      |
//! | SP201 | transport          | transport   |
//! | SP301 | empty_response     | remote      |
//! | SP302 | application        | remote      |
//!
//! ## Example
//!
//! ```rust
//! use shootproof::error_code::ErrorKind;
//!
//! let kind = ErrorKind::from_name("transport").unwrap();
//! assert_eq!(kind.code(), "SP201");
//! assert!(kind.retryable());
//! assert_eq!(kind.category(), "transport");
//! ```

use std::fmt;

/// Classification of every failure the client can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// SP101: a documented required argument was empty or absent
    MissingArgument,
    /// SP102: an attachment path did not resolve to a readable file
    InvalidAttachment,
    /// SP103: the client configuration could not be used
    Configuration,
    /// SP201: connection or protocol failure before a response was read
    Transport,
    /// SP301: the server answered without a usable body
    EmptyResponse,
    /// SP302: the body decoded but `stat` was not `"ok"`
    Application,
}

impl ErrorKind {
    /// Returns the canonical code string (e.g., `"SP201"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingArgument => "SP101",
            Self::InvalidAttachment => "SP102",
            Self::Configuration => "SP103",
            Self::Transport => "SP201",
            Self::EmptyResponse => "SP301",
            Self::Application => "SP302",
        }
    }

    /// Returns the snake_case name (e.g., `"empty_response"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingArgument => "missing_argument",
            Self::InvalidAttachment => "invalid_attachment",
            Self::Configuration => "configuration",
            Self::Transport => "transport",
            Self::EmptyResponse => "empty_response",
            Self::Application => "application",
        }
    }

    /// Returns `"client"`, `"transport"` or `"remote"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingArgument | Self::InvalidAttachment | Self::Configuration => "client",
            Self::Transport => "transport",
            Self::EmptyResponse | Self::Application => "remote",
        }
    }

    /// Whether a caller-side retry is plausible for this kind.
    ///
    /// Only transport failures are treated as transient. Client-side kinds fail
    /// the same way on every attempt, and an application error is the API's
    /// own verdict on the request.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport)
    }

    /// Maps a snake_case kind name back to the kind.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "missing_argument" => Self::MissingArgument,
            "invalid_attachment" => Self::InvalidAttachment,
            "configuration" => Self::Configuration,
            "transport" => Self::Transport,
            "empty_response" => Self::EmptyResponse,
            "application" => Self::Application,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
