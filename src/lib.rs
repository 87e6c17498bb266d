//! # shootproof-rs
//!
//! Async client for the ShootProof v2 photo-studio API.
//!
//! Every API method is a form-encoded POST to a single endpoint, carrying the
//! method id in the `method` field and an OAuth access token in
//! `access_token`. Responses are JSON objects whose `stat` field says whether
//! the call succeeded. This crate handles the wire mechanics (nested parameter
//! flattening, multipart photo uploads, response classification) and the OAuth
//! authorization-code flow that produces the tokens.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shootproof::ShootProofApi;
//!
//! #[tokio::main]
//! async fn main() -> shootproof::Result<()> {
//!     let api = ShootProofApi::new("your-access-token")?;
//!
//!     let events = api.get_events().await?;
//!     println!("{:?}", events.get("events"));
//!
//!     api.upload_photo_from_path(1234, "IMG_0001.jpg", None).await?;
//!     Ok(())
//! }
//! ```
//!
//! Methods without a typed wrapper go through the dispatcher directly:
//!
//! ```rust,no_run
//! use shootproof::{ApiDispatcher, Params};
//!
//! # async fn run() -> shootproof::Result<()> {
//! let api = ApiDispatcher::new("your-access-token")?;
//! let body = api
//!     .call("sp.event.get_photos", Params::new().with("event_id", 1234).with("page", 2))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`params`] | Parameter trees and bracketed-key flattening |
//! | [`request`] | Assembling a call into transport-ready fields |
//! | [`transport`] | The HTTP seam and its reqwest implementation |
//! | [`response`] | Classifying raw responses into success or [`ApiError`] |
//! | [`client`] | [`ApiDispatcher`] and its builder |
//! | [`auth`] | OAuth login URL, code exchange and token refresh |
//! | [`catalog`] | Table of API methods and their documented fields |
//! | [`facade`] | [`ShootProofApi`], one typed method per endpoint |
//! | [`config`] | Endpoints, timeouts and environment overrides |
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber; the
//! application decides where they go. Access tokens are never logged.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod error_code;
pub mod facade;
pub mod params;
pub mod request;
pub mod response;
pub mod transport;

pub use auth::{AccessTokenSet, AuthFlow};
pub use catalog::{EndpointCatalog, EndpointSpec};
pub use client::{ApiDispatcher, ApiDispatcherBuilder};
pub use config::ClientConfig;
pub use error::ApiError;
pub use error_code::ErrorKind;
pub use facade::ShootProofApi;
pub use params::{FileAttachment, FlatParams, FlatValue, ParameterValue, Params, Scalar};
pub use request::{ApiCall, RequestBuilder};
pub use response::{ApiResponse, JsonObject, ResponseClassifier};
pub use transport::{HttpTransport, Transport, TransportErrorKind, TransportFailure, TransportOutcome};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ApiError>;
