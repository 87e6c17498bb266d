//! Integration tests against a mock HTTP server.

mod auth;
mod dispatch;
mod error_handling;
mod facade;
mod mock_server;
