//! Client configuration: endpoints, connect timeout, identifying header.
//!
//! Defaults point at the production ShootProof endpoints. Every value can be
//! overridden in code or, via [`ClientConfig::from_env`], through environment
//! variables:
//!
//! | Variable                          | Field             |
//! |-----------------------------------|-------------------|
//! | `SHOOTPROOF_API_ENDPOINT`         | `api_endpoint`    |
//! | `SHOOTPROOF_AUTH_ENDPOINT`        | `auth_endpoint`   |
//! | `SHOOTPROOF_TOKEN_ENDPOINT`       | `token_endpoint`  |
//! | `SHOOTPROOF_CONNECT_TIMEOUT_SECS` | `connect_timeout` |
//! | `SHOOTPROOF_PROXY_URL`            | `proxy_url`       |

use crate::{ApiError, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.shootproof.com/v2";
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://auth.shootproof.com/oauth2/authorization/new";
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://auth.shootproof.com/oauth2/authorization/token";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Value sent in the `X-WRAPPER` header on every request.
pub fn default_wrapper_version() -> String {
    format!("rust-{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint receiving every API method call.
    pub api_endpoint: String,
    /// Browser-facing OAuth2 authorization endpoint.
    pub auth_endpoint: String,
    /// OAuth2 token endpoint (code exchange and refresh).
    pub token_endpoint: String,
    /// Connection establishment timeout. There is no overall request timeout.
    pub connect_timeout: Duration,
    pub wrapper_version: String,
    pub proxy_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            wrapper_version: default_wrapper_version(),
            proxy_url: None,
        }
    }
}

impl ClientConfig {
    /// Defaults with environment overrides applied.
    ///
    /// Empty variables are ignored; an unparsable timeout keeps the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(v) = env_nonempty("SHOOTPROOF_API_ENDPOINT") {
            config.api_endpoint = v;
        }
        if let Some(v) = env_nonempty("SHOOTPROOF_AUTH_ENDPOINT") {
            config.auth_endpoint = v;
        }
        if let Some(v) = env_nonempty("SHOOTPROOF_TOKEN_ENDPOINT") {
            config.token_endpoint = v;
        }
        if let Some(secs) = env_nonempty("SHOOTPROOF_CONNECT_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.connect_timeout = Duration::from_secs(secs.max(1));
        }
        config.proxy_url = env_nonempty("SHOOTPROOF_PROXY_URL");
        config
    }

    pub fn with_api_endpoint(mut self, url: impl Into<String>) -> Self {
        self.api_endpoint = url.into();
        self
    }

    pub fn with_auth_endpoint(mut self, url: impl Into<String>) -> Self {
        self.auth_endpoint = url.into();
        self
    }

    pub fn with_token_endpoint(mut self, url: impl Into<String>) -> Self {
        self.token_endpoint = url.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Reject endpoints that are not absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("api_endpoint", &self.api_endpoint),
            ("auth_endpoint", &self.auth_endpoint),
            ("token_endpoint", &self.token_endpoint),
        ] {
            let url = Url::parse(value)
                .map_err(|e| ApiError::configuration(format!("{field} '{value}': {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ApiError::configuration(format!(
                    "{field} '{value}': unsupported scheme '{}'",
                    url.scheme()
                )));
            }
        }
        if self.connect_timeout.is_zero() {
            return Err(ApiError::configuration("connect_timeout must be non-zero"));
        }
        Ok(())
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
