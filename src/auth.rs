//! OAuth2 authorization-code flow.
//!
//! The flow is three steps, of which this module handles the last two:
//!
//! 1. Send the user's browser to [`AuthFlow::login_url`].
//! 2. The API redirects back to `redirect_uri` with `?code=...`; pass it to
//!    [`AuthFlow::exchange_code`].
//! 3. When the access token expires, call [`AuthFlow::refresh`].
//!
//! Token requests go through the same transport and response classification
//! as API calls. The returned [`AccessTokenSet`] belongs to the caller; this
//! crate does not store or refresh tokens on its own.

use crate::client::core::post_and_classify;
use crate::config::ClientConfig;
use crate::params::Params;
use crate::request::RequestBuilder;
use crate::response::JsonObject;
use crate::transport::{HttpTransport, Transport};
use crate::{ApiError, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";

/// Tokens issued by the token endpoint.
#[derive(Clone, PartialEq, Deserialize)]
pub struct AccessTokenSet {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds, when the server reports one.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    /// The complete decoded token response.
    #[serde(skip)]
    pub raw: JsonObject,
}

impl fmt::Debug for AccessTokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenSet")
            .field("access_token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish()
    }
}

impl AccessTokenSet {
    /// Decode a successful token response, keeping the raw object alongside.
    pub fn from_payload(payload: JsonObject, status: u16) -> Result<Self> {
        let value = serde_json::Value::Object(payload);
        let mut tokens: AccessTokenSet =
            serde_json::from_value(value.clone()).map_err(|e| ApiError::Application {
                message: format!("invalid token response: {e}"),
                status,
                raw_body: value.to_string(),
            })?;
        if tokens.access_token.trim().is_empty() {
            return Err(ApiError::Application {
                message: "invalid token response: empty access_token".to_string(),
                status,
                raw_body: value.to_string(),
            });
        }
        if let serde_json::Value::Object(raw) = value {
            tokens.raw = raw;
        }
        Ok(tokens)
    }
}

/// Accepts a number or numeric string. Fractions are truncated; negative,
/// non-finite or otherwise unusable values decode as `None` instead of failing
/// the whole token response.
fn lenient_u64<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lifetime {
        Whole(u64),
        Fraction(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    fn from_f64(n: f64) -> Option<u64> {
        (n.is_finite() && n >= 0.0).then(|| n.trunc() as u64)
    }

    Ok(match Option::<Lifetime>::deserialize(deserializer)? {
        Some(Lifetime::Whole(n)) => Some(n),
        Some(Lifetime::Fraction(n)) => from_f64(n),
        Some(Lifetime::Text(s)) => {
            let s = s.trim();
            s.parse().ok().or_else(|| s.parse::<f64>().ok().and_then(from_f64))
        }
        Some(Lifetime::Other(_)) | None => None,
    })
}

/// Build the browser login URL for the authorization endpoint.
///
/// Pure string construction; no network access.
pub fn build_login_url(auth_endpoint: &Url, client_id: &str, redirect_uri: &str, scope: &str) -> String {
    let mut url = auth_endpoint.clone();
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", scope);
    url.to_string()
}

/// OAuth2 helper bound to one registered application.
#[derive(Clone)]
pub struct AuthFlow {
    transport: Arc<dyn Transport>,
    auth_endpoint: Url,
    token_endpoint: String,
    client_id: String,
    redirect_uri: String,
    scope: String,
}

impl fmt::Debug for AuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthFlow")
            .field("auth_endpoint", &self.auth_endpoint.as_str())
            .field("token_endpoint", &self.token_endpoint)
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .finish()
    }
}

impl AuthFlow {
    /// Flow using [`ClientConfig::from_env`].
    ///
    /// `scope` is a space-separated permission list, for example
    /// `"sp.event.get_list sp.event.get_photos"`.
    pub fn new(
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        scope: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(&ClientConfig::from_env(), client_id, redirect_uri, scope)
    }

    pub fn with_config(
        config: &ClientConfig,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        scope: impl Into<String>,
    ) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new(config)?);
        Self::with_transport(transport, config, client_id, redirect_uri, scope)
    }

    /// Flow over an explicit transport, sharing it with a dispatcher if desired.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        config: &ClientConfig,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        scope: impl Into<String>,
    ) -> Result<Self> {
        let auth_endpoint = Url::parse(&config.auth_endpoint)
            .map_err(|e| ApiError::configuration(format!("auth_endpoint: {e}")))?;
        Ok(Self {
            transport,
            auth_endpoint,
            token_endpoint: config.token_endpoint.clone(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            scope: scope.into(),
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn set_client_id(&mut self, client_id: impl Into<String>) {
        self.client_id = client_id.into();
    }

    pub fn set_redirect_uri(&mut self, uri: impl Into<String>) {
        self.redirect_uri = uri.into();
    }

    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.scope = scope.into();
    }

    /// URL to send the user's browser to.
    pub fn login_url(&self) -> String {
        build_login_url(&self.auth_endpoint, &self.client_id, &self.redirect_uri, &self.scope)
    }

    /// Exchange the authorization code from the redirect for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessTokenSet> {
        if code.trim().is_empty() {
            return Err(ApiError::missing_argument("code"));
        }
        debug!(grant_type = GRANT_AUTHORIZATION_CODE, "requesting access token");
        let params = Params::new()
            .with("code", code)
            .with("grant_type", GRANT_AUTHORIZATION_CODE)
            .with("client_id", self.client_id.as_str())
            .with("redirect_uri", self.redirect_uri.as_str())
            .with("scope", self.scope.as_str());
        self.request_tokens(GRANT_AUTHORIZATION_CODE, &params).await
    }

    /// Trade a refresh token for a fresh token set.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AccessTokenSet> {
        if refresh_token.trim().is_empty() {
            return Err(ApiError::missing_argument("refresh_token"));
        }
        debug!(grant_type = GRANT_REFRESH_TOKEN, "refreshing access token");
        let params = Params::new()
            .with("refresh_token", refresh_token)
            .with("grant_type", GRANT_REFRESH_TOKEN)
            .with("scope", self.scope.as_str());
        self.request_tokens(GRANT_REFRESH_TOKEN, &params).await
    }

    async fn request_tokens(&self, grant_type: &str, params: &Params) -> Result<AccessTokenSet> {
        let fields = RequestBuilder::form(params)?;
        post_and_classify(self.transport.as_ref(), &self.token_endpoint, &fields)
            .await
            .and_then(|response| AccessTokenSet::from_payload(response.payload, response.status))
            .map_err(|e| {
                warn!(grant_type, kind = e.kind().name(), "token request failed");
                e
            })
    }
}
