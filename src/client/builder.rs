use crate::client::core::ApiDispatcher;
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Transport};
use crate::{ApiError, Result};
use std::sync::Arc;

/// Builder for [`ApiDispatcher`].
///
/// Keep this surface area small and predictable: a token, an optional
/// configuration, and two test seams (endpoint override, transport injection).
#[derive(Default)]
pub struct ApiDispatcherBuilder {
    access_token: Option<String>,
    config: Option<ClientConfig>,
    api_endpoint_override: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ApiDispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Use `config` instead of [`ClientConfig::from_env`].
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the API endpoint from the configuration.
    ///
    /// This is primarily for testing with mock servers.
    pub fn api_endpoint_override(mut self, url: impl Into<String>) -> Self {
        self.api_endpoint_override = Some(url.into());
        self
    }

    /// Inject a transport instead of building an [`HttpTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<ApiDispatcher> {
        let access_token = self
            .access_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::configuration("access token is required"))?;

        let mut config = self.config.unwrap_or_else(ClientConfig::from_env);
        if let Some(url) = self.api_endpoint_override {
            config.api_endpoint = url;
        }
        config.validate()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(&config)?),
        };

        Ok(ApiDispatcher {
            transport,
            endpoint: config.api_endpoint,
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::RecordingTransport;

    #[test]
    fn build_requires_token() {
        let err = ApiDispatcherBuilder::new()
            .config(ClientConfig::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration { .. }));

        let err = ApiDispatcherBuilder::new()
            .access_token("   ")
            .config(ClientConfig::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration { .. }));
    }

    #[test]
    fn endpoint_override_wins() {
        let api = ApiDispatcherBuilder::new()
            .access_token("tok")
            .config(ClientConfig::default())
            .api_endpoint_override("http://127.0.0.1:9999/v2")
            .transport(Arc::new(RecordingTransport::ok(r#"{"stat":"ok"}"#)))
            .build()
            .unwrap();
        assert_eq!(api.endpoint(), "http://127.0.0.1:9999/v2");
        assert_eq!(api.access_token(), "tok");
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = ApiDispatcherBuilder::new()
            .access_token("tok")
            .config(ClientConfig::default())
            .api_endpoint_override("nope")
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration { .. }));
    }

    #[test]
    fn default_config_builds_http_transport() {
        let api = ApiDispatcherBuilder::new()
            .access_token("tok")
            .config(ClientConfig::default())
            .build()
            .unwrap();
        assert_eq!(api.endpoint(), "https://api.shootproof.com/v2");
    }
}
