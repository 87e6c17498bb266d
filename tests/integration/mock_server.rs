//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use shootproof::{ApiDispatcher, AuthFlow, ClientConfig, ShootProofApi};

pub const API_PATH: &str = "/v2";
pub const TOKEN_PATH: &str = "/oauth2/authorization/token";
pub const TOKEN: &str = "test-access-token";

/// Test fixture that owns a mock server and points clients at it.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_api_endpoint(format!("{}{}", self.base_url, API_PATH))
            .with_auth_endpoint(format!("{}/oauth2/authorization/new", self.base_url))
            .with_token_endpoint(format!("{}{}", self.base_url, TOKEN_PATH))
    }

    pub fn dispatcher(&self) -> ApiDispatcher {
        ApiDispatcher::builder()
            .access_token(TOKEN)
            .config(self.config())
            .build()
            .expect("dispatcher should build against the mock server")
    }

    pub fn api(&self) -> ShootProofApi {
        ShootProofApi::from_dispatcher(self.dispatcher())
    }

    pub fn auth_flow(&self) -> AuthFlow {
        AuthFlow::with_config(
            &self.config(),
            "client-123",
            "https://studio.example/callback",
            "sp.event.get_list",
        )
        .expect("auth flow should build against the mock server")
    }

    /// Mock for one API method answering with `status` and `body`.
    pub async fn mock_method(&mut self, method: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", API_PATH)
            .match_body(Matcher::UrlEncoded("method".into(), method.into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn wrapper_header() -> String {
    format!("rust-{}", env!("CARGO_PKG_VERSION"))
}
