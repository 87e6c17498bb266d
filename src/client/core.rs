use crate::params::{FileAttachment, FlatParams, Params};
use crate::request::{ApiCall, RequestBuilder};
use crate::response::{ApiResponse, JsonObject, ResponseClassifier};
use crate::transport::Transport;
use crate::Result;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executes API method calls against the configured endpoint.
///
/// Holds only the endpoint, the access token and a shared transport; no state
/// changes between calls, so one dispatcher can serve many concurrent calls.
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct ApiDispatcher {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) endpoint: String,
    pub(crate) access_token: String,
}

impl fmt::Debug for ApiDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiDispatcher")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl ApiDispatcher {
    /// Dispatcher with the environment-derived default configuration.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        crate::client::builder::ApiDispatcherBuilder::new()
            .access_token(access_token)
            .build()
    }

    pub fn builder() -> crate::client::builder::ApiDispatcherBuilder {
        crate::client::builder::ApiDispatcherBuilder::new()
    }

    /// Dispatcher over an explicit transport, bypassing configuration.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            access_token: access_token.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Replace the access token, e.g. after a refresh.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = access_token.into();
    }

    /// A copy using `access_token` that shares this dispatcher's transport.
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self {
            transport: self.transport.clone(),
            endpoint: self.endpoint.clone(),
            access_token: access_token.into(),
        }
    }

    /// Call `method_name` with `params`; returns the full decoded body on `stat: ok`.
    pub async fn call(&self, method_name: &str, params: Params) -> Result<JsonObject> {
        self.execute(&ApiCall::new(method_name).with_params(params))
            .await
    }

    /// Like [`call`](Self::call), sending `attachments` as multipart file parts.
    pub async fn call_with_attachments(
        &self,
        method_name: &str,
        params: Params,
        attachments: Vec<(String, FileAttachment)>,
    ) -> Result<JsonObject> {
        let call = attachments
            .into_iter()
            .fold(ApiCall::new(method_name).with_params(params), |call, (key, file)| {
                call.attach(key, file)
            });
        self.execute(&call).await
    }

    /// Build, send and classify a prepared call.
    pub async fn execute(&self, call: &ApiCall) -> Result<JsonObject> {
        let fields = RequestBuilder::build(call, &self.access_token)?;
        debug!(
            method = %call.method_name,
            fields = fields.len(),
            multipart = fields.has_attachments(),
            "dispatching API call"
        );
        let response = post_and_classify(self.transport.as_ref(), &self.endpoint, &fields)
            .await
            .map_err(|e| {
                warn!(method = %call.method_name, kind = e.kind().name(), error = %e, "API call failed");
                e
            })?;
        Ok(response.payload)
    }
}

/// One POST followed by classification. Shared with the OAuth flow.
pub(crate) async fn post_and_classify(
    transport: &dyn Transport,
    url: &str,
    fields: &FlatParams,
) -> Result<ApiResponse> {
    let outcome = transport.post(url, fields).await;
    let response = ResponseClassifier::classify(outcome)?;
    debug!(url, "API responded with stat ok");
    Ok(response)
}
