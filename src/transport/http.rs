use super::{Transport, TransportErrorKind, TransportFailure, TransportOutcome};
use crate::config::ClientConfig;
use crate::params::{FlatParams, FlatValue};
use crate::{ApiError, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Proxy;
use tracing::debug;

/// Header identifying this client and its version to the API.
pub const WRAPPER_HEADER: &str = "X-WRAPPER";

/// `reqwest`-backed transport.
///
/// Only the connect phase is bounded (see [`ClientConfig::connect_timeout`]).
/// No overall request timeout is applied, so a server that accepts the
/// connection and then stalls will hold the call open; bound it externally
/// (e.g. `tokio::time::timeout`) if that matters.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    wrapper_version: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| ApiError::configuration(format!("proxy '{proxy_url}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            wrapper_version: config.wrapper_version.clone(),
        })
    }

    /// Wrap an existing `reqwest::Client`, e.g. one shared with other services.
    pub fn with_client(client: reqwest::Client, wrapper_version: impl Into<String>) -> Self {
        Self {
            client,
            wrapper_version: wrapper_version.into(),
        }
    }

    pub fn wrapper_version(&self) -> &str {
        &self.wrapper_version
    }

    async fn multipart_form(fields: &FlatParams) -> std::result::Result<Form, TransportFailure> {
        let mut form = Form::new();
        for (key, value) in fields.iter() {
            form = match value {
                FlatValue::Scalar(s) => form.text(key.to_string(), s.to_form_value()),
                FlatValue::File(file) => {
                    let contents = tokio::fs::read(file.path()).await.map_err(|e| {
                        TransportFailure::new(
                            TransportErrorKind::Io,
                            format!("reading {}: {}", file.path().display(), e),
                        )
                    })?;
                    let mut part = Part::bytes(contents).file_name(file.file_name());
                    if let Some(mime) = file.mime_type() {
                        part = part.mime_str(mime).map_err(|e| {
                            TransportFailure::new(
                                TransportErrorKind::Request,
                                format!("invalid mime type '{mime}': {e}"),
                            )
                        })?;
                    }
                    form.part(key.to_string(), part)
                }
            };
        }
        Ok(form)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, fields: &FlatParams) -> TransportOutcome {
        let mut request = self
            .client
            .post(url)
            .header(WRAPPER_HEADER, &self.wrapper_version);

        request = if fields.has_attachments() {
            match Self::multipart_form(fields).await {
                Ok(form) => request.multipart(form),
                Err(failure) => return TransportOutcome::Failure(failure),
            }
        } else {
            request.form(&fields.text_fields())
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return TransportOutcome::failure(classify_reqwest_error(&e), e.to_string()),
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(body) => {
                debug!(status, bytes = body.len(), "response received");
                TransportOutcome::Response { status, body }
            }
            Err(e) => TransportOutcome::failure(TransportErrorKind::Body, e.to_string()),
        }
    }
}

pub(crate) fn classify_reqwest_error(e: &reqwest::Error) -> TransportErrorKind {
    if e.is_timeout() {
        TransportErrorKind::Timeout
    } else if e.is_connect() {
        TransportErrorKind::Connect
    } else if e.is_redirect() {
        TransportErrorKind::Redirect
    } else if e.is_body() || e.is_decode() {
        TransportErrorKind::Body
    } else if e.is_request() || e.is_builder() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    }
}
