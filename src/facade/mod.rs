//! Typed per-endpoint methods.
//!
//! Each method maps its arguments onto documented wire fields, lets the
//! [`EndpointCatalog`] reject missing required arguments, and forwards to
//! [`ApiDispatcher`]. None of them add protocol logic of their own.
//!
//! Identifier arguments accept anything convertible to a [`ParameterValue`],
//! so both numeric ids and string ids work. A blank id fails with
//! [`ApiError::MissingArgument`](crate::ApiError::MissingArgument) before any
//! network I/O.

mod albums;
mod events;
mod mobile_apps;
mod orders;
mod photos;
mod studio;

use crate::catalog::EndpointCatalog;
use crate::client::ApiDispatcher;
use crate::params::ParameterValue;
use crate::request::ApiCall;
use crate::response::JsonObject;
use crate::Result;

/// First page of paged listings.
pub const DEFAULT_PAGE: u32 = 1;

/// The ShootProof API, one async method per endpoint.
#[derive(Debug, Clone)]
pub struct ShootProofApi {
    dispatcher: ApiDispatcher,
    catalog: EndpointCatalog,
}

impl ShootProofApi {
    /// Client with the environment-derived default configuration.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_dispatcher(ApiDispatcher::new(access_token)?))
    }

    pub fn from_dispatcher(dispatcher: ApiDispatcher) -> Self {
        Self {
            dispatcher,
            catalog: EndpointCatalog::shootproof(),
        }
    }

    pub fn dispatcher(&self) -> &ApiDispatcher {
        &self.dispatcher
    }

    pub fn catalog(&self) -> &EndpointCatalog {
        &self.catalog
    }

    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.dispatcher.set_access_token(access_token);
    }

    async fn invoke(&self, call: ApiCall) -> Result<JsonObject> {
        self.catalog.validate(&call)?;
        self.dispatcher.execute(&call).await
    }
}

fn page_or_default(page: Option<u32>) -> ParameterValue {
    ParameterValue::from(page.unwrap_or(DEFAULT_PAGE))
}
