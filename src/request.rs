//! Request assembly: method name, caller parameters, token and attachments
//! merged into one flat, transport-ready field list.

use crate::params::{flatten_params, FileAttachment, FlatParams, ParameterValue, Params};
use crate::{ApiError, Result};
use std::fs::File;

/// Wire field carrying the API method id.
pub const METHOD_FIELD: &str = "method";
/// Wire field carrying the OAuth access token.
pub const ACCESS_TOKEN_FIELD: &str = "access_token";

/// One logical API invocation. Built per call and consumed by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method_name: String,
    pub params: Params,
    pub attachments: Vec<(String, FileAttachment)>,
}

impl ApiCall {
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            params: Params::new(),
            attachments: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Attach a file under `key`; a later attachment with the same key replaces it.
    pub fn attach(mut self, key: impl Into<String>, file: FileAttachment) -> Self {
        let key = key.into();
        match self.attachments.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = file,
            None => self.attachments.push((key, file)),
        }
        self
    }
}

/// Turns an [`ApiCall`] into [`FlatParams`].
pub struct RequestBuilder;

impl RequestBuilder {
    /// Merge `method`, `access_token` and attachments over `call.params`, then flatten.
    ///
    /// Later sources overwrite earlier ones on key collision, so an attachment
    /// named like a parameter wins. Every attachment in the result is checked
    /// before any network I/O and fails with [`ApiError::InvalidAttachment`] if
    /// it is not a readable regular file.
    pub fn build(call: &ApiCall, access_token: &str) -> Result<FlatParams> {
        let mut merged = call.params.clone();
        merged.insert(METHOD_FIELD, call.method_name.as_str());
        merged.insert(ACCESS_TOKEN_FIELD, access_token);
        for (key, file) in &call.attachments {
            merged.insert(key.as_str(), file.clone());
        }
        Self::form(&merged)
    }

    /// Flatten arbitrary parameters and validate any attachments they contain.
    pub fn form(params: &Params) -> Result<FlatParams> {
        let flat = flatten_params(params);
        for (_, file) in flat.attachments() {
            validate_attachment(file)?;
        }
        Ok(flat)
    }
}

/// Check that an attachment is a regular file the process can open.
pub fn validate_attachment(file: &FileAttachment) -> Result<()> {
    let path = file.path();
    let metadata = std::fs::metadata(path)
        .map_err(|e| ApiError::invalid_attachment(path, e.to_string()))?;
    if !metadata.is_file() {
        return Err(ApiError::invalid_attachment(path, "not a regular file"));
    }
    File::open(path).map_err(|e| ApiError::invalid_attachment(path, e.to_string()))?;
    Ok(())
}
