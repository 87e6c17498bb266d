//! Declarative table of API methods and their documented fields.
//!
//! The dispatcher does not consult this table; the façade uses it to reject
//! calls with missing required arguments before any I/O happens.

use crate::request::ApiCall;
use crate::{ApiError, Result};

/// One API method: its id and the fields it documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    pub method_id: &'static str,
    pub required_fields: &'static [&'static str],
    pub optional_fields: &'static [&'static str],
}

impl EndpointSpec {
    pub const fn new(
        method_id: &'static str,
        required_fields: &'static [&'static str],
        optional_fields: &'static [&'static str],
    ) -> Self {
        Self {
            method_id,
            required_fields,
            optional_fields,
        }
    }

    /// Whether `field` is documented for this method.
    pub fn accepts(&self, field: &str) -> bool {
        self.required_fields.contains(&field) || self.optional_fields.contains(&field)
    }

    /// Fail with [`ApiError::MissingArgument`] for the first required field that is
    /// absent or blank. A required field may be satisfied by an attachment.
    pub fn validate(&self, call: &ApiCall) -> Result<()> {
        for field in self.required_fields {
            let attached = call.attachments.iter().any(|(k, _)| k == field);
            let present = call
                .params
                .get(field)
                .map(|v| !v.is_blank())
                .unwrap_or(false);
            if !attached && !present {
                return Err(ApiError::missing_argument(*field));
            }
        }
        Ok(())
    }
}

const SHOOTPROOF_ENDPOINTS: &[EndpointSpec] = &[
    EndpointSpec::new("sp.studio.info", &[], &[]),
    EndpointSpec::new("sp.studio.set_setting", &["setting_key"], &["setting_value"]),
    EndpointSpec::new("sp.studio.get_setting", &["setting_key"], &[]),
    EndpointSpec::new("sp.event.get_list", &[], &[]),
    EndpointSpec::new("sp.event.create", &["event_name"], &[]),
    EndpointSpec::new("sp.event.delete", &["event_id"], &[]),
    EndpointSpec::new("sp.event.photo_exists", &["event_id", "photo_name"], &[]),
    EndpointSpec::new(
        "sp.event.set_access_level",
        &["event_id", "access_level"],
        &["password"],
    ),
    EndpointSpec::new("sp.event.get_photos", &["event_id"], &["page"]),
    EndpointSpec::new("sp.album.get_list", &["event_id"], &[]),
    EndpointSpec::new("sp.album.get_photos", &["album_id"], &["page"]),
    EndpointSpec::new(
        "sp.album.create",
        &["event_id", "album_name"],
        &["password", "parent_id"],
    ),
    EndpointSpec::new("sp.album.move", &["album_id"], &["parent_id"]),
    EndpointSpec::new("sp.album.rename", &["album_id", "album_name"], &[]),
    EndpointSpec::new("sp.album.delete", &["album_id"], &[]),
    EndpointSpec::new("sp.photo.upload", &["event_id", "photo"], &["album_id"]),
    EndpointSpec::new("sp.photo.update", &["photo_id", "photo"], &[]),
    EndpointSpec::new("sp.photo.delete", &["photo_id"], &[]),
    EndpointSpec::new("sp.order.get_list", &[], &["page"]),
    EndpointSpec::new("sp.order.get_details", &["order_id"], &[]),
    EndpointSpec::new("sp.mobile_app.get_list", &[], &["brand_id", "page"]),
    EndpointSpec::new("sp.mobile_app.get_photos", &["mobile_app_id"], &[]),
];

/// Lookup table over a set of [`EndpointSpec`]s.
#[derive(Debug, Clone, Copy)]
pub struct EndpointCatalog {
    entries: &'static [EndpointSpec],
}

impl Default for EndpointCatalog {
    fn default() -> Self {
        Self::shootproof()
    }
}

impl EndpointCatalog {
    /// The ShootProof v2 method table.
    pub const fn shootproof() -> Self {
        Self {
            entries: SHOOTPROOF_ENDPOINTS,
        }
    }

    pub const fn from_static(entries: &'static [EndpointSpec]) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, method_id: &str) -> Option<&'static EndpointSpec> {
        self.entries.iter().find(|e| e.method_id == method_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static EndpointSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `call.method_name` and validate its required fields.
    pub fn validate(&self, call: &ApiCall) -> Result<&'static EndpointSpec> {
        let spec = self.lookup(&call.method_name).ok_or_else(|| {
            ApiError::configuration(format!("unknown API method '{}'", call.method_name))
        })?;
        spec.validate(call)?;
        Ok(spec)
    }
}
