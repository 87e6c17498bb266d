//! Bracketed-key flattening of nested parameters.
//!
//! `{"a": {"b": 1, "c": [10, 20]}}` becomes `a[b]=1`, `a[c][0]=10`,
//! `a[c][1]=20`. Traversal is depth-first in insertion order, so the output
//! order is deterministic. Leaf values are emitted as given, nulls included;
//! empty maps and lists contribute no keys.

use super::{FileAttachment, ParameterValue, Params, Scalar};
use indexmap::IndexMap;

/// A flattened leaf: a text field or a file part.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatValue {
    Scalar(Scalar),
    File(FileAttachment),
}

impl FlatValue {
    pub fn as_file(&self) -> Option<&FileAttachment> {
        match self {
            FlatValue::File(file) => Some(file),
            FlatValue::Scalar(_) => None,
        }
    }
}

/// Ordered, unique-key list of transport-ready fields.
#[derive(Debug, Clone, Default)]
pub struct FlatParams {
    entries: IndexMap<String, FlatValue>,
}

impl PartialEq for FlatParams {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl FlatParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace in place, keeping keys unique.
    pub fn insert(&mut self, key: impl Into<String>, value: FlatValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FlatValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlatValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// True when at least one field is a file, i.e. the body must be multipart.
    pub fn has_attachments(&self) -> bool {
        self.entries
            .values()
            .any(|v| matches!(v, FlatValue::File(_)))
    }

    pub fn attachments(&self) -> impl Iterator<Item = (&str, &FileAttachment)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_file().map(|f| (k.as_str(), f)))
    }

    /// Text fields only, each rendered with [`Scalar::to_form_value`].
    pub fn text_fields(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| match v {
                FlatValue::Scalar(s) => Some((k.clone(), s.to_form_value())),
                FlatValue::File(_) => None,
            })
            .collect()
    }
}

impl IntoIterator for FlatParams {
    type Item = (String, FlatValue);
    type IntoIter = indexmap::map::IntoIter<String, FlatValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Flatten a single value under an optional key prefix.
///
/// A leaf needs a key: with `prefix = None` a bare scalar or file has nowhere to
/// go and yields no fields. Maps and lists are walked with `prefix[key]` (or
/// `key` at the top level) as the child key; list indices serve as keys.
pub fn flatten(value: &ParameterValue, prefix: Option<&str>) -> FlatParams {
    let mut out = FlatParams::new();
    match prefix {
        Some(p) => flatten_into(&mut out, p, value),
        None => match value {
            ParameterValue::Map(map) => flatten_map(&mut out, None, map),
            ParameterValue::List(items) => flatten_list(&mut out, None, items),
            ParameterValue::Scalar(_) | ParameterValue::File(_) => {}
        },
    }
    out
}

/// Flatten a top-level parameter map.
pub fn flatten_params(params: &Params) -> FlatParams {
    let mut out = FlatParams::new();
    flatten_map(&mut out, None, params);
    out
}

fn child_key(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(p) => format!("{}[{}]", p, key),
        None => key.to_string(),
    }
}

fn flatten_map(out: &mut FlatParams, prefix: Option<&str>, map: &Params) {
    for (key, value) in map.iter() {
        flatten_into(out, &child_key(prefix, key), value);
    }
}

fn flatten_list(out: &mut FlatParams, prefix: Option<&str>, items: &[ParameterValue]) {
    for (idx, value) in items.iter().enumerate() {
        flatten_into(out, &child_key(prefix, &idx.to_string()), value);
    }
}

fn flatten_into(out: &mut FlatParams, key: &str, value: &ParameterValue) {
    match value {
        ParameterValue::Scalar(s) => out.insert(key, FlatValue::Scalar(s.clone())),
        ParameterValue::File(f) => out.insert(key, FlatValue::File(f.clone())),
        ParameterValue::Map(map) => flatten_map(out, Some(key), map),
        ParameterValue::List(items) => flatten_list(out, Some(key), items),
    }
}
