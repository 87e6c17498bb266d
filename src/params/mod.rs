//! Request parameter model.
//!
//! API parameters are loosely shaped: most are plain scalars, some are nested
//! maps or lists, and uploads reference local files. [`ParameterValue`] models
//! that as a recursive sum type; [`Params`] is the insertion-ordered map used at
//! every level. The [`flatten`] submodule turns the tree into bracketed form keys.

pub mod flatten;

pub use flatten::{flatten, flatten_params, FlatParams, FlatValue};

use indexmap::IndexMap;
use serde_json::Number;
use std::path::{Path, PathBuf};

/// A leaf value sent as a plain form field.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Text representation used on the wire.
    ///
    /// `null` and `false` encode as the empty string, `true` as `"1"`, which is
    /// how the API's own form handling reads booleans.
    pub fn to_form_value(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Bool(true) => "1".to_string(),
            Scalar::Bool(false) => String::new(),
            Scalar::Number(n) => n.to_string(),
            Scalar::String(s) => s.clone(),
        }
    }

    /// True for null and for strings that are empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::String(s) => s.trim().is_empty(),
            Scalar::Bool(_) | Scalar::Number(_) => false,
        }
    }
}

/// A local file sent as a multipart part instead of a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    path: PathBuf,
    file_name: Option<String>,
    mime_type: Option<String>,
}

impl FileAttachment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_name: None,
            mime_type: None,
        }
    }

    /// Override the file name reported in the multipart part.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Explicit file name, else the last path component, else `"upload"`.
    pub fn file_name(&self) -> String {
        if let Some(name) = &self.file_name {
            return name.clone();
        }
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string())
    }
}

/// A parameter value: scalar, list, nested map, or file reference.
///
/// Values must be acyclic. Ownership makes a self-referential tree impossible to
/// build in safe code, so the flattener never has to guard against cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Scalar(Scalar),
    List(Vec<ParameterValue>),
    Map(Params),
    File(FileAttachment),
}

impl ParameterValue {
    pub fn null() -> Self {
        ParameterValue::Scalar(Scalar::Null)
    }

    /// True for blank scalars and for empty lists or maps. Files are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            ParameterValue::Scalar(s) => s.is_blank(),
            ParameterValue::List(items) => items.is_empty(),
            ParameterValue::Map(map) => map.is_empty(),
            ParameterValue::File(_) => false,
        }
    }
}

impl From<Scalar> for ParameterValue {
    fn from(value: Scalar) -> Self {
        ParameterValue::Scalar(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::Scalar(Scalar::String(value))
    }
}

impl From<&String> for ParameterValue {
    fn from(value: &String) -> Self {
        ParameterValue::Scalar(Scalar::String(value.clone()))
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Scalar(Scalar::Bool(value))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParameterValue {
                fn from(value: $t) -> Self {
                    ParameterValue::Scalar(Scalar::Number(Number::from(value)))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl From<f64> for ParameterValue {
    /// Non-finite floats have no JSON number form and become null.
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(n) => ParameterValue::Scalar(Scalar::Number(n)),
            None => ParameterValue::null(),
        }
    }
}

impl From<FileAttachment> for ParameterValue {
    fn from(value: FileAttachment) -> Self {
        ParameterValue::File(value)
    }
}

impl From<Params> for ParameterValue {
    fn from(value: Params) -> Self {
        ParameterValue::Map(value)
    }
}

impl<T: Into<ParameterValue>> From<Vec<T>> for ParameterValue {
    fn from(value: Vec<T>) -> Self {
        ParameterValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParameterValue>> From<Option<T>> for ParameterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(ParameterValue::null)
    }
}

impl From<serde_json::Value> for ParameterValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => ParameterValue::null(),
            Value::Bool(b) => ParameterValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => ParameterValue::Scalar(Scalar::Number(n)),
            Value::String(s) => ParameterValue::Scalar(Scalar::String(s)),
            Value::Array(items) => {
                ParameterValue::List(items.into_iter().map(ParameterValue::from).collect())
            }
            Value::Object(map) => ParameterValue::Map(map.into_iter().collect()),
        }
    }
}

/// Insertion-ordered map with unique keys.
///
/// Inserting an existing key replaces its value in place, so the key keeps its
/// original position. Merging two maps is therefore last-write-wins on values
/// and first-seen on order. Equality compares entries in order.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: IndexMap<String, ParameterValue>,
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous value for `key`, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Option<ParameterValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert only when `value` is `Some`.
    pub fn with_opt<V: Into<ParameterValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Merge `other` into `self`, overwriting values of shared keys.
    pub fn merge(&mut self, other: Params) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ParameterValue> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, ParameterValue);
    type IntoIter = indexmap::map::IntoIter<String, ParameterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remove_keeps_remaining_order() {
        let mut params = Params::new().with("a", 1).with("b", 2).with("c", 3);
        assert_eq!(params.remove("b"), Some(ParameterValue::from(2)));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab = Params::new().with("a", 1).with("b", 2);
        let ba = Params::new().with("b", 2).with("a", 1);
        assert_ne!(ab, ba);
        assert_eq!(ab, Params::new().with("a", 1).with("b", 2));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        let previous = params.insert("a", 3);
        assert_eq!(previous, Some(ParameterValue::from(1)));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&ParameterValue::from(3)));
    }

    #[test]
    fn merge_is_last_write_wins() {
        let mut base = Params::new().with("photo", "text").with("event_id", 7);
        base.merge(Params::new().with("photo", FileAttachment::new("/tmp/a.jpg")));
        assert_eq!(base.len(), 2);
        assert!(matches!(base.get("photo"), Some(ParameterValue::File(_))));
        assert_eq!(base.keys().next(), Some("photo"));
    }

    #[test]
    fn with_opt_skips_none() {
        let params = Params::new()
            .with_opt("brand_id", None::<i64>)
            .with_opt("page", Some(2));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["page"]);
    }

    #[test]
    fn scalar_form_values() {
        assert_eq!(Scalar::Null.to_form_value(), "");
        assert_eq!(Scalar::Bool(true).to_form_value(), "1");
        assert_eq!(Scalar::Bool(false).to_form_value(), "");
        assert_eq!(Scalar::Number(Number::from(42)).to_form_value(), "42");
        assert_eq!(Scalar::String("x y".into()).to_form_value(), "x y");
    }

    #[test]
    fn blankness() {
        assert!(ParameterValue::null().is_blank());
        assert!(ParameterValue::from("  ").is_blank());
        assert!(!ParameterValue::from(0).is_blank());
        assert!(!ParameterValue::from(false).is_blank());
        assert!(ParameterValue::List(vec![]).is_blank());
        assert!(!ParameterValue::from(FileAttachment::new("x")).is_blank());
    }

    #[test]
    fn from_json_value() {
        let value = ParameterValue::from(json!({"a": {"b": [1, "two", null]}}));
        let ParameterValue::Map(outer) = value else {
            panic!("expected map");
        };
        let Some(ParameterValue::Map(inner)) = outer.get("a") else {
            panic!("expected nested map");
        };
        assert_eq!(
            inner.get("b"),
            Some(&ParameterValue::List(vec![
                ParameterValue::from(1),
                ParameterValue::from("two"),
                ParameterValue::null(),
            ]))
        );
    }

    #[test]
    fn non_finite_float_is_null() {
        assert_eq!(ParameterValue::from(f64::NAN), ParameterValue::null());
    }

    #[test]
    fn attachment_file_name() {
        assert_eq!(FileAttachment::new("/photos/IMG_1.jpg").file_name(), "IMG_1.jpg");
        assert_eq!(
            FileAttachment::new("/photos/IMG_1.jpg")
                .with_file_name("cover.jpg")
                .file_name(),
            "cover.jpg"
        );
        assert_eq!(FileAttachment::new("/").file_name(), "upload");
    }
}
