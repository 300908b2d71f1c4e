//! Column-keyed payloads for inserts and partial updates.
//!
//! A [`FieldMap`] is what request DTOs turn into before they reach the
//! persistence layer. Keys are column names; the repository checks every key
//! against the table's column allowlist, so nothing here is trusted.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

/// A single column value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Int(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Text(_) => "text",
            FieldValue::Date(_) => "date",
            FieldValue::Timestamp(_) => "timestamp",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "{v:?}"),
            FieldValue::Date(v) => write!(f, "{v}"),
            FieldValue::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(v: NaiveDate) -> Self {
        FieldValue::Date(v)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(v: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Column name to value mapping for one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    fields: BTreeMap<String, FieldValue>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `column` to `value`, replacing any previous value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    /// Builder form of [`FieldMap::set`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(column, value);
        self
    }

    /// Sets `column` only when a value was supplied.
    pub fn set_if_present<T: Into<FieldValue>>(
        &mut self,
        column: impl Into<String>,
        value: Option<T>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.set(column, value);
        }
        self
    }

    /// Sets a nullable column from a tri-state patch value: absent leaves the
    /// column alone, `Some(None)` clears it.
    pub fn set_patch<T: Into<FieldValue>>(
        &mut self,
        column: impl Into<String>,
        value: Option<Option<T>>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.set(column, FieldValue::from(value));
        }
        self
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<FieldValue> {
        self.fields.remove(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column names in name order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// Conversion of a create/update payload into its column values.
pub trait IntoFieldMap {
    fn into_field_map(self) -> FieldMap;
}

/// Deserializes a field that distinguishes "absent" from explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "...")]` on an
/// `Option<Option<T>>` field: a missing key stays `None`, `null` becomes
/// `Some(None)`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserializes a patch field for a column that cannot be cleared.
///
/// Use with `#[serde(default, deserialize_with = "...")]` on an `Option<T>`
/// field: a missing key stays `None`, an explicit `null` is rejected.
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(de::Error::custom("value cannot be null")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        description: Option<Option<String>>,
    }

    #[derive(Debug, Deserialize)]
    struct RequiredPatch {
        #[serde(default, deserialize_with = "non_null")]
        name: Option<String>,
    }

    #[test]
    fn test_non_null_rejects_explicit_null() {
        let absent: RequiredPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.name, None);

        let set: RequiredPatch = serde_json::from_str(r#"{"name": "Wola"}"#).unwrap();
        assert_eq!(set.name.as_deref(), Some("Wola"));

        let err = serde_json::from_str::<RequiredPatch>(r#"{"name": null}"#).unwrap_err();
        assert!(err.to_string().contains("cannot be null"), "{err}");
    }

    #[test]
    fn test_set_if_present_skips_none() {
        let mut map = FieldMap::new();
        map.set_if_present("name", Some("Downtown"));
        map.set_if_present::<String>("address", None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("name"), Some(&FieldValue::Text("Downtown".into())));
        assert!(!map.contains("address"));
    }

    #[test]
    fn test_set_patch_tri_state() {
        let mut map = FieldMap::new();
        map.set_patch::<String>("description", None);
        assert!(map.is_empty());

        map.set_patch::<String>("description", Some(None));
        assert_eq!(map.get("description"), Some(&FieldValue::Null));

        map.set_patch("description", Some(Some("Renovated")));
        assert_eq!(
            map.get("description"),
            Some(&FieldValue::Text("Renovated".into()))
        );
    }

    #[test]
    fn test_double_option_deserialization() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);

        let cleared: Patch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: Patch = serde_json::from_str(r#"{"description": "Sunny"}"#).unwrap();
        assert_eq!(set.description, Some(Some("Sunny".to_string())));
    }

    #[test]
    fn test_option_into_field_value() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some(3_i32)), FieldValue::Int(3));
        assert!(FieldValue::from(None::<bool>).is_null());
    }

    #[test]
    fn test_iteration_is_ordered_by_column() {
        let map: FieldMap = [("street_id", 1_i64), ("floors", 4), ("type_id", 2)]
            .into_iter()
            .collect();
        let columns: Vec<&str> = map.columns().collect();
        assert_eq!(columns, vec!["floors", "street_id", "type_id"]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FieldValue::Float(1.5).type_name(), "float");
        assert_eq!(FieldValue::Text("x".into()).type_name(), "text");
        assert_eq!(FieldValue::Null.to_string(), "null");
    }
}
