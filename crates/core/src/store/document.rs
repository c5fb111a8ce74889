//! Raw document payloads as held by the document store.
//!
//! Field values keep a dedicated timestamp variant so that timestamp-typed
//! fields stay distinguishable from plain strings until they are flattened
//! into JSON by [`to_plain`].

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Field map of a single document.
pub type Fields = BTreeMap<String, FieldValue>;

/// A single typed value inside a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Timestamp(DateTime<Utc>),
    Array(Vec<FieldValue>),
    Map(Fields),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Read a counter such as `views`. Finite floats are truncated toward zero
    /// and negative floats clamp to zero, matching how websites report views.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Float(f) if f.is_finite() => Some(f.max(0.0) as i64),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<Fields> for FieldValue {
    fn from(value: Fields) -> Self {
        FieldValue::Map(value)
    }
}

/// A stored record: store-assigned id plus its field payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    /// Create an empty document. An empty id asks the store to assign one on insert.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), fields: Fields::new() }
    }

    /// Builder-style field setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}

/// Format a timestamp as ISO-8601 with millisecond precision and a `Z` suffix.
pub fn iso8601(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 string into a UTC timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.with_timezone(&Utc))
}

/// Flatten a field value into plain JSON.
///
/// Timestamps at any depth become ISO-8601 strings; every other value keeps
/// its shape.
pub fn to_plain(value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Null => serde_json::Value::Null,
        FieldValue::Bool(b) => serde_json::Value::Bool(*b),
        FieldValue::Integer(n) => serde_json::Value::from(*n),
        FieldValue::Float(f) => serde_json::Number::from_f64(*f).map_or(serde_json::Value::Null, serde_json::Value::Number),
        FieldValue::String(s) => serde_json::Value::String(s.clone()),
        FieldValue::Timestamp(ts) => serde_json::Value::String(iso8601(ts)),
        FieldValue::Array(items) => serde_json::Value::Array(items.iter().map(to_plain).collect()),
        FieldValue::Map(map) => serde_json::Value::Object(plain_fields(map)),
    }
}

/// Flatten a whole field map into a JSON object.
pub fn plain_fields(fields: &Fields) -> serde_json::Map<String, serde_json::Value> {
    fields.iter().map(|(k, v)| (k.clone(), to_plain(v))).collect()
}

/// Lift plain JSON into field values. Strings stay strings.
pub fn from_plain(value: serde_json::Value) -> FieldValue {
    match value {
        serde_json::Value::Null => FieldValue::Null,
        serde_json::Value::Bool(b) => FieldValue::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => FieldValue::Float(n.as_f64().unwrap_or_default()),
        },
        serde_json::Value::String(s) => FieldValue::String(s),
        serde_json::Value::Array(items) => FieldValue::Array(items.into_iter().map(from_plain).collect()),
        serde_json::Value::Object(map) => FieldValue::Map(map.into_iter().map(|(k, v)| (k, from_plain(v))).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_iso8601_format() {
        assert_eq!(iso8601(&ts()), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_to_plain_converts_nested_timestamps() {
        let mut inner = Fields::new();
        inner.insert("at".into(), FieldValue::Timestamp(ts()));
        inner.insert("label".into(), "launch".into());

        let value = FieldValue::Array(vec![FieldValue::Map(inner), FieldValue::Timestamp(ts())]);

        assert_eq!(
            to_plain(&value),
            json!([{ "at": "2024-01-01T00:00:00.000Z", "label": "launch" }, "2024-01-01T00:00:00.000Z"])
        );
    }

    #[test]
    fn test_to_plain_leaves_primitives_and_null() {
        assert_eq!(to_plain(&FieldValue::Null), serde_json::Value::Null);
        assert_eq!(to_plain(&FieldValue::Integer(5)), json!(5));
        assert_eq!(to_plain(&FieldValue::Bool(true)), json!(true));
        assert_eq!(to_plain(&FieldValue::Float(1.5)), json!(1.5));
        assert_eq!(to_plain(&"2024-01-01".into()), json!("2024-01-01"));
    }

    #[test]
    fn test_from_plain_numbers() {
        assert_eq!(from_plain(json!(3)), FieldValue::Integer(3));
        assert_eq!(from_plain(json!(2.5)), FieldValue::Float(2.5));
        assert_eq!(from_plain(json!(["a"])), FieldValue::Array(vec!["a".into()]));
    }

    #[test]
    fn test_as_count_accepts_floats() {
        assert_eq!(FieldValue::Integer(4).as_count(), Some(4));
        assert_eq!(FieldValue::Float(7.0).as_count(), Some(7));
        assert_eq!(FieldValue::Float(7.9).as_count(), Some(7));
        assert_eq!(FieldValue::Float(-2.5).as_count(), Some(0));
        assert_eq!(FieldValue::Float(f64::NAN).as_count(), None);
        assert_eq!(FieldValue::String("7".into()).as_count(), None);
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z"), Some(ts()));
        assert_eq!(parse_timestamp("2024-01-01T02:00:00+02:00"), Some(ts()));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_document_builder() {
        let doc = Document::new("w1").with("views", 5).with("name", "Site");
        assert_eq!(doc.get("views"), Some(&FieldValue::Integer(5)));
        assert_eq!(doc.get("name").and_then(FieldValue::as_str), Some("Site"));
    }
}
