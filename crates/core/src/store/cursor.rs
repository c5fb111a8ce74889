//! Continuation tokens for ordered queries.
//!
//! A cursor records only the id of the last document of a page and the value
//! of the field the page was ordered by. That pair is enough to resume a
//! descending `(value, id)` scan strictly after it.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::Document;
use crate::Error;

/// Fields a query can be ordered by. Ordering is always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Views,
    UploadedAt,
}

impl OrderField {
    /// Document field name this ordering reads.
    pub fn field_name(self) -> &'static str {
        match self {
            OrderField::Views => "views",
            OrderField::UploadedAt => "uploadedAt",
        }
    }
}

/// The ordering-field value of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderValue {
    Views(i64),
    UploadedAt(DateTime<Utc>),
}

impl OrderValue {
    /// Read the ordering value of `doc`, if it carries the field with the expected type.
    pub fn of(doc: &Document, field: OrderField) -> Option<Self> {
        let raw = doc.get(field.field_name())?;
        match field {
            OrderField::Views => raw.as_count().map(OrderValue::Views),
            OrderField::UploadedAt => raw.as_timestamp().map(OrderValue::UploadedAt),
        }
    }

    pub fn field(&self) -> OrderField {
        match self {
            OrderValue::Views(_) => OrderField::Views,
            OrderValue::UploadedAt(_) => OrderField::UploadedAt,
        }
    }

    /// Compare two values of the same field. Values of different fields are incomparable.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (OrderValue::Views(a), OrderValue::Views(b)) => Some(a.cmp(b)),
            (OrderValue::UploadedAt(a), OrderValue::UploadedAt(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Position after which the next page starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub id: String,
    pub value: OrderValue,
}

impl Cursor {
    /// Build a cursor pointing at `doc` within a scan ordered by `field`.
    pub fn from_document(doc: &Document, field: OrderField) -> Option<Self> {
        OrderValue::of(doc, field).map(|value| Self { id: doc.id.clone(), value })
    }

    /// Encode as an opaque token for callers outside the crate.
    pub fn encode(&self) -> String {
        // Serializing a struct of strings, ints and timestamps cannot fail.
        hex::encode(serde_json::to_vec(self).unwrap_or_default())
    }

    /// Decode a token produced by [`Cursor::encode`].
    pub fn decode(token: &str) -> Result<Self, Error> {
        let bytes = hex::decode(token).map_err(|e| Error::InvalidCursor(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| Error::InvalidCursor(e.to_string()))
    }

    /// Whether a document at `(value, id)` sorts strictly after this cursor in a descending scan.
    pub fn precedes(&self, id: &str, value: &OrderValue) -> bool {
        match value.compare(&self.value) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => id < self.id.as_str(),
            _ => false,
        }
    }
}
