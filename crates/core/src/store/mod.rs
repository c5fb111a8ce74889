//! Document store adapters.
//!
//! The gallery service talks to its backing collection only through the
//! [`DocumentStore`] trait:
//!
//! - point reads and point updates (increment / set) by id
//! - descending ordered queries with a start-after cursor and a limit
//! - full collection scans
//! - inserts (upsert), used for seeding
//!
//! Two adapters ship with the crate: [`SqliteStore`] for persistence and
//! [`MemoryStore`] for tests and embedding.

pub mod cursor;
pub mod document;
pub mod ids;
pub mod memory;
pub mod seed;
pub mod sqlite;

use async_trait::async_trait;

use crate::Error;

pub use cursor::{Cursor, OrderField, OrderValue};
pub use document::{Document, FieldValue, Fields};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// An ordered query. Results are sorted by `order_by` descending, ties broken
/// by id descending.
///
/// Documents lacking the ordering field (or holding it with another type) are
/// not part of the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub order_by: OrderField,
    pub start_after: Option<Cursor>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn ordered_by(order_by: OrderField) -> Self {
        Self { order_by, start_after: None, limit: None }
    }

    pub fn start_after(mut self, cursor: Option<Cursor>) -> Self {
        self.start_after = cursor;
        self
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Reject cursors produced under a different ordering.
    pub fn check_cursor(&self) -> Result<(), Error> {
        match &self.start_after {
            Some(cursor) if cursor.value.field() != self.order_by => Err(Error::InvalidCursor(format!(
                "cursor ordered by {} used for a query ordered by {}",
                cursor.value.field().field_name(),
                self.order_by.field_name()
            ))),
            _ => Ok(()),
        }
    }
}

/// A single field mutation applied by [`DocumentStore::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    /// Add `by` to a counter field; a missing or non-numeric field becomes `by`.
    Increment { field: String, by: i64 },
    /// Overwrite a field.
    Set { field: String, value: FieldValue },
}

impl FieldUpdate {
    pub fn increment(field: impl Into<String>, by: i64) -> Self {
        FieldUpdate::Increment { field: field.into(), by }
    }

    pub fn set(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        FieldUpdate::Set { field: field.into(), value: value.into() }
    }

    /// Apply this mutation to an in-memory field map.
    pub fn apply(&self, fields: &mut Fields) {
        match self {
            FieldUpdate::Increment { field, by } => {
                let current = fields.get(field).and_then(FieldValue::as_count).unwrap_or(0);
                fields.insert(field.clone(), FieldValue::Integer(current.saturating_add(*by)));
            }
            FieldUpdate::Set { field, value } => {
                fields.insert(field.clone(), value.clone());
            }
        }
    }
}

/// Backing collection of website documents.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Fetch one document. Returns `None` if no document has this id.
    async fn get(&self, id: &str) -> Result<Option<Document>, Error>;

    /// Run an ordered query.
    async fn query(&self, query: &Query) -> Result<Vec<Document>, Error>;

    /// Apply `updates` atomically to an existing document.
    ///
    /// Fails with `Error::NotFound` if the document does not exist.
    async fn update(&self, id: &str, updates: &[FieldUpdate]) -> Result<(), Error>;

    /// Every document in the collection, in no particular order.
    async fn scan(&self) -> Result<Vec<Document>, Error>;

    /// Insert or replace a document, returning its id.
    ///
    /// An empty id is replaced by a store-assigned one.
    async fn insert(&self, doc: Document) -> Result<String, Error>;
}
