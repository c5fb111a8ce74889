//! In-process document store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Document, DocumentStore, FieldUpdate, FieldValue, OrderValue, Query, ids};
use crate::Error;

/// Document store backed by a `HashMap` behind an async lock.
///
/// Cloning shares the underlying collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: Arc<RwLock<HashMap<String, Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `docs`.
    pub fn with_documents(docs: impl IntoIterator<Item = Document>) -> Self {
        let map = docs.into_iter().map(|d| (d.id.clone(), d)).collect();
        Self { docs: Arc::new(RwLock::new(map)) }
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<Document>, Error> {
        Ok(self.docs.read().await.get(id).cloned())
    }

    async fn query(&self, query: &Query) -> Result<Vec<Document>, Error> {
        query.check_cursor()?;

        let docs = self.docs.read().await;
        let mut ordered: Vec<(OrderValue, &Document)> = docs
            .values()
            .filter_map(|d| OrderValue::of(d, query.order_by).map(|v| (v, d)))
            .filter(|(v, d)| query.start_after.as_ref().is_none_or(|c| c.precedes(&d.id, v)))
            .collect();

        ordered.sort_by(|(va, a), (vb, b)| {
            vb.compare(va)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.id.cmp(&a.id))
        });

        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(ordered.into_iter().take(limit).map(|(_, d)| d.clone()).collect())
    }

    async fn update(&self, id: &str, updates: &[FieldUpdate]) -> Result<(), Error> {
        let mut docs = self.docs.write().await;
        let doc = docs.get_mut(id).ok_or_else(|| Error::NotFound(id.to_string()))?;
        for update in updates {
            update.apply(&mut doc.fields);
        }
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Document>, Error> {
        Ok(self.docs.read().await.values().cloned().collect())
    }

    async fn insert(&self, mut doc: Document) -> Result<String, Error> {
        if doc.id.is_empty() {
            let name = doc.get("name").and_then(FieldValue::as_str).unwrap_or_default();
            let url = doc.get("url").and_then(FieldValue::as_str).unwrap_or_default();
            doc.id = ids::generate_id(name, url);
        }
        let id = doc.id.clone();
        self.docs.write().await.insert(id.clone(), doc);
        Ok(id)
    }
}
