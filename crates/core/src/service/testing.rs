//! Test fixtures shared by the service tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use super::GalleryService;
use crate::Error;
use crate::store::{Document, DocumentStore, FieldUpdate, MemoryStore, Query};

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn site(id: &str, categories: Vec<&str>, views: i64, uploaded_at: DateTime<Utc>) -> Document {
    Document::new(id)
        .with("name", format!("Site {id}"))
        .with("url", format!("https://{id}.example.com"))
        .with("categories", categories)
        .with("views", views)
        .with("uploadedAt", uploaded_at)
}

/// The two-record gallery: w1 (SaaS, AI; 5 views; Jan) and w2 (saas; 10 views; Feb).
pub fn two_site_docs() -> Vec<Document> {
    vec![
        site("w1", vec!["SaaS", "AI"], 5, at(2024, 1, 1)),
        site("w2", vec!["saas"], 10, at(2024, 2, 1)),
    ]
}

pub fn two_sites() -> MemoryStore {
    MemoryStore::with_documents(two_site_docs())
}

pub fn service(store: impl DocumentStore) -> GalleryService {
    GalleryService::new(Arc::new(store), Duration::from_secs(60))
}

/// Store whose every call fails.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get(&self, _id: &str) -> Result<Option<Document>, Error> {
        Err(Error::StoreUnavailable("offline".into()))
    }

    async fn query(&self, _query: &Query) -> Result<Vec<Document>, Error> {
        Err(Error::StoreUnavailable("offline".into()))
    }

    async fn update(&self, _id: &str, _updates: &[FieldUpdate]) -> Result<(), Error> {
        Err(Error::StoreUnavailable("offline".into()))
    }

    async fn scan(&self) -> Result<Vec<Document>, Error> {
        Err(Error::StoreUnavailable("offline".into()))
    }

    async fn insert(&self, _doc: Document) -> Result<String, Error> {
        Err(Error::StoreUnavailable("offline".into()))
    }
}

/// Wraps a store and counts the calls that reach it.
#[derive(Debug, Clone, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    pub queries: Arc<AtomicUsize>,
    pub gets: Arc<AtomicUsize>,
    pub updates: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self { inner, ..Default::default() }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn get(&self, id: &str) -> Result<Option<Document>, Error> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn query(&self, query: &Query) -> Result<Vec<Document>, Error> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.query(query).await
    }

    async fn update(&self, id: &str, updates: &[FieldUpdate]) -> Result<(), Error> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, updates).await
    }

    async fn scan(&self) -> Result<Vec<Document>, Error> {
        self.inner.scan().await
    }

    async fn insert(&self, doc: Document) -> Result<String, Error> {
        self.inner.insert(doc).await
    }
}
