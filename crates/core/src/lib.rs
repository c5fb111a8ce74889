//! Core types and data access for the website gallery.
//!
//! This crate provides:
//! - Document store adapters (SQLite and in-memory)
//! - A read-through TTL cache
//! - Pagination, adjacency, view counting and category aggregation
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod category;
pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod website;

pub use cache::TtlCache;
pub use category::{CATEGORIES, CategoryCount};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use service::{Adjacent, GalleryService, PageRequest, SitemapEntry, SortBy, WebsitePage};
pub use store::{Cursor, Document, DocumentStore, MemoryStore, SqliteStore};
pub use website::{Website, WebsiteDetail};
