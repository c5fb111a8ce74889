//! Read-through gallery service.
//!
//! [`GalleryService`] owns its caches and a handle to the document store.
//! Caches are created with the service and dropped with its last clone.
//!
//! Only [`GalleryService::get_by_id`] reports failures to the caller. Every
//! other operation logs store errors and degrades to an empty or default
//! result.

mod adjacency;
mod categories;
mod detail;
mod pagination;
mod sitemap;
mod views;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;
use std::time::Duration;

use crate::cache::TtlCache;
use crate::category::CategoryCount;
use crate::config::AppConfig;
use crate::store::DocumentStore;
use crate::website::WebsiteDetail;

pub use adjacency::Adjacent;
pub use pagination::{PageRequest, SortBy, WebsitePage};
pub use sitemap::SitemapEntry;

/// Default number of records sampled by [`GalleryService::get_adjacent`].
pub const DEFAULT_ADJACENCY_WINDOW: usize = 50;

/// Gallery data access with a process-local TTL cache in front of the store.
///
/// Cloning is cheap and shares the store and caches.
#[derive(Clone)]
pub struct GalleryService {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn DocumentStore>,
    pages: TtlCache<WebsitePage>,
    websites: TtlCache<WebsiteDetail>,
    counts: TtlCache<Vec<CategoryCount>>,
    adjacency_window: usize,
}

impl GalleryService {
    /// Create a service whose cache entries live for `ttl`.
    pub fn new(store: Arc<dyn DocumentStore>, ttl: Duration) -> Self {
        Self::with_adjacency_window(store, ttl, DEFAULT_ADJACENCY_WINDOW)
    }

    pub fn with_adjacency_window(store: Arc<dyn DocumentStore>, ttl: Duration, adjacency_window: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                pages: TtlCache::new(ttl),
                websites: TtlCache::new(ttl),
                counts: TtlCache::new(ttl),
                adjacency_window,
            }),
        }
    }

    /// Create a service configured from `config`.
    pub fn from_config(store: Arc<dyn DocumentStore>, config: &AppConfig) -> Self {
        Self::with_adjacency_window(store, config.cache_ttl(), config.adjacency_window)
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.inner.store
    }
}

impl std::fmt::Debug for GalleryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryService")
            .field("cached_pages", &self.inner.pages.len())
            .field("cached_websites", &self.inner.websites.len())
            .field("adjacency_window", &self.inner.adjacency_window)
            .finish_non_exhaustive()
    }
}
