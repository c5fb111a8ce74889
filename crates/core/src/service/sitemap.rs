//! Lightweight listing of every website for sitemap generation.

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::GalleryService;
use crate::store::Document;
use crate::store::FieldValue;
use crate::store::document::iso8601;

/// Keys consulted, in order, for a website's last modification time.
const MODIFIED_KEYS: &[&str] = &["updatedAt", "uploadedAt"];

/// One sitemap `<url>`: a website id and when it last changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub id: String,
    pub last_modified: String,
}

impl SitemapEntry {
    fn from_document(doc: &Document) -> Self {
        let last_modified = MODIFIED_KEYS
            .iter()
            .find_map(|key| match doc.get(key) {
                Some(FieldValue::Timestamp(ts)) => Some(iso8601(ts)),
                Some(FieldValue::String(raw)) => Some(raw.clone()),
                _ => None,
            })
            .unwrap_or_else(|| iso8601(&Utc::now()));

        Self { id: doc.id.clone(), last_modified }
    }
}

impl GalleryService {
    /// Every website id with its last modification time, sorted by id.
    ///
    /// Reads the store directly, bypassing the cache. Returns an empty list if
    /// the store cannot be scanned.
    pub async fn sitemap_entries(&self) -> Vec<SitemapEntry> {
        match self.inner.store.scan().await {
            Ok(docs) => {
                let mut entries: Vec<SitemapEntry> = docs.iter().map(SitemapEntry::from_document).collect();
                entries.sort_by(|a, b| a.id.cmp(&b.id));
                entries
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to list websites for sitemap");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{FailingStore, at, service, site};
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_entries_prefer_updated_at() {
        let store = MemoryStore::with_documents([
            site("w1", vec![], 1, at(2024, 1, 1)).with("updatedAt", at(2024, 6, 1)),
            site("w2", vec![], 1, at(2024, 2, 1)),
            Document::new("w3"),
        ]);
        let entries = service(store).sitemap_entries().await;

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], SitemapEntry { id: "w1".into(), last_modified: "2024-06-01T00:00:00.000Z".into() });
        assert_eq!(entries[1].last_modified, "2024-02-01T00:00:00.000Z");
        assert_eq!(entries[2].id, "w3");
        assert!(!entries[2].last_modified.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_yields_empty_list() {
        assert!(service(FailingStore).sitemap_entries().await.is_empty());
    }
}
