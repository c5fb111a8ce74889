//! Category count aggregation.

use super::GalleryService;
use super::pagination::PageRequest;
use crate::cache::key::CATEGORY_COUNTS_KEY;
use crate::category::{CATEGORIES, CategoryCount, count_categories};

impl GalleryService {
    /// Count websites per canonical category over the whole collection.
    ///
    /// Every canonical category is present, sorted by name. If the collection
    /// cannot be read, every count is zero and nothing is cached.
    pub async fn get_category_counts(&self) -> Vec<CategoryCount> {
        if let Some(counts) = self.inner.counts.get(CATEGORY_COUNTS_KEY) {
            tracing::debug!("category counts cache hit");
            return counts;
        }

        match self.load_page(&PageRequest::default()).await {
            Ok(page) => {
                let counts = count_categories(&page.websites);
                self.inner.counts.set(CATEGORY_COUNTS_KEY, counts.clone());
                counts
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load websites for category counts");
                count_categories(&[])
            }
        }
    }

    /// The canonical category display names.
    pub fn categories(&self) -> &'static [&'static str] {
        CATEGORIES
    }
}

#[cfg(test)]
mod tests {
    use crate::category::{CATEGORIES, CategoryCount};
    use crate::service::testing::{CountingStore, FailingStore, at, service, site, two_sites};
    use crate::store::{DocumentStore, MemoryStore};

    fn count_of(counts: &[CategoryCount], name: &str) -> u64 {
        counts.iter().find(|c| c.name == name).map(|c| c.count).unwrap()
    }

    #[tokio::test]
    async fn test_scenario_counts() {
        let svc = service(two_sites());
        let counts = svc.get_category_counts().await;

        assert_eq!(counts.len(), CATEGORIES.len());
        assert_eq!(count_of(&counts, "SaaS"), 2);
        assert_eq!(count_of(&counts, "AI"), 1);
        assert_eq!(count_of(&counts, "Blog"), 0);
    }

    #[tokio::test]
    async fn test_counts_bounded_by_matching_pairs() {
        let store = MemoryStore::with_documents([
            site("a", vec!["SaaS", "Crypto"], 1, at(2024, 1, 1)),
            site("b", vec!["design", "Portfolio ", "Web3"], 2, at(2024, 2, 1)),
        ]);
        let svc = service(store);
        let counts = svc.get_category_counts().await;

        assert_eq!(counts.iter().map(|c| c.count).sum::<u64>(), 3);
        assert_eq!(count_of(&counts, "Design"), 1);
        assert_eq!(count_of(&counts, "Portfolio"), 1);
    }

    #[tokio::test]
    async fn test_counts_are_cached() {
        let store = CountingStore::new(two_sites());
        let svc = service(store.clone());

        let first = svc.get_category_counts().await;
        store
            .inner
            .insert(site("w3", vec!["SaaS"], 1, at(2024, 3, 1)))
            .await
            .unwrap();
        let second = svc.get_category_counts().await;

        assert_eq!(first, second);
        assert_eq!(store.queries(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_yields_zero_counts() {
        let svc = service(FailingStore);
        let counts = svc.get_category_counts().await;
        assert_eq!(counts.len(), CATEGORIES.len());
        assert!(counts.iter().all(|c| c.count == 0));
    }
}
