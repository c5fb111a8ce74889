//! Previous/next navigation between websites.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::GalleryService;
use super::pagination::{PageRequest, SortBy};
use crate::website::Website;

/// Neighbours of a website within one sort order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Adjacent {
    /// The website listed right after this one (older or less viewed).
    pub prev: Option<Website>,
    /// The website listed right before this one (newer or more viewed).
    pub next: Option<Website>,
}

impl GalleryService {
    /// Resolve the neighbours of `id` under `sort_by`.
    ///
    /// Only the first page of the adjacency window is sampled; a website
    /// outside it, or at either end of it, gets `None` on that side.
    pub async fn get_adjacent(&self, id: &str, sort_by: SortBy) -> Adjacent {
        let request = PageRequest { sort_by, page_size: Some(self.inner.adjacency_window), ..Default::default() };
        let page = self.get_page(&request).await;

        let Some(pos) = page.websites.iter().position(|w| w.id == id) else {
            tracing::debug!(id, sort_by = %sort_by, "website outside adjacency window");
            return Adjacent::default();
        };

        Adjacent {
            next: pos.checked_sub(1).and_then(|i| page.websites.get(i)).cloned(),
            prev: page.websites.get(pos + 1).cloned(),
        }
    }
}
