//! Single-record fetch.

use super::GalleryService;
use crate::Error;
use crate::cache::key::website_key;
use crate::website::{WebsiteDetail, map_website_detail};

impl GalleryService {
    /// Fetch one website by id.
    ///
    /// A cache miss reads the store and then requests a view increment on a
    /// detached task. The returned detail never waits for that increment, and
    /// its failures are only logged.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no website has this id, or the store error
    /// if the lookup itself failed.
    pub async fn get_by_id(&self, id: &str) -> Result<WebsiteDetail, Error> {
        let key = website_key(id);
        if let Some(detail) = self.inner.websites.get(&key) {
            tracing::debug!(id, "website cache hit");
            return Ok(detail);
        }

        let doc = self
            .inner
            .store
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let detail = map_website_detail(&doc);
        self.inner.websites.set(key, detail.clone());

        self.spawn_view_increment(id);

        Ok(detail)
    }
}
