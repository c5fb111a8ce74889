//! Fire-and-forget view counting.

use chrono::Utc;
use tokio::task::JoinHandle;

use super::GalleryService;
use crate::store::FieldUpdate;

impl GalleryService {
    /// Add one view to a website and stamp `lastViewed`.
    ///
    /// Never fails: an empty id, an unknown website or a store error is
    /// logged and the call returns without touching the store further.
    pub async fn increment_views(&self, id: &str) {
        if id.is_empty() {
            tracing::warn!("ignoring view increment without a website id");
            return;
        }

        match self.inner.store.get(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::warn!(id, "cannot record view: website not found");
                return;
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "cannot record view: lookup failed");
                return;
            }
        }

        let updates = [FieldUpdate::increment("views", 1), FieldUpdate::set("lastViewed", Utc::now())];
        match self.inner.store.update(id, &updates).await {
            Ok(()) => tracing::debug!(id, "recorded view"),
            Err(e) => tracing::warn!(id, error = %e, "failed to record view"),
        }
    }

    /// Run [`increment_views`](Self::increment_views) on a detached task.
    ///
    /// The handle may be awaited or dropped; dropping it does not cancel the
    /// increment.
    pub fn spawn_view_increment(&self, id: &str) -> JoinHandle<()> {
        let service = self.clone();
        let id = id.to_string();
        tokio::spawn(async move { service.increment_views(&id).await })
    }
}
