//! Cursor-based pagination over the website collection.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::GalleryService;
use crate::Error;
use crate::cache::key::page_key;
use crate::category::has_category;
use crate::store::{Cursor, OrderField, Query};
use crate::website::{Website, map_website};

/// Sort mode of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most recently uploaded first.
    #[default]
    Latest,
    /// Most viewed first.
    Popular,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Latest => "latest",
            SortBy::Popular => "popular",
        }
    }

    pub fn order_field(self) -> OrderField {
        match self {
            SortBy::Latest => OrderField::UploadedAt,
            SortBy::Popular => OrderField::Views,
        }
    }

    /// Sort websites in place, stable, by this mode's criterion descending.
    pub fn sort(self, websites: &mut [Website]) {
        match self {
            SortBy::Latest => websites.sort_by_cached_key(|w| Reverse(w.uploaded_at_ts())),
            SortBy::Popular => websites.sort_by_key(|w| Reverse(w.views)),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(SortBy::Latest),
            "popular" => Ok(SortBy::Popular),
            other => Err(Error::InvalidInput(format!("unknown sort mode: {other} (expected latest or popular)"))),
        }
    }
}

/// Parameters of one page fetch. The default requests every website, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    pub sort_by: SortBy,
    pub page_size: Option<usize>,
    pub cursor: Option<Cursor>,
    pub category: Option<String>,
}

impl PageRequest {
    pub fn sorted(sort_by: SortBy) -> Self {
        Self { sort_by, ..Default::default() }
    }

    /// The cursor enters the key as its full token, so two positions on the
    /// same id with different ordering values never share an entry.
    fn cache_key(&self) -> String {
        let cursor = self.cursor.as_ref().map(Cursor::encode);
        page_key(self.category.as_deref(), self.sort_by.as_str(), cursor.as_deref(), self.page_size)
    }
}

/// One page of websites plus the cursor to continue after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebsitePage {
    pub websites: Vec<Website>,
    /// Position of the last record the store returned, before category filtering.
    /// `None` when the store returned nothing.
    pub last_cursor: Option<Cursor>,
}

impl GalleryService {
    /// Fetch one page of websites.
    ///
    /// The category filter runs after the store has applied `page_size`, so a
    /// filtered page can hold fewer than `page_size` websites (or none) while
    /// later pages still contain matches. Store failures yield an empty page.
    pub async fn get_page(&self, request: &PageRequest) -> WebsitePage {
        match self.load_page(request).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    sort_by = %request.sort_by,
                    category = ?request.category,
                    error = %e,
                    "failed to fetch websites page"
                );
                WebsitePage::default()
            }
        }
    }

    /// Every website, newest first.
    pub async fn all_websites(&self) -> Vec<Website> {
        self.get_page(&PageRequest::default()).await.websites
    }

    /// Cached page lookup that reports store failures. Failed pages are not cached.
    pub(crate) async fn load_page(&self, request: &PageRequest) -> Result<WebsitePage, Error> {
        let key = request.cache_key();
        if let Some(page) = self.inner.pages.get(&key) {
            tracing::debug!(key = %key, "page cache hit");
            return Ok(page);
        }

        let page = self.fetch_page(request).await?;
        tracing::debug!(key = %key, websites = page.websites.len(), "page cache miss");
        self.inner.pages.set(key, page.clone());
        Ok(page)
    }

    async fn fetch_page(&self, request: &PageRequest) -> Result<WebsitePage, Error> {
        let field = request.sort_by.order_field();
        let query = Query::ordered_by(field)
            .start_after(request.cursor.clone())
            .limit(request.page_size);

        let docs = self.inner.store.query(&query).await?;
        let last_cursor = docs.last().and_then(|doc| Cursor::from_document(doc, field));

        let mut websites: Vec<Website> = docs.iter().map(map_website).collect();
        if let Some(category) = &request.category {
            websites.retain(|site| has_category(site, category));
        }
        request.sort_by.sort(&mut websites);

        Ok(WebsitePage { websites, last_cursor })
    }
}
