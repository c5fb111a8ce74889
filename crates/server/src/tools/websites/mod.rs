//! Website tools: listing, detail, navigation and view recording.

pub mod adjacent;
pub mod get;
pub mod list;
pub mod view;

use gallery_core::{Error, SortBy};

pub use adjacent::{WebsitesAdjacentParams, adjacent_impl};
pub use get::{WebsiteGetParams, get_impl};
pub use list::{WebsitesListParams, list_impl};
pub use view::{WebsiteViewParams, view_impl};

pub(crate) fn default_sort_by() -> String {
    SortBy::default().as_str().into()
}

pub(crate) fn parse_sort_by(raw: &str) -> Result<SortBy, Error> {
    raw.trim().to_lowercase().parse()
}
