//! Cache key composition for read-through lookups.

/// Fixed key under which aggregated category counts are cached.
pub const CATEGORY_COUNTS_KEY: &str = "category-counts";

/// Compose the cache key for one page of websites.
///
/// Absent inputs are replaced by sentinels so that every combination of
/// category, sort mode, cursor and page size maps to a distinct key. A
/// category is always written with a `cat:` prefix, so no category string can
/// collide with the unfiltered `all` slot.
pub fn page_key(category: Option<&str>, sort_by: &str, cursor: Option<&str>, page_size: Option<usize>) -> String {
    let category = category.map_or_else(|| "all".to_string(), |c| format!("cat:{c}"));
    let size = page_size.map_or_else(|| "all".to_string(), |n| n.to_string());
    format!("websites-{}-{}-{}-{}", category, sort_by, cursor.unwrap_or("first"), size)
}

/// Compose the cache key for a single website.
pub fn website_key(id: &str) -> String {
    format!("website-{id}")
}
