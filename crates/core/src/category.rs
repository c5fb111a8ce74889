//! Category normalization and per-category counting.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::website::Website;

/// Canonical gallery categories, by display name.
pub const CATEGORIES: &[&str] = &[
    "AI",
    "Agency",
    "Blog",
    "Community",
    "Design",
    "Developer Tools",
    "E-commerce",
    "Education",
    "Finance",
    "Marketing",
    "Portfolio",
    "Productivity",
    "SaaS",
    "Startup",
];

/// Number of websites tagged with one canonical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
}

/// Canonical form used for every category comparison: trimmed and lower-cased.
pub fn normalize(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Whether `site` carries `category` under normalized comparison.
pub fn has_category(site: &Website, category: &str) -> bool {
    let wanted = normalize(category);
    site.categories.iter().any(|c| normalize(c) == wanted)
}

/// Count websites per canonical category.
///
/// Every canonical category appears exactly once, with zero if unused.
/// Categories outside the canonical list are ignored. The result is sorted
/// by display name.
pub fn count_categories<'a>(sites: impl IntoIterator<Item = &'a Website>) -> Vec<CategoryCount> {
    let lookup: HashMap<String, usize> = CATEGORIES.iter().enumerate().map(|(i, name)| (normalize(name), i)).collect();
    let mut counts = vec![0u64; CATEGORIES.len()];

    for site in sites {
        for category in &site.categories {
            if let Some(&slot) = lookup.get(&normalize(category)) {
                counts[slot] += 1;
            }
        }
    }

    let mut result: Vec<CategoryCount> = CATEGORIES
        .iter()
        .zip(counts)
        .map(|(name, count)| CategoryCount { name: (*name).to_string(), count })
        .collect();
    result.sort_by(|a, b| a.name.cmp(&b.name));
    result
}
