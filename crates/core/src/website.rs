//! The `Website` entity and the mapping from raw store documents.
//!
//! Mapping never fails: any field that is missing or has an unexpected shape
//! falls back to a default.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Document;
use crate::store::document::{iso8601, parse_timestamp, plain_fields};

/// Category reported for a website with no categories.
pub const UNCATEGORIZED: &str = "uncategorized";

const DEFAULT_NAME: &str = "Untitled";
const DEFAULT_URL: &str = "#";

/// A gallery entry as returned by list operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: String,
    pub name: String,
    pub video_url: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built_with: Option<String>,
    pub categories: Vec<String>,
    pub social_links: BTreeMap<String, String>,
    /// ISO-8601 upload time.
    pub uploaded_at: String,
    /// First entry of `categories`, or `"uncategorized"`.
    pub category: String,
    pub views: u64,
}

impl Website {
    /// Parsed upload time, if `uploaded_at` is valid RFC 3339.
    pub fn uploaded_at_ts(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.uploaded_at)
    }
}

/// A single website with the extra fields shown on its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteDetail {
    #[serde(flatten)]
    pub website: Website,
    pub description: String,
    pub tags: Vec<String>,
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_viewed: Option<String>,
}

/// Map a raw document into a [`Website`].
pub fn map_website(doc: &Document) -> Website {
    map_plain(&doc.id, &plain_fields(&doc.fields))
}

/// Map a raw document into a [`WebsiteDetail`].
pub fn map_website_detail(doc: &Document) -> WebsiteDetail {
    let data = plain_fields(&doc.fields);
    WebsiteDetail {
        website: map_plain(&doc.id, &data),
        description: string_field(&data, "description").unwrap_or_default(),
        tags: string_list(&data, "tags"),
        tech_stack: string_list(&data, "techStack"),
        last_viewed: string_field(&data, "lastViewed"),
    }
}

fn map_plain(id: &str, data: &Map<String, Value>) -> Website {
    let categories = string_list(data, "categories");
    let category = categories.first().cloned().unwrap_or_else(|| UNCATEGORIZED.to_string());

    Website {
        id: id.to_string(),
        name: string_field(data, "name").unwrap_or_else(|| DEFAULT_NAME.to_string()),
        video_url: string_field(data, "videoUrl").unwrap_or_default(),
        url: string_field(data, "url").unwrap_or_else(|| DEFAULT_URL.to_string()),
        built_with: string_field(data, "builtWith"),
        categories,
        social_links: string_map(data, "socialLinks"),
        uploaded_at: string_field(data, "uploadedAt").unwrap_or_else(|| iso8601(&Utc::now())),
        category,
        views: views(data),
    }
}

fn string_field(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(data: &Map<String, Value>, key: &str) -> Vec<String> {
    match data.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

fn string_map(data: &Map<String, Value>, key: &str) -> BTreeMap<String, String> {
    match data.get(key) {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn views(data: &Map<String, Value>) -> u64 {
    match data.get("views") {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FieldValue, Fields};
    use chrono::TimeZone;

    fn jan_first() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_map_full_document() {
        let mut social = Fields::new();
        social.insert("twitter".into(), "@acme".into());
        social.insert("github".into(), "acme".into());

        let doc = Document::new("w1")
            .with("name", "Acme")
            .with("videoUrl", "https://cdn.example.com/acme.mp4")
            .with("url", "https://acme.example.com")
            .with("builtWith", "Framer")
            .with("categories", vec!["SaaS", "AI"])
            .with("socialLinks", social)
            .with("uploadedAt", jan_first())
            .with("views", 5);

        let site = map_website(&doc);
        assert_eq!(site.id, "w1");
        assert_eq!(site.name, "Acme");
        assert_eq!(site.video_url, "https://cdn.example.com/acme.mp4");
        assert_eq!(site.built_with.as_deref(), Some("Framer"));
        assert_eq!(site.categories, vec!["SaaS", "AI"]);
        assert_eq!(site.category, "SaaS");
        assert_eq!(site.social_links.get("twitter").map(String::as_str), Some("@acme"));
        assert_eq!(site.uploaded_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(site.views, 5);
    }

    #[test]
    fn test_map_empty_document_uses_defaults() {
        let site = map_website(&Document::new("w0"));
        assert_eq!(site.name, "Untitled");
        assert_eq!(site.url, "#");
        assert_eq!(site.video_url, "");
        assert!(site.built_with.is_none());
        assert!(site.categories.is_empty());
        assert_eq!(site.category, UNCATEGORIZED);
        assert!(site.social_links.is_empty());
        assert_eq!(site.views, 0);
        assert!(site.uploaded_at_ts().is_some());
    }

    #[test]
    fn test_map_unexpected_shapes() {
        let doc = Document::new("w2")
            .with("name", 42)
            .with("categories", "SaaS")
            .with("socialLinks", vec!["@acme"])
            .with("views", -3);

        let site = map_website(&doc);
        assert_eq!(site.name, "Untitled");
        assert!(site.categories.is_empty());
        assert!(site.social_links.is_empty());
        assert_eq!(site.views, 0);
    }

    #[test]
    fn test_map_mixed_category_list_keeps_strings() {
        let doc = Document::new("w3").with(
            "categories",
            FieldValue::Array(vec![FieldValue::Integer(1), "Portfolio".into(), FieldValue::Null]),
        );
        let site = map_website(&doc);
        assert_eq!(site.categories, vec!["Portfolio"]);
        assert_eq!(site.category, "Portfolio");
    }

    #[test]
    fn test_map_float_views_truncates() {
        let site = map_website(&Document::new("w4").with("views", 7.9));
        assert_eq!(site.views, 7);
    }

    #[test]
    fn test_map_detail_defaults_and_timestamps() {
        let doc = Document::new("w1")
            .with("name", "Acme")
            .with("techStack", vec!["Rust", "Svelte"])
            .with("lastViewed", jan_first());

        let detail = map_website_detail(&doc);
        assert_eq!(detail.website.name, "Acme");
        assert_eq!(detail.description, "");
        assert!(detail.tags.is_empty());
        assert_eq!(detail.tech_stack, vec!["Rust", "Svelte"]);
        assert_eq!(detail.last_viewed.as_deref(), Some("2024-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_detail_serializes_flat_camel_case() {
        let detail = map_website_detail(&Document::new("w1").with("uploadedAt", jan_first()));
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], "w1");
        assert_eq!(json["uploadedAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["techStack"], serde_json::json!([]));
        assert!(json.get("builtWith").is_none());
    }
}
