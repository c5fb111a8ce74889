//! Seed files: JSON arrays of website objects imported into a store.
//!
//! ```json
//! [{ "id": "w1", "name": "Acme", "categories": ["SaaS"], "uploadedAt": "2024-01-01T00:00:00Z" }]
//! ```

use std::path::Path;

use super::document::{from_plain, parse_timestamp};
use super::{Document, DocumentStore, FieldValue};
use crate::Error;

/// Top-level keys whose RFC 3339 string values are stored as timestamps.
const TIMESTAMP_KEYS: &[&str] = &["uploadedAt", "updatedAt", "lastViewed"];

/// Parse seed JSON into documents.
///
/// `id` is optional; documents without one get a store-assigned id on insert.
pub fn parse_seed(json: &str) -> Result<Vec<Document>, Error> {
    let entries: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(json).map_err(|e| Error::Seed(format!("invalid seed JSON: {e}")))?;

    Ok(entries.into_iter().map(document_from_object).collect())
}

fn document_from_object(mut object: serde_json::Map<String, serde_json::Value>) -> Document {
    let id = match object.remove("id") {
        Some(serde_json::Value::String(id)) => id,
        _ => String::new(),
    };

    let mut doc = Document::new(id);
    for (key, value) in object {
        let field = match value {
            serde_json::Value::String(raw) if TIMESTAMP_KEYS.contains(&key.as_str()) => match parse_timestamp(&raw) {
                Some(ts) => FieldValue::Timestamp(ts),
                None => FieldValue::String(raw),
            },
            other => from_plain(other),
        };
        doc.fields.insert(key, field);
    }
    doc
}

/// Read and parse a seed file.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Document>, Error> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::Seed(format!("{}: {e}", path.display())))?;
    parse_seed(&json)
}

/// Insert every seed document into `store`, returning how many were written.
pub async fn import(store: &dyn DocumentStore, docs: Vec<Document>) -> Result<usize, Error> {
    let mut written = 0;
    for doc in docs {
        store.insert(doc).await?;
        written += 1;
    }
    tracing::info!(written, "imported seed documents");
    Ok(written)
}
