//! Store-assigned document ids.

use std::sync::atomic::{AtomicU64, Ordering};

use sha2::{Digest, Sha256};

/// Length of a generated id, in hex characters.
pub const ID_LEN: usize = 20;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Compute a document id from its identifying fields and an insertion nonce.
pub fn compute_document_id(name: &str, url: &str, nonce: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(b"\n");
    hasher.update(url.as_bytes());
    hasher.update(b"\n");
    hasher.update(nonce.as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_LEN);
    id
}

/// Generate a fresh id for a document being inserted now.
pub fn generate_id(name: &str, url: &str) -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nonce = format!("{}-{seq}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default());
    compute_document_id(name, url, &nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_stability() {
        let id1 = compute_document_id("Site", "https://example.com", "1");
        let id2 = compute_document_id("Site", "https://example.com", "1");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_id_different_nonce() {
        let id1 = compute_document_id("Site", "https://example.com", "1");
        let id2 = compute_document_id("Site", "https://example.com", "2");
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_format() {
        let id = compute_document_id("Site", "https://example.com", "1");
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_id("Site", "https://example.com");
        let b = generate_id("Site", "https://example.com");
        assert_ne!(a, b);
    }
}
