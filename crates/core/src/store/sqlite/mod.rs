//! SQLite document store.
//!
//! Documents live in a single `websites` table. The fields that queries order
//! or increment on (`views`, `uploadedAt`, `lastViewed`) are promoted to their
//! own columns; everything else is kept as a JSON-encoded field map.

pub mod connection;
pub mod documents;
pub mod migrations;

pub use connection::SqliteStore;
