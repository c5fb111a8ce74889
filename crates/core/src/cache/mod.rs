//! Process-local read-through cache.
//!
//! Every read operation of the gallery service consults a [`TtlCache`] before
//! touching the document store. Freshness is best-effort: a value may be up to
//! one TTL stale, and nothing is shared between processes.

pub mod key;
pub mod ttl;

pub use ttl::{DEFAULT_TTL, TtlCache};
