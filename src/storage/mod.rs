//! Storage Layer
//!
//! Local JSON key-value snapshots. Persistence is a best-effort mirror of
//! the in-memory stores, never the source of truth.

pub mod kv;
pub mod snapshot;

pub use kv::{keys, KvStore};
pub use snapshot::SnapshotService;
