//! Services
//!
//! Business logic: the two state stores, the static interconnection table,
//! the achievement catalog, and the coordinator that sequences them.

pub mod achievements;
pub mod coordinator;
pub mod interconnection;
pub mod profile_store;
pub mod score_store;

pub use coordinator::{record_activity, record_activity_at, RecordOutcome};
pub use profile_store::ProfileStore;
pub use score_store::{ScoreStore, ACTIVITY_LOG_CAP};
