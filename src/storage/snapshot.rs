//! State Snapshots
//!
//! Load/save of the persisted core-state blobs. In-memory state is the
//! source of truth for the session: reads that fail degrade to defaults and
//! writes are best-effort, logged on failure and never surfaced.

use crate::models::activity::Activity;
use crate::models::category::CategoryScoreSet;
use crate::models::profile::UserProfile;
use crate::services::profile_store::ProfileStore;
use crate::services::score_store::ScoreStore;
use crate::storage::kv::{keys, KvStore};

/// Snapshot persistence over the key-value store
#[derive(Debug, Clone)]
pub struct SnapshotService {
    kv: KvStore,
}

impl SnapshotService {
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    fn read_or<T: serde::de::DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.kv.get::<T>(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to load snapshot; using defaults");
                fallback
            }
        }
    }

    fn write(&self, key: &str, value: &impl serde::Serialize) {
        if let Err(err) = self.kv.set(key, value) {
            tracing::warn!(key, error = %err, "failed to persist snapshot");
        }
    }

    /// Restore the score store from the persisted blobs
    pub fn load_score_store(&self) -> ScoreStore {
        let scores = self.read_or(keys::CATEGORY_SCORES, CategoryScoreSet::initial());
        let activities = self.read_or::<Vec<Activity>>(keys::CATEGORY_ACTIVITIES, Vec::new());
        ScoreStore::from_parts(scores, activities)
    }

    /// Restore the profile store from the persisted blobs
    pub fn load_profile_store(&self) -> ProfileStore {
        let profile = self.read_or(keys::USER_PROFILE, UserProfile::default());
        let authenticated = self.read_or(keys::IS_AUTHENTICATED, false);
        ProfileStore::from_parts(profile, authenticated)
    }

    /// Persist the score store blobs
    pub fn save_score_store(&self, store: &ScoreStore) {
        self.write(keys::CATEGORY_SCORES, store.scores());
        self.write(keys::CATEGORY_ACTIVITIES, &store.activities());
    }

    /// Persist the profile store blobs
    pub fn save_profile_store(&self, store: &ProfileStore) {
        self.write(keys::USER_PROFILE, store.profile());
        self.write(keys::IS_AUTHENTICATED, &store.is_authenticated());
    }

    /// Drop the persisted profile blobs (sign-out)
    pub fn clear_profile(&self) {
        for key in [keys::USER_PROFILE, keys::IS_AUTHENTICATED] {
            if let Err(err) = self.kv.remove(key) {
                tracing::warn!(key, error = %err, "failed to clear snapshot");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityInput;

    fn service_at(dir: &std::path::Path) -> SnapshotService {
        SnapshotService::new(KvStore::at(dir).unwrap())
    }

    #[test]
    fn test_missing_blobs_yield_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let service = service_at(temp.path());

        let scores = service.load_score_store();
        assert_eq!(scores.scores(), &CategoryScoreSet::initial());
        assert!(scores.activities().is_empty());

        let profile = service.load_profile_store();
        assert!(!profile.is_authenticated());
    }

    #[test]
    fn test_corrupt_blob_degrades_to_defaults() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("categoryScores.json"), "{oops").unwrap();
        let service = service_at(temp.path());

        let scores = service.load_score_store();
        assert_eq!(scores.scores(), &CategoryScoreSet::initial());
    }

    #[test]
    fn test_score_store_round_trip() {
        let temp = tempfile::tempdir().unwrap();
        let service = service_at(temp.path());

        let mut store = ScoreStore::new();
        store.record_activity(
            ActivityInput::single("fitness", "exercise", "Run", 3.0),
            1_700_000_000_000,
        );
        service.save_score_store(&store);

        let restored = service.load_score_store();
        assert_eq!(restored.scores(), store.scores());
        assert_eq!(restored.activities(), store.activities());
    }

    #[test]
    fn test_profile_round_trip_and_clear() {
        let temp = tempfile::tempdir().unwrap();
        let service = service_at(temp.path());

        let mut store = ProfileStore::new();
        store.sign_in("Ada", "ada@example.com", 1_700_000_000_000);
        service.save_profile_store(&store);

        let restored = service.load_profile_store();
        assert!(restored.is_authenticated());
        assert_eq!(restored.profile().name, "Ada");

        service.clear_profile();
        let cleared = service.load_profile_store();
        assert!(!cleared.is_authenticated());
        assert!(cleared.profile().name.is_empty());
    }
}
