//! Application State
//!
//! Composition point for the two stores. Holds both behind async RwLocks and
//! runs the full record-activity sequence under both write locks, so no other
//! recording can interleave with the streak and achievement steps.
//!
//! Persistence is fire-and-forget: after each change a blocking task mirrors
//! the stores to disk. The task reads the live store at write time, so a
//! delayed writer can never clobber newer state, and a failed write never
//! rolls anything back.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::activity::{Activity, ActivityInput};
use crate::models::profile::{PreferencesUpdate, ProfileUpdate, UserProfile};
use crate::services::coordinator::{self, RecordOutcome};
use crate::services::profile_store::ProfileStore;
use crate::services::score_store::ScoreStore;
use crate::storage::{KvStore, SnapshotService};
use crate::utils::error::AppResult;
use crate::utils::time;

/// Shared application state: both stores plus snapshot persistence
pub struct AppState {
    scores: Arc<RwLock<ScoreStore>>,
    profile: Arc<RwLock<ProfileStore>>,
    snapshots: Arc<SnapshotService>,
}

impl AppState {
    /// Create state backed by the default application directory,
    /// restoring any persisted snapshots
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_store(KvStore::new()?))
    }

    /// Create state backed by an explicit key-value store
    pub fn with_store(kv: KvStore) -> Self {
        let snapshots = SnapshotService::new(kv);
        let scores = snapshots.load_score_store();
        let profile = snapshots.load_profile_store();
        Self {
            scores: Arc::new(RwLock::new(scores)),
            profile: Arc::new(RwLock::new(profile)),
            snapshots: Arc::new(snapshots),
        }
    }

    /// Record an activity and run the full coordinator sequence atomically
    pub async fn record_activity(&self, input: ActivityInput) -> RecordOutcome {
        self.record_activity_at(input, time::now_ms()).await
    }

    /// Record an activity at an explicit timestamp
    pub async fn record_activity_at(&self, input: ActivityInput, now_ms: i64) -> RecordOutcome {
        let outcome = {
            let mut scores = self.scores.write().await;
            let mut profile = self.profile.write().await;
            // No await between here and the end of the sequence; the streak
            // rule reads the log and stats written moments earlier
            coordinator::record_activity_at(&mut scores, Some(&mut profile), input, now_ms)
        };
        self.persist_scores();
        self.persist_profile();
        outcome
    }

    /// Sign in, replacing any prior local profile
    pub async fn sign_in(&self, name: impl Into<String>, email: impl Into<String>) -> UserProfile {
        let result = {
            let mut profile = self.profile.write().await;
            profile.sign_in(name, email, time::now_ms()).clone()
        };
        self.persist_profile();
        result
    }

    /// Sign out and drop the persisted profile blobs
    pub async fn sign_out(&self) {
        {
            let mut profile = self.profile.write().await;
            profile.sign_out();
        }
        self.snapshots.clear_profile();
    }

    /// Shallow-merge an identity update
    pub async fn update_profile(&self, update: ProfileUpdate) {
        {
            let mut profile = self.profile.write().await;
            profile.update_profile(update);
        }
        self.persist_profile();
    }

    /// Shallow-merge a preferences update
    pub async fn update_preferences(&self, update: PreferencesUpdate) {
        {
            let mut profile = self.profile.write().await;
            profile.update_preferences(update);
        }
        self.persist_profile();
    }

    /// Reset scores to the initial snapshot and clear the activity log
    pub async fn reset_scores(&self) {
        {
            let mut scores = self.scores.write().await;
            scores.reset();
        }
        self.persist_scores();
    }

    /// Rounded mean of all category scores
    pub async fn overall_score(&self) -> i64 {
        self.scores.read().await.overall_score()
    }

    /// Current score for a category key, or 0 for an unknown key
    pub async fn category_progress(&self, category_id: &str) -> f64 {
        self.scores.read().await.category_progress(category_id)
    }

    /// Direct-impact sum for a category over the trailing week
    pub async fn weekly_improvement(&self, category_id: &str) -> f64 {
        self.scores
            .read()
            .await
            .weekly_improvement(category_id, time::now_ms())
    }

    /// The `limit` most recent activities
    pub async fn recent_activities(&self, limit: usize) -> Vec<Activity> {
        self.scores.read().await.recent_activities(limit).to_vec()
    }

    /// Snapshot of the current profile
    pub async fn profile(&self) -> UserProfile {
        self.profile.read().await.profile().clone()
    }

    /// Whether a user is signed in
    pub async fn is_authenticated(&self) -> bool {
        self.profile.read().await.is_authenticated()
    }

    /// Write both snapshots and wait for them; for shutdown paths and tests
    pub async fn flush(&self) {
        let scores = Arc::clone(&self.scores);
        let profile = Arc::clone(&self.profile);
        let snapshots = Arc::clone(&self.snapshots);
        let join = tokio::task::spawn_blocking(move || {
            snapshots.save_score_store(&scores.blocking_read());
            snapshots.save_profile_store(&profile.blocking_read());
        })
        .await;
        if let Err(err) = join {
            tracing::warn!(error = %err, "snapshot flush task failed");
        }
    }

    fn persist_scores(&self) {
        let scores = Arc::clone(&self.scores);
        let snapshots = Arc::clone(&self.snapshots);
        tokio::task::spawn_blocking(move || {
            snapshots.save_score_store(&scores.blocking_read());
        });
    }

    fn persist_profile(&self) {
        let profile = Arc::clone(&self.profile);
        let snapshots = Arc::clone(&self.snapshots);
        tokio::task::spawn_blocking(move || {
            snapshots.save_profile_store(&profile.blocking_read());
        });
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish()
    }
}
