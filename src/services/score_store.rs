//! Score Store
//!
//! Owns the category scores and the activity log. Applies direct impacts and
//! the damped secondary impacts from the interconnection table, and exposes
//! the derived read views (overall score, per-category progress, weekly
//! improvement).
//!
//! Recording never errors: impact entries naming unknown categories are
//! dropped silently.

use uuid::Uuid;

use crate::models::activity::{Activity, ActivityInput};
use crate::models::category::{Category, CategoryScoreSet};
use crate::services::interconnection::{secondary_deltas, SECONDARY_WEIGHT};
use crate::utils::time;

/// Maximum retained activity log entries; oldest are evicted
pub const ACTIVITY_LOG_CAP: usize = 100;

/// Store for category scores and the activity log (most-recent-first)
#[derive(Debug, Clone)]
pub struct ScoreStore {
    scores: CategoryScoreSet,
    activities: Vec<Activity>,
}

impl ScoreStore {
    /// Create a store with the initial score snapshot and an empty log
    pub fn new() -> Self {
        Self {
            scores: CategoryScoreSet::initial(),
            activities: Vec::new(),
        }
    }

    /// Rebuild a store from persisted parts, restoring invariants
    /// (every category present, log capped)
    pub fn from_parts(mut scores: CategoryScoreSet, mut activities: Vec<Activity>) -> Self {
        scores.fill_missing();
        activities.truncate(ACTIVITY_LOG_CAP);
        Self { scores, activities }
    }

    /// Record an activity: apply its direct impact, then the half-weight
    /// secondary impact for its type, then prepend it to the log.
    ///
    /// The secondary pass compounds on the already-updated values; near the
    /// clamp boundaries this differs from applying both against one baseline,
    /// and the sequential order is the contract.
    pub fn record_activity(&mut self, input: ActivityInput, now_ms: i64) -> Activity {
        for (key, delta) in &input.impact {
            if let Some(category) = Category::from_key(key) {
                self.scores.apply_delta(category, *delta);
            }
        }
        for (category, delta) in secondary_deltas(&input.kind) {
            self.scores.apply_delta(*category, delta * SECONDARY_WEIGHT);
        }

        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            category_id: input.category_id,
            kind: input.kind,
            title: input.title,
            impact: input.impact,
            timestamp: now_ms,
            value: input.value,
        };
        self.activities.insert(0, activity.clone());
        self.activities.truncate(ACTIVITY_LOG_CAP);
        activity
    }

    /// Current scores
    pub fn scores(&self) -> &CategoryScoreSet {
        &self.scores
    }

    /// Activity log, most-recent-first
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// The `limit` most recent activities
    pub fn recent_activities(&self, limit: usize) -> &[Activity] {
        &self.activities[..limit.min(self.activities.len())]
    }

    /// Rounded mean of all category scores
    pub fn overall_score(&self) -> i64 {
        self.scores.average().round() as i64
    }

    /// Current score for a category key, or 0 for an unknown key
    pub fn category_progress(&self, category_id: &str) -> f64 {
        Category::from_key(category_id)
            .map(|c| self.scores.get(c))
            .unwrap_or(0.0)
    }

    /// Sum of declared direct impact on a category over the trailing
    /// 7x24h window.
    ///
    /// Counts activities whose category matches or whose impact names the
    /// category. Secondary (interconnected) contributions and clamping are
    /// excluded, so this approximates rather than measures true score
    /// movement.
    pub fn weekly_improvement(&self, category_id: &str, now_ms: i64) -> f64 {
        let cutoff = now_ms - time::WEEK_MS;
        self.activities
            .iter()
            .filter(|a| a.timestamp >= cutoff)
            .filter(|a| a.category_id == category_id || a.impact.contains_key(category_id))
            .map(|a| a.impact.get(category_id).copied().unwrap_or(0.0))
            .sum()
    }

    /// Replace scores with the initial snapshot and clear the log.
    /// Irreversible within a session.
    pub fn reset(&mut self) {
        self.scores = CategoryScoreSet::initial();
        self.activities.clear();
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn exercise_input(delta: f64) -> ActivityInput {
        ActivityInput::single("fitness", "exercise", "Workout", delta)
    }

    #[test]
    fn test_direct_impact_applied() {
        let mut store = ScoreStore::new();
        store.record_activity(exercise_input(3.0), NOW);
        assert_eq!(store.category_progress("fitness"), 73.0);
    }

    #[test]
    fn test_secondary_impact_damped() {
        let mut store = ScoreStore::new();
        let health = store.category_progress("health");
        let energy = store.category_progress("energy");
        let confidence = store.category_progress("confidence");
        let mindfulness = store.category_progress("mindfulness");

        store.record_activity(exercise_input(3.0), NOW);

        assert_eq!(store.category_progress("health"), health + 1.0);
        assert_eq!(store.category_progress("energy"), energy + 1.0);
        assert_eq!(store.category_progress("confidence"), confidence + 0.5);
        assert_eq!(store.category_progress("mindfulness"), mindfulness + 0.5);
    }

    #[test]
    fn test_unknown_impact_keys_ignored() {
        let mut store = ScoreStore::new();
        let mut input = exercise_input(3.0);
        input.impact.insert("chakra".to_string(), 50.0);
        let before = store.overall_score();
        store.record_activity(input, NOW);
        // Known deltas land, the unknown key changes nothing and nothing errors
        assert!(store.overall_score() >= before);
        assert_eq!(store.category_progress("chakra"), 0.0);
    }

    #[test]
    fn test_scores_stay_clamped_under_repeated_impact() {
        let mut store = ScoreStore::new();
        for i in 0..80 {
            store.record_activity(exercise_input(10.0), NOW + i);
        }
        for category in Category::ALL {
            let score = store.scores().get(category);
            assert!((0.0..=100.0).contains(&score), "{category} = {score}");
        }
        assert_eq!(store.category_progress("fitness"), 100.0);
    }

    #[test]
    fn test_log_capped_at_100_most_recent() {
        let mut store = ScoreStore::new();
        for i in 0..150 {
            let mut input = exercise_input(0.0);
            input.title = format!("Workout {i}");
            store.record_activity(input, NOW + i);
        }
        assert_eq!(store.activities().len(), ACTIVITY_LOG_CAP);
        // Most-recent-first: entry 149 leads, entry 50 is last
        assert_eq!(store.activities()[0].title, "Workout 149");
        assert_eq!(store.activities()[99].title, "Workout 50");
    }

    #[test]
    fn test_weekly_improvement_window() {
        let mut store = ScoreStore::new();
        let eight_days_ago = NOW - 8 * 24 * 60 * 60 * 1000;
        let six_days_ago = NOW - 6 * 24 * 60 * 60 * 1000;
        store.record_activity(exercise_input(5.0), eight_days_ago);
        store.record_activity(exercise_input(3.0), six_days_ago);

        assert_eq!(store.weekly_improvement("fitness", NOW), 3.0);
    }

    #[test]
    fn test_weekly_improvement_excludes_secondary_contribution() {
        let mut store = ScoreStore::new();
        // Exercise nudges health through the table, but declares no direct
        // health impact; the weekly sum must not see the nudge.
        store.record_activity(exercise_input(3.0), NOW);
        assert_eq!(store.weekly_improvement("health", NOW), 0.0);
    }

    #[test]
    fn test_weekly_improvement_matches_by_impact_key_too() {
        let mut store = ScoreStore::new();
        let mut input = ActivityInput::single("health", "health", "Sleep early", 2.0);
        input.impact.insert("energy".to_string(), 1.5);
        store.record_activity(input, NOW);

        // categoryId differs but the impact names energy directly
        assert_eq!(store.weekly_improvement("energy", NOW), 1.5);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut store = ScoreStore::new();
        for i in 0..20 {
            store.record_activity(exercise_input(4.0), NOW + i);
        }
        store.reset();
        assert_eq!(store.scores(), &CategoryScoreSet::initial());
        assert!(store.activities().is_empty());
    }

    #[test]
    fn test_overall_score_rounds_mean() {
        let store = ScoreStore::new();
        let expected = CategoryScoreSet::initial().average().round() as i64;
        assert_eq!(store.overall_score(), expected);
    }

    #[test]
    fn test_from_parts_restores_invariants() {
        let scores: CategoryScoreSet = serde_json::from_str(r#"{"health": 30.0}"#).unwrap();
        let store = ScoreStore::from_parts(scores, Vec::new());
        assert_eq!(store.category_progress("health"), 30.0);
        assert_eq!(store.category_progress("fitness"), 70.0);
    }
}
