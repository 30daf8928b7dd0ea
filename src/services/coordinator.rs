//! Activity Coordinator
//!
//! Cross-store sequencing for recording an activity: apply the impacts to
//! the score store, recompute the streak from the log as it exists after
//! insertion, push the stat updates, then evaluate and apply achievement
//! unlocks — all synchronously, as one unit of work. The order matters:
//! the streak rule reads the activity just written, and achievements are
//! evaluated exactly once per recorded activity.
//!
//! The profile store is an optional collaborator; when absent, the stat and
//! achievement steps are skipped and only the scores move.

use crate::models::achievement::Achievement;
use crate::models::activity::{Activity, ActivityInput};
use crate::models::profile::StatsUpdate;
use crate::services::profile_store::ProfileStore;
use crate::services::score_store::ScoreStore;
use crate::utils::time;

/// Result of one recorded activity
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub activity: Activity,
    /// Streak after this activity; 0 when no profile collaborator was given
    pub streak: u32,
    pub unlocked: Vec<Achievement>,
}

/// Record an activity now
pub fn record_activity(
    scores: &mut ScoreStore,
    profile: Option<&mut ProfileStore>,
    input: ActivityInput,
) -> RecordOutcome {
    record_activity_at(scores, profile, input, time::now_ms())
}

/// Record an activity at an explicit timestamp
pub fn record_activity_at(
    scores: &mut ScoreStore,
    profile: Option<&mut ProfileStore>,
    input: ActivityInput,
    now_ms: i64,
) -> RecordOutcome {
    let activity = scores.record_activity(input, now_ms);

    let Some(profile) = profile else {
        return RecordOutcome {
            activity,
            streak: 0,
            unlocked: Vec::new(),
        };
    };

    let new_count = profile.profile().stats.total_activities + 1;
    let streak = continued_streak(
        scores.activities(),
        profile.profile().stats.current_streak,
        now_ms,
    );
    let longest = profile.profile().stats.longest_streak.max(streak);
    profile.update_stats(StatsUpdate {
        total_activities: Some(new_count),
        current_streak: Some(streak),
        longest_streak: Some(longest),
        ..Default::default()
    });

    let unlocked = profile.evaluate_achievements(new_count, scores.scores(), streak, now_ms);
    if !unlocked.is_empty() {
        tracing::debug!(count = unlocked.len(), "achievements unlocked");
    }
    profile.apply_unlocks(unlocked.clone());

    RecordOutcome {
        activity,
        streak,
        unlocked,
    }
}

/// Streak continuation over the post-insert log. Only the first activity of
/// a local calendar day moves the streak: it extends it when yesterday had
/// activity and restarts it at 1 otherwise.
fn continued_streak(activities: &[Activity], current: u32, now_ms: i64) -> u32 {
    let today_start = time::day_start_ms(now_ms);
    let today_count = activities
        .iter()
        .filter(|a| a.timestamp >= today_start)
        .count();
    if today_count != 1 {
        return current;
    }

    let yesterday_start = time::day_start_ms(today_start - 1);
    let yesterday_count = activities
        .iter()
        .filter(|a| a.timestamp >= yesterday_start && a.timestamp < today_start)
        .count();
    if yesterday_count > 0 {
        current + 1
    } else {
        1
    }
}
