//! Achievement Catalog
//!
//! The fixed set of unlockable milestones and their predicates, evaluated
//! uniformly over a table. Evaluation is pure: it reports which entries
//! newly qualify and never touches profile state, which keeps the predicate
//! logic testable without a store.

use crate::models::achievement::Achievement;
use crate::models::category::{Category, CategoryScoreSet};

/// Inputs an unlock predicate may inspect
#[derive(Debug, Clone, Copy)]
pub struct UnlockContext<'a> {
    pub activity_count: u64,
    pub scores: &'a CategoryScoreSet,
    pub streak: u32,
}

/// A catalog entry: static metadata plus its unlock predicate
struct AchievementDef {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    category: &'static str,
    qualifies: fn(&UnlockContext) -> bool,
}

/// The fixed catalog. Entries are never re-evaluated once unlocked.
const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "first_activity",
        title: "First Step",
        description: "Log your first activity",
        icon: "🎯",
        category: "milestone",
        qualifies: |ctx| ctx.activity_count >= 1,
    },
    AchievementDef {
        id: "ten_activities",
        title: "Finding a Rhythm",
        description: "Log 10 activities",
        icon: "🔟",
        category: "milestone",
        qualifies: |ctx| ctx.activity_count >= 10,
    },
    AchievementDef {
        id: "hundred_activities",
        title: "Century Club",
        description: "Log 100 activities",
        icon: "💯",
        category: "milestone",
        qualifies: |ctx| ctx.activity_count >= 100,
    },
    AchievementDef {
        id: "streak_3",
        title: "Warming Up",
        description: "Keep a 3-day streak",
        icon: "✨",
        category: "streak",
        qualifies: |ctx| ctx.streak >= 3,
    },
    AchievementDef {
        id: "week_streak",
        title: "Week Warrior",
        description: "Keep a 7-day streak",
        icon: "🔥",
        category: "streak",
        qualifies: |ctx| ctx.streak >= 7,
    },
    AchievementDef {
        id: "month_streak",
        title: "Habit Formed",
        description: "Keep a 30-day streak",
        icon: "🏆",
        category: "streak",
        qualifies: |ctx| ctx.streak >= 30,
    },
    AchievementDef {
        id: "health_master",
        title: "Health Master",
        description: "Reach a health score of 90",
        icon: "❤️",
        category: "mastery",
        qualifies: |ctx| ctx.scores.get(Category::Health) >= 90.0,
    },
    AchievementDef {
        id: "fitness_master",
        title: "Fitness Master",
        description: "Reach a fitness score of 90",
        icon: "💪",
        category: "mastery",
        qualifies: |ctx| ctx.scores.get(Category::Fitness) >= 90.0,
    },
    AchievementDef {
        id: "wealth_master",
        title: "Wealth Master",
        description: "Reach a wealth score of 90",
        icon: "💰",
        category: "mastery",
        qualifies: |ctx| ctx.scores.get(Category::Wealth) >= 90.0,
    },
    AchievementDef {
        id: "learning_master",
        title: "Learning Master",
        description: "Reach a learning score of 90",
        icon: "📚",
        category: "mastery",
        qualifies: |ctx| ctx.scores.get(Category::Learning) >= 90.0,
    },
    AchievementDef {
        id: "mindfulness_master",
        title: "Mindfulness Master",
        description: "Reach a mindfulness score of 90",
        icon: "🧘",
        category: "mastery",
        qualifies: |ctx| ctx.scores.get(Category::Mindfulness) >= 90.0,
    },
    AchievementDef {
        id: "all_categories",
        title: "Renaissance",
        description: "Hold a score above zero in 10 life areas",
        icon: "🌈",
        category: "mastery",
        qualifies: |ctx| ctx.scores.non_zero_count() >= 10,
    },
];

/// Evaluate the catalog against `ctx`, skipping ids in `already_unlocked`.
/// Returns the newly-qualifying achievements stamped with `now_ms`.
pub fn newly_unlocked(
    ctx: &UnlockContext,
    already_unlocked: &[Achievement],
    now_ms: i64,
) -> Vec<Achievement> {
    CATALOG
        .iter()
        .filter(|def| !already_unlocked.iter().any(|a| a.id == def.id))
        .filter(|def| (def.qualifies)(ctx))
        .map(|def| Achievement {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            category: def.category.to_string(),
            unlocked_at: now_ms,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn ctx(activity_count: u64, scores: &CategoryScoreSet, streak: u32) -> UnlockContext<'_> {
        UnlockContext {
            activity_count,
            scores,
            streak,
        }
    }

    #[test]
    fn test_catalog_has_twelve_entries() {
        assert_eq!(CATALOG.len(), 12);
    }

    #[test]
    fn test_first_activity_unlocks_at_one() {
        let scores = CategoryScoreSet::initial();
        let unlocked = newly_unlocked(&ctx(1, &scores, 1), &[], NOW);
        assert!(unlocked.iter().any(|a| a.id == "first_activity"));
        assert!(unlocked.iter().all(|a| a.unlocked_at == NOW));
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let scores = CategoryScoreSet::initial();
        let first = newly_unlocked(&ctx(1, &scores, 1), &[], NOW);
        assert!(!first.is_empty());

        // Same inputs, with the first batch already unlocked: nothing new
        let second = newly_unlocked(&ctx(1, &scores, 1), &first, NOW);
        assert!(second.is_empty());

        // Growing inputs never re-return an unlocked id
        let third = newly_unlocked(&ctx(50, &scores, 5), &first, NOW);
        for a in &third {
            assert!(!first.iter().any(|f| f.id == a.id));
        }
    }

    #[test]
    fn test_streak_thresholds() {
        let scores = CategoryScoreSet::initial();
        let at_seven = newly_unlocked(&ctx(1, &scores, 7), &[], NOW);
        assert!(at_seven.iter().any(|a| a.id == "streak_3"));
        assert!(at_seven.iter().any(|a| a.id == "week_streak"));
        assert!(!at_seven.iter().any(|a| a.id == "month_streak"));

        let at_thirty = newly_unlocked(&ctx(1, &scores, 30), &[], NOW);
        assert!(at_thirty.iter().any(|a| a.id == "month_streak"));
    }

    #[test]
    fn test_mastery_at_ninety() {
        let mut scores = CategoryScoreSet::initial();
        let below = newly_unlocked(&ctx(1, &scores, 0), &[], NOW);
        assert!(!below.iter().any(|a| a.id == "fitness_master"));

        scores.apply_delta(Category::Fitness, 25.0); // 70 -> 95
        let above = newly_unlocked(&ctx(1, &scores, 0), &[], NOW);
        assert!(above.iter().any(|a| a.id == "fitness_master"));
    }

    #[test]
    fn test_all_categories_counts_non_zero_scores() {
        // The initial snapshot populates every category, so the breadth
        // entry qualifies from the first evaluation
        let scores = CategoryScoreSet::initial();
        let unlocked = newly_unlocked(&ctx(1, &scores, 0), &[], NOW);
        assert!(unlocked.iter().any(|a| a.id == "all_categories"));
    }

    #[test]
    fn test_hundred_activities() {
        let scores = CategoryScoreSet::initial();
        let at_99 = newly_unlocked(&ctx(99, &scores, 0), &[], NOW);
        assert!(!at_99.iter().any(|a| a.id == "hundred_activities"));
        let at_100 = newly_unlocked(&ctx(100, &scores, 0), &[], NOW);
        assert!(at_100.iter().any(|a| a.id == "hundred_activities"));
    }
}
