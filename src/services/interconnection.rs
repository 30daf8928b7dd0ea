//! Activity Interconnection Table
//!
//! Static domain knowledge: each activity type nudges categories beyond the
//! impact the caller declared. A workout is declared against fitness, but it
//! also lifts health, energy, confidence, and mindfulness. Secondary deltas
//! are applied at half weight on top of the direct impact.
//!
//! The table is not user-mutable at runtime. Unknown activity types have no
//! secondary effect.

use crate::models::category::Category;

/// Damping factor applied to every secondary delta
pub const SECONDARY_WEIGHT: f64 = 0.5;

/// Secondary score deltas for an activity type, before damping
pub fn secondary_deltas(kind: &str) -> &'static [(Category, f64)] {
    match kind {
        "exercise" => &[
            (Category::Health, 2.0),
            (Category::Energy, 2.0),
            (Category::Confidence, 1.0),
            (Category::Mindfulness, 1.0),
        ],
        "meditation" => &[
            (Category::Health, 1.0),
            (Category::Energy, 1.0),
            (Category::Confidence, 1.0),
            (Category::Productivity, 1.0),
        ],
        "learning" => &[
            (Category::Confidence, 2.0),
            (Category::Productivity, 1.0),
            (Category::Creativity, 1.0),
        ],
        "social" => &[
            (Category::Confidence, 2.0),
            (Category::Community, 1.0),
            (Category::Mindfulness, 1.0),
        ],
        "creative" => &[
            (Category::Confidence, 1.0),
            (Category::Mindfulness, 1.0),
            (Category::Learning, 1.0),
        ],
        "financial" => &[
            (Category::Confidence, 1.0),
            (Category::Lifestyle, 1.0),
            (Category::Productivity, 1.0),
        ],
        "productivity" => &[
            (Category::Confidence, 1.0),
            (Category::Learning, 1.0),
            (Category::Wealth, 1.0),
        ],
        "health" => &[
            (Category::Fitness, 2.0),
            (Category::Energy, 2.0),
            (Category::Mindfulness, 1.0),
        ],
        "breakHabit" => &[
            (Category::Health, 2.0),
            (Category::Confidence, 2.0),
            (Category::Mindfulness, 1.0),
        ],
        "lifestyle" => &[
            (Category::Energy, 1.0),
            (Category::Mindfulness, 1.0),
            (Category::Creativity, 1.0),
        ],
        "travel" => &[
            (Category::Creativity, 2.0),
            (Category::Mindfulness, 1.0),
            (Category::Community, 1.0),
        ],
        "community" => &[
            (Category::Relationships, 2.0),
            (Category::Confidence, 1.0),
            (Category::Mindfulness, 1.0),
        ],
        _ => &[],
    }
}
