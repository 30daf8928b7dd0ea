//! Category Model
//!
//! The closed set of tracked life areas and the bounded score set.
//! Scores are fractional (secondary impacts are half-weight) and clamped to
//! [0, 100] on every write; no rounding is applied on storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lower bound for every category score
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound for every category score
pub const SCORE_MAX: f64 = 100.0;

/// A tracked life area
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Health,
    Fitness,
    Wealth,
    Relationships,
    Confidence,
    Learning,
    Productivity,
    Mindfulness,
    Creativity,
    Energy,
    Lifestyle,
    BreakFree,
    Travel,
    Community,
}

impl Category {
    /// All categories, in wire order
    pub const ALL: [Category; 14] = [
        Category::Health,
        Category::Fitness,
        Category::Wealth,
        Category::Relationships,
        Category::Confidence,
        Category::Learning,
        Category::Productivity,
        Category::Mindfulness,
        Category::Creativity,
        Category::Energy,
        Category::Lifestyle,
        Category::BreakFree,
        Category::Travel,
        Category::Community,
    ];

    /// Wire/storage key for this category
    pub fn as_key(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Fitness => "fitness",
            Category::Wealth => "wealth",
            Category::Relationships => "relationships",
            Category::Confidence => "confidence",
            Category::Learning => "learning",
            Category::Productivity => "productivity",
            Category::Mindfulness => "mindfulness",
            Category::Creativity => "creativity",
            Category::Energy => "energy",
            Category::Lifestyle => "lifestyle",
            Category::BreakFree => "breakFree",
            Category::Travel => "travel",
            Category::Community => "community",
        }
    }

    /// Parse a wire key. Unknown keys yield None; callers drop them silently
    /// (forward compatibility with categories that may not exist yet).
    pub fn from_key(key: &str) -> Option<Category> {
        match key {
            "health" => Some(Category::Health),
            "fitness" => Some(Category::Fitness),
            "wealth" => Some(Category::Wealth),
            "relationships" => Some(Category::Relationships),
            "confidence" => Some(Category::Confidence),
            "learning" => Some(Category::Learning),
            "productivity" => Some(Category::Productivity),
            "mindfulness" => Some(Category::Mindfulness),
            "creativity" => Some(Category::Creativity),
            "energy" => Some(Category::Energy),
            "lifestyle" => Some(Category::Lifestyle),
            "breakFree" => Some(Category::BreakFree),
            "travel" => Some(Category::Travel),
            "community" => Some(Category::Community),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// Scores for every category. Every key is always present; values are
/// clamped to [0, 100] on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScoreSet {
    scores: BTreeMap<Category, f64>,
}

impl CategoryScoreSet {
    /// The fixed starting snapshot for a fresh user
    pub fn initial() -> Self {
        let mut scores = BTreeMap::new();
        scores.insert(Category::Health, 75.0);
        scores.insert(Category::Fitness, 70.0);
        scores.insert(Category::Wealth, 60.0);
        scores.insert(Category::Relationships, 65.0);
        scores.insert(Category::Confidence, 72.0);
        scores.insert(Category::Learning, 55.0);
        scores.insert(Category::Productivity, 68.0);
        scores.insert(Category::Mindfulness, 50.0);
        scores.insert(Category::Creativity, 45.0);
        scores.insert(Category::Energy, 76.0);
        scores.insert(Category::Lifestyle, 62.0);
        scores.insert(Category::BreakFree, 40.0);
        scores.insert(Category::Travel, 35.0);
        scores.insert(Category::Community, 48.0);
        Self { scores }
    }

    /// Current score for a category
    pub fn get(&self, category: Category) -> f64 {
        self.scores.get(&category).copied().unwrap_or(SCORE_MIN)
    }

    /// Add a delta to a category score, clamping the result to [0, 100]
    pub fn apply_delta(&mut self, category: Category, delta: f64) {
        let current = self.get(category);
        self.scores
            .insert(category, (current + delta).clamp(SCORE_MIN, SCORE_MAX));
    }

    /// Mean of all category scores
    pub fn average(&self) -> f64 {
        let total: f64 = Category::ALL.iter().map(|c| self.get(*c)).sum();
        total / Category::ALL.len() as f64
    }

    /// Number of categories with a score above zero
    pub fn non_zero_count(&self) -> usize {
        Category::ALL.iter().filter(|c| self.get(**c) > 0.0).count()
    }

    /// Restore the every-key-present invariant after deserialization,
    /// filling absent categories from the initial snapshot
    pub fn fill_missing(&mut self) {
        let initial = Self::initial();
        for category in Category::ALL {
            self.scores
                .entry(category)
                .or_insert_with(|| initial.get(category));
        }
    }
}

impl Default for CategoryScoreSet {
    fn default() -> Self {
        Self::initial()
    }
}
