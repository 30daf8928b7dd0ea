//! Data Models
//!
//! Serde data structures shared across services and storage.

pub mod achievement;
pub mod activity;
pub mod category;
pub mod profile;

pub use achievement::Achievement;
pub use activity::{Activity, ActivityInput};
pub use category::{Category, CategoryScoreSet};
pub use profile::{
    PreferencesUpdate, ProfileUpdate, StatsUpdate, UserPreferences, UserProfile, UserStats,
};
