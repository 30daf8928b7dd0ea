//! LifeTrack Core
//!
//! Core state engine for the LifeTrack life-tracking app. It provides:
//! - The score store: 14 bounded life-area scores plus the activity log
//! - The static interconnection table driving damped secondary impacts
//! - The profile store: identity, preferences, stats, achievements
//! - The activity coordinator sequencing streaks and achievement unlocks
//! - JSON key-value snapshot persistence (best-effort, memory-authoritative)
//!
//! Screens, navigation, chat, and the remote auth backend live outside this
//! crate and talk to it through [`AppState`].

pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use models::{
    Achievement, Activity, ActivityInput, Category, CategoryScoreSet, PreferencesUpdate,
    ProfileUpdate, StatsUpdate, UserPreferences, UserProfile, UserStats,
};
pub use services::{ProfileStore, RecordOutcome, ScoreStore};
pub use state::AppState;
pub use storage::KvStore;
pub use utils::{AppError, AppResult};
