//! User Profile Models
//!
//! Identity, preferences, cumulative stats, and unlocked achievements for
//! the signed-in user, plus the partial-update payloads used by the stores.
//! Updates are shallow merges; callers are trusted.

use serde::{Deserialize, Serialize};

use crate::models::achievement::Achievement;

/// User-adjustable preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub notifications: bool,
    pub weekly_report: bool,
    /// Daily reminder time as "HH:MM", if enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    /// UI theme: "light", "dark", or "system"
    pub theme: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            notifications: true,
            weekly_report: true,
            reminder_time: None,
            theme: "system".to_string(),
        }
    }
}

/// Preferences update request (partial update)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub notifications: Option<bool>,
    pub weekly_report: Option<bool>,
    pub reminder_time: Option<String>,
    pub theme: Option<String>,
}

impl UserPreferences {
    /// Apply a partial update
    pub fn apply_update(&mut self, update: PreferencesUpdate) {
        if let Some(notifications) = update.notifications {
            self.notifications = notifications;
        }
        if let Some(weekly_report) = update.weekly_report {
            self.weekly_report = weekly_report;
        }
        if let Some(reminder_time) = update.reminder_time {
            self.reminder_time = Some(reminder_time);
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
    }
}

/// Cumulative user statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_activities: u64,
    /// Consecutive calendar days with at least one activity
    pub current_streak: u32,
    pub longest_streak: u32,
    pub achievements_unlocked: u32,
    pub goals_completed: u32,
}

/// Stats update request (partial update)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsUpdate {
    pub total_activities: Option<u64>,
    pub current_streak: Option<u32>,
    pub longest_streak: Option<u32>,
    pub achievements_unlocked: Option<u32>,
    pub goals_completed: Option<u32>,
}

impl UserStats {
    /// Apply a partial update
    pub fn apply_update(&mut self, update: StatsUpdate) {
        if let Some(total) = update.total_activities {
            self.total_activities = total;
        }
        if let Some(current) = update.current_streak {
            self.current_streak = current;
        }
        if let Some(longest) = update.longest_streak {
            self.longest_streak = longest;
        }
        if let Some(unlocked) = update.achievements_unlocked {
            self.achievements_unlocked = unlocked;
        }
        if let Some(goals) = update.goals_completed {
            self.goals_completed = goals;
        }
    }
}

/// The signed-in user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Sign-in time in epoch milliseconds
    pub join_date: i64,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Identity update request (partial update)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserProfile {
    /// Create a fresh profile at sign-in: default preferences, zeroed stats,
    /// no achievements
    pub fn new(name: impl Into<String>, email: impl Into<String>, now_ms: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            join_date: now_ms,
            preferences: UserPreferences::default(),
            stats: UserStats::default(),
            achievements: Vec::new(),
        }
    }

    /// Apply a partial identity update
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}
