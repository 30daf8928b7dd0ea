//! Profile Store
//!
//! Owns the signed-in user: identity, preferences, cumulative stats, and
//! unlocked achievements. Sign-in replaces the profile wholesale; partial
//! updates are shallow merges with no validation (callers are trusted).

use crate::models::achievement::Achievement;
use crate::models::category::CategoryScoreSet;
use crate::models::profile::{
    PreferencesUpdate, ProfileUpdate, StatsUpdate, UserProfile,
};
use crate::services::achievements::{self, UnlockContext};

/// Store for the local user profile and authentication flag
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: UserProfile,
    authenticated: bool,
}

impl ProfileStore {
    /// Create a signed-out store with a blank profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted parts
    pub fn from_parts(profile: UserProfile, authenticated: bool) -> Self {
        Self {
            profile,
            authenticated,
        }
    }

    /// The current profile
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Sign in: replace (never merge) any prior profile with a fresh one
    pub fn sign_in(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        now_ms: i64,
    ) -> &UserProfile {
        self.profile = UserProfile::new(name, email, now_ms);
        self.authenticated = true;
        &self.profile
    }

    /// Sign out: drop the profile and the authentication flag
    pub fn sign_out(&mut self) {
        self.profile = UserProfile::default();
        self.authenticated = false;
    }

    /// Shallow-merge an identity update
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.profile.apply_update(update);
    }

    /// Shallow-merge a preferences update
    pub fn update_preferences(&mut self, update: PreferencesUpdate) {
        self.profile.preferences.apply_update(update);
    }

    /// Shallow-merge a stats update
    pub fn update_stats(&mut self, update: StatsUpdate) {
        self.profile.stats.apply_update(update);
    }

    /// Pure evaluation: which catalog entries newly qualify for these
    /// counters. Does not mutate the profile; pair with [`apply_unlocks`].
    ///
    /// [`apply_unlocks`]: ProfileStore::apply_unlocks
    pub fn evaluate_achievements(
        &self,
        activity_count: u64,
        scores: &CategoryScoreSet,
        streak: u32,
        now_ms: i64,
    ) -> Vec<Achievement> {
        let ctx = UnlockContext {
            activity_count,
            scores,
            streak,
        };
        achievements::newly_unlocked(&ctx, &self.profile.achievements, now_ms)
    }

    /// Append newly-unlocked achievements and bump the unlock counter.
    /// Each achievement id unlocks at most once ever.
    pub fn apply_unlocks(&mut self, unlocked: Vec<Achievement>) {
        for achievement in unlocked {
            if self
                .profile
                .achievements
                .iter()
                .any(|a| a.id == achievement.id)
            {
                continue;
            }
            self.profile.achievements.push(achievement);
            self.profile.stats.achievements_unlocked += 1;
        }
    }
}
