//! Achievement Model
//!
//! A one-time unlockable milestone. Definitions and unlock predicates live
//! in the achievement catalog service; this is the unlocked record kept on
//! the user profile.

use serde::{Deserialize, Serialize};

/// An unlocked achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    /// Unlock time in epoch milliseconds
    pub unlocked_at: i64,
}
