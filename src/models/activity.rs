//! Activity Model
//!
//! A discrete user-logged event carrying a declared score impact.
//! Impact keys are plain strings so that entries referencing categories this
//! build does not know about can be carried through storage and ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An immutable logged activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub category_id: String,
    /// Activity type; keys the interconnection table
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// Direct score deltas declared by the caller, keyed by category
    pub impact: BTreeMap<String, f64>,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
    /// Optional quantity (reps, minutes, steps)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Caller-supplied payload for recording an activity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    pub category_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub impact: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl ActivityInput {
    /// Convenience constructor for a single-category impact
    pub fn single(
        category_id: impl Into<String>,
        kind: impl Into<String>,
        title: impl Into<String>,
        delta: f64,
    ) -> Self {
        let category_id = category_id.into();
        let mut impact = BTreeMap::new();
        impact.insert(category_id.clone(), delta);
        Self {
            category_id,
            kind: kind.into(),
            title: title.into(),
            impact,
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let activity = Activity {
            id: "a1".to_string(),
            category_id: "fitness".to_string(),
            kind: "exercise".to_string(),
            title: "Morning run".to_string(),
            impact: BTreeMap::from([("fitness".to_string(), 3.0)]),
            timestamp: 1_700_000_000_000,
            value: None,
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "exercise");
        assert_eq!(json["categoryId"], "fitness");
        assert_eq!(json["impact"]["fitness"], 3.0);
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_input_single() {
        let input = ActivityInput::single("health", "health", "Checkup", 2.0);
        assert_eq!(input.impact.get("health"), Some(&2.0));
        assert_eq!(input.category_id, "health");
    }
}
