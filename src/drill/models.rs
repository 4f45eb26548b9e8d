//! Data models for the drill session

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Which face of the current card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Question
    Front,
    /// Answer
    Back,
}

impl Default for Side {
    fn default() -> Self {
        Self::Front
    }
}

impl Side {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Outcome of grading a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Again,
    GotIt,
}

/// Mutable drill state, persisted as a single JSON record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Current shuffle, a permutation of deck indices
    #[serde(default)]
    pub order: Vec<usize>,
    /// Position within `order`
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub side: Side,
    #[serde(default)]
    pub seen_today: u32,
    #[serde(default)]
    pub correct_today: u32,
    #[serde(default)]
    pub streak: u32,
    /// Host-local date of the last activity or rollover check
    #[serde(default)]
    pub last_session_date: Option<NaiveDate>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            index: 0,
            side: Side::Front,
            seen_today: 0,
            correct_today: 0,
            streak: 0,
            last_session_date: None,
        }
    }
}

impl SessionState {
    /// Shallow-merge a persisted record over this state.
    ///
    /// Fields that are missing or fail to parse keep their current value,
    /// except `order`, which is cleared so it gets regenerated. Unknown
    /// fields are ignored.
    pub fn merge_persisted(&mut self, persisted: &Value) {
        let Some(obj) = persisted.as_object() else {
            log::warn!("Ignoring persisted drill state: not a JSON object");
            return;
        };

        if let Some(v) = obj.get("order") {
            match serde_json::from_value::<Vec<usize>>(v.clone()) {
                Ok(order) => self.order = order,
                Err(e) => {
                    log::warn!("Persisted shuffle order is malformed, regenerating: {}", e);
                    self.order.clear();
                }
            }
        }
        merge_field(obj, "index", &mut self.index);
        merge_field(obj, "side", &mut self.side);
        merge_field(obj, "seenToday", &mut self.seen_today);
        merge_field(obj, "correctToday", &mut self.correct_today);
        merge_field(obj, "streak", &mut self.streak);
        merge_field(obj, "lastSessionDate", &mut self.last_session_date);
    }

    /// Whether `order` is a permutation of `0..deck_size`
    pub fn order_is_valid(&self, deck_size: usize) -> bool {
        if self.order.is_empty() || self.order.len() != deck_size {
            return false;
        }
        let mut present = vec![false; deck_size];
        for &i in &self.order {
            if i >= deck_size || present[i] {
                return false;
            }
            present[i] = true;
        }
        true
    }

    /// Deck index of the card at the current position
    pub fn current_card_index(&self) -> usize {
        self.order.get(self.index).copied().unwrap_or(0)
    }
}

fn merge_field<T: serde::de::DeserializeOwned>(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    slot: &mut T,
) {
    if let Some(v) = obj.get(key) {
        match serde_json::from_value::<T>(v.clone()) {
            Ok(parsed) => *slot = parsed,
            Err(e) => log::warn!("Ignoring persisted field '{}': {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_serializes_camel_case() {
        let mut state = SessionState::default();
        state.order = vec![1, 0];
        state.side = Side::Back;
        state.last_session_date = NaiveDate::from_ymd_opt(2024, 1, 1);

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["seenToday"], 0);
        assert_eq!(value["correctToday"], 0);
        assert_eq!(value["side"], "back");
        assert_eq!(value["lastSessionDate"], "2024-01-01");
        assert_eq!(value["order"], json!([1, 0]));
    }

    #[test]
    fn test_default_state_serializes_null_date() {
        let value = serde_json::to_value(SessionState::default()).unwrap();
        assert!(value["lastSessionDate"].is_null());
    }

    #[test]
    fn test_merge_keeps_defaults_for_missing_fields() {
        let mut state = SessionState::default();
        state.merge_persisted(&json!({ "streak": 4 }));

        assert_eq!(state.streak, 4);
        assert_eq!(state.seen_today, 0);
        assert_eq!(state.side, Side::Front);
        assert!(state.last_session_date.is_none());
    }

    #[test]
    fn test_merge_ignores_unknown_and_bad_fields() {
        let mut state = SessionState::default();
        state.merge_persisted(&json!({
            "side": "sideways",
            "seenToday": "many",
            "extra": true,
            "lastSessionDate": "2024-01-02",
        }));

        assert_eq!(state.side, Side::Front);
        assert_eq!(state.seen_today, 0);
        assert_eq!(state.last_session_date, NaiveDate::from_ymd_opt(2024, 1, 2));
    }

    #[test]
    fn test_merge_clears_malformed_order() {
        let mut state = SessionState::default();
        state.order = vec![0, 1, 2];
        state.merge_persisted(&json!({ "order": [0, "one", 2] }));
        assert!(state.order.is_empty());
    }

    #[test]
    fn test_merge_accepts_null_date() {
        let mut state = SessionState::default();
        state.last_session_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        state.merge_persisted(&json!({ "lastSessionDate": null }));
        assert!(state.last_session_date.is_none());
    }

    #[test]
    fn test_merge_non_object_is_ignored() {
        let mut state = SessionState::default();
        state.streak = 2;
        state.merge_persisted(&json!([1, 2, 3]));
        assert_eq!(state.streak, 2);
    }

    #[test]
    fn test_order_validity() {
        let mut state = SessionState::default();
        assert!(!state.order_is_valid(3));

        state.order = vec![2, 0, 1];
        assert!(state.order_is_valid(3));
        assert!(!state.order_is_valid(4));

        state.order = vec![0, 0, 1];
        assert!(!state.order_is_valid(3));

        state.order = vec![0, 1, 3];
        assert!(!state.order_is_valid(3));
    }

    #[test]
    fn test_side_flip() {
        assert_eq!(Side::Front.flipped(), Side::Back);
        assert_eq!(Side::Back.flipped(), Side::Front);
    }
}
