//! Action representation and history records.
//!
//! Every mutating operation on `GameState` has an `Action` counterpart so
//! a session can be logged and replayed:
//! - `Enroll("Alice")` = `enroll_player("Alice")`
//! - `Miss(1)` = `record_miss(1)`
//! - `Trick("Kickflip")` = `record_trick("Kickflip")`

use serde::{Deserialize, Serialize};

/// A single engine operation.
///
/// ## Example
///
/// ```
/// use skate_score::core::{Action, GameState};
///
/// let mut state = GameState::new();
/// state.apply(&Action::enroll("Alice")).unwrap();
/// state.apply(&Action::trick("Ollie")).unwrap();
///
/// assert_eq!(state.player_count(), 1);
/// assert_eq!(state.trick_log().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Enroll a player by name.
    Enroll(String),
    /// Record a miss for the player at this roster index.
    Miss(usize),
    /// Call a trick.
    Trick(String),
    /// Pass the turn to the next player.
    AdvanceTurn,
    /// Replace the elimination word.
    SetWord(String),
    /// Start over.
    Reset,
}

impl Action {
    /// Create an `Enroll` action.
    pub fn enroll(name: impl Into<String>) -> Self {
        Action::Enroll(name.into())
    }

    /// Create a `Trick` action.
    pub fn trick(name: impl Into<String>) -> Self {
        Action::Trick(name.into())
    }

    /// Create a `SetWord` action.
    pub fn set_word(word: impl Into<String>) -> Self {
        Action::SetWord(word.into())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Enroll(name) => write!(f, "enroll {:?}", name),
            Action::Miss(index) => write!(f, "miss #{}", index),
            Action::Trick(name) => write!(f, "trick {:?}", name),
            Action::AdvanceTurn => f.write_str("advance turn"),
            Action::SetWord(word) => write!(f, "set word {:?}", word),
            Action::Reset => f.write_str("reset"),
        }
    }
}

/// An accepted action with its position in the session.
///
/// Rejected no-ops are never recorded, so replaying the records of a
/// session reproduces it without errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Sequence number since the last reset (the reset itself is 0).
    pub sequence: u64,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u64, action: Action) -> Self {
        Self { sequence, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_constructors() {
        assert_eq!(Action::enroll("Alice"), Action::Enroll("Alice".to_string()));
        assert_eq!(Action::trick("Ollie"), Action::Trick("Ollie".to_string()));
        assert_eq!(Action::set_word("PIG"), Action::SetWord("PIG".to_string()));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::enroll("Alice").to_string(), "enroll \"Alice\"");
        assert_eq!(Action::Miss(2).to_string(), "miss #2");
        assert_eq!(Action::AdvanceTurn.to_string(), "advance turn");
        assert_eq!(Action::Reset.to_string(), "reset");
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(3, Action::Miss(0));
        assert_eq!(record.sequence, 3);
        assert_eq!(record.action, Action::Miss(0));
    }

    #[test]
    fn test_action_serialization() {
        let actions = vec![
            Action::enroll("Alice"),
            Action::Miss(0),
            Action::trick("Kickflip"),
            Action::AdvanceTurn,
            Action::set_word("HORSE"),
            Action::Reset,
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let deserialized: Vec<Action> = serde_json::from_str(&json).unwrap();
        assert_eq!(actions, deserialized);
    }
}
