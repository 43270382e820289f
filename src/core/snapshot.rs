//! Read-only view of a game for presentation layers.
//!
//! A `Snapshot` is a plain owned value: render from it, ship it across a
//! channel, or encode it with `to_bytes` for another process.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::player::Player;

/// Everything a UI needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Roster in turn order.
    pub players: Vec<Player>,

    /// Raw turn pointer (may be stale after an elimination).
    pub current_player_index: usize,

    /// Name of the player whose turn it is, if the pointer is in range.
    pub current_player: Option<String>,

    /// Called tricks in call order.
    pub trick_log: Vec<String>,

    pub elimination_word: String,

    /// Eliminated players, oldest first.
    pub eliminated: Vec<String>,

    /// Champion announced by the last elimination, if still standing alone.
    pub champion: Option<String>,
}

impl Snapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn test_snapshot_bytes() {
        let mut state = GameState::new();
        state.enroll_player("Alice");
        state.enroll_player("Bob");
        state.record_miss(1).unwrap();
        state.record_trick("Nollie");

        let snapshot = state.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_snapshot_decode_garbage() {
        let err = Snapshot::from_bytes(&[0xff, 0xff]).unwrap_err();
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_snapshot_json() {
        let snapshot = GameState::new().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["elimination_word"], "SKATE");
        assert_eq!(json["current_player"], serde_json::Value::Null);
    }
}
