//! Roster entries.
//!
//! A `Player` is a display name plus the letters of the elimination word
//! accrued so far. Letters are stored as `char`s so multi-byte words behave
//! the same as ASCII ones.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A player enrolled in the current game.
///
/// Letters are always appended in word order by the engine, so for a word
/// that hasn't changed mid-game they form a prefix of it.
///
/// ## Example
///
/// ```
/// use skate_score::core::Player;
///
/// let player = Player::new("Alice");
/// assert_eq!(player.name(), "Alice");
/// assert_eq!(player.letter_count(), 0);
/// assert_eq!(player.to_string(), "Alice - Letters: None");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,

    /// Accrued letters. SmallVec keeps the common five-letter word inline.
    letters: SmallVec<[char; 8]>,
}

impl Player {
    /// Create a player with no letters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            letters: SmallVec::new(),
        }
    }

    /// Display name, exactly as enrolled.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accrued letters in order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Accrued letters as a string (`"SKA"`).
    #[must_use]
    pub fn letters_string(&self) -> String {
        self.letters.iter().collect()
    }

    /// Number of letters accrued.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    pub(crate) fn accrue(&mut self, letter: char) {
        self.letters.push(letter);
    }

    pub(crate) fn into_name(self) -> String {
        self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.letters.is_empty() {
            write!(f, "{} - Letters: None", self.name)
        } else {
            write!(f, "{} - Letters: {}", self.name, self.letters_string())
        }
    }
}
