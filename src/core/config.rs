//! Game configuration types.
//!
//! - `EliminationWord`: the word whose letters are handed out on misses
//! - `GameConfig`: defaults a `GameState` is created with and resets to

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, Result};

/// The word used when no other is configured.
pub const DEFAULT_WORD: &str = "SKATE";

/// A non-empty elimination word.
///
/// Characters and case are opaque to the engine; length is counted in
/// `char`s, not bytes.
///
/// ```
/// use skate_score::core::EliminationWord;
///
/// let word = EliminationWord::new("HORSE").unwrap();
/// assert_eq!(word.len(), 5);
/// assert_eq!(word.letter(1), Some('O'));
/// assert!(EliminationWord::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EliminationWord {
    text: String,
    letters: SmallVec<[char; 8]>,
}

impl EliminationWord {
    /// Create a word, rejecting the empty string.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(GameError::invalid_argument(
                "elimination word must not be empty",
            ));
        }
        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Number of letters (a player with this many letters is out on the next miss).
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// The letter at position `index`, if the word is that long.
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// The word as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for EliminationWord {
    fn default() -> Self {
        Self {
            text: DEFAULT_WORD.to_string(),
            letters: DEFAULT_WORD.chars().collect(),
        }
    }
}

impl std::fmt::Display for EliminationWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for EliminationWord {
    type Error = GameError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(text)
    }
}

impl From<EliminationWord> for String {
    fn from(word: EliminationWord) -> Self {
        word.text
    }
}

/// Engine configuration.
///
/// ## Defaults
///
/// - `elimination_word`: `"SKATE"`
/// - `record_history`: `true`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Word used at construction and restored by `reset()`.
    pub elimination_word: EliminationWord,

    /// Append accepted operations to the action history.
    pub record_history: bool,
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default elimination word.
    #[must_use]
    pub fn with_elimination_word(mut self, word: EliminationWord) -> Self {
        self.elimination_word = word;
        self
    }

    /// Disable action history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            elimination_word: EliminationWord::default(),
            record_history: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_word() {
        let word = EliminationWord::default();
        assert_eq!(word.as_str(), "SKATE");
        assert_eq!(word.len(), 5);
        assert_eq!(word.letter(0), Some('S'));
        assert_eq!(word.letter(4), Some('E'));
        assert_eq!(word.letter(5), None);
    }

    #[test]
    fn test_empty_word_rejected() {
        let err = EliminationWord::new("").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_word_is_opaque() {
        let word = EliminationWord::new("p1g!").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(format!("{}", word), "p1g!");
    }

    #[test]
    fn test_word_counts_chars() {
        let word = EliminationWord::new("ÉTÉ").unwrap();
        assert_eq!(word.len(), 3);
        assert_eq!(word.letter(2), Some('É'));
    }

    #[test]
    fn test_word_serde_validates() {
        let json = serde_json::to_string(&EliminationWord::default()).unwrap();
        assert_eq!(json, "\"SKATE\"");

        let word: EliminationWord = serde_json::from_str("\"PIG\"").unwrap();
        assert_eq!(word.len(), 3);

        assert!(serde_json::from_str::<EliminationWord>("\"\"").is_err());
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new()
            .with_elimination_word(EliminationWord::new("PIG").unwrap())
            .without_history();

        assert_eq!(config.elimination_word.as_str(), "PIG");
        assert!(!config.record_history);
    }

    #[test]
    fn test_game_config_default() {
        let config = GameConfig::default();
        assert_eq!(config.elimination_word.as_str(), DEFAULT_WORD);
        assert!(config.record_history);
    }
}
