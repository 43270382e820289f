//! Game state: roster, turn pointer, trick log and elimination word.
//!
//! `GameState` is the only place these change. Each mutating method is one
//! user action; it runs to completion and reports what happened through its
//! return value.
//!
//! ## Turn pointer
//!
//! `current_player_index` is not adjusted when a player is eliminated. After
//! a removal at or before the pointer it may name a different player or run
//! past the end of the roster. `current_player()` returns `None` in the
//! latter case, and the next `advance_turn()` brings it back into range.

use im::Vector;
use log::{debug, info, warn};

use super::action::{Action, ActionRecord};
use super::config::{EliminationWord, GameConfig};
use super::error::{GameError, Result};
use super::notice::{MissOutcome, Notice, TrickOutcome};
use super::player::Player;
use super::snapshot::Snapshot;
use super::trick_log::TrickLog;

/// Complete state of one game of SKATE.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,

    /// Roster in turn order.
    players: Vec<Player>,

    current_player_index: usize,

    trick_log: TrickLog,

    elimination_word: EliminationWord,

    /// Names of removed players, oldest first.
    eliminated: Vector<String>,

    /// Survivor named by the last elimination; cleared by enrollment.
    champion: Option<String>,

    /// Accepted actions since the last reset.
    history: Vector<ActionRecord>,

    next_sequence: u64,
}

impl GameState {
    /// Create an empty game with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create an empty game.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            elimination_word: config.elimination_word.clone(),
            config,
            players: Vec::new(),
            current_player_index: 0,
            trick_log: TrickLog::new(),
            eliminated: Vector::new(),
            champion: None,
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    /// Rebuild a game by applying `actions` in order to a fresh state.
    ///
    /// Stops at the first action that fails.
    pub fn replay<'a>(
        config: GameConfig,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Result<Self> {
        let mut state = Self::with_config(config);
        for action in actions {
            state.apply(action)?;
        }
        Ok(state)
    }

    // === Operations ===

    /// Add a player to the end of the roster.
    ///
    /// Returns the new player's roster index, or `None` if `name` is empty
    /// or already on the roster. Names are compared and stored exactly as
    /// given. The turn pointer is untouched. A newcomer voids any champion.
    pub fn enroll_player(&mut self, name: &str) -> Option<usize> {
        if name.is_empty() {
            warn!("Ignoring enrollment with an empty name");
            return None;
        }
        if self.players.iter().any(|p| p.name() == name) {
            warn!("Ignoring enrollment of {:?}: already on the roster", name);
            return None;
        }

        self.players.push(Player::new(name));
        self.champion = None;
        let index = self.players.len() - 1;
        debug!("Enrolled {:?} at roster index {}", name, index);
        self.record(Action::enroll(name));
        Some(index)
    }

    /// Record that the player at `player_index` missed a trick.
    ///
    /// A player short of the full word takes the next letter. A player who
    /// already holds every letter is removed from the roster; if that leaves
    /// a single player, the outcome names them champion.
    ///
    /// Fails with `InvalidArgument` if `player_index` is out of range.
    pub fn record_miss(&mut self, player_index: usize) -> Result<MissOutcome> {
        let roster_len = self.players.len();
        let Some(player) = self.players.get_mut(player_index) else {
            warn!(
                "Miss recorded for index {} with {} players enrolled",
                player_index, roster_len
            );
            return Err(GameError::invalid_argument(format!(
                "player index {} out of range for {} players",
                player_index, roster_len
            )));
        };

        if let Some(letter) = self.elimination_word.letter(player.letter_count()) {
            player.accrue(letter);
            let outcome = MissOutcome::Accrued {
                name: player.name().to_string(),
                letters: player.letters_string(),
            };
            debug!("{:?}", outcome);
            self.record(Action::Miss(player_index));
            return Ok(outcome);
        }

        let name = self.players.remove(player_index).into_name();
        info!("{} is out", name);
        self.eliminated.push_back(name.clone());

        let champion = match self.players.as_slice() {
            [survivor] => Some(survivor.name().to_string()),
            _ => None,
        };
        if let Some(champion) = &champion {
            info!("Champion: {}", champion);
        }
        self.champion = champion.clone();

        self.record(Action::Miss(player_index));
        Ok(MissOutcome::Eliminated { name, champion })
    }

    /// Call a trick. Empty and already-called names are rejected.
    pub fn record_trick(&mut self, name: &str) -> TrickOutcome {
        if !self.trick_log.insert(name) {
            warn!("Rejected trick {:?}", name);
            return TrickOutcome::Rejected;
        }

        debug!("Logged trick {:?} ({} total)", name, self.trick_log.len());
        self.record(Action::trick(name));
        TrickOutcome::Logged
    }

    /// Pass the turn to the next player, wrapping at the end of the roster.
    ///
    /// Returns the new index, or `None` (no-op) when the roster is empty.
    pub fn advance_turn(&mut self) -> Option<usize> {
        if self.players.is_empty() {
            return None;
        }

        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        debug!("Turn passed to index {}", self.current_player_index);
        self.record(Action::AdvanceTurn);
        Some(self.current_player_index)
    }

    /// Replace the elimination word.
    ///
    /// Letters already held are not checked against the new word. Fails
    /// with `InvalidArgument` if `word` is empty.
    pub fn set_elimination_word(&mut self, word: &str) -> Result<()> {
        let word = EliminationWord::new(word).inspect_err(|_| {
            warn!("Rejected empty elimination word");
        })?;

        if !self.players.is_empty() {
            debug!(
                "Elimination word changed to {:?} with {} players enrolled",
                word.as_str(),
                self.players.len()
            );
        }
        self.record(Action::set_word(word.as_str()));
        self.elimination_word = word;
        Ok(())
    }

    /// Discard everything and return to the configured defaults.
    pub fn reset(&mut self) {
        self.players.clear();
        self.trick_log.clear();
        self.current_player_index = 0;
        self.elimination_word = self.config.elimination_word.clone();
        self.eliminated.clear();
        self.champion = None;
        self.history.clear();
        self.next_sequence = 0;
        debug!("Game reset");
        self.record(Action::Reset);
    }

    /// Apply an action, returning the notices it produced.
    pub fn apply(&mut self, action: &Action) -> Result<Vec<Notice>> {
        let notices = match action {
            Action::Enroll(name) => {
                self.enroll_player(name);
                Vec::new()
            }
            Action::Miss(index) => self.record_miss(*index)?.notices(),
            Action::Trick(name) => self.record_trick(name).notice().into_iter().collect(),
            Action::AdvanceTurn => {
                self.advance_turn();
                Vec::new()
            }
            Action::SetWord(word) => {
                self.set_elimination_word(word)?;
                Vec::new()
            }
            Action::Reset => {
                self.reset();
                Vec::new()
            }
        };
        Ok(notices)
    }

    fn record(&mut self, action: Action) {
        if !self.config.record_history {
            return;
        }
        self.history
            .push_back(ActionRecord::new(self.next_sequence, action));
        self.next_sequence += 1;
    }

    // === Queries ===

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Roster in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by roster index.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Number of players still in the game.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Raw turn pointer. May be stale after an elimination.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Player whose turn it is, if the pointer is in range.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Called tricks in call order.
    #[must_use]
    pub fn trick_log(&self) -> &TrickLog {
        &self.trick_log
    }

    /// Word currently handing out letters.
    #[must_use]
    pub fn elimination_word(&self) -> &EliminationWord {
        &self.elimination_word
    }

    /// Champion announced by the most recent elimination, if no one has
    /// enrolled since.
    #[must_use]
    pub fn champion(&self) -> Option<&str> {
        self.champion.as_deref()
    }

    /// Names of eliminated players, in elimination order.
    pub fn eliminated(&self) -> impl Iterator<Item = &str> {
        self.eliminated.iter().map(String::as_str)
    }

    /// Accepted actions since the last reset.
    ///
    /// Grows with every accepted action until `reset()` clears it; use
    /// `GameConfig::without_history` for long-running sessions.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Read-only view for presentation layers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            current_player_index: self.current_player_index,
            current_player: self.current_player().map(|p| p.name().to_string()),
            trick_log: self.trick_log.iter().map(str::to_string).collect(),
            elimination_word: self.elimination_word.as_str().to_string(),
            eliminated: self.eliminated.iter().cloned().collect(),
            champion: self.champion.clone(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
