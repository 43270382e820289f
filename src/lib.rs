//! # skate-score
//!
//! Game-state engine for SKATE, the skateboarding elimination game.
//!
//! Players take turns calling tricks. A player who misses takes the next
//! letter of the elimination word (default `"SKATE"`). A player who already
//! holds the whole word and misses again is out. The last player standing
//! is the champion.
//!
//! ## Design Principles
//!
//! 1. **One owned state**: `GameState` holds the roster, turn pointer, trick
//!    log and word. Its methods are the only way to change them.
//!
//! 2. **Outcomes, not alerts**: operations return `MissOutcome` /
//!    `TrickOutcome` values carrying `Notice`s. Displaying them is the
//!    caller's job.
//!
//! 3. **Replayable**: every operation has an `Action` form, and accepted
//!    actions are kept in the state's history.
//!
//! ## Modules
//!
//! - `core`: players, configuration, trick log, actions, notices, state
//! - `rules`: champion detection and standings
//!
//! ## Example
//!
//! ```
//! use skate_score::{GameState, MissOutcome};
//!
//! let mut game = GameState::new();
//! game.enroll_player("Alice");
//! game.enroll_player("Bob");
//!
//! for _ in 0..5 {
//!     game.record_miss(1).unwrap();
//! }
//! assert_eq!(game.player(1).unwrap().letters_string(), "SKATE");
//!
//! let outcome = game.record_miss(1).unwrap();
//! assert_eq!(outcome.champion(), Some("Alice"));
//! assert!(matches!(outcome, MissOutcome::Eliminated { .. }));
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Player,
    EliminationWord, GameConfig, DEFAULT_WORD,
    TrickLog,
    Action, ActionRecord,
    MissOutcome, Notice, TrickOutcome,
    GameError, Result,
    Snapshot, GameState,
};

pub use crate::rules::{game_result, standings, GameResult, Standing, StandingStatus};
