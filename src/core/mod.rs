//! Core engine types: players, configuration, trick log, actions, state.
//!
//! Everything that changes during a game lives in `GameState`; the other
//! modules define the values it owns and returns.

pub mod player;
pub mod config;
pub mod trick_log;
pub mod action;
pub mod notice;
pub mod error;
pub mod snapshot;
pub mod state;

pub use player::Player;
pub use config::{EliminationWord, GameConfig, DEFAULT_WORD};
pub use trick_log::TrickLog;
pub use action::{Action, ActionRecord};
pub use notice::{MissOutcome, Notice, TrickOutcome};
pub use error::{GameError, Result};
pub use snapshot::Snapshot;
pub use state::GameState;
