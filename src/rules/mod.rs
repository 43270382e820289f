//! Read-only rules queries over a `GameState`.
//!
//! - `game_result`: champion detection
//! - `standings`: ranked table of active and eliminated players

pub mod engine;

pub use engine::{game_result, standings, GameResult, Standing, StandingStatus};
