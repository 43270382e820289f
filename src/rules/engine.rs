//! Game result and standings.
//!
//! The engine never ends a game on its own: these are queries over a
//! `GameState` that a presentation layer may use to decide what to show.

use serde::{Deserialize, Serialize};

use crate::core::state::GameState;

/// Where a game stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// No champion yet.
    InProgress,
    /// A single player outlasted everyone else.
    Champion(String),
}

impl GameResult {
    /// Check if a player is the champion.
    #[must_use]
    pub fn is_champion(&self, name: &str) -> bool {
        matches!(self, GameResult::Champion(champion) if champion == name)
    }
}

/// Current result of `state`.
///
/// Agrees with the champion notice: a player is champion only if the
/// elimination that left them alone named them, and nobody has enrolled
/// since. A lone enrollee, or a newcomer after the roster emptied, is
/// still in progress.
#[must_use]
pub fn game_result(state: &GameState) -> GameResult {
    match state.champion() {
        Some(champion) => GameResult::Champion(champion.to_string()),
        None => GameResult::InProgress,
    }
}

/// A player's position in the standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandingStatus {
    /// Still in the game with this many letters.
    Active { letters: usize },
    /// Out of the game.
    Eliminated,
}

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based rank. Active players with equal letters share a rank.
    pub rank: usize,
    pub name: String,
    pub status: StandingStatus,
}

/// Rank every player who took part since the last reset.
///
/// Active players come first, fewest letters first with roster order
/// breaking ties. Eliminated players follow, most recently eliminated first.
#[must_use]
pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut active: Vec<_> = state
        .players()
        .iter()
        .map(|p| (p.name(), p.letter_count()))
        .collect();
    // Stable sort keeps roster order within equal letter counts.
    active.sort_by_key(|&(_, letters)| letters);

    let mut table = Vec::with_capacity(active.len() + state.eliminated().count());
    let mut previous: Option<(usize, usize)> = None;
    for (position, (name, letters)) in active.into_iter().enumerate() {
        let rank = match previous {
            Some((prev_letters, prev_rank)) if prev_letters == letters => prev_rank,
            _ => position + 1,
        };
        previous = Some((letters, rank));
        table.push(Standing {
            rank,
            name: name.to_string(),
            status: StandingStatus::Active { letters },
        });
    }

    let eliminated: Vec<_> = state.eliminated().collect();
    for name in eliminated.into_iter().rev() {
        table.push(Standing {
            rank: table.len() + 1,
            name: name.to_string(),
            status: StandingStatus::Eliminated,
        });
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eliminate(state: &mut GameState, index: usize) {
        while state.player(index).is_some_and(|p| p.letter_count() < 5) {
            state.record_miss(index).unwrap();
        }
        state.record_miss(index).unwrap();
    }

    #[test]
    fn test_result_in_progress() {
        let mut state = GameState::new();
        assert_eq!(game_result(&state), GameResult::InProgress);

        state.enroll_player("Solo");
        assert_eq!(game_result(&state), GameResult::InProgress);
    }

    #[test]
    fn test_result_champion() {
        let mut state = GameState::new();
        state.enroll_player("Alice");
        state.enroll_player("Bob");
        eliminate(&mut state, 1);

        let result = game_result(&state);
        assert_eq!(result, GameResult::Champion("Alice".to_string()));
        assert!(result.is_champion("Alice"));
        assert!(!result.is_champion("Bob"));
    }

    #[test]
    fn test_result_newcomer_after_empty_roster() {
        let mut state = GameState::new();
        state.enroll_player("A");
        state.enroll_player("B");
        eliminate(&mut state, 0);
        eliminate(&mut state, 0);
        assert_eq!(state.player_count(), 0);

        state.enroll_player("X");
        assert_eq!(game_result(&state), GameResult::InProgress);
    }

    #[test]
    fn test_result_champion_survives_own_misses() {
        let mut state = GameState::new();
        state.enroll_player("Alice");
        state.enroll_player("Bob");
        eliminate(&mut state, 1);
        state.record_miss(0).unwrap();

        assert!(game_result(&state).is_champion("Alice"));
    }

    #[test]
    fn test_standings_order() {
        let mut state = GameState::new();
        for name in ["A", "B", "C", "D", "E"] {
            state.enroll_player(name);
        }
        // Roster: A B C D E
        eliminate(&mut state, 3); // D out, roster A B C E
        eliminate(&mut state, 0); // A out, roster B C E
        state.record_miss(0).unwrap(); // B: 1
        state.record_miss(0).unwrap(); // B: 2
        state.record_miss(2).unwrap(); // E: 1

        let table = standings(&state);
        let rows: Vec<_> = table
            .iter()
            .map(|s| (s.rank, s.name.as_str(), s.status.clone()))
            .collect();

        assert_eq!(
            rows,
            vec![
                (1, "C", StandingStatus::Active { letters: 0 }),
                (2, "E", StandingStatus::Active { letters: 1 }),
                (3, "B", StandingStatus::Active { letters: 2 }),
                (4, "A", StandingStatus::Eliminated),
                (5, "D", StandingStatus::Eliminated),
            ]
        );
    }

    #[test]
    fn test_standings_shared_rank() {
        let mut state = GameState::new();
        state.enroll_player("A");
        state.enroll_player("B");
        state.enroll_player("C");
        state.record_miss(0).unwrap();

        let ranks: Vec<_> = standings(&state).iter().map(|s| (s.rank, s.name.clone())).collect();
        assert_eq!(
            ranks,
            vec![
                (1, "B".to_string()),
                (1, "C".to_string()),
                (3, "A".to_string()),
            ]
        );
    }
}
