//! Operation outcomes and the user-facing notices they carry.
//!
//! The engine never displays anything. Operations return a structured
//! outcome; the presentation layer decides how to surface its notices.

use serde::{Deserialize, Serialize};

/// A user-facing message produced by an operation.
///
/// `Display` renders the text shown to players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// A player was removed from the roster.
    Eliminated { name: String },
    /// Exactly one player remains after an elimination.
    Champion { name: String },
    /// A trick was empty or already logged.
    TrickRejected,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Eliminated { name } => write!(f, "{} is out!", name),
            Notice::Champion { name } => write!(f, "Champion: {}", name),
            Notice::TrickRejected => f.write_str("Trick already performed or invalid"),
        }
    }
}

/// Result of recording a missed trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissOutcome {
    /// The player took the next letter.
    Accrued {
        name: String,
        /// All letters held after the miss.
        letters: String,
    },
    /// The player already held the whole word and is out.
    Eliminated {
        name: String,
        /// Sole survivor, if the elimination left exactly one player.
        champion: Option<String>,
    },
}

impl MissOutcome {
    /// Check if the miss removed the player.
    #[must_use]
    pub fn is_elimination(&self) -> bool {
        matches!(self, MissOutcome::Eliminated { .. })
    }

    /// The champion crowned by this miss, if any.
    #[must_use]
    pub fn champion(&self) -> Option<&str> {
        match self {
            MissOutcome::Eliminated { champion, .. } => champion.as_deref(),
            MissOutcome::Accrued { .. } => None,
        }
    }

    /// Notices to show, elimination before champion.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        match self {
            MissOutcome::Accrued { .. } => Vec::new(),
            MissOutcome::Eliminated { name, champion } => {
                let mut notices = vec![Notice::Eliminated { name: name.clone() }];
                if let Some(champion) = champion {
                    notices.push(Notice::Champion {
                        name: champion.clone(),
                    });
                }
                notices
            }
        }
    }
}

/// Result of calling a trick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickOutcome {
    /// The trick was appended to the log.
    Logged,
    /// Empty or already logged; the log is unchanged.
    Rejected,
}

impl TrickOutcome {
    /// Check if the trick was logged.
    #[must_use]
    pub fn is_logged(self) -> bool {
        self == TrickOutcome::Logged
    }

    /// The rejection notice, if any.
    #[must_use]
    pub fn notice(self) -> Option<Notice> {
        match self {
            TrickOutcome::Logged => None,
            TrickOutcome::Rejected => Some(Notice::TrickRejected),
        }
    }
}
