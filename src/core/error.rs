//! Error types for the game-state engine.
//!
//! Most invalid user input degrades to a no-op or a rejection outcome.
//! `GameError` is reserved for caller contract violations (an out-of-range
//! roster index, an empty elimination word) and snapshot codec failures.

use thiserror::Error;

/// Errors returned by fallible engine operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// An argument violated the operation's precondition.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the violation.
        reason: String,
    },

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

impl GameError {
    /// Build an `InvalidArgument` error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if this error is an `InvalidArgument`.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = GameError::invalid_argument("player index 3 out of range");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument: player index 3 out of range");
    }

    #[test]
    fn test_codec_error_from_bincode() {
        let bincode_err: bincode::Error = Box::new(bincode::ErrorKind::SizeLimit);
        let err: GameError = bincode_err.into();
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().starts_with("snapshot codec error"));
    }
}
