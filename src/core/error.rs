//! Error types for the fallible, non-gameplay surfaces.
//!
//! Gameplay attempts (buy, build, sell, jail release) report failure with a
//! `bool`; these errors cover setup, configuration and board loading.

use thiserror::Error;

/// Board construction and lookup failures.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Space index {index} is outside the board (size {size})")]
    OutOfRange { index: usize, size: usize },

    #[error("Board must have {expected} spaces, found {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("Board must have exactly one jail, found {found}")]
    JailCount { found: usize },

    #[error("Board table could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Player registration failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("At most {max} players can join a game")]
    TooManyPlayers { max: usize },

    #[error("Players cannot join once the game has started")]
    AlreadyStarted,

    #[error("Player name must not be empty")]
    EmptyName,
}

/// Invalid rule configuration.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Minimum player count {min} exceeds maximum {max}")]
    PlayerBounds { min: usize, max: usize },

    #[error("Jail turn limit must be at least 1")]
    ZeroJailTurns,

    #[error("Rules could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}
