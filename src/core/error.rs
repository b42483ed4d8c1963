//! Engine error taxonomy.
//!
//! Every error is a local validation failure on a malformed or
//! out-of-protocol call. A failed operation leaves the game untouched.

use thiserror::Error;

use super::player::PlayerId;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count {count} is outside {min}..={max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("{player} acted out of turn ({current} is active)")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("{player} has no usable item at index {index}")]
    InvalidItem { player: PlayerId, index: usize },

    #[error("{target} is not a living player")]
    InvalidTarget { target: PlayerId },

    #[error("no shells remain in the sequence")]
    EmptySequence,

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("cannot draw {requested} items from a catalog of {available}")]
    InvalidDrawSize { requested: usize, available: usize },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used by all engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
