//! Core engine types: players, configuration, RNG and errors.
//!
//! These are the building blocks every other module depends on.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::{Hand, Player, PlayerId};
pub use rng::GameRng;
