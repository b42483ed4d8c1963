//! Result of a resolved shot.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::shells::Shell;

/// Everything that followed from one shot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotResult {
    pub shooter: PlayerId,
    pub target: PlayerId,
    pub shell: Shell,

    /// Target's life after the shot.
    pub target_life: i32,

    /// The shot eliminated the target.
    pub target_died: bool,

    /// Control moved to a different player.
    pub turn_passed: bool,

    /// Whose turn it is now.
    pub next_player: PlayerId,

    /// The shot emptied the sequence and this round began.
    pub round_started: Option<u32>,

    /// The shot ended the game.
    pub winner: Option<PlayerId>,
}

impl ShotResult {
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.shell.is_live()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }
}
