//! Game event types.
//!
//! Events describe what happened during an operation so a presentation
//! layer can render it. They carry data only; the `Display` rendering is
//! a ready-made text form for simple front ends and logs.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::items::{EffectResult, ItemKind};
use crate::shells::Shell;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player used an item.
    ItemUsed {
        player: PlayerId,
        item: ItemKind,
        result: EffectResult,
    },

    /// A shell was fired at a target.
    ShotFired {
        shooter: PlayerId,
        target: PlayerId,
        shell: Shell,
        /// Target's life after the shot.
        target_life: i32,
    },

    /// A player's life reached zero.
    PlayerEliminated { player: PlayerId },

    /// Control passed to another player.
    TurnPassed { from: PlayerId, to: PlayerId },

    /// A new round began with fresh shells and items.
    RoundStarted { round: u32 },

    /// Only one player is left standing.
    GameWon { winner: PlayerId },
}

impl GameEvent {
    /// The player this event is mainly about.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::ItemUsed { player, .. } | GameEvent::PlayerEliminated { player } => {
                Some(*player)
            }
            GameEvent::ShotFired { target, .. } => Some(*target),
            GameEvent::TurnPassed { to, .. } => Some(*to),
            GameEvent::GameWon { winner } => Some(*winner),
            GameEvent::RoundStarted { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::ItemUsed { player, result, .. } => write!(f, "{player}: {result}"),
            GameEvent::ShotFired { target, shell: Shell::Live, .. } => {
                write!(f, "BOOM! {target} got shot!")
            }
            GameEvent::ShotFired { shell: Shell::Blank, .. } => write!(f, "Blank! Lucky!"),
            GameEvent::PlayerEliminated { player } => write!(f, "{player} is DEAD!"),
            GameEvent::TurnPassed { to, .. } => write!(f, "{to}'s turn"),
            GameEvent::RoundStarted { round } => write!(f, "Round {round} begins!"),
            GameEvent::GameWon { winner } => write!(f, "{winner} wins!"),
        }
    }
}
