//! Options for starting a game.
//!
//! `GameOptions` bundles the rules, the seed, and an optional `Script`
//! that fixes shells and hands ahead of time. Scripts exist so tests and
//! demos can replay exact situations; anything the script does not cover
//! falls back to the seeded RNG.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameError, Result};
use crate::items::{ItemCatalog, ItemKind};
use crate::shells::Shell;

/// Predetermined shells and hands, consumed before any random generation.
///
/// Rounds are consumed one per round start. Hands are consumed one per
/// deal, in player order: every player at game start, then every living
/// player at each new round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub shells: VecDeque<Vec<Shell>>,
    pub hands: VecDeque<Vec<ItemKind>>,
}

impl Script {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the shells for the next round, front first (builder pattern).
    #[must_use]
    pub fn round(mut self, shells: impl IntoIterator<Item = Shell>) -> Self {
        self.shells.push_back(shells.into_iter().collect());
        self
    }

    /// Queue the next hand dealt (builder pattern).
    #[must_use]
    pub fn hand(mut self, kinds: impl IntoIterator<Item = ItemKind>) -> Self {
        self.hands.push_back(kinds.into_iter().collect());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shells.is_empty() && self.hands.is_empty()
    }

    /// Check that every scripted round can be fired and every scripted
    /// item exists.
    pub(crate) fn validate(&self, catalog: &ItemCatalog) -> Result<()> {
        if self.shells.iter().any(Vec::is_empty) {
            return Err(GameError::InvalidConfig("scripted round has no shells".into()));
        }
        for hand in &self.hands {
            catalog.hand_of(hand)?;
        }
        Ok(())
    }
}

/// Everything `start_game` needs besides the player count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    pub config: GameConfig,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    pub script: Script,
}

impl GameOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default rules with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Use custom rules (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a script (builder pattern).
    #[must_use]
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }
}
