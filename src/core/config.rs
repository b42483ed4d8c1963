//! Game configuration.
//!
//! `GameConfig` holds the rule constants. The defaults are the standard
//! rules: 2-4 players, 3 life, 3 items per round, 5 shells loaded with one
//! ejected at random so 4 remain.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Rule constants for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fewest players allowed at the table.
    pub min_players: usize,

    /// Most players allowed at the table.
    pub max_players: usize,

    /// Life each player starts with.
    pub starting_life: i32,

    /// Items dealt to each living player at the start of every round.
    pub items_per_round: usize,

    /// Shells loaded before ejection.
    pub shells_loaded: usize,

    /// Shells ejected at random positions after loading.
    pub shells_ejected: usize,

    /// Life restored by a Medkit.
    pub heal_amount: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 4,
            starting_life: 3,
            items_per_round: 3,
            shells_loaded: 5,
            shells_ejected: 1,
            heal_amount: 1,
        }
    }
}

impl GameConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }

    /// Shells in a freshly generated round.
    #[must_use]
    pub fn shells_per_round(&self) -> usize {
        self.shells_loaded.saturating_sub(self.shells_ejected)
    }

    /// Check a player count against the table limits.
    pub fn check_player_count(&self, count: usize) -> Result<()> {
        if (self.min_players..=self.max_players).contains(&count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            })
        }
    }

    /// Reject configurations the engine cannot run.
    ///
    /// `catalog_size` bounds `items_per_round` since hands are drawn
    /// without replacement.
    pub fn validate(&self, catalog_size: usize) -> Result<()> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.min_players < 1 {
            return invalid("min_players must be at least 1".into());
        }
        if self.min_players > self.max_players {
            return invalid(format!(
                "min_players {} exceeds max_players {}",
                self.min_players, self.max_players
            ));
        }
        if self.max_players > u8::MAX as usize {
            return invalid(format!("max_players {} exceeds {}", self.max_players, u8::MAX));
        }
        if self.starting_life < 1 {
            return invalid(format!("starting_life {} must be positive", self.starting_life));
        }
        if self.heal_amount < 0 {
            return invalid(format!("heal_amount {} must not be negative", self.heal_amount));
        }
        if self.shells_ejected >= self.shells_loaded {
            return invalid(format!(
                "ejecting {} of {} shells leaves none to fire",
                self.shells_ejected, self.shells_loaded
            ));
        }
        if self.items_per_round > catalog_size {
            return invalid(format!(
                "items_per_round {} exceeds catalog size {}",
                self.items_per_round, catalog_size
            ));
        }
        Ok(())
    }
}
