//! Read-only views of a game for presentation.
//!
//! A snapshot shows what every player at the table can see. It never
//! includes which of the remaining shells are live.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};
use crate::items::{HeldItem, ItemCatalog, ItemKind};

/// One item in a player's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub kind: ItemKind,
    pub name: String,
    pub description: String,
    pub automatic: bool,
    pub used: bool,
}

impl ItemView {
    fn new(item: &HeldItem, catalog: &ItemCatalog) -> Self {
        let definition = catalog.get(item.kind());
        Self {
            kind: item.kind(),
            name: definition.map(|d| d.name.clone()).unwrap_or_default(),
            description: definition.map(|d| d.description.clone()).unwrap_or_default(),
            automatic: definition.is_some_and(|d| d.automatic),
            used: item.is_used(),
        }
    }
}

/// Public state of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    /// "Player N", 1-based.
    pub label: String,
    pub life: i32,
    pub dead: bool,
    pub pending_extra_turn: bool,
    pub items: Vec<ItemView>,
}

impl PlayerView {
    pub(crate) fn new(player: &Player, catalog: &ItemCatalog) -> Self {
        Self {
            id: player.id(),
            label: player.id().to_string(),
            life: player.life(),
            dead: player.is_dead(),
            pending_extra_turn: player.has_pending_extra_turn(),
            items: player.items().iter().map(|item| ItemView::new(item, catalog)).collect(),
        }
    }
}

/// Public state of the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seed: u64,
    pub round: u32,
    pub current_player: PlayerId,
    pub shells_remaining: usize,
    pub winner: Option<PlayerId>,
    pub players: Vec<PlayerView>,
}

impl GameSnapshot {
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerView> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.players.iter().filter(|p| !p.dead).count()
    }
}
