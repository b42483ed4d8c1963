//! The item catalog and random hand draws.
//!
//! The catalog stores item definitions in a fixed order and draws hands
//! by shuffling that order (Fisher-Yates) and taking a prefix, so every
//! hand is a uniformly random subset in uniformly random order.
//!
//! ## Example
//!
//! ```
//! use shotgun_roulette::core::{GameConfig, GameRng};
//! use shotgun_roulette::items::{ItemCatalog, ItemKind};
//!
//! let catalog = ItemCatalog::standard(&GameConfig::default());
//! assert_eq!(catalog.len(), 4);
//! assert_eq!(catalog.get(ItemKind::Medkit).unwrap().name, "Medkit");
//!
//! let mut rng = GameRng::new(42);
//! let hand = catalog.draw_random(3, &mut rng).unwrap();
//! assert_eq!(hand.len(), 3);
//! ```

use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::{HeldItem, ItemDefinition, ItemKind};
use super::effect::ItemEffect;
use crate::core::{GameConfig, GameError, GameRng, Hand, Result};

/// Registry of item definitions.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
    index: FxHashMap<ItemKind, usize>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard four items.
    #[must_use]
    pub fn standard(config: &GameConfig) -> Self {
        let mut catalog = Self::new();
        catalog.register(ItemDefinition::new(
            ItemKind::XRayScanner,
            "X-ray Scanner",
            "Reveal shell status",
            ItemEffect::RevealNext,
        ));
        catalog.register(ItemDefinition::new(
            ItemKind::Medkit,
            "Medkit",
            format!("Restore {} life", config.heal_amount),
            ItemEffect::Heal(config.heal_amount),
        ));
        // Reflection is not implemented; the shard is dealt and shown but inert.
        catalog.register(
            ItemDefinition::new(
                ItemKind::MirrorShard,
                "Mirror Shard",
                "Reflect shot (1 use, auto)",
                ItemEffect::Inert,
            )
            .automatic(),
        );
        catalog.register(ItemDefinition::new(
            ItemKind::Adrenaline,
            "Adrenaline",
            "Take 2 turns in a row",
            ItemEffect::ExtraTurn,
        ));
        catalog
    }

    /// Register an item definition, replacing any previous one of the same kind.
    pub fn register(&mut self, item: ItemDefinition) {
        match self.index.get(&item.kind) {
            Some(&slot) => self.items[slot] = item,
            None => {
                self.index.insert(item.kind, self.items.len());
                self.items.push(item);
            }
        }
    }

    /// Get an item definition by kind.
    #[must_use]
    pub fn get(&self, kind: ItemKind) -> Option<&ItemDefinition> {
        self.index.get(&kind).map(|&slot| &self.items[slot])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    /// Draw `n` distinct items in random order.
    pub fn draw_random(&self, n: usize, rng: &mut GameRng) -> Result<Hand> {
        if n > self.items.len() {
            return Err(GameError::InvalidDrawSize {
                requested: n,
                available: self.items.len(),
            });
        }

        let mut kinds: Vec<ItemKind> = self.items.iter().map(|item| item.kind).collect();
        rng.shuffle(&mut kinds);

        let hand: Hand = kinds.into_iter().take(n).map(HeldItem::new).collect();
        debug!(?hand, "items drawn");
        Ok(hand)
    }

    /// Build a hand from known kinds, checking each one is in the catalog.
    pub fn hand_of(&self, kinds: &[ItemKind]) -> Result<Hand> {
        if let Some(missing) = kinds.iter().find(|kind| !self.index.contains_key(kind)) {
            return Err(GameError::InvalidConfig(format!("{missing:?} is not in the catalog")));
        }
        Ok(kinds.iter().copied().map(HeldItem::new).collect())
    }
}
