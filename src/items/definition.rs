//! Item definitions and items in hand.
//!
//! An `ItemDefinition` is the shared, immutable description of an item.
//! A `HeldItem` is one player's copy of it for the current round, which
//! can be spent independently of every other copy.

use serde::{Deserialize, Serialize};

use super::effect::ItemEffect;

/// Identifies an item in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    XRayScanner,
    Medkit,
    MirrorShard,
    Adrenaline,
}

impl ItemKind {
    /// Every kind, in catalog order.
    pub const ALL: [ItemKind; 4] = [
        ItemKind::XRayScanner,
        ItemKind::Medkit,
        ItemKind::MirrorShard,
        ItemKind::Adrenaline,
    ];
}

/// Shared definition of an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub kind: ItemKind,

    /// Display name.
    pub name: String,

    /// One-line rules text.
    pub description: String,

    /// Applies passively instead of through explicit activation.
    pub automatic: bool,

    /// What using the item does.
    pub effect: ItemEffect,
}

impl ItemDefinition {
    /// Create a new, manually activated item definition.
    pub fn new(
        kind: ItemKind,
        name: impl Into<String>,
        description: impl Into<String>,
        effect: ItemEffect,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            automatic: false,
            effect,
        }
    }

    /// Flag as automatic (builder pattern).
    #[must_use]
    pub fn automatic(mut self) -> Self {
        self.automatic = true;
        self
    }
}

/// A player's copy of a catalog item for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    kind: ItemKind,
    used: bool,
}

impl HeldItem {
    #[must_use]
    pub fn new(kind: ItemKind) -> Self {
        Self { kind, used: false }
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    #[must_use]
    pub fn is_used(&self) -> bool {
        self.used
    }

    pub(crate) fn mark_used(&mut self) {
        self.used = true;
    }
}
