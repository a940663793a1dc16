//! Equipment bonus aggregation.
//!
//! Bonuses are NOT stored - they are computed from the ledger's equipped
//! items every time a snapshot is taken. Only weapons and armor contribute;
//! a consumable never counts even if its data carries numbers.

use crate::state::OwnedItem;

/// Flat bonuses granted by the currently equipped items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentBonuses {
    pub attack: u32,
    pub defense: u32,
    pub health: u32,
}

impl EquipmentBonuses {
    /// Create new empty bonus collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one item's contribution.
    pub fn add(&mut self, item: &OwnedItem) {
        if !item.is_equipped() || !item.category().is_equippable() {
            return;
        }
        self.attack = self.attack.saturating_add(item.item.attack_bonus);
        self.defense = self.defense.saturating_add(item.item.defense_bonus);
        self.health = self.health.saturating_add(item.item.health_bonus);
    }

    /// Sums the bonuses of every equipped item in `items`.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a OwnedItem>) -> Self {
        let mut bonuses = Self::new();
        for item in items {
            bonuses.add(item);
        }
        bonuses
    }
}
