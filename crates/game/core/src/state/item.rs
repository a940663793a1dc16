//! Item-related state types.
//!
//! This module contains foundational item types:
//! - Item: Immutable template describing equipment or a consumable
//! - ItemId: Ledger-assigned identity of one owned copy
//! - OwnedItem: A copy of a template held by a character, with its equip flag

/// Broad item category. Only weapons and armor can be equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
}

impl ItemCategory {
    /// Returns true for categories whose bonuses count towards combat stats.
    pub const fn is_equippable(&self) -> bool {
        matches!(self, Self::Weapon | Self::Armor)
    }
}

/// Item definition with display data and stat modifiers.
///
/// Templates are immutable once built. Ownership is modeled by [`OwnedItem`],
/// which wraps an independent copy of the template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub description: String,
    pub price: u32,
    pub category: ItemCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_bonus: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_bonus: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub health_bonus: u32,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        category: ItemCategory,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category,
            attack_bonus: 0,
            defense_bonus: 0,
            health_bonus: 0,
        }
    }

    /// Creates a weapon granting `attack` bonus.
    pub fn weapon(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        attack: u32,
    ) -> Self {
        Self::new(name, description, price, ItemCategory::Weapon).with_attack(attack)
    }

    /// Creates armor granting `defense` bonus.
    pub fn armor(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        defense: u32,
    ) -> Self {
        Self::new(name, description, price, ItemCategory::Armor).with_defense(defense)
    }

    /// Creates a consumable restoring `health`.
    pub fn consumable(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        health: u32,
    ) -> Self {
        Self::new(name, description, price, ItemCategory::Consumable).with_health(health)
    }

    #[must_use]
    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack_bonus = attack;
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense_bonus = defense;
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health_bonus = health;
        self
    }

    /// Produces a fresh, unequipped copy of this template.
    ///
    /// The template itself is left untouched; the copy receives its identity
    /// when it is added to a ledger.
    pub fn purchase(&self) -> OwnedItem {
        OwnedItem::new(ItemId::UNASSIGNED, self.clone())
    }
}

/// Identity of one owned item inside a ledger.
///
/// IDs are allocated monotonically and never reused, so two copies of the same
/// template stay distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl ItemId {
    /// Placeholder carried by items not yet added to a ledger.
    pub const UNASSIGNED: Self = Self(u32::MAX);
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An item owned by a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedItem {
    pub id: ItemId,
    pub item: Item,
    pub(crate) equipped: bool,
}

impl OwnedItem {
    pub fn new(id: ItemId, item: Item) -> Self {
        Self {
            id,
            item,
            equipped: false,
        }
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn category(&self) -> ItemCategory {
        self.item.category
    }
}
