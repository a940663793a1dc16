//! Character identity and archetype lookup.
//!
//! Base stats and the starting kit are pure configuration: each [`Archetype`]
//! maps to exactly one [`ArchetypeProfile`] row. Nothing on a [`Character`]
//! changes after creation; effective stats are derived from the ledger.

use super::item::{Item, ItemCategory};

/// Closed set of playable archetypes.
///
/// `Soldier` doubles as the fallback for unrecognized selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    Warrior,
    Mage,
    Archer,
    Soldier,
}

impl Archetype {
    /// Archetype used when a selection does not name a known archetype.
    pub const FALLBACK: Self = Self::Soldier;

    /// Resolves free-form player input into an archetype.
    ///
    /// Accepts the menu number or a name, English (case-insensitive) or
    /// Korean. Anything else, including empty input, resolves to
    /// [`Archetype::FALLBACK`].
    pub fn from_choice(input: &str) -> Self {
        let choice = input.trim().to_lowercase();
        match choice.as_str() {
            "1" | "warrior" | "전사" => Self::Warrior,
            "2" | "mage" | "wizard" | "마법사" => Self::Mage,
            "3" | "archer" | "궁수" => Self::Archer,
            _ => Self::FALLBACK,
        }
    }

    /// One-line pitch shown on the selection menu.
    pub const fn tagline(&self) -> &'static str {
        match self {
            Self::Warrior => "close-combat expert with high defense and health",
            Self::Mage => "ranged spellcaster with powerful attack",
            Self::Archer => "ranged specialist with balanced stats",
            Self::Soldier => "modern infantry with overwhelming firepower",
        }
    }

    /// Looks up the configuration row for this archetype.
    pub fn profile(&self) -> &'static ArchetypeProfile {
        match self {
            Self::Warrior => &WARRIOR,
            Self::Mage => &MAGE,
            Self::Archer => &ARCHER,
            Self::Soldier => &SOLDIER,
        }
    }
}

/// Static description of an item handed out at character creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarterItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub category: ItemCategory,
    pub attack: u32,
    pub defense: u32,
}

impl StarterItem {
    const fn weapon(name: &'static str, description: &'static str, price: u32, attack: u32) -> Self {
        Self {
            name,
            description,
            price,
            category: ItemCategory::Weapon,
            attack,
            defense: 0,
        }
    }

    const fn armor(name: &'static str, description: &'static str, price: u32, defense: u32) -> Self {
        Self {
            name,
            description,
            price,
            category: ItemCategory::Armor,
            attack: 0,
            defense,
        }
    }

    /// Materializes the starter as an item template.
    pub fn to_item(&self) -> Item {
        Item::new(self.name, self.description, self.price, self.category)
            .with_attack(self.attack)
            .with_defense(self.defense)
    }
}

/// Base stats and starting kit for one archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchetypeProfile {
    pub attack: u32,
    pub defense: u32,
    pub health: u32,
    pub starting_gold: u32,
    pub starting_items: &'static [StarterItem],
}

static WARRIOR: ArchetypeProfile = ArchetypeProfile {
    attack: 10,
    defense: 15,
    health: 100,
    starting_gold: 1000,
    starting_items: &[
        StarterItem::weapon("Squire's Sword", "A basic sword.", 300, 5),
        StarterItem::armor("Leather Armor", "Provides basic protection.", 200, 5),
    ],
};

static MAGE: ArchetypeProfile = ArchetypeProfile {
    attack: 15,
    defense: 5,
    health: 80,
    starting_gold: 1000,
    starting_items: &[
        StarterItem::weapon(
            "Apprentice Staff",
            "A basic staff that gathers magical energy.",
            300,
            5,
        ),
        StarterItem::armor("Cloth Robe", "A robe that responds to magical energy.", 200, 3),
    ],
};

static ARCHER: ArchetypeProfile = ArchetypeProfile {
    attack: 12,
    defense: 8,
    health: 90,
    starting_gold: 1000,
    starting_items: &[
        StarterItem::weapon("Practice Bow", "A basic bow.", 300, 5),
        StarterItem::armor(
            "Light Vest",
            "Light protection that does not hinder movement.",
            200,
            4,
        ),
    ],
};

static SOLDIER: ArchetypeProfile = ArchetypeProfile {
    attack: 100,
    defense: 100,
    health: 100,
    starting_gold: 5000,
    starting_items: &[
        StarterItem::weapon("K2 Rifle", "The standard-issue service rifle.", 2000, 20),
        StarterItem::weapon("K2C1 Rifle", "An improved K2 with a tactical rail.", 3000, 25),
        StarterItem::armor(
            "K3 Gas Mask",
            "Protects against chemical and biological attacks.",
            1000,
            25,
        ),
        StarterItem::armor(
            "Level III Body Armor",
            "High-grade armor that stops bullets.",
            2000,
            25,
        ),
        StarterItem::armor("Lightweight Helmet", "A light, sturdy combat helmet.", 1500, 25),
    ],
};

/// Errors raised while creating a character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    #[error("character name must not be empty")]
    EmptyName,
}

impl crate::error::GameError for CharacterError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "CHARACTER_EMPTY_NAME",
        }
    }
}

/// The player character. Base stats are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    archetype: Archetype,
    base_attack: u32,
    base_defense: u32,
    max_health: u32,
}

impl Character {
    /// Creates a character, taking base stats from the archetype table.
    ///
    /// The name is trimmed and must not be empty afterwards.
    pub fn new(name: &str, archetype: Archetype) -> Result<Self, CharacterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CharacterError::EmptyName);
        }

        let profile = archetype.profile();
        Ok(Self {
            name: name.to_owned(),
            archetype,
            base_attack: profile.attack,
            base_defense: profile.defense,
            max_health: profile.health,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    pub fn base_defense(&self) -> u32 {
        self.base_defense
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }
}
