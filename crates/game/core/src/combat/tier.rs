//! Static dungeon difficulty presets.

use strum::IntoEnumIterator;

/// Attack and defense of the opposition in an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyStats {
    pub attack: u32,
    pub defense: u32,
}

impl EnemyStats {
    pub const fn new(attack: u32, defense: u32) -> Self {
        Self { attack, defense }
    }
}

/// Fixed dungeon difficulty.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DungeonTier {
    Easy,
    Normal,
    Hard,
}

impl DungeonTier {
    /// Difficulty level, also the loot scaling factor.
    pub const fn level(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Normal => 2,
            Self::Hard => 3,
        }
    }

    pub const fn enemy(self) -> EnemyStats {
        match self {
            Self::Easy => EnemyStats::new(5, 3),
            Self::Normal => EnemyStats::new(10, 6),
            Self::Hard => EnemyStats::new(18, 12),
        }
    }

    /// Gold credited on victory.
    pub const fn reward(self) -> u32 {
        match self {
            Self::Easy => 500,
            Self::Normal => 1500,
            Self::Hard => 3000,
        }
    }

    /// Attack value shown to the player as guidance. Not used by the resolver.
    pub const fn recommended_attack(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Normal => 10,
            Self::Hard => 15,
        }
    }

    /// Tier at a 1-based menu position.
    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice.checked_sub(1)?).ok()?;
        Self::iter().nth(index)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
