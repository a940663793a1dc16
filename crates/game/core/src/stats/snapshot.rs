//! StatsSnapshot - effective stats at a point in time.
//!
//! The snapshot captures the character's effective values at a specific moment
//! (typically when a dungeon is entered), so the encounter resolver works on a
//! fixed set of numbers regardless of later inventory changes.

use crate::state::{Character, EquipmentLedger};

use super::bonus::EquipmentBonuses;

/// Effective combat stats: base stats plus equipped bonuses.
///
/// All values are computed and locked at snapshot creation.
/// The snapshot is immutable - create a new one if state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    /// Effective attack (base + weapon/armor attack bonuses).
    pub attack: u32,

    /// Effective defense (base + weapon/armor defense bonuses).
    pub defense: u32,

    /// Maximum health. Equipment health bonuses are reported in `bonuses`
    /// but do not raise the encounter health pool.
    pub max_health: u32,

    /// Breakdown of what equipment contributed.
    pub bonuses: EquipmentBonuses,
}

impl StatsSnapshot {
    /// Create a snapshot from a character and the ledger they carry.
    pub fn create(character: &Character, ledger: &EquipmentLedger) -> Self {
        let bonuses = EquipmentBonuses::from_items(ledger.equipped());
        Self::from_parts(character, bonuses)
    }

    /// Create a snapshot from explicit bonuses.
    pub fn from_parts(character: &Character, bonuses: EquipmentBonuses) -> Self {
        Self {
            attack: character.base_attack().saturating_add(bonuses.attack),
            defense: character.base_defense().saturating_add(bonuses.defense),
            max_health: character.max_health(),
            bonuses,
        }
    }

    /// Snapshot with no equipment (base stats only).
    pub fn from_base(character: &Character) -> Self {
        Self::from_parts(character, EquipmentBonuses::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Archetype, Item, starting_ledger};

    #[test]
    fn equipping_raises_effective_stats() {
        let warrior = Character::new("Conan", Archetype::Warrior).unwrap();
        let mut ledger = EquipmentLedger::new(0);
        let sword = ledger.add_template(&Item::weapon("Steel Sword", "", 1000, 12));
        let mail = ledger.add_template(&Item::armor("Chainmail", "", 800, 10));

        assert_eq!(StatsSnapshot::create(&warrior, &ledger), StatsSnapshot::from_base(&warrior));

        ledger.toggle_equip(sword).unwrap();
        ledger.toggle_equip(mail).unwrap();
        let snapshot = StatsSnapshot::create(&warrior, &ledger);
        assert_eq!(snapshot.attack, 22);
        assert_eq!(snapshot.defense, 25);
        assert_eq!(snapshot.max_health, 100);
        assert_eq!(snapshot.bonuses.attack, 12);
    }

    #[test]
    fn equip_unequip_is_an_involution() {
        let mage = Character::new("Merlin", Archetype::Mage).unwrap();
        let mut ledger = starting_ledger(Archetype::Mage);
        let before = StatsSnapshot::create(&mage, &ledger);

        let ids: Vec<_> = ledger.iter().map(|item| item.id).collect();
        for id in &ids {
            ledger.toggle_equip(*id).unwrap();
        }
        assert_ne!(StatsSnapshot::create(&mage, &ledger), before);

        for id in &ids {
            ledger.toggle_equip(*id).unwrap();
        }
        assert_eq!(StatsSnapshot::create(&mage, &ledger), before);
    }

    #[test]
    fn removing_equipped_armor_reverts_defense() {
        let archer = Character::new("Robin", Archetype::Archer).unwrap();
        let mut ledger = EquipmentLedger::new(0);
        let vest = ledger.add_template(&Item::armor("Leather Armor", "", 300, 5));
        ledger.toggle_equip(vest).unwrap();
        assert_eq!(StatsSnapshot::create(&archer, &ledger).defense, 13);

        ledger.remove(vest).unwrap();
        assert_eq!(StatsSnapshot::create(&archer, &ledger).defense, 8);
        assert!(ledger.items().iter().all(|item| item.id != vest));
    }
}
