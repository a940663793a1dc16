//! Procedural reward items scaled by dungeon level.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{Item, ItemCategory};

const WEAPON_NAMES: [&str; GameConfig::LOOT_POOL_SIZE] =
    ["Rusty Sword", "Dagger", "Longsword", "Magic Staff", "Greatsword"];
const ARMOR_NAMES: [&str; GameConfig::LOOT_POOL_SIZE] = [
    "Cloth Armor",
    "Leather Vest",
    "Bronze Armor",
    "Steel Armor",
    "Magic Robe",
];

const WEAPON_DESCRIPTION: &str = "A weapon found in the dungeon.";
const ARMOR_DESCRIPTION: &str = "Armor found in the dungeon.";

const BONUS_ROLL: (u32, u32) = (3, 5);
const PRICE_ROLL: (u32, u32) = (300, 599);

/// Generate one loot item for a dungeon of the given level.
///
/// Levels outside the tier range are clamped. Draws, in order: category,
/// bonus multiplier, price multiplier, name.
///
/// Weapons carry only an attack bonus and armor only a defense bonus, in
/// `[3L, 5L]`; the price lies in `[300L, 599L]`.
pub fn generate_loot(level: u32, rng: &mut (impl RngOracle + ?Sized)) -> Item {
    let level = level.clamp(GameConfig::MIN_TIER_LEVEL, GameConfig::MAX_TIER_LEVEL);

    let category = if rng.index(2) == 0 {
        ItemCategory::Weapon
    } else {
        ItemCategory::Armor
    };
    let bonus = level * rng.range(BONUS_ROLL.0, BONUS_ROLL.1);
    let price = level * rng.range(PRICE_ROLL.0, PRICE_ROLL.1);

    match category {
        ItemCategory::Weapon => {
            let name = WEAPON_NAMES[rng.index(WEAPON_NAMES.len())];
            Item::weapon(name, WEAPON_DESCRIPTION, price, bonus)
        }
        _ => {
            let name = ARMOR_NAMES[rng.index(ARMOR_NAMES.len())];
            Item::armor(name, ARMOR_DESCRIPTION, price, bonus)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn rolls_stay_in_bounds_for_every_level() {
        let mut rng = PcgRng::seeded(7);
        for level in 1..=3 {
            for _ in 0..200 {
                let item = generate_loot(level, &mut rng);
                assert!((300 * level..=599 * level).contains(&item.price));
                match item.category {
                    ItemCategory::Weapon => {
                        assert!((3 * level..=5 * level).contains(&item.attack_bonus));
                        assert_eq!(item.defense_bonus, 0);
                        assert!(WEAPON_NAMES.contains(&item.name.as_str()));
                    }
                    ItemCategory::Armor => {
                        assert!((3 * level..=5 * level).contains(&item.defense_bonus));
                        assert_eq!(item.attack_bonus, 0);
                        assert!(ARMOR_NAMES.contains(&item.name.as_str()));
                    }
                    ItemCategory::Consumable => panic!("loot is never consumable"),
                }
                assert_eq!(item.health_bonus, 0);
            }
        }
    }

    #[test]
    fn same_seed_same_item() {
        let a = generate_loot(2, &mut PcgRng::seeded(99));
        let b = generate_loot(2, &mut PcgRng::seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_level_is_clamped() {
        let item = generate_loot(0, &mut PcgRng::seeded(1));
        assert!(item.price < 600);
        let item = generate_loot(10, &mut PcgRng::seeded(1));
        assert!(item.price >= 900 && item.price <= 1797);
    }
}
