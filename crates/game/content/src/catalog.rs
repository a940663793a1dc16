//! Built-in shop catalog.

use game_core::Item;

/// The shop's stock when no data directory is configured.
///
/// Order matters: it is the order the shop lists and numbers its entries.
pub fn default_catalog() -> Vec<Item> {
    vec![
        Item::weapon(
            "Old Sword",
            "A worn blade. Still better than fighting bare-handed.",
            300,
            5,
        ),
        Item::weapon("Bronze Axe", "An axe forged from sturdy bronze.", 500, 8),
        Item::weapon("Steel Sword", "A keen sword of tempered steel.", 1000, 12),
        Item::armor("Leather Armor", "Basic armor stitched from leather.", 300, 5),
        Item::armor("Chainmail", "Flexible armor of linked iron rings.", 800, 10),
        Item::armor("Steel Armor", "Heavy plates of hardened steel.", 1500, 15),
        Item::consumable("Health Potion", "Restores 30 health.", 100, 30),
        Item::consumable("Greater Health Potion", "Restores 60 health.", 300, 60),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ItemCategory;

    #[test]
    fn catalog_lists_weapons_then_armor_then_potions() {
        let catalog = default_catalog();
        let categories: Vec<_> = catalog.iter().map(|item| item.category).collect();
        assert_eq!(
            categories,
            [
                ItemCategory::Weapon,
                ItemCategory::Weapon,
                ItemCategory::Weapon,
                ItemCategory::Armor,
                ItemCategory::Armor,
                ItemCategory::Armor,
                ItemCategory::Consumable,
                ItemCategory::Consumable,
            ]
        );
    }

    #[test]
    fn prices_and_bonuses() {
        let catalog = default_catalog();
        let steel = &catalog[2];
        assert_eq!((steel.name.as_str(), steel.price, steel.attack_bonus), ("Steel Sword", 1000, 12));
        let potion = &catalog[7];
        assert_eq!((potion.price, potion.health_bonus), (300, 60));
        assert!(catalog.iter().all(|item| !item.name.is_empty()));
    }
}
