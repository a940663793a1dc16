//! Item catalog loader.

use std::path::Path;

use game_core::Item;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

/// Loader for the shop catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the shop catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns the catalog entries in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<Item>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        if catalog.items.is_empty() {
            anyhow::bail!("Item catalog is empty");
        }
        if let Some(item) = catalog.items.iter().find(|item| item.name.trim().is_empty()) {
            anyhow::bail!("Item catalog entry priced {}G has no name", item.price);
        }
        for (index, item) in catalog.items.iter().enumerate() {
            let name = item.name.trim();
            if let Some(earlier) = catalog.items[..index]
                .iter()
                .find(|other| other.name.trim().to_lowercase() == name.to_lowercase())
            {
                anyhow::bail!(
                    "Item catalog lists \"{}\" more than once (also as \"{}\")",
                    name,
                    earlier.name.trim()
                );
            }
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ItemCategory;

    #[test]
    fn missing_bonuses_default_to_zero() {
        let items = ItemLoader::parse(
            r#"(items: [(name: "Stick", description: "", price: 1, category: Weapon)])"#,
        )
        .unwrap();
        assert_eq!(items[0].category, ItemCategory::Weapon);
        assert_eq!(items[0].attack_bonus, 0);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(ItemLoader::parse("(items: [])").is_err());
    }

    #[test]
    fn unnamed_entry_is_rejected() {
        let err = ItemLoader::parse(
            r#"(items: [(name: " ", description: "", price: 7, category: Armor)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("7G"));
    }

    #[test]
    fn names_differing_only_by_case_are_rejected() {
        let err = ItemLoader::parse(
            r#"(items: [
                (name: "Pike", description: "", price: 1, category: Weapon),
                (name: "pike", description: "", price: 9000, category: Armor),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("\"pike\" more than once"));
    }

    #[test]
    fn distinct_names_are_kept_in_order() {
        let items = ItemLoader::parse(
            r#"(items: [
                (name: "Pike", description: "", price: 1, category: Weapon),
                (name: "Pike Shield", description: "", price: 2, category: Armor),
            ])"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Pike Shield");
    }
}
