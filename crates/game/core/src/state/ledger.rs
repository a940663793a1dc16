//! Equipment ledger: owned items, equip flags and the gold balance.
//!
//! The ledger is the single source of truth for what a character carries.
//! Effective combat stats are computed from the equipped subset (see
//! [`crate::stats::StatsSnapshot`]), so flipping an equip flag or removing an
//! item changes the stats in the same operation.

use crate::error::{ErrorSeverity, GameError};

use super::item::{Item, ItemId, OwnedItem};

/// Errors surfaced by ledger operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("item {0} is not in the inventory")]
    ItemNotOwned(ItemId),

    #[error("{name} cannot be equipped")]
    NotEquippable { id: ItemId, name: String },

    #[error("insufficient gold: need {required}G, have {balance}G")]
    InsufficientFunds { required: u32, balance: u32 },
}

impl GameError for LedgerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ItemNotOwned(_) | Self::NotEquippable { .. } => ErrorSeverity::Validation,
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ItemNotOwned(_) => "LEDGER_ITEM_NOT_OWNED",
            Self::NotEquippable { .. } => "LEDGER_NOT_EQUIPPABLE",
            Self::InsufficientFunds { .. } => "LEDGER_INSUFFICIENT_FUNDS",
        }
    }
}

/// Result of an equip toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipChange {
    Equipped,
    Unequipped,
}

/// Ordered collection of owned items plus a currency balance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentLedger {
    items: Vec<OwnedItem>,
    balance: u32,
    /// Sequential item ID allocator (monotonically increasing, never reused).
    next_item_id: u32,
}

impl EquipmentLedger {
    /// Creates an empty ledger holding `balance` gold.
    pub fn new(balance: u32) -> Self {
        Self {
            items: Vec::new(),
            balance,
            next_item_id: 0,
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================================================================
    // Currency
    // ========================================================================

    /// Adds gold to the balance, saturating at `u32::MAX`.
    pub fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Removes gold from the balance.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InsufficientFunds` and leaves the balance untouched
    /// when `amount` exceeds the balance.
    pub fn debit(&mut self, amount: u32) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Appends an item and returns the ID it was assigned.
    ///
    /// Items are never merged: two copies of the same template are two entries.
    /// The incoming equip flag is cleared.
    pub fn add(&mut self, mut item: OwnedItem) -> ItemId {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;

        item.id = id;
        item.equipped = false;
        self.items.push(item);
        id
    }

    /// Adds a fresh copy of `template`, returning the new ID.
    pub fn add_template(&mut self, template: &Item) -> ItemId {
        self.add(template.purchase())
    }

    /// Removes an item from the ledger.
    ///
    /// An equipped item is unequipped first, so its bonus stops counting
    /// towards effective stats regardless of who calls this.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::ItemNotOwned` if no item has this ID.
    pub fn remove(&mut self, id: ItemId) -> Result<OwnedItem, LedgerError> {
        let index = self.position(id)?;
        let mut item = self.items.remove(index);
        item.equipped = false;
        Ok(item)
    }

    /// Flips the equip flag of an owned weapon or armor piece.
    ///
    /// # Errors
    ///
    /// - `LedgerError::ItemNotOwned` if no item has this ID
    /// - `LedgerError::NotEquippable` for consumables
    pub fn toggle_equip(&mut self, id: ItemId) -> Result<EquipChange, LedgerError> {
        let index = self.position(id)?;
        let item = &mut self.items[index];

        if !item.category().is_equippable() {
            return Err(LedgerError::NotEquippable {
                id,
                name: item.item.name.clone(),
            });
        }

        item.equipped = !item.equipped;
        Ok(if item.equipped {
            EquipChange::Equipped
        } else {
            EquipChange::Unequipped
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns a snapshot copy of every owned item, in acquisition order.
    pub fn items(&self) -> Vec<OwnedItem> {
        self.items.clone()
    }

    /// Iterates owned items without copying.
    pub fn iter(&self) -> impl Iterator<Item = &OwnedItem> + '_ {
        self.items.iter()
    }

    /// Returns copies of the currently equipped items.
    pub fn equipped_items(&self) -> Vec<OwnedItem> {
        self.equipped().cloned().collect()
    }

    /// Iterates the currently equipped items.
    pub fn equipped(&self) -> impl Iterator<Item = &OwnedItem> + '_ {
        self.items.iter().filter(|item| item.equipped)
    }

    pub fn get(&self, id: ItemId) -> Option<&OwnedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the item at a zero-based listing position.
    pub fn get_by_index(&self, index: usize) -> Option<&OwnedItem> {
        self.items.get(index)
    }

    /// Finds the first item whose name matches `name`, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<&OwnedItem> {
        self.items
            .iter()
            .find(|item| item.item.name.eq_ignore_ascii_case(name))
    }

    fn position(&self, id: ItemId) -> Result<usize, LedgerError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(LedgerError::ItemNotOwned(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::item::ItemCategory;

    fn sword() -> Item {
        Item::weapon("Old Sword", "An old blade.", 300, 5)
    }

    #[test]
    fn debit_never_overdraws() {
        let mut ledger = EquipmentLedger::new(100);
        assert_eq!(
            ledger.debit(101),
            Err(LedgerError::InsufficientFunds {
                required: 101,
                balance: 100
            })
        );
        assert_eq!(ledger.balance(), 100);

        ledger.debit(100).unwrap();
        assert_eq!(ledger.balance(), 0);
        assert!(ledger.debit(1).is_err());
        ledger.debit(0).unwrap();
    }

    #[test]
    fn credit_saturates() {
        let mut ledger = EquipmentLedger::new(u32::MAX - 1);
        ledger.credit(10);
        assert_eq!(ledger.balance(), u32::MAX);
    }

    #[test]
    fn duplicates_stay_distinct() {
        let mut ledger = EquipmentLedger::new(0);
        let first = ledger.add_template(&sword());
        let second = ledger.add_template(&sword());

        assert_ne!(first, second);
        assert_eq!(ledger.len(), 2);

        ledger.toggle_equip(second).unwrap();
        assert!(!ledger.get(first).unwrap().is_equipped());
        assert!(ledger.get(second).unwrap().is_equipped());
    }

    #[test]
    fn remove_unequips_and_deletes() {
        let mut ledger = EquipmentLedger::new(0);
        let id = ledger.add_template(&Item::armor("Leather Armor", "", 300, 5));
        ledger.toggle_equip(id).unwrap();

        let removed = ledger.remove(id).unwrap();
        assert!(!removed.is_equipped());
        assert!(ledger.is_empty());
        assert_eq!(ledger.equipped().count(), 0);
        assert_eq!(ledger.remove(id), Err(LedgerError::ItemNotOwned(id)));
    }

    #[test]
    fn toggle_rejects_missing_and_consumables() {
        let mut ledger = EquipmentLedger::new(0);
        assert_eq!(
            ledger.toggle_equip(ItemId(7)),
            Err(LedgerError::ItemNotOwned(ItemId(7)))
        );

        let potion = ledger.add_template(&Item::consumable("Health Potion", "", 100, 30));
        assert!(matches!(
            ledger.toggle_equip(potion),
            Err(LedgerError::NotEquippable { .. })
        ));
        assert!(!ledger.get(potion).unwrap().is_equipped());
    }

    #[test]
    fn toggle_round_trip() {
        let mut ledger = EquipmentLedger::new(0);
        let id = ledger.add_template(&sword());
        assert_eq!(ledger.toggle_equip(id), Ok(EquipChange::Equipped));
        assert_eq!(ledger.equipped_items().len(), 1);
        assert_eq!(ledger.toggle_equip(id), Ok(EquipChange::Unequipped));
        assert!(ledger.equipped_items().is_empty());
    }

    #[test]
    fn items_returns_detached_snapshot() {
        let mut ledger = EquipmentLedger::new(0);
        ledger.add_template(&sword());

        let mut snapshot = ledger.items();
        snapshot.clear();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn find_by_name_is_case_insensitive_first_match() {
        let mut ledger = EquipmentLedger::new(0);
        let first = ledger.add_template(&sword());
        ledger.add_template(&sword());
        ledger.add_template(&Item::new("Map", "", 0, ItemCategory::Consumable));

        assert_eq!(ledger.find_by_name("old SWORD").map(|i| i.id), Some(first));
        assert!(ledger.find_by_name("old").is_none());
        assert!(ledger.find_by_name("Steel Sword").is_none());
    }
}
