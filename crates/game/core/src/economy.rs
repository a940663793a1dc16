//! Shop economy: buying catalog templates and selling owned items.
//!
//! The catalog is fixed at construction and has unlimited stock. Every
//! transaction either completes fully or leaves the ledger untouched.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EquipmentLedger, Item, ItemId, LedgerError, OwnedItem};

/// Errors surfaced by shop transactions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EconomyError {
    #[error("not enough gold for {item}: costs {price}G, have {balance}G")]
    InsufficientFunds {
        item: String,
        price: u32,
        balance: u32,
    },

    #[error("catalog has no entry at position {index}")]
    UnknownCatalogEntry { index: usize },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl GameError for EconomyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::UnknownCatalogEntry { .. } => ErrorSeverity::Validation,
            Self::Ledger(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "ECONOMY_INSUFFICIENT_FUNDS",
            Self::UnknownCatalogEntry { .. } => "ECONOMY_UNKNOWN_CATALOG_ENTRY",
            Self::Ledger(inner) => inner.error_code(),
        }
    }
}

/// Completed purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub id: ItemId,
    pub name: String,
    pub price: u32,
}

/// Completed sale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sale {
    pub item: OwnedItem,
    pub amount: u32,
}

/// Immutable catalog of purchasable templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shop {
    catalog: Vec<Item>,
    sell_price_divisor: u32,
}

impl Shop {
    /// Takes only the buy-back divisor from `config`; a divisor of zero is
    /// treated as one.
    pub fn new(catalog: Vec<Item>, config: &GameConfig) -> Self {
        Self {
            catalog,
            sell_price_divisor: config.sell_price_divisor.max(1),
        }
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Price the shop pays back for an item.
    pub fn sell_price(&self, item: &Item) -> u32 {
        item.price / self.sell_price_divisor
    }

    /// Buys the template at `index`, adding a fresh copy to the ledger.
    ///
    /// # Errors
    ///
    /// - `EconomyError::UnknownCatalogEntry` if `index` is out of range
    /// - `EconomyError::InsufficientFunds` if the balance is below the price;
    ///   the ledger is left untouched
    pub fn buy(
        &self,
        index: usize,
        ledger: &mut EquipmentLedger,
    ) -> Result<Purchase, EconomyError> {
        let template = self
            .catalog
            .get(index)
            .ok_or(EconomyError::UnknownCatalogEntry { index })?;

        if ledger.balance() < template.price {
            return Err(EconomyError::InsufficientFunds {
                item: template.name.clone(),
                price: template.price,
                balance: ledger.balance(),
            });
        }

        ledger.debit(template.price)?;
        let id = ledger.add(template.purchase());

        Ok(Purchase {
            id,
            name: template.name.clone(),
            price: template.price,
        })
    }

    /// Sells an owned item back to the shop for its price floor-divided by the
    /// configured divisor (half by default).
    ///
    /// Equipped items are unequipped as part of removal.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::Ledger(LedgerError::ItemNotOwned)` when the item is
    /// not in the ledger; nothing changes in that case.
    pub fn sell(&self, id: ItemId, ledger: &mut EquipmentLedger) -> Result<Sale, EconomyError> {
        let item = ledger.remove(id)?;
        let amount = self.sell_price(&item.item);
        ledger.credit(amount);
        Ok(Sale { item, amount })
    }
}
