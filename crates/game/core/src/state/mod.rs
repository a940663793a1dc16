//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the character, the
//! items they carry and their gold. Runtime layers hold this state for the
//! lifetime of a session and mutate it only through the operations defined
//! here and in [`crate::economy`] / [`crate::combat`].
pub mod character;
pub mod item;
pub mod ledger;

pub use character::{Archetype, ArchetypeProfile, Character, CharacterError, StarterItem};
pub use item::{Item, ItemCategory, ItemId, OwnedItem};
pub use ledger::{EquipChange, EquipmentLedger, LedgerError};

/// Builds the ledger a freshly created character starts with.
///
/// The balance and items come from the archetype table; starting items are
/// handed out unequipped.
pub fn starting_ledger(archetype: Archetype) -> EquipmentLedger {
    let profile = archetype.profile();
    let mut ledger = EquipmentLedger::new(profile.starting_gold);
    for starter in profile.starting_items {
        ledger.add_template(&starter.to_item());
    }
    ledger
}
