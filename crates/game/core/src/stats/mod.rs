//! Effective stat computation.
//!
//! ```text
//! [ Base Stats (archetype table) ]
//!      +
//! [ Equipment Bonuses (equipped weapons/armor) ]
//!      ↓
//! [ StatsSnapshot (effective attack / defense / health) ]
//! ```
//!
//! ## Principles
//!
//! 1. **SSOT**: Base stats live on the character, equip flags live in the ledger
//! 2. **Derived, never stored**: Effective values are recomputed on demand
//! 3. **Snapshot Consistency**: Encounters resolve against a locked snapshot

pub mod bonus;
pub mod snapshot;

pub use bonus::EquipmentBonuses;
pub use snapshot::StatsSnapshot;
