//! Deterministic game rules shared by the runtime and the clients.
//!
//! `game-core` defines the canonical rules (characters, equipment ledger,
//! shop economy, encounter resolution, loot, scene flow) as pure APIs. All
//! randomness is drawn through [`env::RngOracle`], so every outcome is
//! reproducible from a seed.
pub mod combat;
pub mod config;
pub mod economy;
pub mod env;
pub mod error;
pub mod loot;
pub mod scene;
pub mod state;
pub mod stats;

pub use combat::{
    Combatant, DungeonRun, DungeonTier, EncounterOutcome, EncounterReport, EnemyStats,
    enter_dungeon, resolve_encounter,
};
pub use config::GameConfig;
pub use economy::{EconomyError, Purchase, Sale, Shop};
pub use env::{PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError};
pub use loot::generate_loot;
pub use scene::{MenuChoice, Scene, SceneError, SceneEvent};
pub use state::{
    Archetype, ArchetypeProfile, Character, CharacterError, EquipChange, EquipmentLedger, Item,
    ItemCategory, ItemId, LedgerError, OwnedItem, StarterItem, starting_ledger,
};
pub use stats::{EquipmentBonuses, StatsSnapshot};
