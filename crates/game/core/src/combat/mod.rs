//! Encounter resolution.
//!
//! Encounters are resolved analytically: both sides' per-turn hits are derived
//! from a stat snapshot, turns-to-kill are compared, and the verdict falls out.
//! No rounds are simulated and the resolver never draws randomness.
//!
//! # Core Functions
//!
//! - `resolve_encounter`: the pure outcome formula
//! - `enter_dungeon`: resolve against a tier and apply reward, loot or penalty

pub mod encounter;
pub mod resolve;
pub mod tier;

pub use encounter::{DungeonRun, EncounterOutcome, enter_dungeon};
pub use resolve::{Combatant, EncounterReport, resolve_encounter};
pub use tier::{DungeonTier, EnemyStats};
