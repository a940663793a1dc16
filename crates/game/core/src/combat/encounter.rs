//! Applying an encounter verdict to the character's ledger.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::loot::generate_loot;
use crate::state::{Character, EquipmentLedger, Item, ItemId, LedgerError};
use crate::stats::StatsSnapshot;

use super::resolve::{Combatant, EncounterReport, resolve_encounter};
use super::tier::DungeonTier;

/// What happened to the ledger after the verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory {
        reward: u32,
        /// Generated item that was added to the ledger, if the drop roll hit.
        loot: Option<(ItemId, Item)>,
    },
    Defeat {
        penalty: u32,
    },
}

impl EncounterOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Victory { .. })
    }
}

/// Full record of one dungeon entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DungeonRun {
    pub tier: DungeonTier,
    pub snapshot: StatsSnapshot,
    pub report: EncounterReport,
    pub outcome: EncounterOutcome,
}

/// Resolve `tier` against the character's current effective stats and settle
/// the result.
///
/// Victory credits the tier reward, then rolls a d100 against
/// `loot_drop_chance_percent` for one generated item. Defeat debits
/// `defeat_penalty(balance)`; items and equip flags are never touched.
///
/// # Errors
///
/// Only a ledger inconsistency can fail here; the penalty is a fraction of the
/// balance and never overdraws.
pub fn enter_dungeon(
    tier: DungeonTier,
    character: &Character,
    ledger: &mut EquipmentLedger,
    config: &GameConfig,
    rng: &mut (impl RngOracle + ?Sized),
) -> Result<DungeonRun, LedgerError> {
    let snapshot = StatsSnapshot::create(character, ledger);
    let report = resolve_encounter(Combatant::from(&snapshot), tier.enemy());

    let outcome = if report.victory {
        ledger.credit(tier.reward());
        let loot = if rng.chance(config.loot_drop_chance_percent) {
            let item = generate_loot(tier.level(), rng);
            let id = ledger.add_template(&item);
            Some((id, item))
        } else {
            None
        };
        EncounterOutcome::Victory {
            reward: tier.reward(),
            loot,
        }
    } else {
        let penalty = config.defeat_penalty(ledger.balance());
        ledger.debit(penalty)?;
        EncounterOutcome::Defeat { penalty }
    };

    Ok(DungeonRun {
        tier,
        snapshot,
        report,
        outcome,
    })
}
