//! The encounter outcome formula.

use crate::stats::StatsSnapshot;

use super::tier::EnemyStats;

/// Player side of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub attack: u32,
    pub defense: u32,
    pub health: u32,
}

impl From<&StatsSnapshot> for Combatant {
    fn from(snapshot: &StatsSnapshot) -> Self {
        Self {
            attack: snapshot.attack,
            defense: snapshot.defense,
            health: snapshot.max_health,
        }
    }
}

/// Intermediate quantities and verdict of one resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterReport {
    pub player_hit: u32,
    pub enemy_hit: u32,
    pub turns_to_kill_enemy: u32,
    pub turns_to_kill_player: u32,
    pub victory: bool,
}

/// Resolve an encounter between `player` and `enemy`.
///
/// # Formula
///
/// ```text
/// player_hit           = max(1, attack - enemy.defense)
/// enemy_hit            = max(1, enemy.attack - defense)
/// turns_to_kill_enemy  = max(1, enemy.defense * 2 / player_hit)
/// turns_to_kill_player = max(1, health / enemy_hit)
/// victory              = turns_to_kill_enemy <= turns_to_kill_player
/// ```
///
/// Subtractions saturate at zero, so no hit is ever below one and the
/// divisions are always defined. Ties go to the player.
pub fn resolve_encounter(player: Combatant, enemy: EnemyStats) -> EncounterReport {
    let player_hit = player.attack.saturating_sub(enemy.defense).max(1);
    let enemy_hit = enemy.attack.saturating_sub(player.defense).max(1);

    let enemy_pool = u64::from(enemy.defense) * 2;
    let turns_to_kill_enemy = clamp_turns(enemy_pool / u64::from(player_hit));
    let turns_to_kill_player = clamp_turns(u64::from(player.health) / u64::from(enemy_hit));

    EncounterReport {
        player_hit,
        enemy_hit,
        turns_to_kill_enemy,
        turns_to_kill_player,
        victory: turns_to_kill_enemy <= turns_to_kill_player,
    }
}

fn clamp_turns(turns: u64) -> u32 {
    u32::try_from(turns).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(attack: u32, defense: u32, health: u32) -> Combatant {
        Combatant {
            attack,
            defense,
            health,
        }
    }

    #[test]
    fn easy_victory() {
        let report = resolve_encounter(player(15, 10, 100), EnemyStats::new(5, 3));
        assert_eq!(
            report,
            EncounterReport {
                player_hit: 12,
                enemy_hit: 1,
                turns_to_kill_enemy: 1,
                turns_to_kill_player: 100,
                victory: true,
            }
        );
    }

    #[test]
    fn weak_player_loses_hard_tier() {
        let report = resolve_encounter(player(5, 0, 10), EnemyStats::new(18, 12));
        assert_eq!(report.player_hit, 1);
        assert_eq!(report.enemy_hit, 18);
        assert_eq!(report.turns_to_kill_enemy, 24);
        assert_eq!(report.turns_to_kill_player, 1);
        assert!(!report.victory);
    }

    #[test]
    fn degenerate_stats_clamp_to_one() {
        let report = resolve_encounter(player(0, 50, 0), EnemyStats::new(0, 0));
        assert_eq!(report.player_hit, 1);
        assert_eq!(report.enemy_hit, 1);
        assert_eq!(report.turns_to_kill_enemy, 1);
        assert_eq!(report.turns_to_kill_player, 1);
        assert!(report.victory);
    }

    #[test]
    fn tie_goes_to_player() {
        // enemy pool 12 / hit 4 = 3 turns; 30 health / 10 = 3 turns
        let report = resolve_encounter(player(10, 0, 30), EnemyStats::new(10, 6));
        assert_eq!(report.turns_to_kill_enemy, report.turns_to_kill_player);
        assert!(report.victory);
    }
}
