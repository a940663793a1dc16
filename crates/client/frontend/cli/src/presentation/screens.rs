//! Screen blocks for each scene.

use std::io::{self, Write};

use game_core::{
    Archetype, DungeonRun, DungeonTier, EncounterOutcome, EquipmentLedger, Item, ItemCategory,
    OwnedItem, Shop, StatsSnapshot,
};
use runtime::Player;
use strum::IntoEnumIterator;

use super::theme::Theme;

/// Short bonus summary such as `ATK +5` or `DEF +10`.
pub fn bonus_text(item: &Item) -> String {
    let parts: Vec<String> = [
        ("ATK", item.attack_bonus),
        ("DEF", item.defense_bonus),
        ("HP", item.health_bonus),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0)
    .map(|(label, value)| format!("{label} +{value}"))
    .collect();

    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

fn owned_line(theme: &Theme, owned: &OwnedItem) -> String {
    let marker = if owned.is_equipped() {
        format!("{} ", theme.equipped_marker())
    } else {
        String::new()
    };
    format!(
        "{}{} | {} | {}",
        marker,
        owned.name(),
        bonus_text(&owned.item),
        theme.muted(&owned.item.description)
    )
}

pub fn banner(w: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(w, "{}", theme.title("=================================="))?;
    writeln!(w, "{}", theme.title("   Welcome to the Dungeon Outpost"))?;
    writeln!(w, "{}", theme.title("=================================="))?;
    writeln!(w, "Adventurers gather here before descending into the depths.")
}

pub fn archetype_menu(w: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(w, "\n{}", theme.header("Choose your class"))?;
    for (number, archetype) in Archetype::iter()
        .filter(|archetype| *archetype != Archetype::FALLBACK)
        .enumerate()
    {
        let profile = archetype.profile();
        writeln!(
            w,
            "{}. {} - {} (ATK {}, DEF {}, HP {})",
            number + 1,
            archetype,
            archetype.tagline(),
            profile.attack,
            profile.defense,
            profile.health
        )?;
    }
    Ok(())
}

pub fn starting_kit(w: &mut impl Write, theme: &Theme, player: &Player) -> io::Result<()> {
    let character = player.character();
    writeln!(
        w,
        "\n{} the {} is ready. {}",
        character.name(),
        character.archetype(),
        character.archetype().tagline()
    )?;
    writeln!(w, "Starting gold: {}", theme.gold(player.ledger().balance()))?;
    writeln!(w, "Starting equipment:")?;
    for owned in player.ledger().iter() {
        writeln!(w, "- {}", owned_line(theme, owned))?;
    }
    writeln!(w, "Equip your gear from the inventory before heading out.")
}

pub fn main_menu(w: &mut impl Write, theme: &Theme) -> io::Result<()> {
    writeln!(w, "\n{}", theme.header("Dungeon Outpost"))?;
    writeln!(w, "What would you like to do here?\n")?;
    writeln!(w, "1. Status")?;
    writeln!(w, "2. Inventory")?;
    writeln!(w, "3. Shop")?;
    writeln!(w, "4. Enter the dungeon")?;
    writeln!(w, "0. Quit")
}

fn stat_line(label: &str, value: u32, bonus: u32) -> String {
    if bonus > 0 {
        format!("{label:<8}: {value} (+{bonus})")
    } else {
        format!("{label:<8}: {value}")
    }
}

pub fn status(w: &mut impl Write, theme: &Theme, player: &Player) -> io::Result<()> {
    let character = player.character();
    let stats = player.stats();

    writeln!(w, "\n{}", theme.header("Status"))?;
    writeln!(w, "Name    : {}", character.name())?;
    writeln!(w, "Class   : {}", character.archetype())?;
    writeln!(w, "{}", stat_line("Attack", stats.attack, stats.bonuses.attack))?;
    writeln!(w, "{}", stat_line("Defense", stats.defense, stats.bonuses.defense))?;
    writeln!(w, "Health  : {}", stats.max_health)?;
    writeln!(w, "Gold    : {}", theme.gold(player.ledger().balance()))?;

    writeln!(w, "\nEquipped:")?;
    let mut any = false;
    for owned in player.ledger().equipped() {
        any = true;
        writeln!(w, "- {}", owned_line(theme, owned))?;
    }
    if !any {
        writeln!(w, "{}", theme.muted("(nothing equipped)"))?;
    }
    writeln!(w, "\n0. Back")
}

/// Lists owned items, numbered from 1 when `numbered` is set.
pub fn inventory(
    w: &mut impl Write,
    theme: &Theme,
    ledger: &EquipmentLedger,
    numbered: bool,
) -> io::Result<()> {
    writeln!(w, "\n{}", theme.header("Inventory"))?;
    if ledger.is_empty() {
        return writeln!(w, "{}", theme.muted("(no items)"));
    }
    for (index, owned) in ledger.iter().enumerate() {
        if numbered {
            writeln!(w, "{}. {}", index + 1, owned_line(theme, owned))?;
        } else {
            writeln!(w, "- {}", owned_line(theme, owned))?;
        }
    }
    Ok(())
}

pub fn inventory_menu(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "\n1. Equip / unequip")?;
    writeln!(w, "0. Back")
}

pub fn shop(w: &mut impl Write, theme: &Theme, shop: &Shop, balance: u32) -> io::Result<()> {
    writeln!(w, "\n{}", theme.header("Shop"))?;
    writeln!(w, "Gold: {}\n", theme.gold(balance))?;
    catalog(w, theme, shop, false)?;
    writeln!(w, "\n1. Buy")?;
    writeln!(w, "2. Sell")?;
    writeln!(w, "0. Back")
}

/// Lists catalog entries with their prices.
pub fn catalog(w: &mut impl Write, theme: &Theme, shop: &Shop, numbered: bool) -> io::Result<()> {
    for (index, item) in shop.catalog().iter().enumerate() {
        let prefix = if numbered {
            format!("{}. ", index + 1)
        } else {
            "- ".to_string()
        };
        writeln!(
            w,
            "{}{} [{}] | {} | {} | {}",
            prefix,
            item.name,
            category_label(item.category),
            bonus_text(item),
            theme.gold(item.price),
            theme.muted(&item.description)
        )?;
    }
    Ok(())
}

/// Lists owned items with the price the shop pays for each.
pub fn sell_list(
    w: &mut impl Write,
    theme: &Theme,
    shop: &Shop,
    ledger: &EquipmentLedger,
) -> io::Result<()> {
    writeln!(w, "\n{}", theme.header("Sell items"))?;
    if ledger.is_empty() {
        return writeln!(w, "{}", theme.muted("(no items)"));
    }
    for (index, owned) in ledger.iter().enumerate() {
        writeln!(
            w,
            "{}. {} | sells for {}",
            index + 1,
            owned_line(theme, owned),
            theme.gold(shop.sell_price(&owned.item))
        )?;
    }
    Ok(())
}

fn category_label(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Weapon => "Weapon",
        ItemCategory::Armor => "Armor",
        ItemCategory::Consumable => "Potion",
    }
}

pub fn dungeon_entrance(w: &mut impl Write, theme: &Theme, stats: &StatsSnapshot) -> io::Result<()> {
    writeln!(w, "\n{}", theme.header("Dungeon entrance"))?;
    writeln!(
        w,
        "Your attack: {}, defense: {}, health: {}\n",
        stats.attack, stats.defense, stats.max_health
    )?;
    for (index, tier) in DungeonTier::all().enumerate() {
        let hint = if stats.attack >= tier.recommended_attack() {
            theme.good("ready")
        } else {
            theme.bad("under-powered")
        };
        writeln!(
            w,
            "{}. {} dungeon | recommended attack {} ({}) | reward {}",
            index + 1,
            tier,
            tier.recommended_attack(),
            hint,
            theme.gold(tier.reward())
        )?;
    }
    writeln!(w, "0. Back")
}

pub fn encounter(w: &mut impl Write, theme: &Theme, run: &DungeonRun, balance: u32) -> io::Result<()> {
    let report = &run.report;
    writeln!(w, "\n{}", theme.header(&format!("{} dungeon", run.tier)))?;
    writeln!(w, "You deal {} damage per turn.", report.player_hit)?;
    writeln!(w, "Enemies deal {} damage per turn.", report.enemy_hit)?;
    writeln!(
        w,
        "Turns to defeat the enemy: {}, turns until you fall: {}",
        report.turns_to_kill_enemy, report.turns_to_kill_player
    )?;

    match &run.outcome {
        EncounterOutcome::Victory { reward, loot } => {
            writeln!(w, "\n{}", theme.good("Victory! The dungeon is cleared."))?;
            writeln!(w, "Reward: {}", theme.gold(*reward))?;
            if let Some((_, item)) = loot {
                writeln!(
                    w,
                    "Found: {} | {} | worth {}",
                    item.name,
                    bonus_text(item),
                    theme.gold(item.price)
                )?;
            }
        }
        EncounterOutcome::Defeat { penalty } => {
            writeln!(w, "\n{}", theme.bad("Defeat... you retreat from the dungeon."))?;
            writeln!(w, "Lost: {}", theme.gold(*penalty))?;
        }
    }
    writeln!(w, "Gold: {}", theme.gold(balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EncounterReport, EquipmentBonuses};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bonus_text_lists_nonzero_bonuses() {
        assert_eq!(bonus_text(&Item::weapon("Axe", "", 1, 8)), "ATK +8");
        assert_eq!(bonus_text(&Item::consumable("Potion", "", 1, 30)), "HP +30");
        assert_eq!(bonus_text(&Item::new("Rock", "", 0, ItemCategory::Weapon)), "-");
    }

    #[test]
    fn inventory_marks_equipped_items() {
        let mut ledger = EquipmentLedger::new(0);
        let sword = ledger.add_template(&Item::weapon("Old Sword", "Worn.", 300, 5));
        ledger.add_template(&Item::armor("Chainmail", "Rings.", 800, 10));
        ledger.toggle_equip(sword).unwrap();

        let text = render(|w| inventory(w, &Theme::plain(), &ledger, true));
        assert!(text.contains("1. [E] Old Sword | ATK +5 | Worn."));
        assert!(text.contains("2. Chainmail | DEF +10 | Rings."));
    }

    #[test]
    fn empty_inventory_says_so() {
        let text = render(|w| inventory(w, &Theme::plain(), &EquipmentLedger::new(0), false));
        assert!(text.contains("(no items)"));
    }

    #[test]
    fn stat_line_shows_bonus_in_parentheses() {
        assert_eq!(stat_line("Attack", 15, 5), "Attack  : 15 (+5)");
        assert_eq!(stat_line("Defense", 8, 0), "Defense : 8");
    }

    #[test]
    fn entrance_flags_under_powered_tiers() {
        let stats = StatsSnapshot {
            attack: 12,
            defense: 8,
            max_health: 90,
            bonuses: EquipmentBonuses::new(),
        };
        let text = render(|w| dungeon_entrance(w, &Theme::plain(), &stats));
        assert!(text.contains("1. Easy dungeon | recommended attack 5 (ready)"));
        assert!(text.contains("3. Hard dungeon | recommended attack 15 (under-powered)"));
    }

    #[test]
    fn defeat_report_shows_penalty() {
        let run = DungeonRun {
            tier: DungeonTier::Hard,
            snapshot: StatsSnapshot {
                attack: 15,
                defense: 5,
                max_health: 80,
                bonuses: EquipmentBonuses::new(),
            },
            report: EncounterReport {
                player_hit: 3,
                enemy_hit: 13,
                turns_to_kill_enemy: 8,
                turns_to_kill_player: 6,
                victory: false,
            },
            outcome: EncounterOutcome::Defeat { penalty: 100 },
        };
        let text = render(|w| encounter(w, &Theme::plain(), &run, 900));
        assert!(text.contains("You deal 3 damage per turn."));
        assert!(text.contains("Lost: 100 G"));
        assert!(text.contains("Gold: 900 G"));
    }
}
