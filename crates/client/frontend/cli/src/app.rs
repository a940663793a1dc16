//! Scene loop tying the session, prompt and screens together.
use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use game_core::{Archetype, DungeonTier, EquipChange, GameError, MenuChoice, Scene, SceneEvent};
use runtime::{GameSession, RuntimeError};

use crate::config::CliConfig;
use crate::input::Prompt;
use crate::presentation::{Theme, screens};

/// Whether a sub-menu should keep the surrounding scene open.
enum Flow {
    Stay,
    InputClosed,
}

/// Interactive text client driving one [`GameSession`] to completion.
pub struct CliApp<R, W> {
    session: GameSession,
    prompt: Prompt<R, W>,
    theme: Theme,
    config: CliConfig,
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(session: GameSession, reader: R, writer: W, config: CliConfig) -> Self {
        Self {
            session,
            prompt: Prompt::new(reader, writer),
            theme: Theme::new(config.color),
            config,
        }
    }

    pub fn into_writer(self) -> W {
        self.prompt.into_writer()
    }

    /// Run scenes until the session terminates.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("CLI session started");
        while self.session.is_running() {
            match self.session.scene() {
                Scene::Start => self.start_scene()?,
                Scene::MainMenu => self.main_menu()?,
                Scene::Status => self.status_scene()?,
                Scene::Inventory => self.inventory_scene()?,
                Scene::Shop => self.shop_scene()?,
                Scene::Dungeon => self.dungeon_scene()?,
                Scene::Terminated => break,
            }
        }
        writeln!(self.prompt.writer(), "\nThanks for playing. Farewell, adventurer!")?;
        self.prompt.writer().flush()?;
        tracing::info!("CLI session finished");
        Ok(())
    }

    fn start_scene(&mut self) -> Result<()> {
        self.clear()?;
        screens::banner(self.prompt.writer(), &self.theme)?;

        let Some(name) = self.prompt.read_required("\nWhat is your name, adventurer?")? else {
            return self.advance(SceneEvent::InputClosed);
        };

        screens::archetype_menu(self.prompt.writer(), &self.theme)?;
        let Some(choice) = self.prompt.ask("\nEnter a class number or name.")? else {
            return self.advance(SceneEvent::InputClosed);
        };
        let archetype = Archetype::from_choice(&choice);
        tracing::debug!("Class input {:?} resolved to {}", choice, archetype);

        match self.session.create_character(&name, archetype) {
            Ok(player) => screens::starting_kit(self.prompt.writer(), &self.theme, player)?,
            Err(e) => self.report(e)?,
        }
        self.pause()
    }

    fn main_menu(&mut self) -> Result<()> {
        self.clear()?;
        screens::main_menu(self.prompt.writer(), &self.theme)?;

        let event = match self
            .prompt
            .choose(0, MenuChoice::MAX)?
            .and_then(MenuChoice::from_number)
        {
            Some(choice) => SceneEvent::Select(choice),
            None => SceneEvent::InputClosed,
        };
        self.advance(event)
    }

    fn status_scene(&mut self) -> Result<()> {
        self.clear()?;
        let player = self.session.player().ok_or(RuntimeError::NoCharacter)?;
        screens::status(self.prompt.writer(), &self.theme, player)?;
        self.prompt.choose(0, 0)?;
        self.advance(SceneEvent::Back)
    }

    fn inventory_scene(&mut self) -> Result<()> {
        loop {
            self.clear()?;
            let ledger = self
                .session
                .player()
                .ok_or(RuntimeError::NoCharacter)?
                .ledger();
            screens::inventory(self.prompt.writer(), &self.theme, ledger, false)?;
            screens::inventory_menu(self.prompt.writer())?;

            let flow = match self.prompt.choose(0, 1)? {
                Some(1) => self.equip_menu()?,
                _ => break,
            };
            if let Flow::InputClosed = flow {
                break;
            }
        }
        self.advance(SceneEvent::Back)
    }

    fn equip_menu(&mut self) -> Result<Flow> {
        let ledger = self
            .session
            .player()
            .ok_or(RuntimeError::NoCharacter)?
            .ledger();
        screens::inventory(self.prompt.writer(), &self.theme, ledger, true)?;
        writeln!(self.prompt.writer(), "0. Cancel")?;
        let count = menu_len(ledger.len());

        let Some(choice) = self.prompt.choose(0, count)? else {
            return Ok(Flow::InputClosed);
        };
        let Some(target) = self.owned_at(choice) else {
            return Ok(Flow::Stay);
        };

        match self.session.toggle_equip(target.0) {
            Ok(EquipChange::Equipped) => {
                let line = self.theme.good(&format!("{} equipped.", target.1));
                writeln!(self.prompt.writer(), "{line}")?;
            }
            Ok(EquipChange::Unequipped) => {
                writeln!(self.prompt.writer(), "{} unequipped.", target.1)?;
            }
            Err(e) => self.report(e)?,
        }
        self.pause()?;
        Ok(Flow::Stay)
    }

    fn shop_scene(&mut self) -> Result<()> {
        loop {
            self.clear()?;
            let balance = self
                .session
                .player()
                .ok_or(RuntimeError::NoCharacter)?
                .ledger()
                .balance();
            screens::shop(self.prompt.writer(), &self.theme, self.session.shop(), balance)?;

            let flow = match self.prompt.choose(0, 2)? {
                Some(1) => self.buy_menu()?,
                Some(2) => self.sell_menu()?,
                _ => break,
            };
            if let Flow::InputClosed = flow {
                break;
            }
        }
        self.advance(SceneEvent::Back)
    }

    fn buy_menu(&mut self) -> Result<Flow> {
        writeln!(self.prompt.writer(), "\n{}", self.theme.header("Buy items"))?;
        screens::catalog(self.prompt.writer(), &self.theme, self.session.shop(), true)?;
        writeln!(self.prompt.writer(), "0. Cancel")?;
        let count = menu_len(self.session.shop().len());

        let Some(choice) = self.prompt.choose(0, count)? else {
            return Ok(Flow::InputClosed);
        };
        if choice == 0 {
            return Ok(Flow::Stay);
        }

        match self.session.buy(choice as usize - 1) {
            Ok(purchase) => {
                let line = self.theme.good(&format!(
                    "Purchased {} for {} G.",
                    purchase.name, purchase.price
                ));
                writeln!(self.prompt.writer(), "{line}")?;
            }
            Err(e) => self.report(e)?,
        }
        self.pause()?;
        Ok(Flow::Stay)
    }

    fn sell_menu(&mut self) -> Result<Flow> {
        let ledger = self
            .session
            .player()
            .ok_or(RuntimeError::NoCharacter)?
            .ledger();
        screens::sell_list(self.prompt.writer(), &self.theme, self.session.shop(), ledger)?;
        writeln!(self.prompt.writer(), "0. Cancel")?;
        let count = menu_len(ledger.len());

        let Some(choice) = self.prompt.choose(0, count)? else {
            return Ok(Flow::InputClosed);
        };
        let Some((id, _)) = self.owned_at(choice) else {
            return Ok(Flow::Stay);
        };

        match self.session.sell(id) {
            Ok(sale) => {
                let line = self.theme.good(&format!(
                    "Sold {} for {} G.",
                    sale.item.name(),
                    sale.amount
                ));
                writeln!(self.prompt.writer(), "{line}")?;
            }
            Err(e) => self.report(e)?,
        }
        self.pause()?;
        Ok(Flow::Stay)
    }

    fn dungeon_scene(&mut self) -> Result<()> {
        loop {
            self.clear()?;
            let stats = self.session.stats()?;
            screens::dungeon_entrance(self.prompt.writer(), &self.theme, &stats)?;

            let tier = match self.prompt.choose(0, menu_len(DungeonTier::all().count()))? {
                Some(choice) => DungeonTier::from_choice(choice),
                None => None,
            };
            let Some(tier) = tier else {
                break;
            };

            let run = self.session.enter_dungeon(tier)?;
            let balance = self
                .session
                .player()
                .ok_or(RuntimeError::NoCharacter)?
                .ledger()
                .balance();
            screens::encounter(self.prompt.writer(), &self.theme, &run, balance)?;
            self.pause()?;
        }
        self.advance(SceneEvent::Back)
    }

    /// Id and name of the owned item at a 1-based menu position.
    fn owned_at(&self, choice: u32) -> Option<(game_core::ItemId, String)> {
        let index = usize::try_from(choice.checked_sub(1)?).ok()?;
        let owned = self.session.player()?.ledger().get_by_index(index)?;
        Some((owned.id, owned.name().to_string()))
    }

    fn advance(&mut self, event: SceneEvent) -> Result<()> {
        self.session.advance(event)?;
        Ok(())
    }

    /// Shows recoverable errors to the player; internal ones abort the loop.
    fn report(&mut self, error: RuntimeError) -> Result<()> {
        if error.severity().is_internal() {
            return Err(error.into());
        }
        tracing::warn!("Operation rejected [{}]: {}", error.error_code(), error);
        let line = self.theme.bad(&error.to_string());
        writeln!(self.prompt.writer(), "{line}")?;
        Ok(())
    }

    /// Holds the screen until Enter when screens are cleared between scenes.
    fn pause(&mut self) -> Result<()> {
        if self.config.clear_screen {
            self.prompt.ask("\nPress Enter to continue.")?;
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.config.clear_screen {
            execute!(self.prompt.writer(), Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

fn menu_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str, session: GameSession) -> (String, GameSession) {
        let mut app = CliApp::new(
            session,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            CliConfig::plain(),
        );
        app.run().unwrap();
        let CliApp {
            session, prompt, ..
        } = app;
        (String::from_utf8(prompt.into_writer()).unwrap(), session)
    }

    fn seeded() -> GameSession {
        GameSession::builder().seed(9).build().unwrap()
    }

    #[test]
    fn create_and_quit() {
        let (out, session) = play("Aria\n1\n0\n", seeded());
        assert!(out.contains("Aria the Warrior is ready."));
        assert!(out.contains("Thanks for playing."));
        assert_eq!(session.scene(), Scene::Terminated);
    }

    #[test]
    fn unknown_class_enlists_soldier() {
        let (out, session) = play("Tiger\narmy tiger\n1\n0\n0\n", seeded());
        assert!(out.contains("Tiger the Soldier is ready."));
        assert!(out.contains("Attack  : 100"));
        assert_eq!(session.player().unwrap().ledger().balance(), 5000);
    }

    #[test]
    fn buy_equip_and_check_status() {
        // shop -> buy Old Sword -> back; inventory -> equip item 3 -> back; status
        let script = "Aria\n1\n3\n1\n1\n0\n2\n1\n3\n0\n1\n0\n0\n";
        let (out, session) = play(script, seeded());

        assert!(out.contains("Purchased Old Sword for 300 G."));
        assert!(out.contains("Old Sword equipped."));
        assert!(out.contains("Attack  : 15 (+5)"));
        assert!(out.contains("[E] Old Sword"));

        let ledger = session.player().unwrap().ledger();
        assert_eq!(ledger.balance(), 700);
        assert_eq!(ledger.equipped().count(), 1);
    }

    #[test]
    fn overdraft_is_reported_and_play_continues() {
        // Greater potions until broke: 1000 -> 700 -> 400 -> 100 -> rejected
        let script = "Aria\n2\n3\n1\n8\n1\n8\n1\n8\n1\n8\n0\n0\n";
        let (out, session) = play(script, seeded());

        assert!(out.contains("not enough gold for Greater Health Potion"));
        assert_eq!(session.player().unwrap().ledger().balance(), 100);
        assert_eq!(session.scene(), Scene::Terminated);
    }

    #[test]
    fn equipping_a_potion_is_refused() {
        let script = "Aria\n3\n3\n1\n7\n0\n2\n1\n3\n0\n0\n";
        let (out, session) = play(script, seeded());
        assert!(out.contains("cannot be equipped"));
        assert_eq!(session.player().unwrap().ledger().equipped().count(), 0);
    }

    #[test]
    fn sell_from_shop() {
        let script = "Aria\n1\n3\n2\n1\n0\n0\n";
        let (out, session) = play(script, seeded());
        assert!(out.contains("Sold Squire's Sword for 150 G."));
        assert_eq!(session.player().unwrap().ledger().balance(), 1150);
    }

    #[test]
    fn dungeon_run_reports_outcome() {
        let (out, session) = play("Aria\n1\n4\n1\n0\n0\n", seeded());
        assert!(out.contains("Easy dungeon"));
        assert!(out.contains("Victory! The dungeon is cleared."));
        assert!(session.player().unwrap().ledger().balance() >= 1500);
    }

    #[test]
    fn invalid_menu_input_reprompts() {
        let (out, session) = play("Aria\n1\n9\nshop\n0\n", seeded());
        assert_eq!(out.matches("Invalid input").count(), 2);
        assert_eq!(session.scene(), Scene::Terminated);
    }

    #[test]
    fn end_of_input_anywhere_exits_cleanly() {
        for script in ["", "Aria\n", "Aria\n1\n", "Aria\n1\n3\n", "Aria\n1\n4\n", "Aria\n1\n2\n1\n"] {
            let (out, session) = play(script, seeded());
            assert!(out.contains("Thanks for playing."), "script {script:?}");
            assert_eq!(session.scene(), Scene::Terminated);
        }
    }
}
