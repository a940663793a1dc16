//! Session context object.
//!
//! A [`GameSession`] owns everything that outlives a single scene: the active
//! scene, the character and their ledger, the shop, the rule configuration and
//! the rng. Scene handlers borrow it mutably for the duration of their
//! activation; there is no other shared state.

use std::path::PathBuf;

use game_content::{ContentFactory, default_catalog};
use game_core::{
    Archetype, Character, DungeonRun, DungeonTier, EncounterOutcome, EquipChange,
    EquipmentLedger, GameConfig, GameError, Item, ItemId, PcgRng, Purchase, RngOracle, Sale,
    Scene, SceneEvent, Shop, StatsSnapshot, enter_dungeon, starting_ledger,
};

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;

/// The created character together with everything they own.
#[derive(Clone, Debug)]
pub struct Player {
    character: Character,
    ledger: EquipmentLedger,
}

impl Player {
    fn new(character: Character) -> Self {
        let ledger = starting_ledger(character.archetype());
        Self { character, ledger }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn ledger(&self) -> &EquipmentLedger {
        &self.ledger
    }

    /// Current effective stats.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::create(&self.character, &self.ledger)
    }
}

/// Single-player game session.
pub struct GameSession {
    scene: Scene,
    player: Option<Player>,
    shop: Shop,
    config: GameConfig,
    rng: Box<dyn RngOracle>,
}

impl GameSession {
    /// Create a new session builder
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Assemble a session from environment-derived settings.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        Self::builder().runtime_config(config).build()
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn is_running(&self) -> bool {
        !self.scene.is_terminal()
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Feed an event to the scene machine.
    ///
    /// The active scene is unchanged when the transition is rejected.
    pub fn advance(&mut self, event: SceneEvent) -> Result<Scene> {
        let next = self.scene.next(event).inspect_err(|e| {
            tracing::error!("Scene transition rejected [{}]: {}", e.error_code(), e);
        })?;
        tracing::debug!("Scene {} -> {} on {:?}", self.scene, next, event);
        self.scene = next;
        Ok(next)
    }

    /// Create the session's character and hand out the archetype's starting kit.
    ///
    /// Moves the session from `Start` to `MainMenu`.
    pub fn create_character(&mut self, name: &str, archetype: Archetype) -> Result<&Player> {
        if self.player.is_some() {
            return Err(RuntimeError::CharacterExists);
        }
        let next = self.scene.next(SceneEvent::CharacterCreated)?;
        let character = Character::new(name, archetype)?;

        let player = Player::new(character);
        tracing::info!(
            "Character created: name={}, archetype={}, gold={}, items={}",
            player.character.name(),
            archetype,
            player.ledger.balance(),
            player.ledger.len()
        );

        self.scene = next;
        Ok(self.player.insert(player))
    }

    /// Effective stats of the current character.
    pub fn stats(&self) -> Result<StatsSnapshot> {
        self.player().map(Player::stats).ok_or(RuntimeError::NoCharacter)
    }

    /// Buy the catalog entry at `index` (0-based).
    pub fn buy(&mut self, index: usize) -> Result<Purchase> {
        let player = self.player.as_mut().ok_or(RuntimeError::NoCharacter)?;
        match self.shop.buy(index, &mut player.ledger) {
            Ok(purchase) => {
                tracing::info!(
                    "Purchased {} {} for {}G, balance={}",
                    purchase.name,
                    purchase.id,
                    purchase.price,
                    player.ledger.balance()
                );
                Ok(purchase)
            }
            Err(e) => {
                tracing::warn!("Purchase rejected [{}]: {}", e.error_code(), e);
                Err(e.into())
            }
        }
    }

    /// Sell an owned item back to the shop.
    pub fn sell(&mut self, id: ItemId) -> Result<Sale> {
        let player = self.player.as_mut().ok_or(RuntimeError::NoCharacter)?;
        match self.shop.sell(id, &mut player.ledger) {
            Ok(sale) => {
                tracing::info!(
                    "Sold {} {} for {}G, balance={}",
                    sale.item.name(),
                    id,
                    sale.amount,
                    player.ledger.balance()
                );
                Ok(sale)
            }
            Err(e) => {
                tracing::warn!("Sale rejected [{}]: {}", e.error_code(), e);
                Err(e.into())
            }
        }
    }

    /// Shop buy-back price for an item.
    pub fn sell_price(&self, item: &Item) -> u32 {
        self.shop.sell_price(item)
    }

    /// Toggle the equip flag of an owned item.
    pub fn toggle_equip(&mut self, id: ItemId) -> Result<EquipChange> {
        let player = self.player.as_mut().ok_or(RuntimeError::NoCharacter)?;
        match player.ledger.toggle_equip(id) {
            Ok(change) => {
                tracing::info!("Item {} {:?}", id, change);
                Ok(change)
            }
            Err(e) => {
                tracing::warn!("Equip rejected [{}]: {}", e.error_code(), e);
                Err(e.into())
            }
        }
    }

    /// Resolve an encounter against `tier` and settle reward, loot or penalty.
    pub fn enter_dungeon(&mut self, tier: DungeonTier) -> Result<DungeonRun> {
        let player = self.player.as_mut().ok_or(RuntimeError::NoCharacter)?;
        let run = enter_dungeon(
            tier,
            &player.character,
            &mut player.ledger,
            &self.config,
            &mut *self.rng,
        )?;

        tracing::debug!(
            "Encounter {}: player_hit={}, enemy_hit={}, turns_to_kill_enemy={}, turns_to_kill_player={}",
            tier,
            run.report.player_hit,
            run.report.enemy_hit,
            run.report.turns_to_kill_enemy,
            run.report.turns_to_kill_player
        );
        match &run.outcome {
            EncounterOutcome::Victory { reward, loot } => {
                tracing::info!(
                    "Dungeon {} cleared: reward={}G, balance={}",
                    tier,
                    reward,
                    player.ledger.balance()
                );
                if let Some((id, item)) = loot {
                    tracing::debug!("Loot drop {} {}: {:?}", item.name, id, item);
                }
            }
            EncounterOutcome::Defeat { penalty } => {
                tracing::info!(
                    "Dungeon {} failed: penalty={}G, balance={}",
                    tier,
                    penalty,
                    player.ledger.balance()
                );
            }
        }

        Ok(run)
    }
}

/// Builder for [`GameSession`] with flexible configuration.
pub struct GameSessionBuilder {
    game_config: Option<GameConfig>,
    catalog: Option<Vec<Item>>,
    data_dir: Option<PathBuf>,
    rng: Option<Box<dyn RngOracle>>,
    seed: Option<u64>,
}

impl GameSessionBuilder {
    fn new() -> Self {
        Self {
            game_config: None,
            catalog: None,
            data_dir: None,
            rng: None,
            seed: None,
        }
    }

    /// Apply environment-derived settings (seed and content directory).
    pub fn runtime_config(mut self, config: &RuntimeConfig) -> Self {
        self.seed = Some(config.resolve_seed());
        self.data_dir = config.data_dir.clone();
        self
    }

    /// Override rule configuration. Takes precedence over `config.toml`.
    pub fn game_config(mut self, config: GameConfig) -> Self {
        self.game_config = Some(config);
        self
    }

    /// Override the shop catalog. Takes precedence over `items.ron`.
    pub fn catalog(mut self, catalog: Vec<Item>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Load content from a data directory.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Seed the default PCG generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inject a custom randomness source. Takes precedence over `seed`.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn build(self) -> Result<GameSession> {
        let factory = self.data_dir.map(ContentFactory::new);

        let config = match (self.game_config, &factory) {
            (Some(config), _) => config,
            (None, Some(factory)) => factory
                .load_config()
                .map_err(|e| content_error(factory, e))?,
            (None, None) => GameConfig::default(),
        };

        let catalog = match (self.catalog, &factory) {
            (Some(catalog), _) => catalog,
            (None, Some(factory)) => factory
                .load_items()
                .map_err(|e| content_error(factory, e))?,
            (None, None) => default_catalog(),
        };

        let rng = match (self.rng, self.seed) {
            (Some(rng), _) => rng,
            (None, seed) => {
                let seed = seed.unwrap_or_else(|| RuntimeConfig::default().resolve_seed());
                tracing::info!("Session rng seed={}", seed);
                Box::new(PcgRng::seeded(seed)) as Box<dyn RngOracle>
            }
        };

        tracing::info!(
            "Session ready: catalog={} items, loot_chance={}%, defeat_penalty={}%",
            catalog.len(),
            config.loot_drop_chance_percent,
            config.defeat_penalty_percent
        );

        Ok(GameSession {
            scene: Scene::default(),
            player: None,
            shop: Shop::new(catalog, &config),
            config,
            rng,
        })
    }
}

fn content_error(
    factory: &ContentFactory,
    error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> RuntimeError {
    RuntimeError::Content {
        path: factory.data_dir().to_path_buf(),
        source: error.into(),
    }
}
