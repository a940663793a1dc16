//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to the [`GameConfig`] defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.loot_drop_chance_percent > 100 || config.defeat_penalty_percent > 100 {
            anyhow::bail!("Percentages in config must be within 0-100");
        }
        if config.sell_price_divisor == 0 {
            anyhow::bail!("sell_price_divisor must be at least 1");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("loot_drop_chance_percent = 50").unwrap();
        assert_eq!(config.loot_drop_chance_percent, 50);
        assert_eq!(config.defeat_penalty_percent, GameConfig::DEFAULT_DEFEAT_PENALTY_PERCENT);
        assert_eq!(config.sell_price_divisor, GameConfig::DEFAULT_SELL_PRICE_DIVISOR);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(ConfigLoader::parse("defeat_penalty_percent = 101").is_err());
        assert!(ConfigLoader::parse("sell_price_divisor = 0").is_err());
    }
}
