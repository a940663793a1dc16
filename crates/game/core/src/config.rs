/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Chance (in percent, 0-100) that a won encounter also yields a generated item.
    pub loot_drop_chance_percent: u32,
    /// Share of the current balance (in percent) lost when an encounter is lost.
    pub defeat_penalty_percent: u32,
    /// Items are bought back by the shop at `price / sell_price_divisor`.
    pub sell_price_divisor: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Number of weapon and armor names each loot pool holds.
    pub const LOOT_POOL_SIZE: usize = 5;
    /// Lowest difficulty level of a dungeon tier.
    pub const MIN_TIER_LEVEL: u32 = 1;
    /// Highest difficulty level of a dungeon tier.
    pub const MAX_TIER_LEVEL: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LOOT_DROP_CHANCE_PERCENT: u32 = 30;
    pub const DEFAULT_DEFEAT_PENALTY_PERCENT: u32 = 10;
    pub const DEFAULT_SELL_PRICE_DIVISOR: u32 = 2;

    pub fn new() -> Self {
        Self {
            loot_drop_chance_percent: Self::DEFAULT_LOOT_DROP_CHANCE_PERCENT,
            defeat_penalty_percent: Self::DEFAULT_DEFEAT_PENALTY_PERCENT,
            sell_price_divisor: Self::DEFAULT_SELL_PRICE_DIVISOR,
        }
    }

    /// Penalty debited after a lost encounter, floor-divided from `balance`.
    pub fn defeat_penalty(&self, balance: u32) -> u32 {
        let penalty = u64::from(balance) * u64::from(self.defeat_penalty_percent.min(100)) / 100;
        penalty as u32
    }

    /// Buy-back price for an item with the given list price.
    ///
    /// A divisor of zero is treated as one.
    pub fn sell_price(&self, price: u32) -> u32 {
        price / self.sell_price_divisor.max(1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defeat_penalty_floors_ten_percent() {
        let config = GameConfig::default();
        assert_eq!(config.defeat_penalty(1000), 100);
        assert_eq!(config.defeat_penalty(999), 99);
        assert_eq!(config.defeat_penalty(9), 0);
        assert_eq!(config.defeat_penalty(0), 0);
        assert_eq!(config.defeat_penalty(u32::MAX), u32::MAX / 10);
    }

    #[test]
    fn sell_price_halves_and_floors() {
        let config = GameConfig::default();
        assert_eq!(config.sell_price(300), 150);
        assert_eq!(config.sell_price(301), 150);
        assert_eq!(config.sell_price(1), 0);

        let broken = GameConfig {
            sell_price_divisor: 0,
            ..GameConfig::default()
        };
        assert_eq!(broken.sell_price(300), 300);
    }
}
