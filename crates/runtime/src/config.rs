//! Runtime settings read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings that shape how a [`crate::GameSession`] is assembled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Fixed rng seed. When absent, a seed is derived from the clock.
    pub seed: Option<u64>,
    /// Directory holding `items.ron` and `config.toml`. Built-in content is
    /// used when absent.
    pub data_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_SEED` - u64 rng seed (default: derived from the clock)
    /// - `DUNGEON_DATA_DIR` - content directory (default: built-in content)
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("DUNGEON_SEED"),
            data_dir: env::var_os("DUNGEON_DATA_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Seed to use for this session.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
