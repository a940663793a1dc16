//! CLI-specific configuration for the text interface.
use std::env;
use std::path::PathBuf;

/// CLI text interface configuration.
///
/// This contains settings specific to the terminal, separate from the
/// runtime's content and seeding settings.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Clear the terminal before each scene is drawn.
    pub clear_screen: bool,
    /// Emit ANSI colors and styles.
    pub color: bool,
    /// Override for the log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_CLEAR_SCREEN` - clear between scenes (default: true)
    /// - `NO_COLOR` - any non-empty value disables colors
    /// - `DUNGEON_LOG_DIR` - log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(clear) = read_env::<bool>("CLI_CLEAR_SCREEN") {
            config.clear_screen = clear;
        }

        if env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            config.color = false;
        }

        config.log_dir = env::var_os("DUNGEON_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }

    /// Settings for scripted runs: no screen clearing, no colors.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            color: false,
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
