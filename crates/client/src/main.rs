//! Dungeon Outpost client binary.
//!
//! Main entry point for the Dungeon Outpost game.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Session (game rules and content) via `GameSession::from_config`
//! 2. Frontend (UI) - CLI
//!
//! # Examples
//!
//! ```bash
//! # Reproducible run with custom content
//! DUNGEON_SEED=42 DUNGEON_DATA_DIR=crates/game/content/data cargo run -p dungeon-client
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliApp, CliConfig, logging};
    use runtime::{GameSession, RuntimeConfig};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(&cli_config)?;

    tracing::info!("Starting Dungeon Outpost");
    tracing::info!("Seed: {:?}", runtime_config.seed);
    tracing::info!("Content directory: {:?}", runtime_config.data_dir);

    // 3. Build session
    let session = GameSession::from_config(&runtime_config).context("building game session")?;

    // 4. Run the scene loop on the process streams
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut app = CliApp::new(session, stdin.lock(), stdout.lock(), cli_config);
    app.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
