//! File-backed tracing setup.
//!
//! Stdout belongs to the game text, so logs only ever go to a per-session
//! file under the log directory.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

/// Install the global subscriber writing to `<log_dir>/session_<ts>/client.log`.
///
/// The returned guard flushes the background writer when dropped; keep it
/// alive for the whole process.
pub fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_directory);
    let session_log_dir = log_dir.join(session_id());
    std::fs::create_dir_all(&session_log_dir)
        .with_context(|| format!("creating log directory {}", session_log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("Logging initialized");
    tracing::info!("Log file: {}", log_file(&session_log_dir).display());

    Ok(guard)
}

/// Platform cache directory for logs, e.g. `~/.cache/dungeon/logs` on Linux.
pub fn default_log_directory() -> PathBuf {
    ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("dungeon").join("logs"))
}

fn session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

fn log_file(session_dir: &Path) -> PathBuf {
    session_dir.join("client.log")
}
