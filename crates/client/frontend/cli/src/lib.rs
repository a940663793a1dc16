//! Text frontend for the Dungeon Outpost game.
//!
//! This crate provides a line-based terminal interface over a
//! [`runtime::GameSession`].
//!
//! # Architecture
//!
//! CliApp is a thin scene loop that:
//! - Owns the session for the lifetime of the process
//! - Reads validated choices through [`input::Prompt`]
//! - Renders screens from session state via [`presentation`]

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::CliApp;
pub use config::CliConfig;
