//! Session orchestration for the outpost game.
//!
//! This crate wires the pure rules of `game-core` and the content of
//! `game-content` into a single [`GameSession`] context object. Frontends own
//! one session for the lifetime of the process and drive it scene by scene.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the context object and its builder
//! - [`config`] reads runtime settings from the environment
//! - [`api`] exposes the error types downstream clients interact with
pub mod api;
pub mod config;
pub mod session;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use session::{GameSession, GameSessionBuilder, Player};
