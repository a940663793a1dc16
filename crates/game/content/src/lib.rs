//! Data-driven content definitions and loaders.
//!
//! This crate houses the outpost's static content and provides loaders for
//! RON/TOML data files:
//! - Shop catalog (built in, or data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content feeds the runtime's shop and rules and never appears in game state
//! by itself.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::default_catalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult};
