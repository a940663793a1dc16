//! Public API surface shared with frontends.
mod errors;

pub use errors::{Result, RuntimeError};
