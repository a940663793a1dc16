//! Injectable environment the rules draw on.
//!
//! The only external dependency of the rules is randomness; it is exposed as
//! the [`RngOracle`] trait so sessions can plug in a seeded generator and tests
//! can script exact rolls.
mod rng;

pub use rng::{PcgRng, RngOracle};
