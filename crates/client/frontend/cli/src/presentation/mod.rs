//! Text rendering for the CLI client.
//!
//! Screens are plain functions writing to any `io::Write`, styled through a
//! [`Theme`]. They read session state and never mutate it.

pub mod screens;
pub mod theme;

pub use theme::Theme;
