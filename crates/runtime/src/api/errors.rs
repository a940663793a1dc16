//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule violations from game-core and content loading failures so
//! clients can report them with consistent context.
use std::path::PathBuf;

use game_core::{
    CharacterError, EconomyError, ErrorSeverity, GameError, LedgerError, SceneError,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no character has been created yet")]
    NoCharacter,

    #[error("a character already exists for this session")]
    CharacterExists,

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Economy(#[from] EconomyError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("failed to load content from {path}")]
    Content {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoCharacter | Self::CharacterExists => ErrorSeverity::Internal,
            Self::Character(e) => e.severity(),
            Self::Ledger(e) => e.severity(),
            Self::Economy(e) => e.severity(),
            Self::Scene(e) => e.severity(),
            Self::Content { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoCharacter => "RUNTIME_NO_CHARACTER",
            Self::CharacterExists => "RUNTIME_CHARACTER_EXISTS",
            Self::Character(e) => e.error_code(),
            Self::Ledger(e) => e.error_code(),
            Self::Economy(e) => e.error_code(),
            Self::Scene(e) => e.error_code(),
            Self::Content { .. } => "RUNTIME_CONTENT",
        }
    }
}
