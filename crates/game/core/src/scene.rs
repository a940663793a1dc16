//! Scene state machine.
//!
//! Exactly one scene is active at a time. `MainMenu` is the hub: every other
//! interactive scene is modal and can only hand control back to it.
//!
//! ```text
//! Start ──CharacterCreated──▶ MainMenu ──Select(..)──▶ Status | Inventory | Shop | Dungeon
//!   │                          ▲   │                         │
//!   │                          └───┼───────── Back ──────────┘
//!   └──────── InputClosed ─────────┴── Select(Exit) / InputClosed ──▶ Terminated
//! ```

use crate::error::{ErrorSeverity, GameError};

/// Numbered main-menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum MenuChoice {
    Exit,
    Status,
    Inventory,
    Shop,
    Dungeon,
}

impl MenuChoice {
    /// Highest number accepted by the main menu prompt.
    pub const MAX: u32 = 4;

    pub const fn number(self) -> u32 {
        match self {
            Self::Exit => 0,
            Self::Status => 1,
            Self::Inventory => 2,
            Self::Shop => 3,
            Self::Dungeon => 4,
        }
    }

    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            0 => Some(Self::Exit),
            1 => Some(Self::Status),
            2 => Some(Self::Inventory),
            3 => Some(Self::Shop),
            4 => Some(Self::Dungeon),
            _ => None,
        }
    }
}

/// Active interactive mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
pub enum Scene {
    #[default]
    Start,
    MainMenu,
    Status,
    Inventory,
    Shop,
    Dungeon,
    Terminated,
}

/// Inputs that drive scene transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// Character creation finished.
    CharacterCreated,
    /// A main-menu entry was picked.
    Select(MenuChoice),
    /// A modal scene finished.
    Back,
    /// Input ended before the player chose to exit.
    InputClosed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("illegal scene transition from {from} on {event:?}")]
    IllegalTransition { from: Scene, event: SceneEvent },
}

impl GameError for SceneError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        "SCENE_ILLEGAL_TRANSITION"
    }
}

impl Scene {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// Scenes entered from the hub that must return to it.
    pub const fn is_modal(self) -> bool {
        matches!(
            self,
            Self::Status | Self::Inventory | Self::Shop | Self::Dungeon
        )
    }

    /// Computes the successor scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::IllegalTransition`] for any pair not in the
    /// transition table; `Terminated` accepts nothing.
    pub fn next(self, event: SceneEvent) -> Result<Scene, SceneError> {
        let next = match (self, event) {
            (Self::Start, SceneEvent::CharacterCreated) => Self::MainMenu,
            (Self::Start | Self::MainMenu, SceneEvent::InputClosed) => Self::Terminated,
            (Self::MainMenu, SceneEvent::Select(choice)) => match choice {
                MenuChoice::Exit => Self::Terminated,
                MenuChoice::Status => Self::Status,
                MenuChoice::Inventory => Self::Inventory,
                MenuChoice::Shop => Self::Shop,
                MenuChoice::Dungeon => Self::Dungeon,
            },
            (scene, SceneEvent::Back) if scene.is_modal() => Self::MainMenu,
            (from, event) => return Err(SceneError::IllegalTransition { from, event }),
        };
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const ALL_SCENES: [Scene; 7] = [
        Scene::Start,
        Scene::MainMenu,
        Scene::Status,
        Scene::Inventory,
        Scene::Shop,
        Scene::Dungeon,
        Scene::Terminated,
    ];

    fn all_events() -> Vec<SceneEvent> {
        let mut events = vec![
            SceneEvent::CharacterCreated,
            SceneEvent::Back,
            SceneEvent::InputClosed,
        ];
        events.extend(MenuChoice::iter().map(SceneEvent::Select));
        events
    }

    #[test]
    fn initial_scene_is_start() {
        assert_eq!(Scene::default(), Scene::Start);
        assert_eq!(Scene::Start.next(SceneEvent::CharacterCreated), Ok(Scene::MainMenu));
    }

    #[test]
    fn hub_routes_every_choice() {
        for choice in MenuChoice::iter() {
            let next = Scene::MainMenu.next(SceneEvent::Select(choice)).unwrap();
            if choice == MenuChoice::Exit {
                assert_eq!(next, Scene::Terminated);
            } else {
                assert!(next.is_modal());
                assert_eq!(next.next(SceneEvent::Back), Ok(Scene::MainMenu));
            }
        }
    }

    #[test]
    fn modal_scenes_only_return_to_hub() {
        for scene in ALL_SCENES.into_iter().filter(|scene| scene.is_modal()) {
            for event in all_events() {
                match scene.next(event) {
                    Ok(next) => assert_eq!(next, Scene::MainMenu),
                    Err(err) => {
                        assert_eq!(err, SceneError::IllegalTransition { from: scene, event });
                        assert!(err.severity().is_internal());
                    }
                }
            }
        }
    }

    #[test]
    fn terminated_is_absorbing() {
        for event in all_events() {
            assert!(Scene::Terminated.next(event).is_err());
        }
    }

    #[test]
    fn menu_numbers_round_trip() {
        for choice in MenuChoice::iter() {
            assert_eq!(MenuChoice::from_number(choice.number()), Some(choice));
        }
        assert_eq!(MenuChoice::from_number(MenuChoice::MAX + 1), None);
    }
}
