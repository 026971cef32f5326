//! Input abstraction consumed by the core.
//!
//! The core never talks to a real input backend. The host supplies a
//! [`InputSource`] for per-tick "is this key held" polling and forwards
//! discrete [`InputEvent`]s into an active remap capture.

use crate::keycode::{KeyCode, MouseButton};

/// Per-tick key-state provider.
pub trait InputSource {
    /// Whether `code` is currently held. Implementations are never asked
    /// about [`KeyCode::None`]; the core filters it out beforehand.
    fn is_key_held(&self, code: KeyCode) -> bool;
}

/// A discrete raw input event delivered once per tick by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),
}

impl InputEvent {
    /// The key code this event commits when it completes a remap capture,
    /// or `None` for events that do not qualify. Only releases qualify, so
    /// the press that started a capture cannot also complete it.
    pub fn release_code(&self) -> Option<KeyCode> {
        match self {
            InputEvent::KeyUp(code) => Some(*code),
            InputEvent::MouseButtonUp(button) => Some(button.key_code()),
            InputEvent::KeyDown(_) | InputEvent::MouseButtonDown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_release_qualifies() {
        assert_eq!(
            InputEvent::KeyUp(KeyCode::E).release_code(),
            Some(KeyCode::E)
        );
    }

    #[test]
    fn mouse_release_maps_to_synthetic_code() {
        assert_eq!(
            InputEvent::MouseButtonUp(MouseButton::Middle).release_code(),
            Some(KeyCode::MouseMiddle)
        );
    }

    #[test]
    fn presses_do_not_qualify() {
        assert_eq!(InputEvent::KeyDown(KeyCode::E).release_code(), None);
        assert_eq!(
            InputEvent::MouseButtonDown(MouseButton::Left).release_code(),
            None
        );
    }
}
