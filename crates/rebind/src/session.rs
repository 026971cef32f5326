//! Exclusive remap capture state machine.
//!
//! A session is created through [`BindingRegistry::request_remap`], which
//! guarantees at most one capture is in flight and suspends normal input
//! polling until it ends. The session holds the target's id rather than a
//! borrowed binding so the registry stays freely mutable in between ticks.

use crate::binding::{ActionId, Slot};
use crate::input::InputEvent;
use crate::keycode::KeyCode;
use crate::registry::BindingRegistry;

/// Lifecycle of a capture. The idle state is represented by no session
/// existing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Capturing,
    Committed,
    Abandoned,
}

/// Short-lived capture of the next qualifying input event.
#[derive(Debug)]
pub struct RemapSession {
    target: ActionId,
    slot: Slot,
    state: SessionState,
}

impl RemapSession {
    pub(crate) fn new(target: ActionId, slot: Slot) -> Self {
        Self {
            target,
            slot,
            state: SessionState::Capturing,
        }
    }

    /// Id of the binding this capture targets.
    pub fn target(&self) -> &ActionId {
        &self.target
    }

    /// Slot being reassigned.
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Current state of the capture.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True while the session is still waiting for a qualifying event.
    pub fn is_capturing(&self) -> bool {
        self.state == SessionState::Capturing
    }

    /// Feed one raw event into the capture.
    ///
    /// The first key-release or mouse-button-release is committed into the
    /// target slot, the registry's remap flag is cleared, observers are
    /// notified, and the committed code is returned. Any other event is
    /// ignored and capture continues. After the session has ended this
    /// always returns `None`.
    pub fn consume(
        &mut self,
        registry: &mut BindingRegistry,
        event: &InputEvent,
    ) -> Option<KeyCode> {
        if self.state != SessionState::Capturing {
            return None;
        }

        let code = event.release_code()?;
        registry.commit_remap(&self.target, code, self.slot);
        self.state = SessionState::Committed;
        Some(code)
    }

    /// Abandon the capture without touching the binding.
    ///
    /// Clears the registry's remap flag and still notifies observers so the
    /// UI leaves its "press a key" presentation. No-op once the session has
    /// ended.
    pub fn cancel(&mut self, registry: &mut BindingRegistry) {
        if self.state != SessionState::Capturing {
            return;
        }

        registry.abandon_remap(&self.target);
        self.state = SessionState::Abandoned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::MouseButton;

    fn registry_with_jump() -> BindingRegistry {
        let mut registry = BindingRegistry::new();
        registry.register_defaults([(ActionId::from("jump"), KeyCode::Space, KeyCode::None)]);
        registry
    }

    #[test]
    fn key_release_commits_the_capture() {
        let mut registry = registry_with_jump();
        let mut session = registry.request_remap("jump", Slot::Primary).unwrap();

        let code = session.consume(&mut registry, &InputEvent::KeyUp(KeyCode::E));
        assert_eq!(code, Some(KeyCode::E));
        assert_eq!(session.state(), SessionState::Committed);
        assert!(!registry.is_remapping());

        let jump = registry.binding("jump").unwrap();
        assert_eq!(jump.key_code(Slot::Primary), KeyCode::E);
    }

    #[test]
    fn mouse_release_commits_a_synthetic_code() {
        let mut registry = registry_with_jump();
        let mut session = registry.request_remap("jump", Slot::Alternate).unwrap();

        let code = session.consume(
            &mut registry,
            &InputEvent::MouseButtonUp(MouseButton::Right),
        );
        assert_eq!(code, Some(KeyCode::MouseRight));

        let jump = registry.binding("jump").unwrap();
        assert_eq!(jump.key_code(Slot::Alternate), KeyCode::MouseRight);
        // The primary slot is untouched.
        assert_eq!(jump.key_code(Slot::Primary), KeyCode::Space);
    }

    #[test]
    fn presses_are_ignored_and_capture_continues() {
        let mut registry = registry_with_jump();
        let mut session = registry.request_remap("jump", Slot::Primary).unwrap();

        assert_eq!(
            session.consume(&mut registry, &InputEvent::KeyDown(KeyCode::E)),
            None
        );
        assert_eq!(
            session.consume(
                &mut registry,
                &InputEvent::MouseButtonDown(MouseButton::Left)
            ),
            None
        );
        assert!(session.is_capturing());
        assert!(registry.is_remapping());

        // The eventual release still commits.
        let code = session.consume(&mut registry, &InputEvent::KeyUp(KeyCode::E));
        assert_eq!(code, Some(KeyCode::E));
    }

    #[test]
    fn cancel_clears_the_flag_and_keeps_the_binding() {
        let mut registry = registry_with_jump();
        let mut session = registry.request_remap("jump", Slot::Primary).unwrap();

        session.cancel(&mut registry);
        assert_eq!(session.state(), SessionState::Abandoned);
        assert!(!registry.is_remapping());

        let jump = registry.binding("jump").unwrap();
        assert_eq!(jump.key_code(Slot::Primary), KeyCode::Space);

        // An ended session consumes nothing.
        assert_eq!(
            session.consume(&mut registry, &InputEvent::KeyUp(KeyCode::E)),
            None
        );
        let jump = registry.binding("jump").unwrap();
        assert_eq!(jump.key_code(Slot::Primary), KeyCode::Space);
    }

    #[test]
    fn cancel_notifies_observers_for_the_target() {
        use std::sync::{Arc, Mutex};

        let mut registry = registry_with_jump();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        registry.add_observer(move |ids| {
            sink.lock()
                .unwrap()
                .extend(ids.iter().map(|id| id.to_string()));
        });

        let mut session = registry.request_remap("jump", Slot::Primary).unwrap();
        session.cancel(&mut registry);

        assert_eq!(*seen.lock().unwrap(), ["jump"]);
    }

    #[test]
    fn a_new_capture_may_start_after_commit() {
        let mut registry = registry_with_jump();

        let mut first = registry.request_remap("jump", Slot::Primary).unwrap();
        first.consume(&mut registry, &InputEvent::KeyUp(KeyCode::E));

        let mut second = registry.request_remap("jump", Slot::Primary).unwrap();
        let code = second.consume(&mut registry, &InputEvent::KeyUp(KeyCode::K));
        assert_eq!(code, Some(KeyCode::K));
    }
}
