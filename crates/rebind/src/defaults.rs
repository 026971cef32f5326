//! Compiled-in default bindings for a common game action set.
//!
//! Applications with their own action list can skip this module and call
//! [`BindingRegistry::register_defaults`] directly; this table is a
//! convenient starting point.

use crate::binding::ActionId;
use crate::keycode::KeyCode;
use crate::registry::BindingRegistry;

/// Declaration list for the standard action set: id plus default primary
/// and alternate keys.
pub fn default_actions() -> Vec<(ActionId, KeyCode, KeyCode)> {
    vec![
        action("move_forward", KeyCode::W, KeyCode::UpArrow),
        action("move_back", KeyCode::S, KeyCode::DownArrow),
        action("move_left", KeyCode::A, KeyCode::LeftArrow),
        action("move_right", KeyCode::D, KeyCode::RightArrow),
        action("jump", KeyCode::Space, KeyCode::None),
        action("sprint", KeyCode::LeftShift, KeyCode::None),
        action("crouch", KeyCode::LeftControl, KeyCode::C),
        action("interact", KeyCode::E, KeyCode::MouseRight),
        action("attack", KeyCode::MouseLeft, KeyCode::None),
        action("inventory", KeyCode::I, KeyCode::Tab),
        action("open_menu", KeyCode::Escape, KeyCode::None),
    ]
}

/// Register the standard action set on `registry`.
///
/// Safe to call more than once; ids already present keep their existing
/// binding.
pub fn register_default_actions(registry: &mut BindingRegistry) {
    registry.register_defaults(default_actions());
}

fn action(id: &str, primary: KeyCode, alternate: KeyCode) -> (ActionId, KeyCode, KeyCode) {
    (ActionId::from(id), primary, alternate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Slot;

    #[test]
    fn standard_actions_register() {
        let mut registry = BindingRegistry::new();
        register_default_actions(&mut registry);

        assert_eq!(registry.len(), default_actions().len());
        let jump = registry.binding("jump").unwrap();
        assert_eq!(jump.key_code(Slot::Primary), KeyCode::Space);
    }

    #[test]
    fn repeated_registration_is_idempotent() {
        let mut registry = BindingRegistry::new();
        register_default_actions(&mut registry);
        register_default_actions(&mut registry);

        assert_eq!(registry.len(), default_actions().len());
    }

    #[test]
    fn ids_are_unique() {
        let actions = default_actions();
        let mut ids: Vec<&str> = actions.iter().map(|(id, _, _)| id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), actions.len());
    }
}
