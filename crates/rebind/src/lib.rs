//! Key rebinding core: binding registry and remap capture.
//!
//! The crate owns the mapping from action identifiers to key assignments
//! (primary plus alternate per action), mediates exclusive remap sessions,
//! and only writes persisted state when it changed. Rendering, asset
//! management, and input-event dispatch stay with the host; the core talks
//! to them through the [`prefs::PrefStore`] and [`InputSource`] traits and
//! through observer callbacks fired whenever bindings change.
//!
//! # Example
//!
//! ```ignore
//! use rebind::{BindingRegistry, InputEvent, KeyCode, Slot, defaults};
//! use prefs::FilePrefs;
//!
//! let mut registry = BindingRegistry::new();
//! defaults::register_default_actions(&mut registry);
//!
//! let mut store = FilePrefs::open("bindings.json")?;
//! registry.load_all(&store);
//!
//! // UI click on the "jump" row:
//! let mut session = registry.request_remap("jump", Slot::Primary)?;
//! // next tick delivers a key release:
//! session.consume(&mut registry, &InputEvent::KeyUp(KeyCode::E));
//!
//! registry.save_all(&mut store)?;
//! ```

pub mod binding;
pub mod defaults;
pub mod icons;
pub mod input;
pub mod keycode;
pub mod registry;
pub mod session;

// Re-export main types
pub use binding::{ActionId, KeyBind, Slot, alternate_pref_key, primary_pref_key};
pub use icons::{IconEntry, IconTable};
pub use input::{InputEvent, InputSource};
pub use keycode::{KeyCode, MouseButton};
pub use registry::{BindingObserver, BindingRegistry};
pub use session::{RemapSession, SessionState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod test_util {
    use crate::input::InputSource;
    use crate::keycode::KeyCode;
    use std::collections::HashSet;

    /// Input source reporting exactly the given codes as held.
    #[derive(Default)]
    pub struct HeldKeys(HashSet<KeyCode>);

    impl HeldKeys {
        pub fn holding(codes: &[KeyCode]) -> Self {
            Self(codes.iter().copied().collect())
        }
    }

    impl InputSource for HeldKeys {
        fn is_key_held(&self, code: KeyCode) -> bool {
            self.0.contains(&code)
        }
    }

    /// Adversarial source claiming every code is held, `None` included.
    pub struct EverythingHeld;

    impl InputSource for EverythingHeld {
        fn is_key_held(&self, _code: KeyCode) -> bool {
            true
        }
    }
}
