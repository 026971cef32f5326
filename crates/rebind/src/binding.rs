//! Action identifiers and the per-action key binding.
//!
//! A [`KeyBind`] carries the compiled-in defaults next to the current
//! assignment for both slots and tracks whether the current values differ
//! from what was last persisted. Persistence is a no-op while clean.

use crate::input::InputSource;
use crate::keycode::KeyCode;
use prefs::PrefStore;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identifier naming one rebindable action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(Arc<str>);

impl ActionId {
    /// Create a new action identifier.
    pub fn new(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self(Arc::<str>::from(id.into_boxed_str()))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionId {
    fn from(value: &str) -> Self {
        Self(Arc::<str>::from(value))
    }
}

impl From<String> for ActionId {
    fn from(value: String) -> Self {
        Self(Arc::<str>::from(value.into_boxed_str()))
    }
}

impl Borrow<str> for ActionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary or alternate assignment of one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary,
    Alternate,
}

/// Preference key for the primary slot of `id`.
pub fn primary_pref_key(id: &str) -> String {
    format!("{id}/key")
}

/// Preference key for the alternate slot of `id`.
pub fn alternate_pref_key(id: &str) -> String {
    format!("{id}/alternativeKey")
}

/// One action's default and current key assignments.
#[derive(Clone, Debug)]
pub struct KeyBind {
    default_primary: KeyCode,
    default_alternate: KeyCode,
    primary: KeyCode,
    alternate: KeyCode,
    dirty: bool,
}

impl KeyBind {
    /// Create a binding whose current values start at the given defaults.
    pub fn new(default_primary: KeyCode, default_alternate: KeyCode) -> Self {
        Self {
            default_primary,
            default_alternate,
            primary: default_primary,
            alternate: default_alternate,
            dirty: false,
        }
    }

    /// Current key for `slot`.
    pub fn key_code(&self, slot: Slot) -> KeyCode {
        match slot {
            Slot::Primary => self.primary,
            Slot::Alternate => self.alternate,
        }
    }

    /// Compiled-in default for `slot`.
    pub fn default_key_code(&self, slot: Slot) -> KeyCode {
        match slot {
            Slot::Primary => self.default_primary,
            Slot::Alternate => self.default_alternate,
        }
    }

    /// Whether the current values differ from the last persisted state.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Populate current values from the store, falling back to the defaults
    /// when nothing was persisted. Absent data is the normal first-run case,
    /// so this never fails.
    pub fn load(&mut self, id: &str, prefs: &dyn PrefStore) {
        self.primary = KeyCode::from_code(prefs.get_int(
            &primary_pref_key(id),
            self.default_primary.code(),
        ));
        self.alternate = KeyCode::from_code(prefs.get_int(
            &alternate_pref_key(id),
            self.default_alternate.code(),
        ));
        self.dirty = false;
    }

    /// Write both current codes to the store if anything changed since the
    /// last load or save; no-op otherwise.
    pub fn save(&mut self, id: &str, prefs: &mut dyn PrefStore) {
        if !self.dirty {
            return;
        }

        prefs.set_int(&primary_pref_key(id), self.primary.code());
        prefs.set_int(&alternate_pref_key(id), self.alternate.code());
        self.dirty = false;
    }

    /// True when the primary or the alternate key is currently held.
    ///
    /// [`KeyCode::None`] is never forwarded to the input source, so an
    /// unbound slot cannot report as held regardless of what the source
    /// would answer.
    pub fn is_held(&self, input: &dyn InputSource) -> bool {
        let held = |code: KeyCode| !code.is_none() && input.is_key_held(code);
        held(self.primary) || held(self.alternate)
    }

    /// Restore both slots to their defaults. Marks the binding dirty when
    /// the values actually changed so that reset-then-save persists the
    /// restoration.
    pub fn reset(&mut self) {
        if self.primary != self.default_primary || self.alternate != self.default_alternate {
            self.primary = self.default_primary;
            self.alternate = self.default_alternate;
            self.dirty = true;
        }
    }

    /// Overwrite one slot with `code` and mark the binding dirty.
    ///
    /// No validation: the same key may be bound to any number of actions.
    pub fn remap(&mut self, code: KeyCode, slot: Slot) {
        match slot {
            Slot::Primary => self.primary = code,
            Slot::Alternate => self.alternate = code,
        }
        self.dirty = true;
    }
}
