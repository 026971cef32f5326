//! Registry owning every binding and the exclusive remap flag.
//!
//! The registry is constructed once by the composition root and handed to
//! consumers by reference; it is not a global. The "remap in progress" flag
//! lives here and is only reachable through
//! [`request_remap`](BindingRegistry::request_remap) and the session that
//! call returns.

use crate::binding::{ActionId, KeyBind, Slot};
use crate::input::InputSource;
use crate::keycode::KeyCode;
use crate::session::RemapSession;
use anyhow::{Result, bail};
use indexmap::IndexMap;
use prefs::{PrefError, PrefStore};
use std::sync::Arc;

/// Callback invoked after bindings change; receives the affected ids so the
/// UI can re-resolve icons for exactly those entries.
pub type BindingObserver = Arc<dyn Fn(&[ActionId]) + Send + Sync>;

/// Mapping from action id to its key binding, insertion order preserved for
/// UI display.
#[derive(Default)]
pub struct BindingRegistry {
    bindings: IndexMap<ActionId, KeyBind>,
    remapping: bool,
    observers: Vec<BindingObserver>,
}

impl BindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register compiled-in defaults.
    ///
    /// Ids already present are skipped (first wins), so repeated
    /// registration from re-entrant initialization is harmless.
    pub fn register_defaults<I>(&mut self, defaults: I)
    where
        I: IntoIterator<Item = (ActionId, KeyCode, KeyCode)>,
    {
        for (id, primary, alternate) in defaults {
            self.bindings
                .entry(id)
                .or_insert_with(|| KeyBind::new(primary, alternate));
        }
    }

    /// Subscribe to binding changes. Fired after [`load_all`], [`reset_all`]
    /// and whenever a remap capture ends, on either path.
    ///
    /// [`load_all`]: BindingRegistry::load_all
    /// [`reset_all`]: BindingRegistry::reset_all
    pub fn add_observer<F>(&mut self, observer: F)
    where
        F: Fn(&[ActionId]) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Action ids in registration order.
    pub fn action_ids(&self) -> impl Iterator<Item = &ActionId> {
        self.bindings.keys()
    }

    /// Look up the binding for `id`. Unknown ids return `None`; callers
    /// treat that as "nothing to display".
    pub fn binding(&self, id: &str) -> Option<&KeyBind> {
        self.bindings.get(id)
    }

    /// Load every binding from the store, then notify observers so the UI
    /// refreshes.
    pub fn load_all(&mut self, prefs: &dyn PrefStore) {
        for (id, bind) in &mut self.bindings {
            bind.load(id.as_str(), prefs);
        }
        self.notify_all();
    }

    /// Save every dirty binding, then flush the store exactly once.
    ///
    /// The flush is batched here because it is the only potentially slow
    /// operation; the application invokes this on settings-menu close, not
    /// per remap.
    pub fn save_all(&mut self, prefs: &mut dyn PrefStore) -> Result<(), PrefError> {
        for (id, bind) in &mut self.bindings {
            bind.save(id.as_str(), prefs);
        }
        prefs.flush()
    }

    /// Reset every binding to its defaults, then notify observers.
    pub fn reset_all(&mut self) {
        for bind in self.bindings.values_mut() {
            bind.reset();
        }
        self.notify_all();
    }

    /// Whether a remap capture is currently in flight.
    pub fn is_remapping(&self) -> bool {
        self.remapping
    }

    /// Ids whose binding is currently held, in registration order.
    ///
    /// Returns empty while a remap capture is in flight. The flag is checked
    /// before any key state is read, so the event that completes a remap can
    /// never also fire as a normal action press in the same tick.
    pub fn poll_held_actions(&self, input: &dyn InputSource) -> Vec<ActionId> {
        if self.remapping {
            return Vec::new();
        }

        let mut held = Vec::new();
        for (id, bind) in &self.bindings {
            if bind.is_held(input) {
                log::debug!("{id} is pressed");
                held.push(id.clone());
            }
        }
        held
    }

    /// UI entry point for starting an exclusive remap capture on `id`.
    ///
    /// Fails while another capture is in flight or when `id` is unknown;
    /// the registry state is untouched in both cases.
    pub fn request_remap(&mut self, id: &str, slot: Slot) -> Result<RemapSession> {
        if self.remapping {
            bail!("a remap capture is already in progress");
        }

        let Some((id, _)) = self.bindings.get_key_value(id) else {
            bail!("unknown action id: {id}");
        };
        let id = id.clone();

        self.remapping = true;
        log::debug!("remap capture started for {id}");
        Ok(RemapSession::new(id, slot))
    }

    /// Commit a captured code into the target binding and end the capture.
    pub(crate) fn commit_remap(&mut self, id: &ActionId, code: KeyCode, slot: Slot) {
        if let Some(bind) = self.bindings.get_mut(id) {
            bind.remap(code, slot);
        }
        self.remapping = false;
        log::debug!("remap committed for {id}: {code:?}");
        self.notify(std::slice::from_ref(id));
    }

    /// End a capture without mutating the target binding.
    pub(crate) fn abandon_remap(&mut self, id: &ActionId) {
        self.remapping = false;
        log::debug!("remap abandoned for {id}");
        self.notify(std::slice::from_ref(id));
    }

    fn notify_all(&self) {
        let ids: Vec<ActionId> = self.bindings.keys().cloned().collect();
        self.notify(&ids);
    }

    fn notify(&self, ids: &[ActionId]) {
        for observer in &self.observers {
            observer(ids);
        }
    }
}
