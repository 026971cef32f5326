use crate::{PrefError, PrefStore};
use std::collections::HashMap;

/// In-memory preference store; `flush` is a no-op.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, i32>,
}

impl MemoryPrefs {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a value was stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PrefStore for MemoryPrefs {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<(), PrefError> {
        Ok(())
    }
}
