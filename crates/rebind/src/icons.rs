//! Key-code to icon-asset lookup.
//!
//! Peripheral to the core: the UI resolves an icon whenever a binding
//! changes. A missing icon is logged and the binding stays fully functional
//! without a glyph.

use crate::keycode::KeyCode;
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One row of the icon table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconEntry {
    pub code: KeyCode,
    /// Asset path of the glyph for this key.
    pub icon: String,
}

/// Lookup table mapping key codes to icon asset paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconTable {
    #[serde(default)]
    entries: Vec<IconEntry>,
}

impl IconTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from existing entries.
    pub fn with_entries(entries: Vec<IconEntry>) -> Self {
        Self { entries }
    }

    /// Load a table from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).context("Failed to read icon table file")?;
        serde_json::from_str(&content).context("Failed to parse icon table JSON")
    }

    /// Add an entry for `code`.
    pub fn insert(&mut self, code: KeyCode, icon: impl Into<String>) {
        self.entries.push(IconEntry {
            code,
            icon: icon.into(),
        });
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Asset path of the icon for `code`, or `None` with a logged warning.
    /// First matching entry wins.
    pub fn resolve(&self, code: KeyCode) -> Option<&str> {
        let icon = self
            .entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.icon.as_str());

        if icon.is_none() {
            log::warn!("no icon registered for {code:?}");
        }
        icon
    }
}
