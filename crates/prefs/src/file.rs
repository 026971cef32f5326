//! JSON-file-backed preference store.

use crate::{PrefError, PrefStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Root structure of the preference file. The format carries no version;
/// absent entries always fall back to compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefFile {
    #[serde(default)]
    values: BTreeMap<String, i32>,
}

/// Preference store persisted as a single JSON file.
///
/// The whole map lives in memory; `set_int` only mutates the map and
/// [`flush`](PrefStore::flush) rewrites the file when something changed.
pub struct FilePrefs {
    path: PathBuf,
    values: BTreeMap<String, i32>,
    dirty: bool,
}

impl FilePrefs {
    /// Open a store at `path`, creating parent directories as needed.
    /// A missing file yields an empty store, not an error.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, PrefError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let file: PrefFile = serde_json::from_str(&content)?;
            file.values
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefStore for FilePrefs {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn flush(&mut self) -> Result<(), PrefError> {
        if !self.dirty {
            return Ok(());
        }

        let file = PrefFile {
            values: self.values.clone(),
        };

        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        self.dirty = false;

        log::debug!("flushed {} preferences to {}", self.values.len(), self.path.display());
        Ok(())
    }
}
