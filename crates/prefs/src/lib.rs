//! Integer preference store used by the rebinding core.
//!
//! The store surface is deliberately narrow: the binding code only ever
//! reads and writes integers under string keys and asks for an explicit
//! flush. Missing keys resolve to the caller's default rather than erroring,
//! which makes a first run with no persisted data a normal case.
//!
//! Two implementations are provided: [`MemoryPrefs`] for tests and
//! composition before a real file location is known, and [`FilePrefs`] which
//! persists the whole map as a JSON file.

mod errors;
mod file;
mod memory;

pub use errors::PrefError;
pub use file::FilePrefs;
pub use memory::MemoryPrefs;

/// Key/value store for integer preferences.
///
/// Writes accumulate in memory until [`flush`](PrefStore::flush) is called;
/// callers batch the flush because it is the only potentially slow
/// operation.
pub trait PrefStore {
    /// Read the value under `key`, or `default` if nothing was stored.
    fn get_int(&self, key: &str, default: i32) -> i32;

    /// Store `value` under `key`.
    fn set_int(&mut self, key: &str, value: i32);

    /// Commit accumulated writes to the backing medium.
    fn flush(&mut self) -> Result<(), PrefError>;
}
