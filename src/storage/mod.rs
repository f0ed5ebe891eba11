//! Storage Module
//!
//! Key-value persistence for the tour collection.
//!
//! ## Responsibilities
//! - Hold string values under string keys
//! - Return `None` for keys never written
//! - Overwrite the whole value on every write (no partial updates)
//!
//! ## Layout (FileStorage)
//! ```text
//! {data_dir}/
//!   └── tours.json     ← one file per key, value stored verbatim
//! ```

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A string-keyed store of string values
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
