//! # Storage Layer
//!
//! The registry is persisted as a whole: a save captures every record in one
//! unit, a load hands back every record or nothing. There is no incremental
//! persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   (`animals.json` by default) holding an array of records.
//!   Writes go to a temporary sibling file which is then renamed over the
//!   target, so a failed save never leaves a half-written file behind.
//!
//! - [`memory::InMemoryStore`]: Keeps the last saved snapshot in memory.
//!   Used by tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "kind": "dog",
//!     "name": "Rex",
//!     "birth_date": "2020-01-01",
//!     "commands": ["sit", "stay"]
//!   }
//! ]
//! ```
//!
//! The next-id counter is not stored. It is recovered on load from the
//! largest id present (see [`crate::registry::Registry::replace_all`]).

use crate::error::Result;
use crate::model::AnimalRecord;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for registry persistence.
pub trait DataStore {
    /// Write the full, ordered collection, replacing whatever was stored before.
    fn save(&mut self, animals: &[AnimalRecord]) -> Result<()>;

    /// Read back the full collection.
    ///
    /// Fails with `Io` when nothing can be read and with `CorruptData` when
    /// the content is not a list of records.
    fn load(&self) -> Result<Vec<AnimalRecord>>;

    /// Where the data lives, for display.
    fn location(&self) -> PathBuf;
}

/// Decodes a stored snapshot. Shared by the backends so they agree on what
/// counts as corrupt.
pub(crate) fn decode(content: &str) -> Result<Vec<AnimalRecord>> {
    serde_json::from_str(content)
        .map_err(|e| crate::error::KennelError::CorruptData(e.to_string()))
}

pub(crate) fn encode(animals: &[AnimalRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(animals)?)
}
