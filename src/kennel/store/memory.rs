use super::{decode, encode, DataStore};
use crate::error::{KennelError, Result};
use crate::model::AnimalRecord;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Snapshots go through the same JSON encoding as [`super::fs::FileStore`],
/// so a round-trip here exercises the real codec.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose snapshot is the given raw text, valid or not.
    pub fn with_raw(content: impl Into<String>) -> Self {
        Self {
            snapshot: Some(content.into()),
        }
    }
}

impl DataStore for InMemoryStore {
    fn save(&mut self, animals: &[AnimalRecord]) -> Result<()> {
        self.snapshot = Some(encode(animals)?);
        Ok(())
    }

    fn load(&self) -> Result<Vec<AnimalRecord>> {
        match &self.snapshot {
            Some(content) => decode(content),
            None => Err(KennelError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "nothing has been saved yet",
            ))),
        }
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}
