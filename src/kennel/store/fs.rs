use super::{decode, encode, DataStore};
use crate::error::{KennelError, Result};
use crate::model::AnimalRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(KennelError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save(&mut self, animals: &[AnimalRecord]) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        let content = encode(animals)?;

        // Atomic write: a crash mid-save must not clobber the previous file
        let tmp_file = dir.join(format!(".animals-{}.tmp", Uuid::new_v4()));
        let written = fs::write(&tmp_file, content).and_then(|_| fs::rename(&tmp_file, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(KennelError::Io(e));
        }

        info!(count = animals.len(), path = %self.path.display(), "registry saved");
        Ok(())
    }

    fn load(&self) -> Result<Vec<AnimalRecord>> {
        let content = fs::read_to_string(&self.path).map_err(KennelError::Io)?;
        let animals = decode(&content)?;
        debug!(count = animals.len(), path = %self.path.display(), "registry file decoded");
        Ok(animals)
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
