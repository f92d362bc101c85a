//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every registry operation, whatever the UI.
//!
//! It owns the [`Registry`] and the [`DataStore`] it is persisted to, dispatches
//! to `commands/*.rs`, and returns structured [`CmdResult`]s. It does no
//! printing and makes no terminal assumptions.
//!
//! ## Generic Over DataStore
//!
//! `KennelApi<S: DataStore>` is generic over the storage backend:
//! - Production: `KennelApi<FileStore>`
//! - Testing: `KennelApi<InMemoryStore>`
//!
//! ## Concurrency
//!
//! Every method takes `&self` or `&mut self`, so one owner serializes all
//! access. A multi-threaded host would wrap the whole facade in one mutex;
//! save and load then stay whole-collection units.

use crate::commands;
use crate::error::{KennelError, Result};
use crate::model::{AnimalKind, NewAnimal};
use crate::registry::{AnimalUpdate, Registry};
use crate::store::DataStore;
use std::io;
use tracing::debug;

pub struct KennelApi<S: DataStore> {
    registry: Registry,
    store: S,
    paths: KennelPaths,
}

impl<S: DataStore> KennelApi<S> {
    /// Starts with an empty registry. Nothing is read until [`load`](Self::load).
    pub fn new(store: S, paths: KennelPaths) -> Self {
        Self {
            registry: Registry::new(),
            store,
            paths,
        }
    }

    pub fn add_animal(&mut self, new: NewAnimal, allow_duplicate: bool) -> Result<CmdResult> {
        commands::create::run(&mut self.registry, new, allow_duplicate)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        commands::load::run(&mut self.registry, &self.store)
    }

    /// Like [`load`](Self::load), but a store that has never been written is
    /// treated as an empty registry. Returns whether anything was loaded.
    pub fn load_if_present(&mut self) -> Result<bool> {
        match self.load() {
            Ok(_) => Ok(true),
            Err(KennelError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(location = %self.store.location().display(), "no saved registry yet");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&self.registry, &mut self.store)
    }

    pub fn list_commands(&self, id: u64) -> Result<CmdResult> {
        commands::show_commands::run(&self.registry, id)
    }

    pub fn train(&mut self, id: u64, command: &str) -> Result<CmdResult> {
        commands::train::run(&mut self.registry, id, command)
    }

    pub fn list_by_birth_date(&self) -> Result<CmdResult> {
        commands::list::run(&self.registry)
    }

    pub fn filter_by_kind(&self, kind: AnimalKind) -> Result<CmdResult> {
        commands::filter::run(&self.registry, kind)
    }

    pub fn delete_animal(&mut self, id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.registry, id)
    }

    pub fn edit_animal(&mut self, id: u64, update: AnimalUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.registry, id, update)
    }

    pub fn summary(&self) -> Result<CmdResult> {
        commands::summary::run(&self.registry)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths.data_dir, action)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, KennelPaths, MessageLevel};
