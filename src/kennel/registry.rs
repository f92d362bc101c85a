//! # Registry
//!
//! The in-memory collection of [`AnimalRecord`]s. The registry owns its records
//! exclusively and keeps them in insertion order; every listing that needs a
//! different order computes it on demand.
//!
//! It also owns the id counter. Ids are handed out on append, one past the
//! largest id ever issued by this registry, and are never reused: removing a
//! record leaves the counter alone. Replacing the whole collection (a load)
//! resets the counter to one past the largest id in the new set.
//!
//! Every mutating operation either succeeds completely or leaves the registry
//! untouched.

use crate::error::{KennelError, Result};
use crate::model::{AnimalKind, AnimalRecord, Category, NewAnimal};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

const FIRST_ID: u64 = 1;

/// Replacement values for [`Registry::edit`]. All three fields are applied.
#[derive(Debug, Clone)]
pub struct AnimalUpdate {
    pub name: String,
    pub birth_date: NaiveDate,
    pub commands: Vec<String>,
}

impl AnimalUpdate {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, commands: Vec<String>) -> Self {
        Self {
            name: name.into(),
            birth_date,
            commands,
        }
    }
}

/// Head counts for the categorized summary. Kinds with no animals are still
/// present with a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub total: usize,
    pub pets: usize,
    pub pack_animals: usize,
    pub by_kind: BTreeMap<AnimalKind, usize>,
}

impl CategoryCounts {
    pub fn kind(&self, kind: AnimalKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn category(&self, category: Category) -> usize {
        match category {
            Category::Pet => self.pets,
            Category::PackAnimal => self.pack_animals,
        }
    }
}

#[derive(Debug)]
pub struct Registry {
    animals: Vec<AnimalRecord>,
    next_id: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            animals: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// The id the next successful [`add`](Self::add) will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimalRecord> {
        self.animals.iter()
    }

    pub fn as_slice(&self) -> &[AnimalRecord] {
        &self.animals
    }

    /// Appends a new animal and assigns its id.
    ///
    /// If an existing record is a duplicate of the new one, the registry is left
    /// unchanged and `DuplicateFound` carries the existing id, unless
    /// `allow_duplicate` is set. A rejected add does not consume an id.
    pub fn add(&mut self, new: NewAnimal, allow_duplicate: bool) -> Result<&AnimalRecord> {
        let candidate = AnimalRecord::from_new(self.next_id, new);

        if let Some(existing) = self.animals.iter().find(|a| a.is_duplicate_of(&candidate)) {
            if !allow_duplicate {
                return Err(KennelError::DuplicateFound(existing.id()));
            }
            debug!(existing = existing.id(), "adding duplicate animal on request");
        }

        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| KennelError::Api("No ids left to assign".to_string()))?;
        debug!(id = candidate.id(), kind = %candidate.kind(), "animal added");
        let index = self.animals.len();
        self.animals.push(candidate);
        Ok(&self.animals[index])
    }

    pub fn find(&self, id: u64) -> Result<&AnimalRecord> {
        self.animals
            .iter()
            .find(|a| a.id() == id)
            .ok_or(KennelError::NotFound(id))
    }

    pub fn find_mut(&mut self, id: u64) -> Result<&mut AnimalRecord> {
        self.animals
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(KennelError::NotFound(id))
    }

    /// Removes and returns the record. The id stays retired.
    pub fn remove(&mut self, id: u64) -> Result<AnimalRecord> {
        let pos = self
            .animals
            .iter()
            .position(|a| a.id() == id)
            .ok_or(KennelError::NotFound(id))?;
        debug!(id, "animal removed");
        Ok(self.animals.remove(pos))
    }

    /// Teaches a new command. The command is trimmed before it is stored.
    pub fn train(&mut self, id: u64, command: &str) -> Result<&AnimalRecord> {
        let command = command.trim();
        if command.is_empty() {
            return Err(KennelError::Api("Command cannot be empty".to_string()));
        }

        let animal = self.find_mut(id)?;
        if animal.has_command(command) {
            return Err(KennelError::AlreadyKnown {
                id,
                command: command.to_string(),
            });
        }
        animal.commands.push(command.to_string());
        debug!(id, command, "command trained");
        Ok(&*animal)
    }

    /// Replaces name, birth date and the whole command list.
    pub fn edit(&mut self, id: u64, update: AnimalUpdate) -> Result<&AnimalRecord> {
        let animal = self.find_mut(id)?;
        animal.name = update.name;
        animal.birth_date = update.birth_date;
        animal.commands = update.commands;
        debug!(id, "animal edited");
        Ok(&*animal)
    }

    /// Records ordered by birth date, oldest first. Animals born on the same day
    /// keep their registry order.
    pub fn sorted_by_birth_date(&self) -> impl Iterator<Item = &AnimalRecord> {
        let mut sorted: Vec<&AnimalRecord> = self.animals.iter().collect();
        sorted.sort_by_key(|a| a.birth_date);
        sorted.into_iter()
    }

    pub fn filter_by_kind(&self, kind: AnimalKind) -> impl Iterator<Item = &AnimalRecord> {
        self.animals.iter().filter(move |a| a.kind() == kind)
    }

    pub fn count_by_category(&self) -> CategoryCounts {
        let mut counts = CategoryCounts {
            by_kind: AnimalKind::ALL.iter().map(|k| (*k, 0)).collect(),
            ..Default::default()
        };

        for animal in &self.animals {
            counts.total += 1;
            match animal.category() {
                Category::Pet => counts.pets += 1,
                Category::PackAnimal => counts.pack_animals += 1,
            }
            *counts.by_kind.entry(animal.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Swaps in a whole new collection and moves the id counter past it.
    ///
    /// Fails with `CorruptData` if two records share an id or the largest id
    /// cannot be followed by another; the registry is untouched in that case.
    pub fn replace_all(&mut self, animals: Vec<AnimalRecord>) -> Result<()> {
        let mut seen = HashSet::with_capacity(animals.len());
        for animal in &animals {
            if !seen.insert(animal.id()) {
                return Err(KennelError::CorruptData(format!(
                    "id {} appears more than once",
                    animal.id()
                )));
            }
        }

        let next_id = match animals.iter().map(AnimalRecord::id).max() {
            None => FIRST_ID,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                KennelError::CorruptData(format!("id {} leaves no room for new ids", max))
            })?,
        };

        self.next_id = next_id;
        self.animals = animals;
        debug!(count = self.animals.len(), next_id = self.next_id, "registry replaced");
        Ok(())
    }
}
