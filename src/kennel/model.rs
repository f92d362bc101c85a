use crate::error::{KennelError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Secondary classification of a kind, used by the categorized summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Pet,
    PackAnimal,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pet => "Pet",
            Category::PackAnimal => "Pack animal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Dog,
    Cat,
    Hamster,
    Horse,
    Camel,
    Donkey,
}

impl AnimalKind {
    /// All kinds, in menu order.
    pub const ALL: [AnimalKind; 6] = [
        AnimalKind::Dog,
        AnimalKind::Cat,
        AnimalKind::Hamster,
        AnimalKind::Horse,
        AnimalKind::Camel,
        AnimalKind::Donkey,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnimalKind::Dog => "Dog",
            AnimalKind::Cat => "Cat",
            AnimalKind::Hamster => "Hamster",
            AnimalKind::Horse => "Horse",
            AnimalKind::Camel => "Camel",
            AnimalKind::Donkey => "Donkey",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            AnimalKind::Dog | AnimalKind::Cat | AnimalKind::Hamster => Category::Pet,
            AnimalKind::Horse | AnimalKind::Camel | AnimalKind::Donkey => Category::PackAnimal,
        }
    }

    /// Maps a 1-based menu entry to its kind.
    pub fn from_menu_choice(choice: u32) -> Result<Self> {
        (choice as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| KennelError::InvalidType(choice.to_string()))
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnimalKind {
    type Err = KennelError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| KennelError::InvalidType(wanted.to_string()))
    }
}

/// Splits a comma-separated command line into trimmed, non-empty commands.
pub fn parse_commands(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn fold_command(command: &str) -> String {
    command.trim().to_lowercase()
}

/// An animal that has not been registered yet, and so has no id.
#[derive(Debug, Clone)]
pub struct NewAnimal {
    pub kind: AnimalKind,
    pub name: String,
    pub birth_date: NaiveDate,
    pub commands: Vec<String>,
}

impl NewAnimal {
    pub fn new(kind: AnimalKind, name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            kind,
            name: name.into(),
            birth_date,
            commands: Vec::new(),
        }
    }

    pub fn with_commands<I, C>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.commands = commands.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalRecord {
    id: u64,
    kind: AnimalKind,
    pub name: String,
    pub birth_date: NaiveDate,
    pub commands: Vec<String>,
}

impl AnimalRecord {
    pub(crate) fn from_new(id: u64, new: NewAnimal) -> Self {
        Self {
            id,
            kind: new.kind,
            name: new.name,
            birth_date: new.birth_date,
            commands: new.commands,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> AnimalKind {
        self.kind
    }

    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn is_pet(&self) -> bool {
        self.category() == Category::Pet
    }

    pub fn is_pack_animal(&self) -> bool {
        self.category() == Category::PackAnimal
    }

    /// Case-insensitive, whitespace-insensitive membership test.
    pub fn has_command(&self, command: &str) -> bool {
        let wanted = fold_command(command);
        self.commands.iter().any(|c| fold_command(c) == wanted)
    }

    fn folded_commands(&self) -> HashSet<String> {
        self.commands.iter().map(|c| fold_command(c)).collect()
    }

    /// Whether `other` describes the same animal: same kind, same name
    /// ignoring case, same birth date and the same folded command set.
    /// Ids are not compared.
    pub fn is_duplicate_of(&self, other: &AnimalRecord) -> bool {
        self.kind == other.kind
            && self.name.to_lowercase() == other.name.to_lowercase()
            && self.birth_date == other.birth_date
            && self.folded_commands() == other.folded_commands()
    }
}
