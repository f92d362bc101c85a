use crate::config::KennelConfig;
use crate::model::AnimalRecord;
use crate::registry::CategoryCounts;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod filter;
pub mod list;
pub mod load;
pub mod save;
pub mod show_commands;
pub mod summary;
pub mod train;
pub mod update;

#[derive(Debug, Clone)]
pub struct KennelPaths {
    /// Holds `config.json` and, unless overridden, the registry file
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the UI. Records are cloned out of the
/// registry so callers never hold a borrow of it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_animals: Vec<AnimalRecord>,
    pub listed_animals: Vec<AnimalRecord>,
    pub commands: Vec<String>,
    pub counts: Option<CategoryCounts>,
    pub config: Option<KennelConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_animals(mut self, animals: Vec<AnimalRecord>) -> Self {
        self.listed_animals = animals;
        self
    }

    pub fn with_commands(mut self, commands: Vec<String>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_counts(mut self, counts: CategoryCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_config(mut self, config: KennelConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when the command changed the registry and it should be saved.
    pub fn is_mutation(&self) -> bool {
        !self.affected_animals.is_empty()
    }
}
