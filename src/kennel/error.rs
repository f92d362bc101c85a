use thiserror::Error;

#[derive(Error, Debug)]
pub enum KennelError {
    #[error("Unknown animal type: {0}")]
    InvalidType(String),

    /// Not a failure as such: the caller may retry with the duplicate override.
    #[error("An identical animal is already registered (id {0})")]
    DuplicateFound(u64),

    #[error("Animal not found: {0}")]
    NotFound(u64),

    #[error("Animal {id} already knows the command '{command}'")]
    AlreadyKnown { id: u64, command: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, KennelError>;
