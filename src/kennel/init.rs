use crate::api::{KennelApi, KennelPaths};
use crate::config::KennelConfig;
use crate::error::{KennelError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the platform data directory. Mostly useful for tests and
/// for keeping several registries side by side.
pub const HOME_ENV: &str = "KENNEL_HOME";

pub struct KennelContext {
    pub api: KennelApi<FileStore>,
    pub config: KennelConfig,
}

/// `$KENNEL_HOME` if set, otherwise the per-user data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "kennel", "kennel")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| KennelError::Api("Could not determine a data directory".to_string()))
}

/// Builds the API over the file-backed store. `data_file` wins over the
/// configured file name when given.
pub fn initialize(data_file: Option<PathBuf>) -> Result<KennelContext> {
    let data_dir = data_dir()?;
    let config = KennelConfig::load(&data_dir)?;

    let data_file = data_file.unwrap_or_else(|| data_dir.join(&config.data_file));
    debug!(dir = %data_dir.display(), file = %data_file.display(), "kennel initialized");

    let store = FileStore::new(data_file.clone());
    let paths = KennelPaths {
        data_dir,
        data_file,
    };

    Ok(KennelContext {
        api: KennelApi::new(store, paths),
        config,
    })
}
