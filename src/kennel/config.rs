use crate::error::{KennelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "animals.json";

/// Language used for age phrasing and kind labels in listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Ru => f.write_str("ru"),
        }
    }
}

impl FromStr for Locale {
    type Err = KennelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(KennelError::Api(format!(
                "Unsupported locale: {} (expected en or ru)",
                other
            ))),
        }
    }
}

/// Configuration for kennel, stored in `config.json` inside the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KennelConfig {
    /// File name of the registry, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default)]
    pub locale: Locale,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for KennelConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            locale: Locale::default(),
        }
    }
}

impl KennelConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KennelError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| KennelError::CorruptData(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KennelError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(KennelError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "locale" => Some(self.locale.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(KennelError::Api("data-file cannot be empty".to_string()));
                }
                self.data_file = value.to_string();
            }
            "locale" => self.locale = value.parse()?,
            other => return Err(KennelError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data-file", self.data_file.clone()),
            ("locale", self.locale.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = KennelConfig::default();
        assert_eq!(config.data_file, "animals.json");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_set_known_keys() {
        let mut config = KennelConfig::default();
        config.set("locale", "RU").unwrap();
        config.set("data-file", " zoo.json ").unwrap();
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.get("data-file").as_deref(), Some("zoo.json"));
    }

    #[test]
    fn test_set_rejects_unknown_key_and_locale() {
        let mut config = KennelConfig::default();
        assert!(matches!(config.set("color", "red"), Err(KennelError::Api(_))));
        assert!(matches!(config.set("locale", "fr"), Err(KennelError::Api(_))));
        assert_eq!(config, KennelConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = KennelConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, KennelConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = KennelConfig::default();
        config.set("locale", "ru").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = KennelConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.locale, Locale::Ru);
        assert_eq!(loaded.data_file, "animals.json");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"locale":"ru"}"#).unwrap();

        let loaded = KennelConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.locale, Locale::Ru);
        assert_eq!(loaded.data_file, "animals.json");
    }
}
