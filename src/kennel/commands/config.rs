use crate::commands::{CmdMessage, CmdResult};
use crate::config::KennelConfig;
use crate::error::{KennelError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = KennelConfig::load(config_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| KennelError::Api(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = TempDir::new().unwrap();
        run(dir.path(), ConfigAction::Set("locale".into(), "ru".into())).unwrap();

        let shown = run(dir.path(), ConfigAction::ShowKey("locale".into())).unwrap();
        assert_eq!(shown.messages[0].content, "ru");

        let all = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().locale, Locale::Ru);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            run(dir.path(), ConfigAction::ShowKey("colour".into())),
            Err(KennelError::Api(_))
        ));
        assert!(matches!(
            run(dir.path(), ConfigAction::Set("colour".into(), "x".into())),
            Err(KennelError::Api(_))
        ));
        assert!(!dir.path().join("config.json").exists());
    }
}
