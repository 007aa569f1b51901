use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_core::Locale;
use storefront_logging::{store_info, store_warn, LogDestination};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found")]
    Missing,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: Locale,
    pub log_destination: LogDestination,
    pub log_level: String,
    /// Replaces the built-in menu when present.
    pub menu: Option<Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            menu: None,
        }
    }
}

pub(crate) fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(ConfigError::Missing),
        Err(err) => return Err(err.into()),
    };
    Ok(ron::from_str(&content)?)
}

/// Logs why the defaults are in use. A missing file is normal and only noted.
pub(crate) fn report(path: &Path, err: &ConfigError) {
    match err {
        ConfigError::Missing => store_info!("No config at {:?}; using defaults", path),
        other => store_warn!("Failed to load config from {:?}: {}; using defaults", path, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("storefront.ron");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let temp = TempDir::new().unwrap();
        let err = load(&temp.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Missing));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "(locale: Portuguese)");

        let config = load(&path).unwrap();
        assert_eq!(config.locale, Locale::Portuguese);
        assert_eq!(config.log_destination, LogDestination::Terminal);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.menu, None);
    }

    #[test]
    fn menu_override_is_read() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            r#"(log_destination: Both, log_level: "debug", menu: Some(["Suco", "X-Bacon"]))"#,
        );

        let config = load(&path).unwrap();
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.menu,
            Some(vec!["Suco".to_string(), "X-Bacon".to_string()])
        );
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "(locale: Klingon");
        assert!(matches!(load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn default_config_round_trips_through_ron() {
        let text = ron::ser::to_string_pretty(&AppConfig::default(), ron::ser::PrettyConfig::new())
            .unwrap();
        assert_eq!(ron::from_str::<AppConfig>(&text).unwrap(), AppConfig::default());
    }
}
