//! User configuration and storage path resolution

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

pub const APP_NAME: &str = "todocli";
const DEFAULT_DB_FILE: &str = ".todocli.db";
const DEFAULT_LOG_FILE: &str = ".todocli.log";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}

impl Config {
    /// Loads the user config file, or defaults when there is none.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Flag (or env var), then config file, then `~/.todocli.db`.
    pub fn resolve_db_path(&self, cli: &Cli) -> PathBuf {
        cli.db_path
            .clone()
            .or_else(|| self.db_path.clone())
            .unwrap_or_else(|| home_file(DEFAULT_DB_FILE))
    }

    pub fn resolve_log_file(&self, cli: &Cli) -> PathBuf {
        cli.log_file
            .clone()
            .or_else(|| self.log_file.clone())
            .unwrap_or_else(|| home_file(DEFAULT_LOG_FILE))
    }
}

fn home_file(name: &str) -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_config_deserialize_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_deserialize_partial_toml() {
        let config: Config = toml::from_str(r#"db_path = "/data/tasks.db""#).unwrap();
        assert_eq!(config.db_path, Some(PathBuf::from("/data/tasks.db")));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "db_path = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_flag_wins_over_config() {
        let config = Config {
            db_path: Some(PathBuf::from("/config.db")),
            log_file: None,
        };
        let cli = Cli {
            db_path: Some(PathBuf::from("/flag.db")),
            ..Default::default()
        };
        assert_eq!(config.resolve_db_path(&cli), PathBuf::from("/flag.db"));
    }

    #[test]
    fn test_config_wins_over_default() {
        let config = Config {
            db_path: Some(PathBuf::from("/config.db")),
            log_file: Some(PathBuf::from("/config.log")),
        };
        let cli = Cli::default();
        assert_eq!(config.resolve_db_path(&cli), PathBuf::from("/config.db"));
        assert_eq!(config.resolve_log_file(&cli), PathBuf::from("/config.log"));
    }

    #[test]
    #[serial]
    fn test_default_db_path_in_home() {
        let temp = tempdir().unwrap();
        std::env::set_var("HOME", temp.path());
        let path = Config::default().resolve_db_path(&Cli::default());
        assert_eq!(path, temp.path().join(".todocli.db"));
    }
}
