//! Configuration file support for Juoppo.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/juoppo/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Database file name, relative to the data directory
    #[serde(default = "default_database_file")]
    pub database_file: PathBuf,

    /// Log file name, relative to the data directory
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database_file: default_database_file(),
            log_file: default_log_file(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".local/share"),
        None => PathBuf::from("."),
    });
    base.join("juoppo")
}

fn default_database_file() -> PathBuf {
    PathBuf::from("juoppodata.db")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("juoppo.log")
}

impl DataConfig {
    /// Database path inside `data_dir`
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database_file)
    }

    /// Log file path inside `data_dir`
    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.log_file)
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        let base = dirs::config_dir().or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
        })?;
        Some(base.join("juoppo").join("config.toml"))
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.data.database_file.as_os_str().is_empty() {
            return Err(Error::Config("data.database_file must not be empty".into()));
        }
        if self.data.log_file.as_os_str().is_empty() {
            return Err(Error::Config("data.log_file must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data.data_dir.ends_with("juoppo"));
        assert_eq!(config.data.database_file, PathBuf::from("juoppodata.db"));
        assert_eq!(config.data.log_file, PathBuf::from("juoppo.log"));
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[data]
data_dir = "/tmp/juoppo-test"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data.data_dir, PathBuf::from("/tmp/juoppo-test"));
        assert_eq!(config.data.database_file, PathBuf::from("juoppodata.db")); // default
    }

    #[test]
    fn test_paths_are_inside_data_dir() {
        let config = Config::default();
        let data_dir = Path::new("/data");
        assert_eq!(
            config.data.database_path(data_dir),
            PathBuf::from("/data/juoppodata.db")
        );
        assert_eq!(config.data.log_path(data_dir), PathBuf::from("/data/juoppo.log"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("juoppo/config.toml");

        let mut config = Config::default();
        config.data.database_file = PathBuf::from("bileet.db");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.data.database_file, PathBuf::from("bileet.db"));
        assert_eq!(loaded.data.data_dir, config.data.data_dir);
    }

    #[test]
    fn test_empty_database_file_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[data]\ndatabase_file = \"\"\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
