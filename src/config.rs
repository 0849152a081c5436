//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::profile::DEFAULT_PROFILE_KEY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Profile storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_profile_key")]
    pub profile_key: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("ebook").to_string_lossy().to_string())
        .unwrap_or_else(|| "./ebook_data".to_string())
}

fn default_profile_key() -> String {
    DEFAULT_PROFILE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            profile_key: default_profile_key(),
        }
    }
}

/// Labels used when rendering views
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_barbershop_name")]
    pub barbershop_name: String,

    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
}

fn default_currency() -> String {
    "UZS".to_string()
}

fn default_barbershop_name() -> String {
    "Big Bro Barbershop".to_string()
}

fn default_restaurant_name() -> String {
    "Kamolon Osh Labzak".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            barbershop_name: default_barbershop_name(),
            restaurant_name: default_restaurant_name(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("ebook").join("config.toml")),
            Some(PathBuf::from("/etc/ebook/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Directory holding the file-backed profile storage
    pub fn data_dir(&self) -> PathBuf {
        expand_home(&self.storage.data_dir)
    }

    /// File the CLI writes logs to instead of stderr
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging.file.as_deref().map(expand_home)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(data_dir) = std::env::var("EBOOK_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Ok(key) = std::env::var("EBOOK_PROFILE_KEY") {
            self.storage.profile_key = key;
        }

        if let Ok(currency) = std::env::var("EBOOK_CURRENCY") {
            self.display.currency = currency;
        }

        if let Ok(level) = std::env::var("EBOOK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("EBOOK_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(file) = std::env::var("EBOOK_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}

/// Resolve a leading `~` against the user's home directory.
///
/// Paths without the prefix, and `~user` forms, are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# E-Book demo configuration
#
# Environment variables override these settings:
# - EBOOK_DATA_DIR
# - EBOOK_PROFILE_KEY
# - EBOOK_CURRENCY
# - EBOOK_LOG_LEVEL
# - EBOOK_LOG_FORMAT
# - EBOOK_LOG_FILE

[storage]
# Directory for the file-backed profile storage
# (default: the platform data directory, e.g. ~/.local/share/ebook)
# data_dir = "~/.local/share/ebook"

# Storage key the profile record is saved under
profile_key = "ebook_profile"

[display]
# Currency label appended to prices
currency = "UZS"

# Business names shown on confirmation pages
barbershop_name = "Big Bro Barbershop"
restaurant_name = "Kamolon Osh Labzak"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file; logs go to stderr when unset
# file = "~/.local/state/ebook/ebook.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.storage.profile_key, "ebook_profile");
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_generated_config_data_dir_is_expanded() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert!(!config.data_dir().starts_with("~"));
        assert_eq!(config.data_dir(), PathBuf::from(default_data_dir()));

        let config = Config::parse("[storage]\ndata_dir = \"~/bookings\"\n").unwrap();
        let data_dir = config.data_dir();
        assert!(!data_dir.starts_with("~"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(data_dir, home.join("bookings"));
        }
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/srv/ebook"), PathBuf::from("/srv/ebook"));
        assert_eq!(expand_home("relative/dir"), PathBuf::from("relative/dir"));
        assert_eq!(expand_home("~other/dir"), PathBuf::from("~other/dir"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/logs/ebook.log"), home.join("logs/ebook.log"));
        }
    }

    #[test]
    fn test_log_file() {
        assert!(Config::default().log_file().is_none());

        let config = Config::parse("[logging]\nfile = \"/tmp/ebook.log\"\n").unwrap();
        assert_eq!(config.log_file(), Some(PathBuf::from("/tmp/ebook.log")));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[display]\ncurrency = \"USD\"\n").unwrap();
        assert_eq!(config.display.currency, "USD");
        assert_eq!(config.display.barbershop_name, "Big Bro Barbershop");
        assert_eq!(config.storage.profile_key, DEFAULT_PROFILE_KEY);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\n").unwrap();

        match Config::load(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));
    }
}
