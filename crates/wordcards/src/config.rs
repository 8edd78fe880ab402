//! Configuration management for wordcards.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "wordcards";

/// Default word store file name.
pub const WORDS_FILE_NAME: &str = "words.json";

/// Secret key used when none is configured.
pub const DEFAULT_SECRET_KEY: &str = "dev-key-please-change";

/// Prefix for nested environment overrides (`WORDCARDS_SERVER__BIND`).
const ENV_PREFIX: &str = "WORDCARDS_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. The bare `SECRET_KEY` environment variable
/// 2. Environment variables prefixed with `WORDCARDS_`, nested with `__`
/// 3. TOML config file at `~/.config/wordcards/config.toml`
/// 4. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Word store configuration.
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: String,
    /// Key for signing session data. Not used by the word API itself.
    pub secret_key: String,
}

/// Word store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the word store.
    /// Defaults to `~/.local/share/wordcards`
    pub data_dir: Option<PathBuf>,
    /// File name of the word store inside `data_dir`.
    pub words_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None, // Resolved at runtime
            words_file: WORDS_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources using the default config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        Self::from_figment(Self::figment(&config_file))
    }

    /// Build the layered figment for the given config file.
    #[must_use]
    pub fn figment(config_file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&["SECRET_KEY"])
                    .map(|_| "server.secret_key".into()),
            )
    }

    /// Extract and validate a configuration from a prepared figment.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction or validation fails.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(Error::ConfigValidation {
                message: format!(
                    "server.bind ({}) is not a socket address",
                    self.server.bind
                ),
            });
        }

        if self.server.secret_key.is_empty() {
            return Err(Error::ConfigValidation {
                message: "server.secret_key must not be empty".to_string(),
            });
        }

        // words_file must name a file directly inside data_dir
        let words_file = Path::new(&self.storage.words_file);
        if self.storage.words_file.is_empty()
            || words_file.file_name() != Some(words_file.as_os_str())
        {
            return Err(Error::ConfigValidation {
                message: format!(
                    "storage.words_file ({}) must be a plain file name",
                    self.storage.words_file
                ),
            });
        }

        Ok(())
    }

    /// Get the data directory, resolving defaults if not set.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the full path of the word store.
    #[must_use]
    pub fn words_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.words_file)
    }

    /// Parse the bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|_| Error::ConfigValidation {
                message: format!("server.bind ({}) is not a socket address", self.server.bind),
            })
    }

    /// Whether the secret key is still the built-in development value.
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.server.secret_key == DEFAULT_SECRET_KEY
    }

    /// A copy safe to print, with the secret key masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.server.secret_key = if self.uses_default_secret() {
            format!("{DEFAULT_SECRET_KEY} (default)")
        } else {
            "********".to_string()
        };
        copy
    }

    /// Render the configuration file written by `wordcards init`.
    #[must_use]
    pub fn template(data_dir: &Path) -> String {
        let defaults = Self::default();
        format!(
            "[server]\n\
             bind = \"{bind}\"\n\
             # Override with the SECRET_KEY environment variable\n\
             secret_key = \"{secret}\"\n\
             \n\
             [storage]\n\
             data_dir = \"{data_dir}\"\n\
             words_file = \"{words_file}\"\n",
            bind = defaults.server.bind,
            secret = defaults.server.secret_key,
            data_dir = data_dir.display().to_string().replace('\\', "\\\\"),
            words_file = defaults.storage.words_file,
        )
    }
}
