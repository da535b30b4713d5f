//! Optional TOML configuration.
//!
//! ```toml
//! [database]
//! backend = "sqlite"
//! connection_string = "questions.db"
//!
//! [advisor]
//! model = "mixtral-8x7b-32768"
//! api_key_env = "REGIME_ADVISOR_API_KEY"
//!
//! [logging]
//! level = "info"
//! file = "regime.log"
//! ```
//!
//! Every key is optional. Command-line flags win over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use regime_advisor::AdvisorConfig;
use regime_core::db::DbConfig;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "regime.toml";

/// Where questions are logged when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "questions.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or any `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub level: String,
    /// Log file, appended to. Terminal-only when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DbConfig,
    pub advisor: AdvisorConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DbConfig {
                connection_string: DEFAULT_DATABASE.to_string(),
                ..DbConfig::default()
            },
            advisor: AdvisorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Loads `explicit` if given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] if present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            debug!(path = %fallback.display(), "using config file");
            Self::load(fallback)
        } else {
            Ok(Self::default())
        }
    }
}
