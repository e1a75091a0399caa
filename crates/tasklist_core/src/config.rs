//! Runtime configuration resolution.
//!
//! # Responsibility
//! - Resolve database path, log directory and log level for one process.
//!
//! # Invariants
//! - Precedence is explicit override, then environment, then default.
//! - Blank environment values are treated as unset.
//! - A resolved config carries a normalized log level and an absolute log
//!   directory.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable overriding the SQLite database path.
pub const ENV_DB_PATH: &str = "TASKLIST_DB_PATH";
/// Environment variable overriding the log directory.
pub const ENV_LOG_DIR: &str = "TASKLIST_LOG_DIR";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "TASKLIST_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "tasklist.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "tasklist-logs";

/// Where the key-value record lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    /// Nothing survives the process.
    Memory,
}

/// Explicit values that win over environment and defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub in_memory: bool,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(path) => {
                write!(f, "log dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageLocation,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Resolves configuration from `overrides` and the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolves configuration with a custom environment lookup.
    ///
    /// # Errors
    /// - `UnsupportedLogLevel` when the chosen level is not a known level.
    /// - `RelativeLogDir` when the chosen log directory is relative.
    pub fn resolve_with(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let lookup = |key: &str| {
            env(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let storage = if overrides.in_memory {
            StorageLocation::Memory
        } else {
            let path = overrides
                .db_path
                .or_else(|| lookup(ENV_DB_PATH).map(PathBuf::from))
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
            StorageLocation::File(path)
        };

        let log_dir = overrides
            .log_dir
            .or_else(|| lookup(ENV_LOG_DIR).map(PathBuf::from))
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));

        if !log_dir.is_absolute() {
            return Err(ConfigError::RelativeLogDir(log_dir));
        }

        let raw_level = overrides
            .log_level
            .or_else(|| lookup(ENV_LOG_LEVEL))
            .unwrap_or_else(|| default_log_level().to_string());
        let log_level = normalize_level(&raw_level)
            .map_err(|_| ConfigError::UnsupportedLogLevel(raw_level.trim().to_string()))?
            .to_string();

        Ok(Self {
            storage,
            log_dir,
            log_level,
        })
    }
}
