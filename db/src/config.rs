//! Connection configuration.
//!
//! A [`ConnectionConfig`] says which database to open, with which flags, and
//! how to react to a busy database. It can be built directly, parsed from a
//! URL, read from the environment, or loaded from a `.sqlitepp.json` file:
//!
//! ```json
//! {
//!   "database": { "type": "sqlite", "path": "./kv.sqlite" },
//!   "busy": { "mode": "backoff", "max_retries": 20 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::busy::BusyPolicy;
use crate::error::{Error, Result};
use crate::flags::{OpenFlags, default_open_flags};

pub const CONFIG_FILE_NAME: &str = ".sqlitepp.json";
pub const DEFAULT_DATABASE_PATH: &str = "./sqlitepp.sqlite";

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionConfig {
    pub target: DatabaseTarget,
    pub open_flags: OpenFlags,
    pub busy: BusyPolicy,
}

impl ConnectionConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: DatabaseTarget::File(path.into()),
            open_flags: default_open_flags(),
            busy: BusyPolicy::default(),
        }
    }

    pub fn memory() -> Self {
        Self {
            target: DatabaseTarget::Memory,
            open_flags: default_open_flags(),
            busy: BusyPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_busy_policy(mut self, busy: BusyPolicy) -> Self {
        self.busy = busy;
        self
    }

    #[must_use]
    pub fn with_open_flags(mut self, open_flags: OpenFlags) -> Self {
        self.open_flags = open_flags;
        self
    }

    /// Parse from a connection URL or file path.
    ///
    /// Supported formats:
    /// - `:memory:` → in-memory database
    /// - `sqlite:///path/to/db` → file
    /// - `file:path/to/db` (query string ignored) → file
    /// - `./path/to/db.sqlite` or `/absolute/path` → file
    pub fn from_url(url: &str) -> Result<Self> {
        if url == ":memory:" {
            return Ok(Self::memory());
        }

        if let Some(path) = url.strip_prefix("sqlite://") {
            return Ok(Self::file(path));
        }

        if let Some(rest) = url.strip_prefix("file:") {
            let path = rest.split('?').next().unwrap_or_default();
            let path = path.strip_prefix("//").unwrap_or(path);
            if path.is_empty() {
                return Err(Error::config(format!("Missing path in database URL '{url}'")));
            }
            return Ok(Self::file(path));
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(Error::config(format!("Unsupported database URL scheme '{scheme}'")));
        }

        Ok(Self::file(url))
    }

    /// Load from environment variables.
    ///
    /// Checks `SQLITEPP_DATABASE_URL` first, then `SQLITEPP_PATH`.
    pub fn from_env() -> Result<Option<Self>> {
        if let Ok(url) = std::env::var("SQLITEPP_DATABASE_URL") {
            return Ok(Some(Self::from_url(&url)?));
        }

        if let Ok(path) = std::env::var("SQLITEPP_PATH") {
            return Ok(Some(Self::file(path)));
        }

        Ok(None)
    }

    /// Resolve configuration for a working directory.
    ///
    /// Priority: config file in `dir` > environment > `./sqlitepp.sqlite`.
    pub fn resolve(dir: &Path) -> Result<Self> {
        if let Some(config_file) = ConfigFile::load_from(dir)? {
            return Ok(config_file.to_connection_config());
        }

        if let Some(config) = Self::from_env()? {
            return Ok(config);
        }

        Self::from_url(DEFAULT_DATABASE_PATH)
    }
}

/// Top-level structure of `.sqlitepp.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub database: DatabaseConfigFile,
    #[serde(default)]
    pub busy: BusyPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    Sqlite {
        path: PathBuf,
        #[serde(default)]
        read_only: bool,
    },
    Memory,
}

impl ConfigFile {
    /// Load `.sqlitepp.json` from `dir`.
    ///
    /// Returns `Ok(None)` when the file does not exist, and an error when it
    /// exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", config_path.display(), e)))?;

        let config = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid JSON in {}: {}", config_path.display(), e)))?;

        Ok(Some(config))
    }

    pub fn to_connection_config(&self) -> ConnectionConfig {
        let config = match &self.database {
            DatabaseConfigFile::Sqlite { path, read_only: false } => ConnectionConfig::file(path.clone()),
            DatabaseConfigFile::Sqlite { path, read_only: true } => {
                ConnectionConfig::file(path.clone()).with_open_flags(OpenFlags::SQLITE_OPEN_READ_ONLY)
            }
            DatabaseConfigFile::Memory => ConnectionConfig::memory(),
        };
        config.with_busy_policy(self.busy.clone())
    }
}
