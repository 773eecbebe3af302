//! Configuration management
//!
//! Settings come from an optional YAML file at `~/.denden_ink.yaml`.
//! The store location can also be overridden with `INK_DB_PATH`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the store location.
pub const DB_PATH_ENV: &str = "INK_DB_PATH";

const CONFIG_FILE_NAME: &str = ".denden_ink.yaml";
const DB_FILE_NAME: &str = ".denden_ink.db";

/// User configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Store file location (defaults to `~/.denden_ink.db`)
    pub db_path: Option<PathBuf>,

    /// Notes shown by `ink list` without a tag
    pub recent_limit: usize,

    /// Entries shown in each "top" section of `ink stats`
    pub stats_top: usize,

    /// Days shown in the activity section of `ink stats`
    pub stats_days: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            recent_limit: 10,
            stats_top: 5,
            stats_days: 7,
        }
    }
}

impl Config {
    /// Loads `~/.denden_ink.yaml`, or defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parses YAML configuration text. An empty document yields defaults.
    pub fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(contents).map_err(|e| anyhow::anyhow!("{e}"))
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(CONFIG_FILE_NAME))
    }

    /// Resolves the store path: `INK_DB_PATH`, then `db_path`, then the default.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(DB_PATH_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        default_db_path()
    }
}

/// Get the default database path
pub fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(DB_FILE_NAME))
}
