use crate::error::{ContactsError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_FILE: &str = "contacts.log";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Overrides the directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "CONTACTS_CONFIG_DIR";

/// Configuration for contacts, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Log file every invocation appends to
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Log level filter (e.g. "info", "warn", "contacts=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory relative data file names are resolved against.
    /// Falls back to the working directory when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_level: default_log_level(),
            data_dir: None,
        }
    }
}

impl ContactsConfig {
    /// The directory holding `config.json`: `$CONTACTS_CONFIG_DIR` if set,
    /// otherwise the platform config directory.
    pub fn default_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "contacts", "contacts").map(|d| d.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            ContactsError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ContactsError::Config(format!("invalid {}: {}", config_path.display(), e))
        })
    }

    /// Resolves a data file name given on the command line.
    pub fn resolve_data_path(&self, filename: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) if filename.is_relative() => dir.join(filename),
            _ => filename.to_path_buf(),
        }
    }
}
