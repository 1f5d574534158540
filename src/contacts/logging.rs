//! File logging for the CLI.
//!
//! The library only emits `tracing` events. The binary calls [`init_logging`]
//! once at startup to route them to the configured log file; tests install
//! their own subscriber instead.
//!
//! A log file that cannot be opened must never stop the program, so every
//! failure here is returned to the caller, which is free to ignore it.

use crate::config::ContactsConfig;
use crate::error::{ContactsError, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "CONTACTS_LOG";

/// Installs the global subscriber, appending to `config.log_file`.
pub fn init_logging(config: &ContactsConfig) -> Result<()> {
    let filter = level_filter(&config.log_level);
    let appender = file_appender(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| ContactsError::Logging(e.to_string()))
}

fn level_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ContactsError::Logging(format!("not a file: {}", path.display())))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|e| ContactsError::Logging(format!("{}: {}", path.display(), e)))
}
