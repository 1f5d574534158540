//! # CLI Layer
//!
//! The binary's driver. It is the only code that knows about the terminal,
//! the process exit status and the global logger.
//!
//! Every invocation goes through the same steps:
//!
//! 1. Parse arguments (`setup.rs`)
//! 2. Load `config.json` and start file logging
//! 3. Open a [`ContactsApi`] session on the data file
//! 4. Run the command and print its result (`render.rs`)
//! 5. Save if the command changed anything
//!
//! Load and save failures are logged and otherwise ignored, so the exit
//! status stays 0. `--strict` turns them into an `Error:` line and status 1,
//! and also warns on stderr when the log file cannot be opened.

use super::render::{print_result, print_warning};
use super::setup::{parse_cli, Cli, Commands};
use chrono::Local;
use contacts::api::ContactsApi;
use contacts::config::ContactsConfig;
use contacts::error::{ContactsError, Result};
use contacts::logging::init_logging;
use contacts::store::fs::JsonFileStore;
use tracing::{info, warn};

pub fn run() -> Result<()> {
    let cli = parse_cli();

    let (config, config_error) = load_config();
    let logging_error = init_logging(&config).err();
    info!(
        started_at = %Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
        args = ?cli,
        "invocation"
    );
    if let Some(err) = config_error {
        warn!("{err}; using default configuration");
    }
    // Logging stays off for this run. Without a log file there is nowhere
    // to record that, so it only shows up under --strict.
    if let Some(err) = logging_error.filter(|_| cli.strict) {
        print_warning(&format!("{err}; logging disabled"));
    }

    execute(cli, &config)
}

fn load_config() -> (ContactsConfig, Option<ContactsError>) {
    let Some(dir) = ContactsConfig::default_dir() else {
        return (ContactsConfig::default(), None);
    };
    match ContactsConfig::load(dir) {
        Ok(config) => (config, None),
        Err(err) => (ContactsConfig::default(), Some(err)),
    }
}

fn execute(cli: Cli, config: &ContactsConfig) -> Result<()> {
    let path = config.resolve_data_path(cli.command.filename());
    let mut api = ContactsApi::open(JsonFileStore::new(path));

    if cli.strict {
        if let Some(err) = api.take_load_error() {
            return Err(err);
        }
    }

    let result = match cli.command {
        Commands::Add {
            family,
            name,
            number,
            born,
            ..
        } => api.add_contact(family, name, number, born),
        Commands::Display { .. } => api.display_contacts(),
        Commands::Select { family, .. } => api.select_contacts(family.as_deref()),
    };
    print_result(&result);

    match api.save_if_dirty() {
        Err(err) if cli.strict => Err(err),
        _ => Ok(()),
    }
}
