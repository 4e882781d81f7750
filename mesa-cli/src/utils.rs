//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, and opening
//! the reservation store.

use crate::error::CliError;
use chrono::{Local, NaiveDate};
use mesa::config::RemoteConfig;
use mesa::store::{RemoteStore, ReservationStore};
use mesa::{Config, ConfigBuilder, Database, DatabaseConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Use the HTTP backend at this URL.
    pub remote_url: Option<String>,
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match home::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Resolve the data directory: `--data-dir` / `MESA_DATA_DIR`, else `~/.mesa`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(expand_home(dir)),
        None => mesa::database::default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The configuration file in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_data_dir(resolve_data_dir(global)?);

    if let Some(ref url) = global.remote_url {
        builder = builder.with_config(Config {
            remote: Some(RemoteConfig {
                url: url.clone(),
                timeout_seconds: None,
            }),
            ..Config::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Open the local database with configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let mut db_config = DatabaseConfig::in_data_dir(resolve_data_dir(global)?);

    // The flag wins over the configured lock wait
    if let Some(seconds) = global.busy_timeout.or(config.maximum_lock_wait_seconds) {
        db_config = db_config.with_busy_timeout(Duration::from_secs(seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Open the configured store: the HTTP endpoint when one is configured,
/// otherwise the local database.
pub fn open_store(
    global: &GlobalOptions,
    config: &Config,
) -> Result<Box<dyn ReservationStore>, CliError> {
    if let Some(ref remote) = config.remote {
        if global.verbose {
            eprintln!("Using remote reservation endpoint {}", remote.url);
        }
        return Ok(Box::new(RemoteStore::from_config(remote)?));
    }
    Ok(Box::new(open_database(global, config)?))
}

/// Parse a `--date` value, defaulting to today in local time.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate, CliError> {
    match date {
        Some(text) => mesa::reservation::parse_date("date", text)
            .map_err(|e| CliError::InvalidArguments(e.message)),
        None => Ok(Local::now().date_naive()),
    }
}
