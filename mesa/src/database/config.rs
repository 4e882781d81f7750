//! Where the reservation database lives and how it is opened.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the reservation database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "mesa.db";

/// How long a write waits on a competing writer unless told otherwise.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Options for [`Database::open`](super::Database::open).
///
/// # Examples
///
/// ```
/// use mesa::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::in_data_dir("/srv/mesa")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.path.ends_with("mesa.db"));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Upper bound on waiting for another connection's write lock.
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    /// Targets `path` with [`DEFAULT_BUSY_TIMEOUT`]. The file and its
    /// parent directories are created on open when missing.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Targets [`DATABASE_FILE_NAME`] inside a data directory.
    #[must_use]
    pub fn in_data_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Sets how long a write waits for a competing writer before failing.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

/// Returns `~/.mesa`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".mesa"))
}
