//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `MESA_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat, RemoteConfig};
use crate::error::{Error, Result};

/// Environment variable selecting the remote endpoint.
pub const REMOTE_URL_VAR: &str = "MESA_REMOTE_URL";
/// Environment variable for the remote request timeout.
pub const REMOTE_TIMEOUT_VAR: &str = "MESA_REMOTE_TIMEOUT_SECONDS";
/// Environment variable for the database busy timeout.
pub const LOCK_WAIT_VAR: &str = "MESA_MAXIMUM_LOCK_WAIT_SECONDS";
/// Environment variable naming the confirming staff member.
pub const STAFF_VAR: &str = "MESA_STAFF";
/// Environment variable for the default list output format.
pub const OUTPUT_FORMAT_VAR: &str = "MESA_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use mesa::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or enumerated variable cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(url) = Self::var(REMOTE_URL_VAR) {
            match &mut config.remote {
                Some(remote) => remote.url = url,
                None => {
                    config.remote = Some(RemoteConfig {
                        url,
                        timeout_seconds: None,
                    });
                }
            }
        }

        if let Some(seconds) = Self::var(REMOTE_TIMEOUT_VAR) {
            let seconds = Self::parse_seconds(REMOTE_TIMEOUT_VAR, &seconds)?;
            // A timeout alone does not select the remote backend.
            if let Some(remote) = &mut config.remote {
                remote.timeout_seconds = Some(seconds);
            } else {
                log::debug!("{REMOTE_TIMEOUT_VAR} set without a remote URL; ignoring");
            }
        }

        if let Some(seconds) = Self::var(LOCK_WAIT_VAR) {
            config.maximum_lock_wait_seconds = Some(Self::parse_seconds(LOCK_WAIT_VAR, &seconds)?);
        }

        if let Some(staff) = Self::var(STAFF_VAR) {
            config.default_staff = Some(staff);
        }

        if let Some(format) = Self::var(OUTPUT_FORMAT_VAR) {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|message| {
                Error::Validation {
                    field: OUTPUT_FORMAT_VAR.into(),
                    message,
                }
            })?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_seconds(field: &str, value: &str) -> Result<u64> {
        value.parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a positive integer, got '{value}'"),
        })
    }
}
