//! Configuration validation.

use crate::config::schema::{Config, RemoteConfig};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use mesa::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if:
    /// - the remote URL is not `http://` or `https://`
    /// - a timeout is zero
    /// - the default staff principal is blank
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref remote) = config.remote {
            Self::validate_remote(remote)?;
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            Self::validate_timeout("maximum_lock_wait_seconds", timeout)?;
        }

        if let Some(ref staff) = config.default_staff {
            Self::validate_identifier("default_staff", staff)?;
        }

        Ok(())
    }

    fn validate_remote(remote: &RemoteConfig) -> Result<()> {
        let url = remote.url.trim();
        let has_scheme = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_scheme {
            return Err(Error::Validation {
                field: "remote.url".into(),
                message: format!("Must be an http:// or https:// URL, got '{}'", remote.url),
            });
        }

        if let Some(timeout) = remote.timeout_seconds {
            Self::validate_timeout("remote.timeout_seconds", timeout)?;
        }
        Ok(())
    }

    fn validate_timeout(field: &str, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Timeout must be greater than 0".into(),
            });
        }
        Ok(())
    }

    /// Checks that the value is non-empty after trimming and has no null
    /// bytes.
    fn validate_identifier(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}
