//! Configuration schema definitions.
//!
//! This module defines the configuration structure for mesa: which backend
//! to talk to, how long to wait on it, and the defaults the CLI applies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional so that partial files and environment layers can
/// be merged on top of each other.
///
/// # Examples
///
/// ```
/// use mesa::config::{Config, RemoteConfig};
///
/// let config = Config {
///     remote: Some(RemoteConfig {
///         url: "https://example.test/exec".to_string(),
///         timeout_seconds: Some(5),
///     }),
///     ..Default::default()
/// };
/// assert!(config.remote.is_some());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Remote HTTP endpoint; when set, it replaces the local database.
    pub remote: Option<RemoteConfig>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Staff principal recorded on confirmations when none is given.
    pub default_staff: Option<String>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

/// Remote endpoint settings.
///
/// ```
/// use mesa::config::RemoteConfig;
///
/// let remote: RemoteConfig = serde_yaml::from_str("url: https://example.test/exec\n").unwrap();
/// assert_eq!(remote.timeout_seconds, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Endpoint URL, `http://` or `https://`.
    pub url: String,

    /// Per-request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use mesa::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    #[default]
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            other => Err(format!(
                "unknown output format '{other}' (expected json, csv, tsv or table)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let format: OutputFormat = serde_yaml::from_str("json").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_output_format_default_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_output_format_parse_rejects_unknown() {
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_full_config_deserialize() {
        let yaml = r"
remote:
  url: https://script.example.test/exec
  timeout_seconds: 15
maximum_lock_wait_seconds: 3
default_staff: host@mesa.test
output_format: csv
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let remote = config.remote.unwrap();
        assert_eq!(remote.url, "https://script.example.test/exec");
        assert_eq!(remote.timeout_seconds, Some(15));
        assert_eq!(config.maximum_lock_wait_seconds, Some(3));
        assert_eq!(config.default_staff.as_deref(), Some("host@mesa.test"));
        assert_eq!(config.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_empty_config_deserialize() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("ports:\n  min: 5000\n");
        assert!(result.is_err());

        let result: Result<Config, _> =
            serde_yaml::from_str("remote:\n  url: http://x\n  retries: 3\n");
        assert!(result.is_err());
    }
}
