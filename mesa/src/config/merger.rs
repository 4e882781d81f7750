//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, RemoteConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use mesa::config::{Config, ConfigMerger};
///
/// let low = Config { default_staff: Some("low".to_string()), ..Default::default() };
/// let high = Config { default_staff: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_staff, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources are sorted by precedence before merging, so the order they
    /// are passed in does not matter.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Remote section: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.default_staff.is_some() {
            target.default_staff.clone_from(&source.default_staff);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref remote) = source.remote {
            target.remote = Some(match target.remote.take() {
                Some(existing) => Self::merge_remote(existing, remote),
                None => remote.clone(),
            });
        }
    }

    fn merge_remote(target: RemoteConfig, source: &RemoteConfig) -> RemoteConfig {
        RemoteConfig {
            url: source.url.clone(),
            timeout_seconds: source.timeout_seconds.or(target.timeout_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("config-{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_simple_fields() {
        let mut target = Config::default();
        let source = Config {
            maximum_lock_wait_seconds: Some(7),
            output_format: Some(OutputFormat::Csv),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.maximum_lock_wait_seconds, Some(7));
        assert_eq!(target.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let mut target = Config {
            default_staff: Some("keep@mesa.test".into()),
            maximum_lock_wait_seconds: Some(3),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.default_staff.as_deref(), Some("keep@mesa.test"));
        assert_eq!(target.maximum_lock_wait_seconds, Some(3));
    }

    #[test]
    fn test_merge_remote_keeps_lower_timeout() {
        let mut target = Config {
            remote: Some(RemoteConfig {
                url: "https://low.test/exec".into(),
                timeout_seconds: Some(30),
            }),
            ..Default::default()
        };
        let source = Config {
            remote: Some(RemoteConfig {
                url: "https://high.test/exec".into(),
                timeout_seconds: None,
            }),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);

        let remote = target.remote.unwrap();
        assert_eq!(remote.url, "https://high.test/exec");
        assert_eq!(remote.timeout_seconds, Some(30));
    }

    #[test]
    fn test_merge_sorts_by_precedence() {
        let sources = vec![
            make_source(
                3,
                Config {
                    default_staff: Some("high".into()),
                    ..Default::default()
                },
            ),
            make_source(
                1,
                Config {
                    default_staff: Some("low".into()),
                    maximum_lock_wait_seconds: Some(4),
                    ..Default::default()
                },
            ),
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.default_staff.as_deref(), Some("high"));
        assert_eq!(merged.maximum_lock_wait_seconds, Some(4));
    }

    #[test]
    fn test_merge_empty_sources() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
