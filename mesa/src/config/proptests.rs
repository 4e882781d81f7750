//! Property-based tests for configuration merging and parsing.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, RemoteConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
        Just(OutputFormat::Table),
    ]
}

fn remote_strategy() -> impl Strategy<Value = RemoteConfig> {
    ("[a-z]{1,12}", prop::option::of(1u64..600)).prop_map(|(host, timeout_seconds)| {
        RemoteConfig {
            url: format!("https://{host}.test/exec"),
            timeout_seconds,
        }
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(remote_strategy()),
        prop::option::of(1u64..600),
        prop::option::of("[a-z]{1,10}@mesa\\.test"),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(
            |(remote, maximum_lock_wait_seconds, default_staff, output_format)| Config {
                remote,
                maximum_lock_wait_seconds,
                default_staff,
                output_format,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn merge_empty_is_right_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn merge_into_empty_copies_values(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn higher_layer_wins_where_set(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(
            merged.default_staff.clone(),
            high.default_staff.clone().or(low.default_staff.clone())
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        if let Some(ref remote) = high.remote {
            prop_assert_eq!(&merged.remote.as_ref().unwrap().url, &remote.url);
        }
    }

    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn yaml_roundtrip_preserves_config(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn output_format_display_parses_back(format in output_format_strategy()) {
        prop_assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
    }
}
