//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::{ConfigValidator, PATH_LEN_CEILING};
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Plain), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0usize..=2 * PATH_LEN_CEILING),
        prop::option::of(output_format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(max_path_len, output_format, normalize_concat)| Config {
            max_path_len,
            output_format,
            normalize_concat,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Each field comes from the highest-precedence source that sets it
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.max_path_len, high.max_path_len.or(low.max_path_len));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.normalize_concat, high.normalize_concat.or(low.normalize_concat));
    }

    // Merging is idempotent
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // The validator accepts exactly the lengths in 1..=PATH_LEN_CEILING
    #[test]
    fn validator_accepts_length_range(config in config_strategy()) {
        let expected = config
            .max_path_len
            .map_or(true, |len| (1..=PATH_LEN_CEILING).contains(&len));
        prop_assert_eq!(ConfigValidator::validate(&config).is_ok(), expected);
    }

    // Valid configs survive a YAML round trip
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
