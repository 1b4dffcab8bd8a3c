//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathname::config::{Config, ConfigMerger};
///
/// let low = Config { max_path_len: Some(100), ..Default::default() };
/// let high = Config { max_path_len: Some(200), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_path_len, Some(200));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.max_path_len.is_some() {
            target.max_path_len = source.max_path_len;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.normalize_concat.is_some() {
            target.normalize_concat = source.normalize_concat;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(vec![]), Config::default());
    }

    #[test]
    fn test_unset_fields_do_not_overwrite() {
        let mut target = Config {
            max_path_len: Some(100),
            output_format: Some(OutputFormat::Json),
            normalize_concat: Some(true),
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.max_path_len, Some(100));
        assert_eq!(target.output_format, Some(OutputFormat::Json));
        assert_eq!(target.normalize_concat, Some(true));
    }

    #[test]
    fn test_higher_precedence_wins_per_field() {
        let low = source(
            1,
            Config {
                max_path_len: Some(100),
                output_format: Some(OutputFormat::Json),
                normalize_concat: None,
            },
        );
        let high = source(
            2,
            Config {
                max_path_len: Some(300),
                output_format: None,
                normalize_concat: Some(false),
            },
        );

        let merged = ConfigMerger::merge(vec![low, high]);
        assert_eq!(merged.max_path_len, Some(300));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
        assert_eq!(merged.normalize_concat, Some(false));
    }
}
