//! Configuration file discovery and loading.
//!
//! This module locates the user configuration file and loads it, together
//! with an explicitly named file, in precedence order.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".pathname";

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use pathname::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.pathname/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use pathname::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None, None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load all configuration files.
    ///
    /// Loads:
    /// 1. The user config at `~/.pathname/config.yaml`, if present
    ///    (precedence 1). `config_dir` replaces `~/.pathname` when given.
    /// 2. The `explicit` file, which must exist (precedence 2).
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file
    /// exists but cannot be read or parsed.
    pub fn load_all(
        explicit: Option<&Path>,
        config_dir: Option<&Path>,
    ) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        if let Some(path) = explicit {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load the user configuration file if it exists.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("no home directory, skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::PathNotFound {
                path: path.display().to_string(),
            },
            ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Returns `~/.pathname/config.yaml`, or `None` without a home directory.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let err = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "max_path_len: [not, a, number]").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_all_orders_by_precedence() {
        let user_dir = TempDir::new().unwrap();
        fs::write(user_dir.path().join(CONFIG_FILE_NAME), "max_path_len: 100").unwrap();

        let other = TempDir::new().unwrap();
        let explicit = other.path().join("explicit.yaml");
        fs::write(&explicit, "max_path_len: 200").unwrap();

        let sources = ConfigLoader::load_all(Some(&explicit), Some(user_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[0].config.max_path_len, Some(100));
        assert_eq!(sources[1].precedence, 2);
        assert_eq!(sources[1].path, explicit);
    }

    #[test]
    fn test_load_all_missing_user_config_is_fine() {
        let user_dir = TempDir::new().unwrap();
        let sources = ConfigLoader::load_all(None, Some(user_dir.path())).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_load_all_missing_explicit_fails() {
        let user_dir = TempDir::new().unwrap();
        let missing = user_dir.path().join("missing.yaml");
        let err = ConfigLoader::load_all(Some(&missing), Some(user_dir.path())).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_user_config_path_shape() {
        if let Some(path) = ConfigLoader::user_config_path() {
            assert!(path.ends_with(".pathname/config.yaml"));
        }
    }
}
