//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Largest accepted `max_path_len`.
pub const PATH_LEN_CEILING: usize = 65536;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathname::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero = Config { max_path_len: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(len) = config.max_path_len {
            Self::validate_max_path_len(len)?;
        }
        Ok(())
    }

    fn validate_max_path_len(len: usize) -> Result<()> {
        if len == 0 {
            return Err(Error::Validation {
                field: "max_path_len".into(),
                message: "Must be greater than 0".into(),
            });
        }
        if len > PATH_LEN_CEILING {
            return Err(Error::Validation {
                field: "max_path_len".into(),
                message: format!("Must not exceed {PATH_LEN_CEILING}, got {len}"),
            });
        }
        Ok(())
    }
}
