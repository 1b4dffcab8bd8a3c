//! Configuration system for the pathname tools.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHNAME_*`)
//! 3. An explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.pathname/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathname::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let path = config.builder().normalize(true).build(b"/a/./b").unwrap();
//! println!("{path} (limit {})", config.max_path_len());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::{ConfigValidator, PATH_LEN_CEILING};
