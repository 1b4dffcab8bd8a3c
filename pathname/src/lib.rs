#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathname
//!
//! A library of immutable filesystem pathname values.
//!
//! Paths are byte strings split on `/`. The library decomposes them into
//! segments, normalizes them with purely lexical rules (no filesystem
//! access), and derives the usual components from a normalized path.
//!
//! ## Core Types
//!
//! - [`Pathname`]: An immutable path that borrows or owns its bytes
//! - [`PathnameBuilder`] and [`Ownership`]: Construction with orthogonal
//!   borrow/copy and normalize choices
//! - [`Segment`] and [`Extension`]: Non-owning views into a path
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathname::Pathname;
//!
//! let path = Pathname::new(b"/path/./to//dir.ext/").unwrap();
//! let normalized = path.normalize().unwrap();
//! assert_eq!(normalized, "/path/to/dir.ext/");
//!
//! assert_eq!(normalized.extension().unwrap().as_bytes(), b".ext");
//! assert_eq!(normalized.tailname().unwrap(), "dir.ext/");
//! assert!(normalized.filename().is_err());
//!
//! let file = Pathname::new(b"file.ext").unwrap();
//! let joined = normalized.join(&file).unwrap();
//! assert_eq!(joined, "/path/to/dir.ext//file.ext");
//! assert_eq!(joined.normalize().unwrap(), "/path/to/dir.ext/file.ext");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Extension, Ownership, PathFlags, Pathname, PathnameBuilder, Segment};
