//! Pathname values and the lexical algorithms over them.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A path is a byte string split on `/`. The [`segment`] scanner locates
//! segment boundaries without interpreting `.` or `..`.
//!
//! ## Normalization
//!
//! The [`normalize`] pipeline collapses repeated separators, drops `.`
//! segments and cancels `..` against the segment before it. It never touches
//! the filesystem, so symlinks are not considered. An absolute path whose
//! `..` would climb above `/` is rejected; a relative path keeps its leading
//! `..` segments.
//!
//! ## Components
//!
//! Once a path is normalized, [`components`] derives its extension,
//! rootname, dirname, tailname and filename. Each of these requires the
//! normalized flag and fails with a typed error when the component does not
//! exist.
//!
//! # Examples
//!
//! ```
//! use pathname::path::{Ownership, PathnameBuilder};
//!
//! let builder = PathnameBuilder::new().ownership(Ownership::Copy).normalize(true);
//! let path = builder.build(b"/path/./to/../to/file.tar.gz").unwrap();
//!
//! assert_eq!(path, "/path/to/file.tar.gz");
//! assert_eq!(path.extension().unwrap().as_bytes(), b".gz");
//! assert_eq!(path.rootname().unwrap(), "/path/to/file.tar");
//! assert_eq!(path.dirname().unwrap(), "/path/to/");
//! assert_eq!(path.filename().unwrap(), "file.tar.gz");
//! ```

pub mod builder;
pub mod components;
pub mod concat;
pub mod normalize;
#[cfg(unix)]
pub mod realpath;
pub mod segment;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use builder::{Ownership, PathnameBuilder};
pub use components::Extension;
pub use segment::{Segment, SegmentKind, Segments};
pub use types::{validate, PathFlags, Pathname, DEFAULT_MAX_PATH_LEN};
