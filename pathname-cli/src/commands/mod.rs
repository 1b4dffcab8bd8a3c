//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Normalize a path lexically
//! - `component`: `extension`, `rootname`, `dirname`, `tailname` and `filename`
//! - `concat`: Join two paths
//! - `segments`: List the segments of a path
//! - `inspect`: Report a path's flags and components
//! - `realpath`: Resolve a path against the filesystem
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod component;
pub mod concat;
pub mod inspect;
pub mod normalize;
pub mod realpath;
pub mod segments;
pub mod validate;

pub use completions::CompletionsCommand;
pub use component::{Component, ComponentCommand};
pub use concat::ConcatCommand;
pub use inspect::InspectCommand;
pub use normalize::NormalizeCommand;
pub use realpath::RealpathCommand;
pub use segments::SegmentsCommand;
pub use validate::ValidateCommand;
