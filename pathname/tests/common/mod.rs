//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! pathname library.

use pathname::Pathname;

/// Normalizes `s`, panicking on failure.
#[allow(dead_code)]
pub fn norm(s: &str) -> Pathname<'static> {
    Pathname::normalized(s.as_bytes()).unwrap_or_else(|e| panic!("normalize {s:?}: {e}"))
}

/// Normalizes `s` and renders the result as a string.
#[allow(dead_code)]
pub fn norm_str(s: &str) -> String {
    norm(s).to_string()
}

/// Builds an owned, unnormalized pathname.
#[allow(dead_code)]
pub fn raw(s: &str) -> Pathname<'static> {
    Pathname::copied(s.as_bytes()).unwrap_or_else(|e| panic!("construct {s:?}: {e}"))
}

/// Inputs paired with their normal form.
///
/// Covers separator collapsing, dot removal, parent resolution and the
/// relative forms that keep an explicit `./` marker.
#[allow(dead_code)]
pub const NORMALIZATION_CASES: &[(&str, &str)] = &[
    ("/path/./to/././file.ext", "/path/to/file.ext"),
    ("path/../../../file.ext", "../file.ext"),
    ("path/../../to", "../to"),
    ("/path/..", "/"),
    ("path/../..", "."),
    ("/", "/"),
    ("//", "/"),
    ("///a///b///", "/a/b/"),
    (".", "."),
    ("./", "."),
    ("./file.ext", "./file.ext"),
    ("file.ext", "file.ext"),
    ("..", ".."),
    ("../..", "../.."),
    ("a/b/../c", "a/c"),
    ("a/../b", "./b"),
    ("/a/b/../../c", "/c"),
    ("/path/to/dir/.", "/path/to/dir/"),
    ("/.hidden/./file", "/.hidden/file"),
];

/// Absolute inputs whose `..` climbs above the root.
#[allow(dead_code)]
pub const CLIMBING_CASES: &[&str] = &["/..", "/../a", "/path/../..", "/a/b/../../..", "//..//x"];

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}
