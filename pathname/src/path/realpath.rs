//! Filesystem resolution of pathnames.
//!
//! Unlike the rest of [`crate::path`], this module touches the filesystem:
//! it asks the operating system for the canonical path, following every
//! symlink. The path must exist.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::Path;

use crate::error::{lossy, Error, Result};
use crate::path::normalize::normalize_bytes;
use crate::path::types::{validate, PathFlags, Pathname};

/// Resolve `path` through the filesystem.
///
/// Relative paths resolve against the current working directory. The result
/// is absolute, normalized and flagged as a realpath.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs (`Io`)
/// - The resolved path is longer than `max_len` (`ExceededLength`)
///
/// # Examples
///
/// ```no_run
/// use pathname::Pathname;
/// use pathname::path::realpath::realpath;
///
/// let path = Pathname::new(b"/tmp/../tmp").unwrap();
/// let real = realpath(&path, 4096).unwrap();
/// assert!(real.is_realpath());
/// assert!(real.is_absolute());
/// ```
pub fn realpath(path: &Pathname<'_>, max_len: usize) -> Result<Pathname<'static>> {
    let os_path = Path::new(OsStr::from_bytes(path.as_bytes()));
    log::debug!("resolving {}", os_path.display());

    let resolved = fs::canonicalize(os_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: lossy(path.as_bytes()),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: lossy(path.as_bytes()),
        },
        _ => Error::Io(e),
    })?;

    let bytes = resolved.into_os_string().into_vec();
    validate(&bytes, max_len)?;
    let normalized = normalize_bytes(&bytes)?;
    log::debug!("resolved to {}", lossy(&normalized));

    Ok(Pathname::from_trusted_vec(
        normalized,
        PathFlags::default().with_normalised(true).with_realpath(true),
    ))
}
