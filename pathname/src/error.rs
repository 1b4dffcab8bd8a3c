//! Error types for the pathname library.
//!
//! This module provides a flat error taxonomy for every operation in the
//! library, using `thiserror` for ergonomic error handling. Core operations
//! (scanning, normalization, component extraction, concatenation) only ever
//! return the pathname kinds; the collaborator kinds belong to realpath,
//! the codec and configuration loading.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathname error.
///
/// # Examples
///
/// ```
/// use pathname::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(4096)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathname library.
///
/// Path-carrying variants hold the offending path rendered lossily, so the
/// message names it even when the bytes are not UTF-8.
#[derive(Debug, Error)]
pub enum Error {
    /// The path cannot be resolved lexically, e.g. `..` climbs above `/`.
    #[error("invalid pathname {path}: {reason}")]
    InvalidPathname {
        /// The offending path.
        path: String,
        /// Why the path is invalid.
        reason: String,
    },

    /// The input or resulting path is longer than the configured maximum.
    #[error("pathname length {length} exceeds maximum of {max}")]
    ExceededLength {
        /// The length that was requested.
        length: usize,
        /// The configured maximum.
        max: usize,
    },

    /// The input path has zero bytes.
    #[error("pathname has zero length")]
    ZeroLength,

    /// The input path contains an embedded NUL byte.
    #[error("pathname contains a NUL byte at offset {offset}")]
    InvalidLength {
        /// Offset of the first NUL byte.
        offset: usize,
    },

    /// The operation requires a normalized path.
    #[error("pathname {path} must be normalised first")]
    NormalisationRequired {
        /// The unnormalized path.
        path: String,
    },

    /// The path has no root name.
    #[error("pathname {path} has no rootname")]
    NoRootname {
        /// The path.
        path: String,
    },

    /// The path has no directory name.
    #[error("pathname {path} has no dirname")]
    NoDirname {
        /// The path.
        path: String,
    },

    /// The path has no tail name.
    #[error("pathname {path} has no tailname")]
    NoTailname {
        /// The path.
        path: String,
    },

    /// The path has no file name (it denotes a directory).
    #[error("pathname {path} has no filename")]
    NoFilename {
        /// The path.
        path: String,
    },

    /// A path does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A flat-encoded pathname could not be decoded.
    #[error("decode error: {reason}")]
    Decode {
        /// What was wrong with the encoding.
        reason: String,
    },

    /// A flat-encoded pathname uses a format version this build cannot read.
    #[error("unsupported format version: expected {expected}, found {found}")]
    UnsupportedFormatVersion {
        /// The version this build writes.
        expected: u16,
        /// The version found in the encoding.
        found: u16,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error is an invalid pathname or one of its specializations.
    ///
    /// `NoRootname`, `NoDirname`, `NoTailname` and `NoFilename` are all
    /// kinds of invalid pathname.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Error;
    ///
    /// let err = Error::NoDirname { path: "file.ext".to_string() };
    /// assert!(err.is_invalid_pathname());
    /// assert!(!Error::ZeroLength.is_invalid_pathname());
    /// ```
    #[must_use]
    pub fn is_invalid_pathname(&self) -> bool {
        matches!(
            self,
            Self::InvalidPathname { .. }
                | Self::NoRootname { .. }
                | Self::NoDirname { .. }
                | Self::NoTailname { .. }
                | Self::NoFilename { .. }
        )
    }

    /// Check if error reports a length problem with the input.
    #[must_use]
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            Self::ExceededLength { .. } | Self::ZeroLength | Self::InvalidLength { .. }
        )
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Error;
    ///
    /// let err = Error::PathNotFound { path: "/nonexistent".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

/// Renders path bytes for error messages.
pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
