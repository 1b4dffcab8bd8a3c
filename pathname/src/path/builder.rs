//! Builder for pathname values.
//!
//! Construction has two orthogonal choices: whether the value borrows the
//! caller's bytes or owns a copy, and whether the bytes are normalized on
//! the way in.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::concat;
use crate::path::normalize::normalize_bytes;
use crate::path::types::{validate, PathFlags, Pathname, DEFAULT_MAX_PATH_LEN};

/// Storage mode of a constructed pathname.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    /// Reference the caller's bytes.
    #[default]
    Borrow,
    /// Allocate a private copy.
    Copy,
}

/// Builder for [`Pathname`] values.
///
/// # Examples
///
/// ```
/// use pathname::path::{Ownership, PathnameBuilder};
///
/// let builder = PathnameBuilder::new()
///     .ownership(Ownership::Copy)
///     .normalize(true)
///     .max_len(256);
///
/// let path = builder.build(b"/path/./to//file.ext").unwrap();
/// assert_eq!(path, "/path/to/file.ext");
/// assert!(path.is_normalised());
/// assert!(!path.is_borrowed());
///
/// assert!(builder.build(&[b'a'; 300]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathnameBuilder {
    ownership: Ownership,
    normalize: bool,
    max_len: usize,
    assume_normalised: bool,
}

impl Default for PathnameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathnameBuilder {
    /// Create a builder that borrows, does not normalize, and uses
    /// [`DEFAULT_MAX_PATH_LEN`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ownership: Ownership::Borrow,
            normalize: false,
            max_len: DEFAULT_MAX_PATH_LEN,
            assume_normalised: false,
        }
    }

    /// Set the storage mode.
    #[must_use]
    pub const fn ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = ownership;
        self
    }

    /// Normalize the bytes during construction.
    #[must_use]
    pub const fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the maximum accepted length in bytes.
    #[must_use]
    pub const fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Flag the bytes as normalized without running the normalizer.
    ///
    /// Meant for bytes that came out of the normalizer earlier, e.g. from
    /// storage. Ignored when [`normalize`](Self::normalize) is set.
    #[must_use]
    pub const fn assume_normalised(mut self, assume: bool) -> Self {
        self.assume_normalised = assume;
        self
    }

    /// Returns the configured maximum length.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.max_len
    }

    /// Build a pathname from `bytes`.
    ///
    /// With normalization and [`Ownership::Borrow`], the value still borrows
    /// `bytes` when they were already in normal form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLength`](crate::Error::ZeroLength),
    /// [`Error::ExceededLength`](crate::Error::ExceededLength) or
    /// [`Error::InvalidLength`](crate::Error::InvalidLength) for bad input, and
    /// [`Error::InvalidPathname`](crate::Error::InvalidPathname) if
    /// normalization climbs above the root.
    pub fn build<'a>(&self, bytes: &'a [u8]) -> Result<Pathname<'a>> {
        validate(bytes, self.max_len)?;

        if self.normalize {
            let normalized = normalize_bytes(bytes)?;
            let flags = PathFlags::default().with_normalised(true);
            let storage = if self.ownership == Ownership::Borrow && normalized == bytes {
                Cow::Borrowed(bytes)
            } else {
                Cow::Owned(normalized)
            };
            return Ok(Pathname::from_cow(storage, flags));
        }

        let flags = PathFlags::default().with_normalised(self.assume_normalised);
        let storage = match self.ownership {
            Ownership::Borrow => Cow::Borrowed(bytes),
            Ownership::Copy => Cow::Owned(bytes.to_vec()),
        };
        Ok(Pathname::from_cow(storage, flags))
    }

    /// Concatenate two paths under this builder's length limit, normalizing
    /// the result when the builder normalizes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExceededLength`](crate::Error::ExceededLength) if the
    /// joined path is too long, or a normalization error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    /// use pathname::path::PathnameBuilder;
    ///
    /// let builder = PathnameBuilder::new().normalize(true);
    /// let prefix = Pathname::new(b"/path/to/").unwrap();
    /// let suffix = Pathname::new(b"../file.ext").unwrap();
    /// assert_eq!(builder.concat(&prefix, &suffix).unwrap(), "/path/file.ext");
    /// ```
    pub fn concat(
        &self,
        prefix: &Pathname<'_>,
        suffix: &Pathname<'_>,
    ) -> Result<Pathname<'static>> {
        let joined = concat::concat(prefix, suffix, self.max_len)?;
        if self.normalize {
            joined.normalize()
        } else {
            Ok(joined)
        }
    }
}
