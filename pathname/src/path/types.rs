//! Core types for pathname values.
//!
//! A [`Pathname`] is an immutable byte string plus a small set of flags
//! describing how it was produced. Its storage is either borrowed from the
//! caller or owned, decided once at construction.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::components::{self, Extension};
use crate::path::segment::{find_last_segment, Segment, Segments, SEPARATOR};
use crate::path::{concat, normalize};

/// Default maximum pathname length in bytes.
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Metadata flags carried by a [`Pathname`].
///
/// Absoluteness is not stored; it is always derived from the first byte.
///
/// # Examples
///
/// ```
/// use pathname::path::PathFlags;
///
/// let flags = PathFlags::default().with_normalised(true);
/// assert!(flags.is_normalised());
/// assert!(!flags.is_realpath());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathFlags {
    normalised: bool,
    realpath: bool,
}

impl PathFlags {
    const NORMALISED_BIT: u8 = 0b01;
    const REALPATH_BIT: u8 = 0b10;

    /// Returns a copy with the normalized flag set to `value`.
    #[must_use]
    pub const fn with_normalised(self, value: bool) -> Self {
        Self {
            normalised: value,
            ..self
        }
    }

    /// Returns a copy with the realpath flag set to `value`.
    #[must_use]
    pub const fn with_realpath(self, value: bool) -> Self {
        Self {
            realpath: value,
            ..self
        }
    }

    /// Returns `true` if the path passed through the normalizer.
    #[must_use]
    pub const fn is_normalised(self) -> bool {
        self.normalised
    }

    /// Returns `true` if the path was resolved by the operating system.
    #[must_use]
    pub const fn is_realpath(self) -> bool {
        self.realpath
    }

    /// Packs the flags into a byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.normalised {
            bits |= Self::NORMALISED_BIT;
        }
        if self.realpath {
            bits |= Self::REALPATH_BIT;
        }
        bits
    }

    /// Unpacks flags from a byte, rejecting unknown bits.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !(Self::NORMALISED_BIT | Self::REALPATH_BIT) != 0 {
            return None;
        }
        Some(Self {
            normalised: bits & Self::NORMALISED_BIT != 0,
            realpath: bits & Self::REALPATH_BIT != 0,
        })
    }
}

/// Checks the construction invariants: non-empty, within `max_len`, no NUL.
///
/// # Errors
///
/// Returns [`Error::ZeroLength`], [`Error::ExceededLength`] or
/// [`Error::InvalidLength`].
pub fn validate(bytes: &[u8], max_len: usize) -> Result<()> {
    if bytes.is_empty() {
        return Err(Error::ZeroLength);
    }
    if bytes.len() > max_len {
        return Err(Error::ExceededLength {
            length: bytes.len(),
            max: max_len,
        });
    }
    if let Some(offset) = bytes.iter().position(|&b| b == 0) {
        return Err(Error::InvalidLength { offset });
    }
    Ok(())
}

/// An immutable filesystem pathname.
///
/// Equality and hashing consider the bytes only; flags and ownership do not
/// participate.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let path = Pathname::new(b"/path/to/../file.ext").unwrap();
/// assert!(path.is_absolute());
/// assert!(path.is_borrowed());
///
/// let normalized = path.normalize().unwrap();
/// assert_eq!(normalized, "/path/file.ext");
/// assert_eq!(normalized.extension().unwrap().as_bytes(), b".ext");
/// ```
#[derive(Clone)]
pub struct Pathname<'a> {
    bytes: Cow<'a, [u8]>,
    flags: PathFlags,
}

impl<'a> Pathname<'a> {
    /// Create a pathname borrowing `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty, longer than
    /// [`DEFAULT_MAX_PATH_LEN`], or contains a NUL byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let path = Pathname::new(b"relative/path").unwrap();
    /// assert!(!path.is_absolute());
    /// assert!(Pathname::new(b"").is_err());
    /// ```
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        validate(bytes, DEFAULT_MAX_PATH_LEN)?;
        Ok(Self {
            bytes: Cow::Borrowed(bytes),
            flags: PathFlags::default(),
        })
    }

    pub(crate) fn from_cow(bytes: Cow<'a, [u8]>, flags: PathFlags) -> Self {
        Self { bytes, flags }
    }

    /// Returns the path bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the path length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; a pathname has at least one byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if the path starts with `/`.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.bytes.first() == Some(&SEPARATOR)
    }

    /// Returns `true` if the path passed through the normalizer.
    #[must_use]
    pub fn is_normalised(&self) -> bool {
        self.flags.is_normalised()
    }

    /// Returns `true` if the path was resolved by the operating system.
    #[must_use]
    pub fn is_realpath(&self) -> bool {
        self.flags.is_realpath()
    }

    /// Returns `true` if the bytes are borrowed from the caller.
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.bytes, Cow::Borrowed(_))
    }

    /// Returns the metadata flags.
    #[must_use]
    pub fn flags(&self) -> PathFlags {
        self.flags
    }

    /// Returns the path as a string, replacing invalid UTF-8.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Returns an iterator over the path's segments.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.bytes)
    }

    /// Returns the last segment, ignoring one trailing separator.
    #[must_use]
    pub fn last_segment(&self) -> Segment<'_> {
        find_last_segment(&self.bytes)
    }

    /// Converts into a pathname that owns its bytes.
    #[must_use]
    pub fn into_owned(self) -> Pathname<'static> {
        Pathname {
            bytes: Cow::Owned(self.bytes.into_owned()),
            flags: self.flags,
        }
    }

    /// Normalize this path. See [`normalize::normalize`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathname`] if an absolute path climbs above
    /// the root.
    pub fn normalize(&self) -> Result<Pathname<'static>> {
        normalize::normalize(self)
    }

    /// Returns the extension of the last segment. See [`components::extension`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NormalisationRequired`] for unnormalized paths.
    pub fn extension(&self) -> Result<Extension<'_>> {
        components::extension(self)
    }

    /// Returns the path without its extension. See [`components::rootname`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRootname`] or [`Error::NormalisationRequired`].
    pub fn rootname(&self) -> Result<Pathname<'static>> {
        components::rootname(self)
    }

    /// Returns the directory part. See [`components::dirname`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDirname`] or [`Error::NormalisationRequired`].
    pub fn dirname(&self) -> Result<Pathname<'static>> {
        components::dirname(self)
    }

    /// Returns the last segment, keeping a trailing separator. See
    /// [`components::tailname`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTailname`] or [`Error::NormalisationRequired`].
    pub fn tailname(&self) -> Result<Pathname<'static>> {
        components::tailname(self)
    }

    /// Returns the file name. See [`components::filename`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFilename`] or [`Error::NormalisationRequired`].
    pub fn filename(&self) -> Result<Pathname<'static>> {
        components::filename(self)
    }

    /// Concatenate `suffix` onto this path using the default length limit.
    /// See [`concat::concat`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExceededLength`] if the result would be longer than
    /// [`DEFAULT_MAX_PATH_LEN`].
    pub fn join(&self, suffix: &Pathname<'_>) -> Result<Pathname<'static>> {
        concat::concat(self, suffix, DEFAULT_MAX_PATH_LEN)
    }
}

impl Pathname<'static> {
    /// Create a pathname owning a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty, too long, or contains a NUL byte.
    pub fn copied(bytes: &[u8]) -> Result<Self> {
        validate(bytes, DEFAULT_MAX_PATH_LEN)?;
        Ok(Self::from_trusted_vec(bytes.to_vec(), PathFlags::default()))
    }

    /// Create a pathname taking ownership of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty, too long, or contains a NUL byte.
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        validate(&bytes, DEFAULT_MAX_PATH_LEN)?;
        Ok(Self::from_trusted_vec(bytes, PathFlags::default()))
    }

    /// Create a normalized pathname from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a construction error, or [`Error::InvalidPathname`] if the
    /// path climbs above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::Pathname;
    ///
    /// let path = Pathname::normalized(b"/a//b/./c/..").unwrap();
    /// assert_eq!(path, "/a/b");
    /// assert!(path.is_normalised());
    /// ```
    pub fn normalized(bytes: &[u8]) -> Result<Self> {
        validate(bytes, DEFAULT_MAX_PATH_LEN)?;
        normalize::normalize_bytes(bytes)
            .map(|b| Self::from_trusted_vec(b, PathFlags::default().with_normalised(true)))
    }

    /// Wraps bytes already known to satisfy the construction invariants.
    pub(crate) fn from_trusted_vec(bytes: Vec<u8>, flags: PathFlags) -> Self {
        Self {
            bytes: Cow::Owned(bytes),
            flags,
        }
    }
}

impl PartialEq for Pathname<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Pathname<'_> {}

impl PartialEq<str> for Pathname<'_> {
    fn eq(&self, other: &str) -> bool {
        *self.bytes == *other.as_bytes()
    }
}

impl PartialEq<&str> for Pathname<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self.bytes == *other.as_bytes()
    }
}

impl PartialEq<[u8]> for Pathname<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        *self.bytes == *other
    }
}

impl Hash for Pathname<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl AsRef<[u8]> for Pathname<'_> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Pathname<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl fmt::Debug for Pathname<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pathname")
            .field("path", &self.to_string_lossy())
            .field("normalised", &self.flags.normalised)
            .field("realpath", &self.flags.realpath)
            .field("borrowed", &self.is_borrowed())
            .finish()
    }
}

impl<'a> TryFrom<&'a str> for Pathname<'a> {
    type Error = Error;

    fn try_from(value: &'a str) -> Result<Self> {
        Self::new(value.as_bytes())
    }
}

impl<'a> TryFrom<&'a [u8]> for Pathname<'a> {
    type Error = Error;

    fn try_from(value: &'a [u8]) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Vec<u8>> for Pathname<'static> {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self> {
        Self::from_vec(value)
    }
}

impl FromStr for Pathname<'static> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::copied(s.as_bytes())
    }
}

impl Serialize for Pathname<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match std::str::from_utf8(&self.bytes) {
            Ok(s) => serializer.serialize_str(s),
            Err(_) => serializer.serialize_bytes(&self.bytes),
        }
    }
}

impl<'de> Deserialize<'de> for Pathname<'static> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathnameVisitor;

        impl<'de> Visitor<'de> for PathnameVisitor {
            type Value = Pathname<'static>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a pathname string or byte sequence")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                Pathname::copied(v.as_bytes()).map_err(E::custom)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<Self::Value, E> {
                Pathname::copied(v).map_err(E::custom)
            }

            fn visit_byte_buf<E: de::Error>(
                self,
                v: Vec<u8>,
            ) -> std::result::Result<Self::Value, E> {
                Pathname::from_vec(v).map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let hint = seq.size_hint().unwrap_or(0);
                let mut bytes = Vec::with_capacity(hint.min(DEFAULT_MAX_PATH_LEN + 1));
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                    // Stop reading once the limit is passed
                    if bytes.len() > DEFAULT_MAX_PATH_LEN {
                        return Err(de::Error::custom(Error::ExceededLength {
                            length: bytes.len(),
                            max: DEFAULT_MAX_PATH_LEN,
                        }));
                    }
                }
                Pathname::from_vec(bytes).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(PathnameVisitor)
    }
}
