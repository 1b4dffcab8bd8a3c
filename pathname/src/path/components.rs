//! Component extraction from normalized paths.
//!
//! Every function here expects a path that went through the normalizer and
//! fails with [`Error::NormalisationRequired`] otherwise. Results are new
//! owned values flagged as normalized.

use std::fmt;

use crate::error::{lossy, Error, Result};
use crate::path::segment::{find_last_segment, has_trailing_separator, is_slash_only, SEPARATOR};
use crate::path::types::{PathFlags, Pathname};

/// A non-owning view of a path's extension, including its leading `.`.
///
/// An empty extension sits at the end of the last segment. A path without a
/// `.` and a path whose extension happens to be empty look the same.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let path = Pathname::normalized(b"/path/to/archive.tar.gz").unwrap();
/// let ext = path.extension().unwrap();
/// assert_eq!(ext.as_bytes(), b".gz");
/// assert_eq!(ext.offset(), 20);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extension<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Extension<'a> {
    fn new(path: &'a [u8], start: usize, end: usize) -> Self {
        Self {
            bytes: &path[start..end],
            offset: start,
        }
    }

    /// Returns the extension bytes, `.` included.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the offset of the extension within the path.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the extension length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the path has no extension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for Extension<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.bytes))
    }
}

impl fmt::Debug for Extension<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension")
            .field("bytes", &String::from_utf8_lossy(self.bytes))
            .field("offset", &self.offset)
            .finish()
    }
}

fn require_normalised(path: &Pathname<'_>) -> Result<()> {
    if path.is_normalised() {
        Ok(())
    } else {
        Err(Error::NormalisationRequired {
            path: lossy(path.as_bytes()),
        })
    }
}

fn derived(bytes: &[u8]) -> Pathname<'static> {
    Pathname::from_trusted_vec(bytes.to_vec(), PathFlags::default().with_normalised(true))
}

/// Offset one past the last byte that is not a trailing separator.
fn content_end(bytes: &[u8]) -> usize {
    if has_trailing_separator(bytes) {
        bytes.len() - 1
    } else {
        bytes.len()
    }
}

/// Locates the extension of raw, already normalized bytes.
///
/// # Examples
///
/// ```
/// use pathname::path::components::extension_of;
///
/// assert_eq!(extension_of(b"/path/to/dir.ext/").as_bytes(), b".ext");
/// assert!(extension_of(b"/path/to/dir/").is_empty());
/// assert!(extension_of(b".fvwmrc").is_empty());
/// ```
#[must_use]
pub fn extension_of(bytes: &[u8]) -> Extension<'_> {
    let segment = find_last_segment(bytes);
    let end = segment.end();

    if is_slash_only(bytes) || segment.is_empty() || segment.is_dot() || segment.is_dot_dot() {
        return Extension::new(bytes, end, end);
    }

    match segment.as_bytes().iter().rposition(|&b| b == b'.') {
        Some(dot) if dot > 0 => Extension::new(bytes, segment.offset() + dot, end),
        _ => Extension::new(bytes, end, end),
    }
}

/// Returns the extension of the last segment.
///
/// # Errors
///
/// Returns [`Error::NormalisationRequired`] if the path is not normalized.
pub fn extension<'p>(path: &'p Pathname<'_>) -> Result<Extension<'p>> {
    require_normalised(path)?;
    Ok(extension_of(path.as_bytes()))
}

/// Returns the path with its extension stripped.
///
/// Without an extension this is the path minus any trailing separator.
///
/// # Errors
///
/// Returns [`Error::NoRootname`] for `/`, `.` and `..`, and
/// [`Error::NormalisationRequired`] if the path is not normalized.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let path = Pathname::normalized(b"/path/to/file.ext").unwrap();
/// assert_eq!(path.rootname().unwrap(), "/path/to/file");
///
/// let dir = Pathname::normalized(b"/path/to/dir/").unwrap();
/// assert_eq!(dir.rootname().unwrap(), "/path/to/dir");
///
/// assert!(Pathname::normalized(b"/").unwrap().rootname().is_err());
/// ```
pub fn rootname(path: &Pathname<'_>) -> Result<Pathname<'static>> {
    require_normalised(path)?;
    let bytes = path.as_bytes();
    let ext = extension_of(bytes);

    if !ext.is_empty() {
        return Ok(derived(&bytes[..ext.offset()]));
    }
    if matches!(bytes, b"/" | b"." | b"..") {
        return Err(Error::NoRootname { path: lossy(bytes) });
    }
    Ok(derived(&bytes[..content_end(bytes)]))
}

/// Returns everything up to and including the last separator.
///
/// `.` yields `..` and `/` yields itself.
///
/// # Errors
///
/// Returns [`Error::NoDirname`] for `..` and for single-segment relative
/// paths, and [`Error::NormalisationRequired`] if the path is not
/// normalized.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let path = Pathname::normalized(b"/path/to/dir/").unwrap();
/// assert_eq!(path.dirname().unwrap(), "/path/to/");
///
/// assert_eq!(Pathname::normalized(b".").unwrap().dirname().unwrap(), "..");
/// assert!(Pathname::normalized(b"file.ext").unwrap().dirname().is_err());
/// ```
pub fn dirname(path: &Pathname<'_>) -> Result<Pathname<'static>> {
    require_normalised(path)?;
    let bytes = path.as_bytes();

    match bytes {
        b"." => return Ok(derived(b"..")),
        b"/" => return Ok(derived(b"/")),
        b".." => return Err(Error::NoDirname { path: lossy(bytes) }),
        _ => {}
    }

    bytes[..content_end(bytes)]
        .iter()
        .rposition(|&b| b == SEPARATOR)
        .map(|sep| derived(&bytes[..=sep]))
        .ok_or_else(|| Error::NoDirname { path: lossy(bytes) })
}

/// Returns the last segment, keeping a trailing separator.
///
/// # Errors
///
/// Returns [`Error::NoTailname`] for `/`, and
/// [`Error::NormalisationRequired`] if the path is not normalized.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let path = Pathname::normalized(b"/path/to/dir/").unwrap();
/// assert_eq!(path.tailname().unwrap(), "dir/");
/// ```
pub fn tailname(path: &Pathname<'_>) -> Result<Pathname<'static>> {
    require_normalised(path)?;
    let bytes = path.as_bytes();

    if is_slash_only(bytes) {
        return Err(Error::NoTailname { path: lossy(bytes) });
    }

    let start = bytes[..content_end(bytes)]
        .iter()
        .rposition(|&b| b == SEPARATOR)
        .map_or(0, |sep| sep + 1);
    Ok(derived(&bytes[start..]))
}

/// Returns the last segment of a path that names a file.
///
/// # Errors
///
/// Returns [`Error::NoFilename`] for `/`, `.`, `..` and any path ending in a
/// separator, and [`Error::NormalisationRequired`] if the path is not
/// normalized.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
///
/// let file = Pathname::normalized(b"/path/to/file.ext").unwrap();
/// assert_eq!(file.filename().unwrap(), "file.ext");
///
/// let dir = Pathname::normalized(b"/path/to/dir/").unwrap();
/// assert!(dir.filename().is_err());
/// ```
pub fn filename(path: &Pathname<'_>) -> Result<Pathname<'static>> {
    require_normalised(path)?;
    let bytes = path.as_bytes();

    if matches!(bytes, b"/" | b"." | b"..") || bytes.last() == Some(&SEPARATOR) {
        return Err(Error::NoFilename { path: lossy(bytes) });
    }
    tailname(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> Pathname<'static> {
        Pathname::normalized(s.as_bytes()).unwrap()
    }

    fn ext(s: &str) -> String {
        extension_of(s.as_bytes()).to_string()
    }

    #[test]
    fn test_extension_basic() {
        assert_eq!(ext("/path/to/file.ext"), ".ext");
        assert_eq!(ext("file.tar.gz"), ".gz");
        assert_eq!(ext("/path/to/dir.ext/"), ".ext");
        assert_eq!(ext("/path/to/dir/"), "");
        assert_eq!(ext("file"), "");
    }

    #[test]
    fn test_extension_dotfiles_and_specials() {
        assert_eq!(ext(".fvwmrc"), "");
        assert_eq!(ext("/home/.bashrc"), "");
        assert_eq!(ext("/home/.config.bak"), ".bak");
        assert_eq!(ext("."), "");
        assert_eq!(ext(".."), "");
        assert_eq!(ext("/"), "");
        assert_eq!(ext("../"), "");
    }

    #[test]
    fn test_extension_trailing_dot() {
        assert_eq!(ext("file."), ".");
    }

    #[test]
    fn test_empty_extension_position() {
        let e = extension_of(b"/path/to/dir/");
        assert!(e.is_empty());
        assert_eq!(e.offset(), 12);

        let e = extension_of(b"/");
        assert_eq!(e.offset(), 0);

        let e = extension_of(b".fvwmrc");
        assert_eq!(e.offset(), 7);
    }

    #[test]
    fn test_extension_requires_normalised() {
        let raw = Pathname::new(b"/a/./b.c").unwrap();
        assert!(matches!(
            extension(&raw),
            Err(Error::NormalisationRequired { .. })
        ));
        assert_eq!(extension(&norm("/a/./b.c")).unwrap().as_bytes(), b".c");
    }

    #[test]
    fn test_rootname() {
        assert_eq!(rootname(&norm("/path/to/file.ext")).unwrap(), "/path/to/file");
        assert_eq!(rootname(&norm("/path/to/dir.ext/")).unwrap(), "/path/to/dir");
        assert_eq!(rootname(&norm("/path/to/dir/")).unwrap(), "/path/to/dir");
        assert_eq!(rootname(&norm("file")).unwrap(), "file");
        assert_eq!(rootname(&norm(".fvwmrc")).unwrap(), ".fvwmrc");
        assert_eq!(rootname(&norm("../")).unwrap(), "..");
        assert!(rootname(&norm("/path/to/file.ext")).unwrap().is_normalised());
    }

    #[test]
    fn test_rootname_failures() {
        for input in ["/", ".", ".."] {
            let err = rootname(&norm(input)).unwrap_err();
            assert!(matches!(err, Error::NoRootname { .. }), "{input}");
            assert!(err.is_invalid_pathname());
        }
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname(&norm("/path/to/file.ext")).unwrap(), "/path/to/");
        assert_eq!(dirname(&norm("/path/to/dir/")).unwrap(), "/path/to/");
        assert_eq!(dirname(&norm("/file")).unwrap(), "/");
        assert_eq!(dirname(&norm("/")).unwrap(), "/");
        assert_eq!(dirname(&norm(".")).unwrap(), "..");
        assert_eq!(dirname(&norm("a/b")).unwrap(), "a/");
        assert_eq!(dirname(&norm("../..")).unwrap(), "../");
    }

    #[test]
    fn test_dirname_failures() {
        for input in ["..", "file.ext", "dir/", "../"] {
            let err = dirname(&norm(input)).unwrap_err();
            assert!(matches!(err, Error::NoDirname { .. }), "{input}");
        }
    }

    #[test]
    fn test_tailname() {
        assert_eq!(tailname(&norm("/path/to/dir/")).unwrap(), "dir/");
        assert_eq!(tailname(&norm("/path/to/file.ext")).unwrap(), "file.ext");
        assert_eq!(tailname(&norm("file.ext")).unwrap(), "file.ext");
        assert_eq!(tailname(&norm("dir/")).unwrap(), "dir/");
        assert_eq!(tailname(&norm(".")).unwrap(), ".");
        assert_eq!(tailname(&norm("../..")).unwrap(), "..");
        assert!(matches!(
            tailname(&norm("/")),
            Err(Error::NoTailname { .. })
        ));
    }

    #[test]
    fn test_filename() {
        assert_eq!(filename(&norm("/path/to/file.ext")).unwrap(), "file.ext");
        assert_eq!(filename(&norm("./file.ext")).unwrap(), "file.ext");
        for input in ["/", ".", "..", "/path/to/dir/", "dir/"] {
            assert!(
                matches!(filename(&norm(input)), Err(Error::NoFilename { .. })),
                "{input}"
            );
        }
    }

    #[test]
    fn test_components_require_normalised() {
        let raw = Pathname::new(b"/path/to/file.ext").unwrap();
        assert!(matches!(rootname(&raw), Err(Error::NormalisationRequired { .. })));
        assert!(matches!(dirname(&raw), Err(Error::NormalisationRequired { .. })));
        assert!(matches!(tailname(&raw), Err(Error::NormalisationRequired { .. })));
        assert!(matches!(filename(&raw), Err(Error::NormalisationRequired { .. })));
    }

    #[test]
    fn test_results_are_owned_and_normalised() {
        let bytes = b"/a/b".to_vec();
        let borrowed = crate::path::PathnameBuilder::new()
            .assume_normalised(true)
            .build(&bytes)
            .unwrap();
        let tail = tailname(&borrowed).unwrap();
        assert!(!tail.is_borrowed());
        assert!(tail.is_normalised());
        assert!(!tail.is_realpath());
    }
}
