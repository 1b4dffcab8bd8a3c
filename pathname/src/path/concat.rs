//! Lexical path concatenation.

use crate::error::{Error, Result};
use crate::path::segment::SEPARATOR;
use crate::path::types::{PathFlags, Pathname};

/// Join `prefix` and `suffix`.
///
/// A separator is inserted only when `suffix` is relative. The result is
/// neither normalized nor flagged as such; absoluteness follows `prefix`.
///
/// # Errors
///
/// Returns [`Error::ExceededLength`] if the joined path would be longer than
/// `max_len`.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
/// use pathname::path::concat::concat;
///
/// let prefix = Pathname::new(b"/path/to").unwrap();
/// let suffix = Pathname::new(b"file.ext").unwrap();
/// let joined = concat(&prefix, &suffix, 4096).unwrap();
/// assert_eq!(joined, "/path/to/file.ext");
/// assert!(joined.is_absolute());
/// assert!(!joined.is_normalised());
/// ```
pub fn concat(
    prefix: &Pathname<'_>,
    suffix: &Pathname<'_>,
    max_len: usize,
) -> Result<Pathname<'static>> {
    let needs_separator = !suffix.is_absolute();
    let length = prefix.len() + suffix.len() + usize::from(needs_separator);
    if length > max_len {
        return Err(Error::ExceededLength {
            length,
            max: max_len,
        });
    }

    let mut bytes = Vec::with_capacity(length);
    bytes.extend_from_slice(prefix.as_bytes());
    if needs_separator {
        bytes.push(SEPARATOR);
    }
    bytes.extend_from_slice(suffix.as_bytes());

    Ok(Pathname::from_trusted_vec(bytes, PathFlags::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(a: &str, b: &str) -> Result<Pathname<'static>> {
        concat(
            &Pathname::new(a.as_bytes()).unwrap(),
            &Pathname::new(b.as_bytes()).unwrap(),
            4096,
        )
    }

    #[test]
    fn test_concat_relative_suffix() {
        let joined = join("/path/to", "file.ext").unwrap();
        assert_eq!(joined, "/path/to/file.ext");
        assert!(joined.is_absolute());
        assert!(!joined.is_normalised());
    }

    #[test]
    fn test_concat_absolute_suffix() {
        assert_eq!(join("/a", "/b").unwrap(), "/a/b");
        assert_eq!(join("a", "/b").unwrap(), "a/b");
        assert!(!join("a", "/b").unwrap().is_absolute());
    }

    #[test]
    fn test_concat_is_purely_lexical() {
        assert_eq!(join("/a/", "b").unwrap(), "/a//b");
        assert_eq!(join("a", "../b").unwrap(), "a/../b");
        assert_eq!(join("/", "..").unwrap(), "//..");
    }

    #[test]
    fn test_concat_length_limit() {
        let prefix = Pathname::new(b"abc").unwrap();
        let suffix = Pathname::new(b"de").unwrap();
        assert_eq!(concat(&prefix, &suffix, 6).unwrap(), "abc/de");
        assert!(matches!(
            concat(&prefix, &suffix, 5),
            Err(Error::ExceededLength { length: 6, max: 5 })
        ));

        let absolute = Pathname::new(b"/de").unwrap();
        assert_eq!(concat(&prefix, &absolute, 6).unwrap(), "abc/de");
    }

    #[test]
    fn test_concat_drops_input_flags() {
        let prefix = Pathname::normalized(b"/a").unwrap();
        let suffix = Pathname::normalized(b"b").unwrap();
        let joined = concat(&prefix, &suffix, 4096).unwrap();
        assert!(!joined.is_normalised());
        assert!(!joined.is_borrowed());
    }
}
