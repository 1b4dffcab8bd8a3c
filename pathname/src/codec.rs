//! Flat byte encoding of pathname values.
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! +---------+-------+--------+-------+
//! | version | flags | length | bytes |
//! |   u16   |  u8   |  u32   |  ...  |
//! +---------+-------+--------+-------+
//! ```
//!
//! Decoding checks the header and then runs the bytes through the same
//! validation as construction, so a decoded value satisfies every
//! invariant a constructed one does.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::path::normalize::normalize_bytes;
use crate::path::{validate, PathFlags, Pathname};

/// The encoding version written by this build.
pub const FORMAT_VERSION: u16 = 1;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 2 + 1 + 4;

/// Returns the crate version.
///
/// # Examples
///
/// ```
/// assert!(!pathname::codec::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the number of bytes [`encode`] produces for `path`.
#[must_use]
pub fn encoded_len(path: &Pathname<'_>) -> usize {
    HEADER_LEN + path.len()
}

/// Encode `path` into a new buffer.
///
/// # Errors
///
/// Returns [`Error::ExceededLength`] if the path does not fit the 32-bit
/// length field.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
/// use pathname::codec::{decode, encode};
///
/// let path = Pathname::normalized(b"/path/to/file.ext").unwrap();
/// let encoded = encode(&path).unwrap();
///
/// let decoded = decode(&encoded, 4096).unwrap();
/// assert_eq!(decoded, path);
/// assert!(decoded.is_normalised());
/// ```
pub fn encode(path: &Pathname<'_>) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded_len(path));
    encode_into(path, &mut out)?;
    Ok(out)
}

/// Append the encoding of `path` to `out`.
///
/// # Errors
///
/// Returns [`Error::ExceededLength`] if the path does not fit the 32-bit
/// length field. Nothing is written in that case.
pub fn encode_into(path: &Pathname<'_>, out: &mut Vec<u8>) -> Result<()> {
    let length = u32::try_from(path.len()).map_err(|_| Error::ExceededLength {
        length: path.len(),
        max: u32::MAX as usize,
    })?;

    out.reserve(encoded_len(path));
    out.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
    out.push(path.flags().bits());
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(path.as_bytes());
    Ok(())
}

fn decode_error(reason: impl Into<String>) -> Error {
    Error::Decode {
        reason: reason.into(),
    }
}

/// Decode a pathname, borrowing its bytes from `input`.
///
/// The input must hold exactly one encoded value.
///
/// # Errors
///
/// Returns:
/// - [`Error::Decode`] for a short header, unknown flag bits, a length that
///   disagrees with the payload, or a normalized flag on bytes that are not
///   in normal form
/// - [`Error::UnsupportedFormatVersion`] for a version other than
///   [`FORMAT_VERSION`]
/// - the construction errors for empty, oversized or NUL-containing bytes
pub fn decode(input: &[u8], max_len: usize) -> Result<Pathname<'_>> {
    if input.len() < HEADER_LEN {
        return Err(decode_error(format!(
            "input of {} bytes is shorter than the {HEADER_LEN}-byte header",
            input.len()
        )));
    }

    let found = u16::from_be_bytes([input[0], input[1]]);
    if found != FORMAT_VERSION {
        return Err(Error::UnsupportedFormatVersion {
            expected: FORMAT_VERSION,
            found,
        });
    }

    let flags = PathFlags::from_bits(input[2])
        .ok_or_else(|| decode_error(format!("unknown flag bits {:#04x}", input[2])))?;

    let length = u32::from_be_bytes([input[3], input[4], input[5], input[6]]) as usize;
    let body = &input[HEADER_LEN..];
    if body.len() != length {
        return Err(decode_error(format!(
            "length field says {length} bytes but {} follow",
            body.len()
        )));
    }

    validate(body, max_len)?;
    if flags.is_normalised() && normalize_bytes(body)? != body {
        return Err(decode_error("bytes flagged normalised are not in normal form"));
    }

    log::debug!("decoded {length}-byte pathname (flags {:#04x})", flags.bits());
    Ok(Pathname::from_cow(Cow::Borrowed(body), flags))
}
