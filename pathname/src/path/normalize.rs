//! Lexical path normalization.
//!
//! Normalization is a fixed three-stage pipeline over byte buffers:
//!
//! 1. [`collapse_separators`] removes repeated `/`
//! 2. [`remove_dot_segments`] drops `.` segments
//! 3. [`resolve_parent_segments`] cancels `..` against preceding segments
//!
//! Each stage reads one buffer and writes a same-or-shorter buffer, so the
//! scratch space for a whole run is bounded by the input length. No stage
//! touches the filesystem.
//!
//! A few rules are deliberately asymmetric:
//!
//! - `./name` keeps its leading `./` marker, while `name` stays bare.
//! - Relative paths may climb: leading `..` segments are retained.
//! - Absolute paths may not: `/..` and `/a/../..` fail.
//! - When a relative path cancels down to nothing, the empty position
//!   stands for `.`. A final `..` against it yields `.`, so `a/../..` is
//!   `.`. Otherwise the `..` is kept and the implicit `.` absorbs the `..`
//!   after it: `a/../../b` is `../b` and `a/../../../b` is `../b`.

use crate::error::{lossy, Error, Result};
use crate::path::segment::{segment_length_of_next, SEPARATOR};
use crate::path::types::{PathFlags, Pathname};

/// Normalize a path.
///
/// Returns a new owned path flagged as normalized. The input does not need
/// to be normalized already; normalizing a normalized path yields an equal
/// path.
///
/// # Errors
///
/// Returns [`Error::InvalidPathname`] if a `..` segment would climb above
/// the root of an absolute path.
///
/// # Examples
///
/// ```
/// use pathname::Pathname;
/// use pathname::path::normalize::normalize;
///
/// let path = Pathname::new(b"/path/./to/././file.ext").unwrap();
/// let normalized = normalize(&path).unwrap();
/// assert_eq!(normalized, "/path/to/file.ext");
/// assert!(normalized.is_normalised());
///
/// let relative = Pathname::new(b"path/../../../file.ext").unwrap();
/// assert_eq!(normalize(&relative).unwrap(), "../file.ext");
///
/// assert!(normalize(&Pathname::new(b"/..").unwrap()).is_err());
/// ```
pub fn normalize(path: &Pathname<'_>) -> Result<Pathname<'static>> {
    let bytes = normalize_bytes(path.as_bytes())?;
    Ok(Pathname::from_trusted_vec(
        bytes,
        PathFlags::default().with_normalised(true),
    ))
}

/// Normalize raw path bytes.
///
/// This runs the three stages back to back, reusing the first scratch
/// buffer as the final output.
///
/// # Errors
///
/// Returns [`Error::ZeroLength`] for empty input, [`Error::InvalidLength`]
/// if the input contains a NUL byte, and [`Error::InvalidPathname`] if the
/// path climbs above the root.
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::normalize_bytes;
///
/// assert_eq!(normalize_bytes(b"//a//b/").unwrap(), b"/a/b/");
/// assert_eq!(normalize_bytes(b"./file.ext").unwrap(), b"./file.ext");
/// assert_eq!(normalize_bytes(b"/path/..").unwrap(), b"/");
/// ```
pub fn normalize_bytes(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(Error::ZeroLength);
    }
    if let Some(offset) = input.iter().position(|&b| b == 0) {
        return Err(Error::InvalidLength { offset });
    }

    let mut first = vec![0; input.len()];
    let collapsed = collapse_separators(&mut first, input);

    let mut second = vec![0; collapsed];
    let without_dots = remove_dot_segments(&mut second, &first[..collapsed]);

    // Report the caller's path, not the intermediate buffer.
    let resolved =
        resolve_parent_segments(&mut first, &second[..without_dots]).map_err(|err| match err {
            Error::InvalidPathname { reason, .. } => Error::InvalidPathname {
                path: lossy(input),
                reason,
            },
            other => other,
        })?;
    first.truncate(resolved);
    Ok(first)
}

/// Fixed-capacity output cursor over a caller-provided buffer.
struct Writer<'o> {
    out: &'o mut [u8],
    len: usize,
}

impl<'o> Writer<'o> {
    fn new(out: &'o mut [u8]) -> Self {
        Self { out, len: 0 }
    }

    fn push(&mut self, bytes: &[u8]) {
        self.out[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
    }

    fn as_slice(&self) -> &[u8] {
        &self.out[..self.len]
    }

    fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Returns the `/`-led chunk starting at `start`: the separator plus the
/// following segment.
fn chunk_at(input: &[u8], start: usize) -> &[u8] {
    let len = 1 + segment_length_of_next(&input[start + 1..]);
    &input[start..start + len]
}

/// Returns `true` if a `/.` chunk starts at `start`.
fn is_dot_chunk(input: &[u8], start: usize) -> bool {
    input[start..].starts_with(b"/.")
        && (start + 2 == input.len() || input[start + 2] == SEPARATOR)
}

/// Stage one: collapse runs of separators into a single `/`.
///
/// Returns the number of bytes written to `out`.
///
/// # Panics
///
/// Panics if `out` is shorter than `input`.
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::collapse_separators;
///
/// let input = b"//path///to//";
/// let mut out = vec![0; input.len()];
/// let len = collapse_separators(&mut out, input);
/// assert_eq!(&out[..len], b"/path/to/");
/// ```
pub fn collapse_separators(out: &mut [u8], input: &[u8]) -> usize {
    let mut writer = Writer::new(out);
    let mut previous_was_separator = false;

    for &byte in input {
        let is_separator = byte == SEPARATOR;
        if !(is_separator && previous_was_separator) {
            writer.push(&[byte]);
        }
        previous_was_separator = is_separator;
    }

    writer.len()
}

/// Stage two: remove `.` segments.
///
/// Expects input without repeated separators. Absolute paths lose every
/// `/.` chunk; a dropped final chunk leaves a trailing `/` so the result
/// still denotes a directory. Relative paths lose their leading `./`
/// chunks, except that a single remaining segment keeps one `./` marker.
///
/// # Panics
///
/// Panics if `out` is shorter than `input`.
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::remove_dot_segments;
///
/// let input = b"/path/./to/.";
/// let mut out = vec![0; input.len()];
/// let len = remove_dot_segments(&mut out, input);
/// assert_eq!(&out[..len], b"/path/to/");
/// ```
pub fn remove_dot_segments(out: &mut [u8], input: &[u8]) -> usize {
    let mut writer = Writer::new(out);
    if input.is_empty() {
        return 0;
    }

    let mut pos = 0;
    if input[0] == SEPARATOR {
        while pos < input.len() && is_dot_chunk(input, pos) {
            pos += 2;
        }
        if pos == input.len() {
            writer.push(b"/");
            return writer.len();
        }
    } else {
        let mut stripped = false;
        while input[pos..].starts_with(b"./") {
            pos += 2;
            stripped = true;
        }

        let rest = &input[pos..];
        if rest.is_empty() || rest == b"." {
            writer.push(b".");
            return writer.len();
        }

        let first = segment_length_of_next(rest);
        if stripped && first == rest.len() && rest != b".." {
            writer.push(b"./");
            writer.push(rest);
            return writer.len();
        }

        writer.push(&rest[..first]);
        pos += first;
    }

    while pos < input.len() {
        let chunk = chunk_at(input, pos);
        pos += chunk.len();

        if chunk == b"/." {
            if pos == input.len() {
                if writer.is_empty() {
                    writer.push(b".");
                } else {
                    writer.push(b"/");
                }
            }
            continue;
        }

        writer.push(chunk);
    }

    writer.len()
}

/// Stage three: resolve `..` segments.
///
/// Expects the output of [`remove_dot_segments`]. Each `..` deletes the
/// preceding segment unless that segment is itself `..`, in which case the
/// chain accumulates.
///
/// # Errors
///
/// Returns [`Error::InvalidPathname`] if an absolute path climbs above `/`.
///
/// # Panics
///
/// Panics if `out` is shorter than `input`.
///
/// # Examples
///
/// ```
/// use pathname::path::normalize::resolve_parent_segments;
///
/// let input = b"/a/b/../c";
/// let mut out = vec![0; input.len()];
/// let len = resolve_parent_segments(&mut out, input).unwrap();
/// assert_eq!(&out[..len], b"/a/c");
///
/// let input = b"/a/../..";
/// let mut out = vec![0; input.len()];
/// assert!(resolve_parent_segments(&mut out, input).is_err());
/// ```
pub fn resolve_parent_segments(out: &mut [u8], input: &[u8]) -> Result<usize> {
    let absolute = input.first() == Some(&SEPARATOR);
    let mut writer = Writer::new(out);
    let mut pos = 0;

    // Relative output cancelled down to nothing stands for `.`.
    let mut implicit_dot = false;
    // Set once that implicit `.` has been spent on a retained `..`; the
    // next `..` is absorbed instead of accumulating.
    let mut absorb_parent = false;

    if !absolute {
        let first = segment_length_of_next(input);
        writer.push(&input[..first]);
        pos = first;
    }

    while pos < input.len() {
        let chunk = chunk_at(input, pos);
        let segment = &chunk[1..];
        pos += chunk.len();
        let at_end = pos == input.len();

        if segment == b".." {
            if writer.is_empty() {
                if absolute {
                    return Err(Error::InvalidPathname {
                        path: lossy(input),
                        reason: "'..' climbs above the root directory".to_string(),
                    });
                }
                if implicit_dot && (at_end || &input[pos..] == b"/") {
                    writer.push(b".");
                    pos = input.len();
                    continue;
                }
                absorb_parent = implicit_dot;
                implicit_dot = false;
                writer.push(b"..");
                continue;
            }

            let written = writer.as_slice();
            let cut = written.iter().rposition(|&b| b == SEPARATOR);
            let previous = &written[cut.map_or(0, |c| c + 1)..];
            if previous == b".." {
                if absorb_parent {
                    absorb_parent = false;
                } else {
                    writer.push(b"/..");
                }
                continue;
            }

            writer.truncate(cut.unwrap_or(0));
            if writer.is_empty() {
                if absolute {
                    if at_end {
                        writer.push(b"/");
                    }
                } else if at_end {
                    writer.push(b".");
                } else {
                    implicit_dot = true;
                }
            }
            continue;
        }

        absorb_parent = false;
        if writer.is_empty() && !absolute {
            implicit_dot = false;
            if segment.is_empty() {
                writer.push(b".");
            } else if at_end {
                writer.push(b"./");
                writer.push(segment);
            } else {
                writer.push(segment);
            }
            continue;
        }

        writer.push(chunk);
    }

    Ok(writer.len())
}
