//! Segment scanning primitives.
//!
//! These are pure, allocation-free functions over byte slices that locate
//! `/`-separated segment boundaries and classify segments. They never fail
//! and perform no interpretation beyond separator splitting: `.` and `..`
//! are returned as ordinary segments and only classified on request.

use std::fmt;

/// The path separator byte.
pub const SEPARATOR: u8 = b'/';

/// Classification of a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A zero-length segment (only produced for `/`).
    Empty,
    /// The current-directory segment `.`.
    Dot,
    /// The parent-directory segment `..`.
    DotDot,
    /// Any other segment.
    Normal,
}

impl SegmentKind {
    /// Classifies raw segment bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathname::path::segment::SegmentKind;
    ///
    /// assert_eq!(SegmentKind::of(b""), SegmentKind::Empty);
    /// assert_eq!(SegmentKind::of(b"."), SegmentKind::Dot);
    /// assert_eq!(SegmentKind::of(b".."), SegmentKind::DotDot);
    /// assert_eq!(SegmentKind::of(b"..."), SegmentKind::Normal);
    /// ```
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        match bytes {
            b"" => Self::Empty,
            b"." => Self::Dot,
            b".." => Self::DotDot,
            _ => Self::Normal,
        }
    }
}

/// A non-owning view of one `/`-delimited component of a path.
///
/// A segment never includes a leading or trailing separator. It remembers
/// its offset within the path it was scanned from.
///
/// # Examples
///
/// ```
/// use pathname::path::segment::find_last_segment;
///
/// let segment = find_last_segment(b"/a/b/");
/// assert_eq!(segment.as_bytes(), b"b");
/// assert_eq!(segment.offset(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Segment<'a> {
    pub(crate) fn new(source: &'a [u8], offset: usize, len: usize) -> Self {
        Self {
            bytes: &source[offset..offset + len],
            offset,
        }
    }

    /// Returns the segment bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the offset of the segment within the scanned path.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the offset one past the segment's last byte.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.bytes.len()
    }

    /// Returns the segment length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the segment has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if the segment is `.`.
    #[must_use]
    pub fn is_dot(&self) -> bool {
        self.bytes == b"."
    }

    /// Returns `true` if the segment is `..`.
    #[must_use]
    pub fn is_dot_dot(&self) -> bool {
        self.bytes == b".."
    }

    /// Returns the classification of this segment.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        SegmentKind::of(self.bytes)
    }
}

impl fmt::Debug for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("bytes", &String::from_utf8_lossy(self.bytes))
            .field("offset", &self.offset)
            .finish()
    }
}

/// Returns the run of bytes up to (excluding) the first separator.
///
/// If no separator is present the whole input is the segment.
///
/// # Examples
///
/// ```
/// use pathname::path::segment::next_segment;
///
/// assert_eq!(next_segment(b"path/to").as_bytes(), b"path");
/// assert_eq!(next_segment(b"file").as_bytes(), b"file");
/// assert!(next_segment(b"/abs").is_empty());
/// ```
#[must_use]
pub fn next_segment(bytes: &[u8]) -> Segment<'_> {
    Segment::new(bytes, 0, segment_length_of_next(bytes))
}

/// Returns the length of the segment [`next_segment`] would return.
#[must_use]
pub fn segment_length_of_next(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|&b| b == SEPARATOR)
        .unwrap_or(bytes.len())
}

/// Finds the last segment of a path.
///
/// A final separator is a trailing marker and is excluded from the search,
/// so `"/a/b/"` yields `b`. A standalone `/` yields an empty segment.
///
/// # Examples
///
/// ```
/// use pathname::path::segment::find_last_segment;
///
/// assert_eq!(find_last_segment(b"/a/b").as_bytes(), b"b");
/// assert_eq!(find_last_segment(b"/a/b/").as_bytes(), b"b");
/// assert_eq!(find_last_segment(b"..").as_bytes(), b"..");
/// assert!(find_last_segment(b"/").is_empty());
/// ```
#[must_use]
pub fn find_last_segment(bytes: &[u8]) -> Segment<'_> {
    let end = match bytes.last() {
        Some(&SEPARATOR) => bytes.len() - 1,
        _ => bytes.len(),
    };
    let start = bytes[..end]
        .iter()
        .rposition(|&b| b == SEPARATOR)
        .map_or(0, |pos| pos + 1);
    Segment::new(bytes, start, end - start)
}

/// Returns `true` if the path is exactly `/`.
#[must_use]
pub fn is_slash_only(bytes: &[u8]) -> bool {
    bytes == b"/"
}

/// Returns `true` if the path ends with a separator and is longer than `/`.
#[must_use]
pub fn has_trailing_separator(bytes: &[u8]) -> bool {
    bytes.len() > 1 && bytes.last() == Some(&SEPARATOR)
}

/// Iterator over the segments of a path, in order.
///
/// Runs of separators are skipped, so every yielded segment is non-empty,
/// except that the path `/` yields a single empty segment.
///
/// # Examples
///
/// ```
/// use pathname::path::segment::Segments;
///
/// let names: Vec<&[u8]> = Segments::new(b"/a//b/./").map(|s| s.as_bytes()).collect();
/// assert_eq!(names, vec![&b"a"[..], b"b", b"."]);
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    bytes: &'a [u8],
    pos: usize,
    root_pending: bool,
}

impl<'a> Segments<'a> {
    /// Creates an iterator over the segments of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            root_pending: !bytes.is_empty() && bytes.iter().all(|&b| b == SEPARATOR),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.root_pending {
            self.root_pending = false;
            self.pos = self.bytes.len();
            return Some(Segment::new(self.bytes, 0, 0));
        }

        while self.pos < self.bytes.len() && self.bytes[self.pos] == SEPARATOR {
            self.pos += 1;
        }
        if self.pos >= self.bytes.len() {
            return None;
        }

        let start = self.pos;
        let len = segment_length_of_next(&self.bytes[start..]);
        self.pos = start + len;
        Some(Segment::new(self.bytes, start, len))
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
