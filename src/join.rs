//! Path joining
//!
//! A join step takes the path built so far and one new segment and produces a
//! fresh path with exactly one separator at the join point. Only the boundary
//! between the two operands is normalized: interior runs of separators, `.` and
//! `..` components pass through untouched.

use crate::error::{JoinError, Result};
use std::collections::TryReserveError;

/// The path separator used by every join
pub const SEPARATOR: char = '/';

const SEP: u8 = SEPARATOR as u8;

/// Join a segment onto the path built so far
///
/// `current` is `None` on the first step. The result is a new `String`; the
/// caller replaces its previous value with it. `current` is only borrowed, so
/// it stays valid whatever the outcome.
///
/// - The trailing separators of `current` and the leading separators of
///   `segment` collapse into a single separator.
/// - A trailing separator run on the result is dropped, unless the whole
///   result is separators, in which case it becomes the root `/`.
/// - With no `current` (or an empty one) the segment prefix is kept as-is.
///
/// # Errors
/// - [`JoinError::InvalidArgument`] if `segment` is `None`
/// - [`JoinError::AllocationFailure`] if the joined path cannot be allocated
///
/// # Examples
/// ```
/// use path_joiner::join;
///
/// let path = join(None, Some("/start-and-end-with-slashes/")).unwrap();
/// assert_eq!(path, "/start-and-end-with-slashes");
///
/// let path = join(Some(path.as_str()), Some("/plus/path/with/slashes/")).unwrap();
/// assert_eq!(path, "/start-and-end-with-slashes/plus/path/with/slashes");
///
/// assert_eq!(join(None, Some("/")).unwrap(), "/");
/// assert!(join(Some(path.as_str()), None).is_err());
/// ```
pub fn join(current: Option<&str>, segment: Option<&str>) -> Result<String> {
    let segment = segment.ok_or_else(missing_segment)?;
    let current = current.unwrap_or_default();

    // Splice offsets always sit next to an ASCII separator or at either end,
    // so they are valid char boundaries.
    let splice = Splice::plan(current.as_bytes(), segment.as_bytes());
    let joined = assemble::<String>(
        &current[..splice.head],
        splice.separator,
        &segment[splice.start..splice.end],
    )
    .inspect_err(|err| log::debug!("join of {current:?} and {segment:?} failed: {err}"))?;

    log::trace!("joined {current:?} + {segment:?} -> {joined:?}");
    Ok(joined)
}

/// Join a segment onto a path held as raw bytes
///
/// Same rules as [`join`]; only the `/` byte is interpreted, every other byte
/// is copied verbatim.
///
/// # Examples
/// ```
/// use path_joiner::join_bytes;
///
/// let path = join_bytes(Some(b"/a/".as_slice()), Some(b"\xffx/".as_slice())).unwrap();
/// assert_eq!(path, b"/a/\xffx");
/// ```
pub fn join_bytes(current: Option<&[u8]>, segment: Option<&[u8]>) -> Result<Vec<u8>> {
    let segment = segment.ok_or_else(missing_segment)?;
    let current = current.unwrap_or_default();

    let splice = Splice::plan(current, segment);
    let joined = assemble::<Vec<u8>>(
        &current[..splice.head],
        splice.separator,
        &segment[splice.start..splice.end],
    )
    .inspect_err(|err| {
        log::debug!(
            "join of {} bytes and {} bytes failed: {err}",
            current.len(),
            segment.len()
        )
    })?;

    log::trace!(
        "joined {} bytes + {} bytes -> {} bytes",
        current.len(),
        segment.len(),
        joined.len()
    );
    Ok(joined)
}

/// Build a path from a sequence of segments
///
/// Equivalent to starting from no path and calling [`join`] once per segment.
/// An empty sequence yields the empty path.
///
/// # Examples
/// ```
/// use path_joiner::join_all;
///
/// assert_eq!(join_all(["base", "some/path", "/more/"]).unwrap(), "base/some/path/more");
/// assert_eq!(join_all(Vec::<&str>::new()).unwrap(), "");
/// ```
pub fn join_all<I, S>(segments: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .try_fold(String::new(), |path, segment| {
            join(Some(path.as_str()), Some(segment.as_ref()))
        })
}

fn missing_segment() -> JoinError {
    log::debug!("join called without a segment");
    JoinError::InvalidArgument
}

/// Where `current` is cut, whether a separator goes in, and which part of
/// `segment` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Splice {
    head: usize,
    separator: bool,
    start: usize,
    end: usize,
}

impl Splice {
    /// The single-separator root path
    const ROOT: Splice = Splice {
        head: 0,
        separator: true,
        start: 0,
        end: 0,
    };

    fn plan(current: &[u8], segment: &[u8]) -> Self {
        if current.is_empty() {
            let end = segment.len() - trailing_separators(segment);
            if end == 0 && !segment.is_empty() {
                return Self::ROOT;
            }
            return Splice {
                head: 0,
                separator: false,
                start: 0,
                end,
            };
        }

        let head = current.len() - trailing_separators(current);
        let start = leading_separators(segment);
        let end = segment.len() - trailing_separators(&segment[start..]);

        if start == end {
            // Nothing left of the segment but separators.
            if head == 0 {
                return Self::ROOT;
            }
            return Splice {
                head,
                separator: false,
                start,
                end,
            };
        }

        Splice {
            head,
            separator: true,
            start,
            end,
        }
    }

    fn len(&self) -> usize {
        self.head + usize::from(self.separator) + (self.end - self.start)
    }
}

fn leading_separators(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| b == SEP).count()
}

fn trailing_separators(bytes: &[u8]) -> usize {
    bytes.iter().rev().take_while(|&&b| b == SEP).count()
}

/// Owned storage a joined path is assembled into
trait PathBuffer: Default {
    type Slice: ?Sized + AsRef<[u8]>;

    fn try_allocate(&mut self, additional: usize) -> std::result::Result<(), TryReserveError>;
    fn push_slice(&mut self, slice: &Self::Slice);
    fn push_separator(&mut self);
}

impl PathBuffer for String {
    type Slice = str;

    fn try_allocate(&mut self, additional: usize) -> std::result::Result<(), TryReserveError> {
        String::try_reserve_exact(self, additional)
    }

    fn push_slice(&mut self, slice: &str) {
        self.push_str(slice);
    }

    fn push_separator(&mut self) {
        self.push(SEPARATOR);
    }
}

impl PathBuffer for Vec<u8> {
    type Slice = [u8];

    fn try_allocate(&mut self, additional: usize) -> std::result::Result<(), TryReserveError> {
        Vec::try_reserve_exact(self, additional)
    }

    fn push_slice(&mut self, slice: &[u8]) {
        self.extend_from_slice(slice);
    }

    fn push_separator(&mut self) {
        self.push(SEP);
    }
}

/// Allocate an empty buffer able to hold `capacity` bytes without growing
fn allocate<B: PathBuffer>(capacity: usize) -> Result<B> {
    let mut buffer = B::default();
    buffer
        .try_allocate(capacity)
        .map_err(|_| JoinError::AllocationFailure {
            requested: capacity,
        })?;
    Ok(buffer)
}

fn assemble<B: PathBuffer>(head: &B::Slice, separator: bool, tail: &B::Slice) -> Result<B> {
    let len = head.as_ref().len() + usize::from(separator) + tail.as_ref().len();
    let mut joined: B = allocate(len)?;
    joined.push_slice(head);
    if separator {
        joined.push_separator();
    }
    joined.push_slice(tail);
    Ok(joined)
}
