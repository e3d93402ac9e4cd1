//! Owned handle for a path under construction

use crate::error::Result;
use crate::join::join;
use std::fmt;

/// Builds a path one segment at a time
///
/// Holds the single live value of the path being built. Each successful
/// [`push`](PathJoiner::push) replaces that value; a failed push leaves it as
/// it was.
///
/// # Examples
/// ```
/// use path_joiner::PathJoiner;
///
/// let mut path = PathJoiner::new();
/// path.push("base").unwrap();
/// path.push("/some/path/").unwrap();
/// assert_eq!(path.as_str(), "base/some/path");
///
/// // A missing segment is an error, not a no-op
/// assert!(path.push(None).is_err());
/// assert_eq!(path.as_str(), "base/some/path");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathJoiner {
    path: Option<String>,
}

impl PathJoiner {
    /// Create a joiner with no path yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Join `segment` onto the held path
    ///
    /// Accepts `&str` directly; `None` models an absent segment and fails
    /// with [`JoinError::InvalidArgument`](crate::JoinError::InvalidArgument).
    pub fn push<'a, S>(&mut self, segment: S) -> Result<()>
    where
        S: Into<Option<&'a str>>,
    {
        let joined = join(self.path.as_deref(), segment.into())?;
        self.path = Some(joined);
        Ok(())
    }

    /// Push every segment in order, stopping at the first error
    ///
    /// On error the joiner holds the path produced by the last successful push.
    pub fn extend_from<I, S>(&mut self, segments: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for segment in segments {
            self.push(segment.as_ref())?;
        }
        Ok(())
    }

    /// The path built so far, empty before the first push
    pub fn as_str(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Drop the held path so the next push starts a new one
    pub fn reset(&mut self) {
        self.path = None;
    }

    /// Take ownership of the built path
    pub fn into_string(self) -> String {
        self.path.unwrap_or_default()
    }
}

impl AsRef<str> for PathJoiner {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PathJoiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PathJoiner> for String {
    fn from(joiner: PathJoiner) -> Self {
        joiner.into_string()
    }
}
