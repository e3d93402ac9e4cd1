//! # path-joiner
//!
//! Incremental path-string construction.
//!
//! Each join step combines the path built so far with one new segment and
//! produces a new path with exactly one `/` at the join point. Trailing
//! separators are stripped, except that a path made only of separators
//! becomes the root `/`.
//!
//! ## Features
//!
//! - **Boundary normalization**: separator runs at the join point collapse to one
//! - **Root preservation**: `/` stays `/`, it never becomes the empty path
//! - **Safe ownership**: the previous path stays valid if a join fails
//! - **Byte paths**: [`join_bytes`] works on arbitrary 8-bit data
//!
//! Interior separator runs, `.` and `..` are left alone.
//!
//! ## Examples
//!
//! ### Joining step by step
//!
//! ```rust
//! use path_joiner::join;
//!
//! let path = join(None, Some("no-start-slash")).unwrap();
//! let path = join(Some(path.as_str()), Some("no-leading-slash")).unwrap();
//! assert_eq!(path, "no-start-slash/no-leading-slash");
//!
//! assert_eq!(join(Some("/a/b/"), Some("/c/d/")).unwrap(), "/a/b/c/d");
//! assert_eq!(join(Some("/a"), Some("/")).unwrap(), "/a");
//! ```
//!
//! ### Building a path in place
//!
//! ```rust
//! use path_joiner::PathJoiner;
//!
//! let mut path = PathJoiner::new();
//! path.push("base").unwrap();
//! for _ in 0..3 {
//!     path.push("some/path").unwrap();
//! }
//! assert_eq!(path.as_str(), "base/some/path/some/path/some/path");
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use path_joiner::{join, JoinError};
//!
//! // An absent segment is rejected rather than ignored
//! assert_eq!(join(Some("/a"), None), Err(JoinError::InvalidArgument));
//! ```

mod error;
mod join;
mod joiner;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use error::{JoinError, Result};
pub use join::{join, join_all, join_bytes, SEPARATOR};
pub use joiner::PathJoiner;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
