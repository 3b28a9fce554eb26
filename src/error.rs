//! Error types of the crate.
//!
//! Failures come in two flavors: [`PatternSyntaxError`] when a pattern can't be turned into a
//! [`NamedPattern`](crate::NamedPattern), and [`OutOfRangeError`] when a numeric group index or
//! text offset is out of bounds. Looking up an unknown group *name* is never an error and is
//! represented by `None` instead.

use std::error;
use std::fmt::{self, Display};

/// The Error returned when compiling a [`NamedPattern`](crate::NamedPattern) fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSyntaxError {
    /// The regex engine rejected the pattern after the group names were stripped.
    ///
    /// Contains the message of the engine.
    Syntax(String),
    /// A named group opening like `(?P<>` with nothing between `<` and `>`.
    ///
    /// `position` is the byte offset of the `(` in the original pattern.
    EmptyGroupName {
        /// Byte offset of the offending `(`
        position: usize,
    },
    /// The marker token is empty or contains characters other than ASCII alphanumerics and `_`.
    InvalidMarker(String),
    /// The regex engine found a named group that was not written with the configured marker,
    /// e.g. `(?<name>...)`, or `(?P<name>...)` while compiling with marker `Z`.
    ///
    /// Such a group would get a number from the engine but no entry in the name table. Contains
    /// the name of the group.
    UnmarkedNamedGroup(String),
    /// The name table and the compiled regex disagree on the number of capture groups.
    ///
    /// This happens when the scan counts a `(` that the engine does not treat as a group, like
    /// the one in `[(]`.
    GroupCountMismatch {
        /// Number of groups found while scanning the pattern (excluding group 0)
        names: usize,
        /// Number of groups reported by the regex engine (excluding group 0)
        engine: usize,
    },
}

impl Display for PatternSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSyntaxError::Syntax(msg) => write!(f, "invalid pattern: {}", msg),
            PatternSyntaxError::EmptyGroupName { position } => {
                write!(f, "empty group name in named group at offset {}", position)
            }
            PatternSyntaxError::InvalidMarker(marker) => write!(
                f,
                "invalid group name marker {:?}: expected one or more of [A-Za-z0-9_]",
                marker
            ),
            PatternSyntaxError::UnmarkedNamedGroup(name) => write!(
                f,
                "named group {:?} does not use the configured marker",
                name
            ),
            PatternSyntaxError::GroupCountMismatch { names, engine } => write!(
                f,
                "found {} capture groups in the pattern, but the regex engine reports {}. \
                 Is there a `(` inside of a character class?",
                names, engine
            ),
        }
    }
}

impl error::Error for PatternSyntaxError {}

/// The Error returned when a group index or an offset into the text is out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfRangeError {
    /// A group index greater than the number of capture groups.
    Group {
        /// The requested index
        index: usize,
        /// Number of capture groups of the pattern (excluding group 0)
        group_count: usize,
    },
    /// An offset past the end of the text.
    Offset {
        /// The requested offset
        offset: usize,
        /// Length of the text in bytes
        len: usize,
    },
    /// A region that is reversed or reaches past the end of the text.
    Region {
        /// Requested start of the region
        start: usize,
        /// Requested end of the region
        end: usize,
        /// Length of the text in bytes
        len: usize,
    },
    /// An offset that lies inside of a multi-byte character.
    NotCharBoundary {
        /// The requested offset
        offset: usize,
    },
}

impl Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRangeError::Group { index, group_count } => write!(
                f,
                "group index {} out of range for a pattern with {} groups",
                index, group_count
            ),
            OutOfRangeError::Offset { offset, len } => {
                write!(f, "offset {} out of range for text of length {}", offset, len)
            }
            OutOfRangeError::Region { start, end, len } => write!(
                f,
                "region {}..{} out of range for text of length {}",
                start, end, len
            ),
            OutOfRangeError::NotCharBoundary { offset } => {
                write!(f, "offset {} is not on a char boundary", offset)
            }
        }
    }
}

impl error::Error for OutOfRangeError {}
