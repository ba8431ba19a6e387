//! Error types

use std::fmt;

/// Error returned when constructing a glyph mapping table whose entries
/// violate the ordering invariant.
///
/// Entries are applied first to last, each as a global replacement over the
/// accumulated string. An earlier pattern occurring inside a later pattern
/// rewrites the later pattern's occurrences before that entry is reached,
/// so such a table can never match the later entry.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TableError {
    /// An entry has an empty legacy pattern.
    EmptyPattern,
    /// The same legacy pattern appears in more than one entry.
    DuplicatePattern(&'static str),
    /// An earlier entry's pattern occurs as a substring of a later entry's
    /// pattern, making the later entry unreachable.
    ShadowedPattern {
        earlier: &'static str,
        later: &'static str,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::EmptyPattern => write!(f, "empty legacy pattern"),
            TableError::DuplicatePattern(pattern) => {
                write!(f, "duplicate legacy pattern {:?}", pattern)
            }
            TableError::ShadowedPattern { earlier, later } => write!(
                f,
                "legacy pattern {:?} is shadowed by earlier entry {:?}",
                later, earlier
            ),
        }
    }
}

impl std::error::Error for TableError {}
