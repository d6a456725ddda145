//! Error types for mdtoolbox.

use std::fmt;

/// Result type alias for mdtoolbox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for mdtoolbox operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Action identifier not in the catalog and not `emoji:`-prefixed.
    UnknownAction(String),
    /// Selection offsets violate `start <= end <= buffer length`.
    InvalidSelection {
        start: usize,
        end: usize,
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAction(id) => write!(f, "unknown action identifier: {id:?}"),
            Self::InvalidSelection { start, end, len } => {
                write!(
                    f,
                    "invalid selection {start}..{end} for buffer of {len} chars"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
