//! Error types shared by every container in the crate.

use std::result;
use thiserror::Error;

/// Errors raised by the capability traits and the GraphViz exporter.
///
/// Lookups of missing keys and traversals of empty containers are not errors; they are reported
/// through ordinary `bool` and `Option` results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An absent key was passed to an operation that requires one.
    #[error("argument to {operation}() is absent")]
    InvalidArgument { operation: &'static str },

    /// An index was outside of the valid range of a sequence.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A tree was too deep for its nodes to be numbered positionally.
    #[error("tree of depth {depth} is too deep to export")]
    ExportTooDeep { depth: usize },
}

impl Error {
    /// Returns `true` if the error was caused by an absent argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Returns `true` if the error was caused by an out of range index.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::IndexOutOfBounds { .. })
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        let err = Error::InvalidArgument { operation: "add" };
        assert_eq!(err.to_string(), "argument to add() is absent");

        let err = Error::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of bounds for sequence of length 2");
    }

    #[test]
    fn test_predicates() {
        assert!(Error::InvalidArgument { operation: "remove" }.is_invalid_argument());
        assert!(!Error::InvalidArgument { operation: "remove" }.is_out_of_bounds());
        assert!(Error::IndexOutOfBounds { index: 0, len: 0 }.is_out_of_bounds());
        assert!(!Error::ExportTooDeep { depth: 200 }.is_invalid_argument());
    }
}
