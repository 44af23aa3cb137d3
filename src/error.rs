//! Error types for `canon_algos`.
//!
//! Searches never fail: a missing value is reported as `None` or as an empty
//! range. The variants below cover the only argument checks the crate performs.

use thiserror::Error;

/// Errors raised by argument validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A recurrence term was requested at a negative index.
    #[error("invalid argument: term index must be non-negative, got {0}")]
    NegativeIndex(i64),

    /// An edge endpoint does not name a node of the graph.
    #[error("invalid argument: node {node} is out of bounds for a graph of {node_count} nodes")]
    NodeOutOfBounds {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the graph at the time of the call.
        node_count: usize,
    },
}

/// Result type alias for `canon_algos` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NegativeIndex(-3).to_string(),
            "invalid argument: term index must be non-negative, got -3"
        );
        assert_eq!(
            Error::NodeOutOfBounds {
                node: 7,
                node_count: 5
            }
            .to_string(),
            "invalid argument: node 7 is out of bounds for a graph of 5 nodes"
        );
    }
}
