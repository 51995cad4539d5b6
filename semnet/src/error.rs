//! Graph store error types.
//!
//! Returned by every [`SemanticGraph`](crate::SemanticGraph) and
//! [`GraphStore`](crate::GraphStore) operation that can fail. A failed operation never
//! leaves a partial change behind: the graph is either fully updated or untouched.

use thiserror::Error;

/// Error returned by graph mutations, queries and persistence.
///
/// Node and edge variants carry the offending labels so callers can name them in
/// user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A required text field was empty after trimming whitespace.
    #[error("{field} cannot be empty")]
    Validation { field: &'static str },

    /// The referenced node is not in the graph.
    #[error("node '{0}' does not exist")]
    NodeNotFound(String),

    /// A two-node operation referenced at least one missing node.
    #[error("one or both nodes do not exist: {}", .missing.join(", "))]
    NodesNotFound { missing: Vec<String> },

    /// Both nodes exist but there is no directed edge `from -> to`.
    #[error("there is no edge between {from} and {to}")]
    EdgeNotFound { from: String, to: String },

    /// The data file could not be read, encoded or written.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl GraphError {
    /// True for the node and edge lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound(_)
                | GraphError::NodesNotFound { .. }
                | GraphError::EdgeNotFound { .. }
        )
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
