//! Error types for graph construction and traversal.
//!
//! Expected outcomes never show up here: a node or edge that already exists
//! is reported as [`Insertion::AlreadyPresent`](crate::Insertion) and an
//! unreachable target is `None`. `GraphError` is reserved for calls that
//! break a precondition, such as traversing from a node the graph does not
//! contain.

use thiserror::Error;

/// Errors raised by graph operations whose preconditions were not met.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An operation required a node that is not a member of the graph.
    #[error("node {node} is not in the graph")]
    UnknownNode {
        /// Debug rendering of the offending node.
        node: String,
    },

    /// A graph description has an edge naming a node it never declared.
    #[error("edge references undeclared node `{name}`")]
    UndefinedNode {
        /// Name used by the edge.
        name: String,
    },

    /// A graph description declares the same node name twice.
    #[error("node `{name}` is declared more than once")]
    DuplicateNode {
        /// The repeated name.
        name: String,
    },

    /// A graph description could not be parsed.
    #[error("invalid graph description: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn unknown_node<N: core::fmt::Debug>(node: &N) -> Self {
        Self::UnknownNode {
            node: format!("{node:?}"),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
