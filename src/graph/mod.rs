//! Graph storage, node and path types, and traversals.
//!
//! Modules are organized into categories:
//! - `basic`: the generic directed graph
//! - `weighted`: weighted nodes, cost-counting paths and graph descriptions
//! - `algorithms`: depth-first search and multi-endpoint path finding

pub mod access;
pub mod algorithms;
pub mod basic;
pub mod weighted;

// Re-export commonly used types from submodules
pub use access::TraversalMarks;
pub use algorithms::{DfsAlgorithm, PathFinder};
pub use basic::{Children, Graph, Insertion, NodeIndex};
pub use weighted::{Color, EdgeDescription, GraphDescription, NodeCountingPath, WeightedNode};
