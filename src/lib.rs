//! # `pathgraph` - Weighted Directed Graphs and DFS Path Finding
//!
//! A small graph toolkit built around one search strategy: a colored
//! depth-first search that explores heavier children first, counts back
//! edges, and records the order it entered nodes in. On top of it,
//! [`PathFinder`] runs that search for every pairing of a set of start nodes
//! with a set of end nodes and keeps the cheapest result.
//!
//! ## Key Features
//!
//! - **Generic storage**: [`Graph<N>`] works for any `Eq + Hash + Clone` node
//!   type; duplicate nodes and edges are reported, not errors
//! - **Separated scratch state**: search colors and back-edge counters live in
//!   [`TraversalMarks`] owned by each search, never on the nodes
//! - **No recursion**: the search keeps an explicit frame stack
//! - **Persistent paths**: [`NodeCountingPath`] extension shares the prefix
//!
//! ## Guarantees and Limits
//!
//! The path a search returns is the DFS trail, not a shortest path: it lists
//! every node entered up to the target, dead ends included. `PathFinder`
//! minimizes over those trails only.
//!
//! ## Example
//!
//! ```rust
//! use pathgraph::{DfsAlgorithm, Graph, PathFinder, WeightedNode};
//!
//! let n1 = WeightedNode::new("n1", 5);
//! let n2 = WeightedNode::new("n2", 5);
//!
//! let mut graph = Graph::new();
//! graph.add_node(n1.clone());
//! graph.add_node(n2.clone());
//! graph.add_edge(&n1, &n2)?;
//!
//! let path = DfsAlgorithm::new(&graph).invoke_algorithm(&n1, &n2)?;
//! assert_eq!(path.map(|p| p.cost()), Some(10));
//!
//! let finder = PathFinder::new(&graph, [&n1, &n2], [&n1, &n2])?;
//! assert_eq!(finder.find_min_path().map(|p| p.len()), Some(1));
//! # Ok::<(), pathgraph::GraphError>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `tracing`: emit `tracing` events from searches
//! - `parallel`: adds `PathFinder::find_min_path_par`, backed by rayon

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    Color, DfsAlgorithm, Graph, GraphDescription, Insertion, NodeCountingPath, NodeIndex,
    PathFinder, TraversalMarks, WeightedNode,
};
