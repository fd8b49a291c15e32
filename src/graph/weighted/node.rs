//! Weighted, named graph vertices and their traversal colors.

use core::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::graph::basic::Graph;

/// A graph vertex carrying a name and a weight.
///
/// The weight doubles as the node's cost when it appears on a
/// [`NodeCountingPath`](super::NodeCountingPath) and as its priority when a
/// depth-first search picks which child to descend into next.
///
/// Equality and hashing cover exactly `name` and `weight`. Traversal scratch
/// state (color, back-edge count) lives in
/// [`TraversalMarks`](crate::graph::access::TraversalMarks) rather than on the
/// node, so a node stays a stable map key no matter how many searches run
/// over it. Cloning is cheap: the name is shared.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedNode {
    name: Arc<str>,
    weight: i64,
}

impl WeightedNode {
    /// Creates a node.
    pub fn new(name: impl Into<Arc<str>>, weight: i64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// The node's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's weight.
    #[inline]
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

impl fmt::Debug for WeightedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.weight)
    }
}

impl fmt::Display for WeightedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Depth-first search progress of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not entered during the current search.
    #[default]
    Unvisited,
    /// Entered; the search has not yet backtracked out of it.
    InProgress,
    /// Every child has been explored and the search has backtracked.
    Finished,
}

impl Graph<WeightedNode> {
    /// Finds a member node by name.
    ///
    /// Names are not required to be unique; the earliest inserted match wins.
    pub fn node_named(&self, name: &str) -> Option<&WeightedNode> {
        self.nodes().find(|n| n.name() == name)
    }
}
