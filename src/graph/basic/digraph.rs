//! A generic directed graph keyed by node value.
//!
//! Nodes are stored once, in insertion order, and addressed internally by a
//! dense [`NodeIndex`]. Adjacency is a child list per node holding indices, so
//! traversals can keep their scratch state in flat vectors instead of
//! hashing nodes on every step.
//!
//! The graph only grows: there is no node or edge removal, which keeps every
//! `NodeIndex` handed out valid for the lifetime of the graph.

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

#[cfg(debug_assertions)]
use super::invariants::{all_distinct, rep_invariant};
use crate::error::{GraphError, Result};

/// Dense index of a node, assigned in insertion order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Returns the position of the node in insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of an insertion that may find its target already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The node or edge was not present and has been added.
    Added,
    /// The node or edge was already present; the graph is unchanged.
    AlreadyPresent,
}

impl Insertion {
    /// Returns `true` for [`Insertion::Added`].
    #[inline]
    pub fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// A directed graph over an arbitrary node type.
///
/// At most one edge exists per direction between two nodes; `a -> b` and
/// `b -> a` are independent. Self loops are allowed.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | One hash insert plus two pushes |
/// | `add_edge` | \(O(\text{out-degree})\) | Checks for an existing edge first |
/// | `contains` | \(O(1)\) | Hash lookup |
/// | `children` | \(O(1)\) | Iterates the stored child list |
#[derive(Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, NodeIndex>,
    children: Vec<Vec<NodeIndex>>,
    edge_count: usize,
}

impl<N> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            children: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            children: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node in insertion order.
    pub fn nodes(&self) -> core::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Returns the node stored at `idx`, if any.
    #[inline]
    pub fn node_at(&self, idx: NodeIndex) -> Option<&N> {
        self.nodes.get(idx.0)
    }

    /// Child indices of `idx`, in edge insertion order.
    #[inline]
    pub(crate) fn child_indices(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.children.get(idx.0).map_or(&[], Vec::as_slice)
    }

    /// Node at an index this graph handed out.
    #[inline]
    pub(crate) fn node(&self, idx: NodeIndex) -> &N {
        &self.nodes[idx.0]
    }

    /// Iterates over all indices in insertion order.
    pub(crate) fn indices(&self) -> impl ExactSizeIterator<Item = NodeIndex> {
        (0..self.nodes.len()).map(NodeIndex)
    }

    /// Checks the representation invariants (debug builds only).
    ///
    /// 1. `nodes`, `children` and `index` describe the same node set
    /// 2. every child index points at an existing node
    /// 3. no child list holds the same child twice
    /// 4. the cached edge count matches the child lists
    #[cfg(all(test, debug_assertions))]
    pub(crate) fn check_rep(&self) {
        let mut edges = 0usize;
        for idx in self.indices() {
            self.check_rep_at(idx);
            edges += self.child_indices(idx).len();
        }
        rep_invariant(edges == self.edge_count, "cached edge count is stale");
    }

    /// Checks invariants 1-3 for the child list of `idx` only, which keeps
    /// the per-mutation cost proportional to the out-degree.
    #[cfg(debug_assertions)]
    fn check_rep_at(&self, idx: NodeIndex) {
        let n = self.nodes.len();
        rep_invariant(self.children.len() == n, "one child list per node");
        rep_invariant(self.index.len() == n, "one index entry per node");

        let list = self.child_indices(idx);
        rep_invariant(list.iter().all(|c| c.0 < n), "child index out of bounds");
        rep_invariant(all_distinct(list), "duplicate edge in child list");
    }
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Adds `node` with no edges, unless an equal node is already present.
    pub fn add_node(&mut self, node: N) -> Insertion {
        if self.index.contains_key(&node) {
            return Insertion::AlreadyPresent;
        }

        let idx = NodeIndex(self.nodes.len());
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.children.push(Vec::new());

        #[cfg(debug_assertions)]
        self.check_rep_at(idx);

        Insertion::Added
    }

    /// Returns `true` if `node` is a member of the graph.
    #[inline]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the index assigned to `node`, if it is a member.
    #[inline]
    pub fn index_of(&self, node: &N) -> Option<NodeIndex> {
        self.index.get(node).copied()
    }

    /// Iterates over the children of `node`, or returns `None` if `node` is
    /// not a member.
    pub fn children(&self, node: &N) -> Option<Children<'_, N>> {
        let idx = self.index_of(node)?;
        Some(Children {
            nodes: &self.nodes,
            inner: self.child_indices(idx).iter(),
        })
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(f), Some(t)) => self.child_indices(f).contains(&t),
            _ => false,
        }
    }
}

impl<N: Eq + Hash + Clone + fmt::Debug> Graph<N> {
    /// Adds the directed edge `from -> to`.
    ///
    /// Both endpoints must already be members; nodes are never created
    /// implicitly.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] if either endpoint is missing.
    pub fn add_edge(&mut self, from: &N, to: &N) -> Result<Insertion> {
        let f = self.require(from)?;
        let t = self.require(to)?;

        let list = &mut self.children[f.0];
        if list.contains(&t) {
            return Ok(Insertion::AlreadyPresent);
        }
        list.push(t);
        self.edge_count += 1;

        #[cfg(debug_assertions)]
        self.check_rep_at(f);

        Ok(Insertion::Added)
    }

    /// Resolves `node` to its index, failing if it is not a member.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] if `node` is missing.
    pub fn require(&self, node: &N) -> Result<NodeIndex> {
        self.index_of(node).ok_or_else(|| GraphError::unknown_node(node))
    }
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: fmt::Debug> fmt::Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (node, list) in self.nodes.iter().zip(&self.children) {
            let kids: Vec<&N> = list.iter().map(|c| &self.nodes[c.0]).collect();
            map.entry(node, &kids);
        }
        map.finish()
    }
}

/// Iterator over the children of one node, in edge insertion order.
pub struct Children<'a, N> {
    nodes: &'a [N],
    inner: core::slice::Iter<'a, NodeIndex>,
}

impl<'a, N> Iterator for Children<'a, N> {
    type Item = &'a N;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|c| &self.nodes[c.0])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N> ExactSizeIterator for Children<'_, N> {}
