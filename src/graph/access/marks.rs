//! Per-traversal node scratch state.
//!
//! A search needs to color nodes and count back edges, but that state belongs
//! to the search, not to the nodes: keeping it here, indexed by
//! [`NodeIndex`], means the graph itself is only ever read during a
//! traversal and several traversals over one graph never see each other's
//! marks.

use crate::graph::basic::NodeIndex;
use crate::graph::weighted::Color;

/// Color and back-edge count for every node of one graph.
#[derive(Debug, Clone)]
pub struct TraversalMarks {
    colors: Vec<Color>,
    back_edges: Vec<usize>,
}

impl TraversalMarks {
    /// Creates marks for `len` nodes, all unvisited with no back edges.
    pub fn new(len: usize) -> Self {
        Self {
            colors: vec![Color::Unvisited; len],
            back_edges: vec![0; len],
        }
    }

    /// Number of nodes covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no nodes are covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors every node unvisited and zeroes every back-edge counter.
    pub fn clear(&mut self) {
        self.colors.fill(Color::Unvisited);
        self.back_edges.fill(0);
    }

    /// Returns `true` if every node is unvisited with no back edges.
    pub fn is_clear(&self) -> bool {
        self.colors.iter().all(|c| *c == Color::Unvisited)
            && self.back_edges.iter().all(|b| *b == 0)
    }

    /// Current color of `idx`, or `None` if out of range.
    #[inline]
    pub fn color(&self, idx: NodeIndex) -> Option<Color> {
        self.colors.get(idx.index()).copied()
    }

    /// Back edges counted so far at `idx`, or `None` if out of range.
    #[inline]
    pub fn back_edges(&self, idx: NodeIndex) -> Option<usize> {
        self.back_edges.get(idx.index()).copied()
    }

    /// Returns `true` if `idx` has been entered during the current search.
    #[inline]
    pub(crate) fn is_entered(&self, idx: NodeIndex) -> bool {
        self.colors[idx.index()] != Color::Unvisited
    }

    #[inline]
    pub(crate) fn set_color(&mut self, idx: NodeIndex, color: Color) {
        self.colors[idx.index()] = color;
    }

    #[inline]
    pub(crate) fn add_back_edge(&mut self, idx: NodeIndex) {
        self.back_edges[idx.index()] += 1;
    }
}
