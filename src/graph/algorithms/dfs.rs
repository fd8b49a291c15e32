//! Colored depth-first search over weighted graphs.
//!
//! The search enters a node, appends it to the running trail, colors it
//! [`Color::InProgress`] and then descends into its children heaviest first.
//! A child that was already entered during this search is not re-entered;
//! instead the parent's back-edge counter is bumped. Once every child has been
//! handled the node turns [`Color::Finished`] and the search backtracks.
//!
//! The returned path is the trail of every node entered, in entry order, up to
//! and including the target. It is the order the search discovered nodes in,
//! so dead-end branches explored before the target are part of it.
//!
//! Traversal uses an explicit frame stack, so search depth is bounded by heap
//! memory rather than the call stack.

use core::cmp::Reverse;

use crate::error::Result;
use crate::graph::access::TraversalMarks;
use crate::graph::basic::{Graph, NodeIndex};
use crate::graph::weighted::{Color, NodeCountingPath, WeightedNode};

/// One node on the current search path and how far through its children the
/// search has got.
struct Frame {
    node: NodeIndex,
    children: Vec<NodeIndex>,
    next: usize,
}

/// Depth-first search from a start node toward an optional target.
///
/// Each instance owns its [`TraversalMarks`], so any number of instances can
/// search the same graph. Marks are cleared before every run; the
/// `invoke_algorithm` and `traverse_from` entry points clear them again
/// afterwards, while [`run`](Self::run) leaves them for inspection.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `run` | \(O(n + m \log d)\) | Each node entered once; children sorted per node |
/// | `reset` | \(O(n)\) | Rewrites every mark |
pub struct DfsAlgorithm<'g> {
    graph: &'g Graph<WeightedNode>,
    marks: TraversalMarks,
    stack: Vec<Frame>,
    trail: Option<NodeCountingPath>,
}

impl<'g> DfsAlgorithm<'g> {
    /// Creates a search over `graph`.
    pub fn new(graph: &'g Graph<WeightedNode>) -> Self {
        Self {
            graph,
            marks: TraversalMarks::new(graph.node_count()),
            stack: Vec::new(),
            trail: None,
        }
    }

    /// The graph being searched.
    #[inline]
    pub fn graph(&self) -> &'g Graph<WeightedNode> {
        self.graph
    }

    /// Finds a path from `start` to `end` in DFS order.
    ///
    /// Returns `Ok(None)` if `end` is not reachable from `start`. All marks
    /// are clear again when this returns, including on error.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`](crate::GraphError::UnknownNode) if
    /// either node is not in the graph.
    pub fn invoke_algorithm(
        &mut self,
        start: &WeightedNode,
        end: &WeightedNode,
    ) -> Result<Option<NodeCountingPath>> {
        self.reset();
        let s = self.graph.require(start)?;
        let e = self.graph.require(end)?;
        Ok(self.find_path(s, e))
    }

    /// Walks the whole component reachable from `start`.
    ///
    /// The returned path lists every reachable node in the order the search
    /// entered it. All marks are clear again when this returns, including on
    /// error.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`](crate::GraphError::UnknownNode) if
    /// `start` is not in the graph.
    pub fn traverse_from(&mut self, start: &WeightedNode) -> Result<NodeCountingPath> {
        self.reset();
        let s = self.graph.require(start)?;
        self.search(s, None);
        let trail = self
            .trail
            .take()
            .unwrap_or_else(|| NodeCountingPath::new(start.clone()));
        self.reset();
        Ok(trail)
    }

    /// Runs the search and reports whether `end` was reached.
    ///
    /// With `end == None` the search covers the whole reachable component and
    /// always returns `false`. Colors, back-edge counts and the trail are left
    /// as the search produced them until [`reset`](Self::reset) or the next
    /// run.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`](crate::GraphError::UnknownNode) if
    /// `start` or `end` is not in the graph.
    pub fn run(&mut self, start: &WeightedNode, end: Option<&WeightedNode>) -> Result<bool> {
        let s = self.graph.require(start)?;
        let e = end.map(|n| self.graph.require(n)).transpose()?;
        Ok(self.search(s, e))
    }

    /// Clears every mark and forgets the trail.
    pub fn reset(&mut self) {
        self.marks.clear();
        self.stack.clear();
        self.trail = None;
    }

    /// Color of `node` as left by the last run, or `None` for non-members.
    pub fn color(&self, node: &WeightedNode) -> Option<Color> {
        self.marks.color(self.graph.index_of(node)?)
    }

    /// Back edges counted at `node` by the last run, or `None` for
    /// non-members.
    pub fn back_edges(&self, node: &WeightedNode) -> Option<usize> {
        self.marks.back_edges(self.graph.index_of(node)?)
    }

    /// All marks as left by the last run.
    #[inline]
    pub fn marks(&self) -> &TraversalMarks {
        &self.marks
    }

    /// Trail of the last [`run`](Self::run), if one is pending.
    #[inline]
    pub fn trail(&self) -> Option<&NodeCountingPath> {
        self.trail.as_ref()
    }

    /// Index-level `invoke_algorithm` for callers that already resolved
    /// membership.
    pub(crate) fn find_path(
        &mut self,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Option<NodeCountingPath> {
        let found = self.search(start, Some(end));
        let path = if found { self.trail.take() } else { None };
        self.reset();
        path
    }

    fn search(&mut self, start: NodeIndex, end: Option<NodeIndex>) -> bool {
        self.reset();

        if self.enter(start, end) {
            return true;
        }

        while let Some(frame) = self.stack.last_mut() {
            let parent = frame.node;
            match frame.children.get(frame.next).copied() {
                Some(child) => {
                    frame.next += 1;
                    if self.marks.is_entered(child) {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(
                            from = %self.graph.node(parent),
                            to = %self.graph.node(child),
                            "back edge"
                        );
                        self.marks.add_back_edge(parent);
                    } else if self.enter(child, end) {
                        return true;
                    }
                }
                None => {
                    self.marks.set_color(parent, Color::Finished);
                    self.stack.pop();
                }
            }
        }

        false
    }

    /// Enters `node`: extends the trail, colors it in-progress and, unless it
    /// is the target, pushes its frame. Returns `true` on reaching the target.
    fn enter(&mut self, node: NodeIndex, end: Option<NodeIndex>) -> bool {
        let weighted = self.graph.node(node).clone();

        #[cfg(feature = "tracing")]
        tracing::trace!(node = %weighted, weight = weighted.weight(), "enter");

        self.trail = Some(match self.trail.take() {
            Some(trail) => trail.extend(weighted),
            None => NodeCountingPath::new(weighted),
        });
        self.marks.set_color(node, Color::InProgress);

        if end == Some(node) {
            #[cfg(feature = "tracing")]
            tracing::trace!(node = %self.graph.node(node), "target reached");
            return true;
        }

        let children = self.prioritized_children(node);
        self.stack.push(Frame {
            node,
            children,
            next: 0,
        });
        false
    }

    /// Children of `node`, heaviest first; equal weights keep graph insertion
    /// order.
    fn prioritized_children(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut children = self.graph.child_indices(node).to_vec();
        children.sort_unstable_by_key(|&c| (Reverse(self.graph.node(c).weight()), c));
        children
    }
}
