//! Minimum-cost search between two node sets.
//!
//! Every (start, end) pair gets its own depth-first search; the cheapest path
//! any of them finds wins. This is not a shortest-path algorithm: each pair
//! contributes whatever path DFS order produces, and the minimum is taken
//! over those candidates only.

use crate::error::Result;
use crate::graph::basic::{Graph, NodeIndex};
use crate::graph::weighted::{NodeCountingPath, WeightedNode};

use super::DfsAlgorithm;

/// Finds the cheapest DFS path from any start node to any end node.
///
/// Start and end nodes keep the order they were supplied in, with repeats
/// dropped. Pairs are tried start-major, and on equal cost the first pair
/// tried wins, so results are reproducible.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(s + e)\) | Resolves every node to its index |
/// | `find_min_path` | \(O(s \cdot e \cdot (n + m \log d))\) | One full DFS per pair |
#[derive(Debug, Clone)]
pub struct PathFinder<'g> {
    graph: &'g Graph<WeightedNode>,
    starts: Vec<NodeIndex>,
    ends: Vec<NodeIndex>,
}

impl<'g> PathFinder<'g> {
    /// Creates a finder over `graph` between `start_nodes` and `end_nodes`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`](crate::GraphError::UnknownNode) if
    /// any node in either set is not in the graph.
    pub fn new<'n>(
        graph: &'g Graph<WeightedNode>,
        start_nodes: impl IntoIterator<Item = &'n WeightedNode>,
        end_nodes: impl IntoIterator<Item = &'n WeightedNode>,
    ) -> Result<Self> {
        Ok(Self {
            graph,
            starts: resolve(graph, start_nodes)?,
            ends: resolve(graph, end_nodes)?,
        })
    }

    /// Start nodes in search order.
    pub fn start_nodes(&self) -> impl ExactSizeIterator<Item = &'g WeightedNode> + '_ {
        let graph = self.graph;
        self.starts.iter().map(move |&i| graph.node(i))
    }

    /// End nodes in search order.
    pub fn end_nodes(&self) -> impl ExactSizeIterator<Item = &'g WeightedNode> + '_ {
        let graph = self.graph;
        self.ends.iter().map(move |&i| graph.node(i))
    }

    /// Returns the cheapest path found over all (start, end) pairs, or
    /// `None` if either set is empty or no pair is connected.
    pub fn find_min_path(&self) -> Option<NodeCountingPath> {
        // Every search clears its marks and trail before starting, so one
        // instance serves all pairs without carrying state between them.
        let mut dfs = DfsAlgorithm::new(self.graph);
        let mut best: Option<NodeCountingPath> = None;

        for (start, end) in self.pairs() {
            let Some(path) = dfs.find_path(start, end) else {
                continue;
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                start = %self.graph.node(start),
                end = %self.graph.node(end),
                cost = path.cost(),
                "candidate path"
            );

            if best.as_ref().map_or(true, |b| path.cost() < b.cost()) {
                best = Some(path);
            }
        }

        #[cfg(feature = "tracing")]
        match &best {
            Some(path) => tracing::debug!(%path, "minimum path"),
            None => tracing::debug!("no path between start and end sets"),
        }

        best
    }

    /// Parallel [`find_min_path`](Self::find_min_path).
    ///
    /// Each pair runs on the rayon pool with its own [`DfsAlgorithm`]. The
    /// result is identical to the sequential search, including the
    /// tie-break on equal cost.
    #[cfg(feature = "parallel")]
    pub fn find_min_path_par(&self) -> Option<NodeCountingPath> {
        use rayon::prelude::*;

        let pairs: Vec<(NodeIndex, NodeIndex)> = self.pairs().collect();
        pairs
            .par_iter()
            .enumerate()
            .filter_map(|(order, &(start, end))| {
                DfsAlgorithm::new(self.graph)
                    .find_path(start, end)
                    .map(|path| (order, path))
            })
            .min_by_key(|(order, path)| (path.cost(), *order))
            .map(|(_, path)| path)
    }

    fn pairs(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.starts
            .iter()
            .flat_map(move |&s| self.ends.iter().map(move |&e| (s, e)))
    }
}

/// Resolves nodes to indices, dropping repeats but keeping first-seen order.
fn resolve<'n>(
    graph: &Graph<WeightedNode>,
    nodes: impl IntoIterator<Item = &'n WeightedNode>,
) -> Result<Vec<NodeIndex>> {
    let mut out: Vec<NodeIndex> = Vec::new();
    for node in nodes {
        let idx = graph.require(node)?;
        if !out.contains(&idx) {
            out.push(idx);
        }
    }
    Ok(out)
}
