//! Serializable graph descriptions.
//!
//! A description names nodes once and refers to them by name in edges:
//!
//! ```json
//! {
//!   "nodes": [{ "name": "n1", "weight": 5 }, { "name": "n2", "weight": 5 }],
//!   "edges": [{ "from": "n1", "to": "n2" }]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::WeightedNode;
use crate::error::{GraphError, Result};
use crate::graph::basic::Graph;

/// A directed edge between two named nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescription {
    /// Name of the parent node.
    pub from: String,
    /// Name of the child node.
    pub to: String,
}

/// Nodes and edges of a weighted graph, keyed by node name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Declared nodes. Names must be unique.
    pub nodes: Vec<WeightedNode>,
    /// Declared edges. Repeats collapse into a single edge.
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

impl GraphDescription {
    /// Parses a description from JSON.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`] if `json` is not a valid description.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the description as JSON.
    ///
    /// # Errors
    /// Returns [`GraphError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Captures an existing graph, listing nodes and edges in insertion order.
    pub fn from_graph(graph: &Graph<WeightedNode>) -> Self {
        let nodes: Vec<WeightedNode> = graph.nodes().cloned().collect();
        let edges = graph
            .indices()
            .flat_map(|parent| {
                let from = graph.node(parent).name();
                graph.child_indices(parent).iter().map(move |&child| EdgeDescription {
                    from: from.to_owned(),
                    to: graph.node(child).name().to_owned(),
                })
            })
            .collect();
        Self { nodes, edges }
    }

    /// Builds the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`] if two nodes share a name and
    /// [`GraphError::UndefinedNode`] if an edge names an undeclared node.
    pub fn build(&self) -> Result<Graph<WeightedNode>> {
        let mut by_name: HashMap<&str, &WeightedNode> = HashMap::with_capacity(self.nodes.len());
        let mut graph = Graph::with_capacity(self.nodes.len());

        for node in &self.nodes {
            if by_name.insert(node.name(), node).is_some() {
                return Err(GraphError::DuplicateNode {
                    name: node.name().to_owned(),
                });
            }
            graph.add_node(node.clone());
        }

        let lookup = |name: &str| {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| GraphError::UndefinedNode {
                    name: name.to_owned(),
                })
        };
        for edge in &self.edges {
            let from = lookup(&edge.from)?;
            let to = lookup(&edge.to)?;
            graph.add_edge(from, to)?;
        }

        Ok(graph)
    }
}
