//! Property tests for the DFS and path finder, cross-checked against petgraph.

use pathgraph::{Color, DfsAlgorithm, Graph, NodeCountingPath, PathFinder, WeightedNode};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex as PgIndex};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Shape {
    weights: Vec<i64>,
    edges: Vec<(usize, usize)>,
}

fn graph_shape() -> impl Strategy<Value = Shape> {
    (1usize..12).prop_flat_map(|n| {
        (
            proptest::collection::vec(-5i64..20, n),
            proptest::collection::vec((0..n, 0..n), 0..n * 3),
        )
            .prop_map(|(weights, edges)| Shape { weights, edges })
    })
}

fn build(shape: &Shape) -> (Graph<WeightedNode>, Vec<WeightedNode>, DiGraph<(), ()>) {
    let nodes: Vec<_> = shape
        .weights
        .iter()
        .enumerate()
        .map(|(i, w)| WeightedNode::new(format!("v{i}"), *w))
        .collect();

    let mut graph = Graph::new();
    let mut reference = DiGraph::new();
    for n in &nodes {
        graph.add_node(n.clone());
        reference.add_node(());
    }
    for &(a, b) in &shape.edges {
        graph.add_edge(&nodes[a], &nodes[b]).unwrap();
        reference.update_edge(PgIndex::new(a), PgIndex::new(b), ());
    }
    (graph, nodes, reference)
}

fn weight_sum(path: &NodeCountingPath) -> i64 {
    path.iter().map(WeightedNode::weight).sum()
}

proptest! {
    #[test]
    fn dfs_agrees_with_reachability(shape in graph_shape(), s in 0usize..12, e in 0usize..12) {
        let (graph, nodes, reference) = build(&shape);
        let s = s % nodes.len();
        let e = e % nodes.len();

        let mut dfs = DfsAlgorithm::new(&graph);
        let path = dfs.invoke_algorithm(&nodes[s], &nodes[e]).unwrap();
        let reachable = has_path_connecting(&reference, PgIndex::new(s), PgIndex::new(e), None);

        prop_assert_eq!(path.is_some(), reachable);
        if let Some(path) = path {
            prop_assert_eq!(path.first(), &nodes[s]);
            prop_assert_eq!(path.last(), &nodes[e]);
            prop_assert_eq!(path.cost(), weight_sum(&path));
        }
        prop_assert!(dfs.marks().is_clear());
    }

    #[test]
    fn traversal_enters_each_reachable_node_once(shape in graph_shape(), s in 0usize..12) {
        let (graph, nodes, reference) = build(&shape);
        let s = s % nodes.len();

        let trail = DfsAlgorithm::new(&graph).traverse_from(&nodes[s]).unwrap();
        let reachable: Vec<_> = (0..nodes.len())
            .filter(|&i| has_path_connecting(&reference, PgIndex::new(s), PgIndex::new(i), None))
            .collect();

        prop_assert_eq!(trail.len(), reachable.len());
        for i in reachable {
            prop_assert_eq!(trail.iter().filter(|n| **n == nodes[i]).count(), 1);
        }
    }

    #[test]
    fn run_leaves_consistent_marks(shape in graph_shape(), s in 0usize..12) {
        let (graph, nodes, _) = build(&shape);
        let s = s % nodes.len();

        let mut dfs = DfsAlgorithm::new(&graph);
        prop_assert!(!dfs.run(&nodes[s], None).unwrap());

        // A full traversal finishes every node it entered.
        let trail = dfs.trail().unwrap().clone();
        for n in &nodes {
            let expected = if trail.contains(n) { Color::Finished } else { Color::Unvisited };
            prop_assert_eq!(dfs.color(n), Some(expected));
        }

        // Every edge out of an entered node was either descended or counted.
        let entered = trail.len();
        let out_edges: usize = trail.iter().map(|n| graph.children(n).unwrap().len()).sum();
        let back_edges: usize = nodes.iter().map(|n| dfs.back_edges(n).unwrap()).sum();
        prop_assert_eq!(out_edges, back_edges + entered - 1);
    }

    #[test]
    fn min_path_is_cheapest_pairwise_result(
        shape in graph_shape(),
        starts in proptest::collection::vec(0usize..12, 0..4),
        ends in proptest::collection::vec(0usize..12, 0..4),
    ) {
        let (graph, nodes, _) = build(&shape);
        let pick = |ix: &[usize]| {
            ix.iter().map(|i| nodes[i % nodes.len()].clone()).collect::<Vec<_>>()
        };
        let (starts, ends) = (pick(&starts), pick(&ends));

        let best = PathFinder::new(&graph, &starts, &ends).unwrap().find_min_path();

        let mut dfs = DfsAlgorithm::new(&graph);
        let candidates: Vec<_> = starts
            .iter()
            .flat_map(|s| ends.iter().map(move |e| (s, e)))
            .filter_map(|(s, e)| dfs.invoke_algorithm(s, e).unwrap())
            .collect();

        match best {
            None => prop_assert!(candidates.is_empty()),
            Some(best) => {
                prop_assert!(candidates.iter().all(|c| best.cost() <= c.cost()));
                prop_assert!(starts.contains(best.first()));
                prop_assert!(ends.contains(best.last()));
            }
        }
    }

    #[test]
    fn extend_appends_and_adds_weight(weights in proptest::collection::vec(-100i64..100, 1..20)) {
        let nodes: Vec<_> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| WeightedNode::new(i.to_string(), *w))
            .collect();
        let mut path = NodeCountingPath::new(nodes[0].clone());
        for n in &nodes[1..] {
            let before: Vec<_> = path.iter().cloned().collect();
            let next = path.extend(n.clone());
            prop_assert_eq!(next.cost(), path.cost() + n.weight());
            let mut expected = before;
            expected.push(n.clone());
            prop_assert_eq!(next.iter().cloned().collect::<Vec<_>>(), expected);
            path = next;
        }
        prop_assert_eq!(path.len(), weights.len());
    }
}
