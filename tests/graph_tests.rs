//! End-to-end scenarios for graph construction, DFS and path finding.

use pathgraph::*;

fn node(name: &str, weight: i64) -> WeightedNode {
    WeightedNode::new(name, weight)
}

/// Builds a graph from `name weight` pairs and `from to` edges.
fn graph(nodes: &[(&str, i64)], edges: &[(&str, &str)]) -> anyhow::Result<Graph<WeightedNode>> {
    let desc = GraphDescription {
        nodes: nodes.iter().map(|(n, w)| node(n, *w)).collect(),
        edges: edges
            .iter()
            .map(|(a, b)| pathgraph::graph::EdgeDescription {
                from: (*a).into(),
                to: (*b).into(),
            })
            .collect(),
    };
    Ok(desc.build()?)
}

#[test]
fn test_add_new_and_existing_node() {
    let mut g = Graph::new();
    let n1 = node("n1", 5);
    assert_eq!(g.add_node(n1.clone()), Insertion::Added);
    assert_eq!(g.add_node(n1.clone()), Insertion::AlreadyPresent);
    assert_eq!(g.nodes().filter(|n| **n == n1).count(), 1);
}

#[test]
fn test_add_new_and_existing_edge() -> anyhow::Result<()> {
    let mut g = Graph::new();
    let (n1, n2) = (node("n1", 5), node("n2", 5));
    g.add_node(n1.clone());
    g.add_node(n2.clone());

    assert_eq!(g.add_edge(&n1, &n2)?, Insertion::Added);
    assert_eq!(g.add_edge(&n1, &n2)?, Insertion::AlreadyPresent);
    let children: Vec<_> = g.children(&n1).into_iter().flatten().collect();
    assert_eq!(children, vec![&n2]);
    Ok(())
}

#[test]
fn test_two_node_dfs() -> anyhow::Result<()> {
    let g = graph(&[("n1", 5), ("n2", 5)], &[("n1", "n2")])?;
    let (n1, n2) = (node("n1", 5), node("n2", 5));

    let path = DfsAlgorithm::new(&g).invoke_algorithm(&n1, &n2)?;
    let path = path.ok_or_else(|| anyhow::anyhow!("expected a path"))?;
    assert_eq!(path.names(), vec!["n1", "n2"]);
    assert_eq!(path.cost(), 10);
    Ok(())
}

#[test]
fn test_dfs_without_edge_finds_nothing() -> anyhow::Result<()> {
    let g = graph(&[("n1", 5), ("n2", 5)], &[])?;
    let path = DfsAlgorithm::new(&g).invoke_algorithm(&node("n1", 5), &node("n2", 5))?;
    assert!(path.is_none());
    Ok(())
}

#[test]
fn test_back_edge_count_before_reset() -> anyhow::Result<()> {
    let g = graph(
        &[("n1", 5), ("n2", 5), ("n3", 5)],
        &[("n1", "n2"), ("n2", "n3"), ("n2", "n1")],
    )?;
    let (n1, n2, n3) = (node("n1", 5), node("n2", 5), node("n3", 5));

    let mut dfs = DfsAlgorithm::new(&g);
    assert!(dfs.run(&n1, Some(&n3))?);
    assert_eq!(dfs.back_edges(&n2), Some(1));

    // The public entry point leaves nothing behind.
    let path = dfs.invoke_algorithm(&n1, &n3)?;
    assert!(path.is_some());
    assert!(g.nodes().all(|n| dfs.color(n) == Some(Color::Unvisited)));
    assert!(g.nodes().all(|n| dfs.back_edges(n) == Some(0)));
    Ok(())
}

#[test]
fn test_independent_searches_share_a_graph() -> anyhow::Result<()> {
    let g = graph(&[("a", 1), ("b", 2), ("c", 3)], &[("a", "b"), ("b", "c")])?;
    let (a, b, c) = (node("a", 1), node("b", 2), node("c", 3));

    let mut first = DfsAlgorithm::new(&g);
    let mut second = DfsAlgorithm::new(&g);
    assert!(first.run(&a, None).is_ok());
    assert!(second.run(&b, Some(&c))?);

    // Neither search sees the other's marks.
    assert_eq!(first.color(&a), Some(Color::Finished));
    assert_eq!(second.color(&a), Some(Color::Unvisited));
    assert_eq!(second.color(&c), Some(Color::InProgress));
    Ok(())
}

#[test]
fn test_find_path_trivial_when_sets_overlap() -> anyhow::Result<()> {
    let g = graph(&[("n1", 5), ("n2", 5)], &[("n1", "n2")])?;
    let (n1, n2) = (node("n1", 5), node("n2", 5));

    let finder = PathFinder::new(&g, [&n1, &n2], [&n1, &n2])?;
    let path = finder.find_min_path().ok_or_else(|| anyhow::anyhow!("expected a path"))?;
    assert_eq!(path.names(), vec!["n1"]);
    Ok(())
}

#[test]
fn test_find_path_with_empty_sets() -> anyhow::Result<()> {
    let g = graph(&[("n1", 5)], &[])?;
    let n1 = node("n1", 5);
    let empty: Vec<WeightedNode> = Vec::new();

    assert!(PathFinder::new(&g, &empty, [&n1])?.find_min_path().is_none());
    assert!(PathFinder::new(&g, [&n1], &empty)?.find_min_path().is_none());
    Ok(())
}

#[test]
fn test_find_path_prefers_cheaper_route() -> anyhow::Result<()> {
    // Two sources reach the sink; the light branch is cheaper overall even
    // though DFS from `hub` prefers the heavy child.
    let g = graph(
        &[("src", 1), ("hub", 1), ("heavy", 40), ("light", 3), ("sink", 2), ("alt", 1)],
        &[
            ("src", "hub"),
            ("hub", "heavy"),
            ("hub", "light"),
            ("heavy", "sink"),
            ("light", "sink"),
            ("alt", "light"),
        ],
    )?;
    let sink = node("sink", 2);

    let from_src = DfsAlgorithm::new(&g).invoke_algorithm(&node("src", 1), &sink)?;
    assert_eq!(
        from_src.map(|p| p.names().join(" ")),
        Some("src hub heavy sink".to_owned())
    );

    let finder = PathFinder::new(&g, [&node("src", 1), &node("alt", 1)], [&sink])?;
    let best = finder.find_min_path().ok_or_else(|| anyhow::anyhow!("expected a path"))?;
    assert_eq!(best.to_string(), "alt -> light -> sink (cost 6)");
    Ok(())
}

#[test]
fn test_whole_component_traversal_order() -> anyhow::Result<()> {
    let g = graph(
        &[("a", 0), ("b", 1), ("c", 7), ("d", 3), ("e", 3)],
        &[("a", "b"), ("a", "c"), ("c", "d"), ("c", "e"), ("d", "a"), ("b", "e")],
    )?;

    let trail = DfsAlgorithm::new(&g).traverse_from(&node("a", 0))?;
    assert_eq!(trail.names(), vec!["a", "c", "d", "e", "b"]);
    assert_eq!(trail.cost(), 14);
    Ok(())
}

#[test]
fn test_path_serializes_as_names_and_cost() -> anyhow::Result<()> {
    let g = graph(&[("x", 2), ("y", 3)], &[("x", "y")])?;
    let path = DfsAlgorithm::new(&g).traverse_from(&node("x", 2))?;
    let json = serde_json::to_value(&path)?;
    assert_eq!(json, serde_json::json!({ "nodes": ["x", "y"], "cost": 5 }));
    Ok(())
}
