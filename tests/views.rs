//! View, rendering and construction tests.

use std::collections::HashSet;

use labeled_graph::{DirectedGraph, Directionality, GraphBuilder, UndirectedGraph};

// ==================== Iteration ====================

#[test]
fn test_undirected_edges_yielded_once() {
    let g: UndirectedGraph<u32> = [(1, 2), (2, 1), (2, 3), (3, 3), (4, 1)]
        .into_iter()
        .collect();

    let edges: Vec<(u32, u32)> = g.edges().iter().map(|(u, v)| (*u, *v)).collect();
    assert_eq!(edges.len(), 4);

    let unordered: HashSet<(u32, u32)> = edges
        .iter()
        .map(|&(u, v)| if u <= v { (u, v) } else { (v, u) })
        .collect();
    let expected: HashSet<(u32, u32)> = [(1, 2), (2, 3), (3, 3), (1, 4)].into_iter().collect();
    assert_eq!(unordered, expected);
}

#[test]
fn test_directed_edges_yield_ordered_pairs() {
    let g: DirectedGraph<u32> = [(1, 2), (2, 1), (3, 3)].into_iter().collect();

    let edges: HashSet<(u32, u32)> = g.edges().into_iter().map(|(u, v)| (*u, *v)).collect();
    let expected: HashSet<(u32, u32)> = [(1, 2), (2, 1), (3, 3)].into_iter().collect();
    assert_eq!(edges, expected);
}

#[test]
fn test_nodes_iter_is_exact_size() {
    let mut g = UndirectedGraph::new();
    for i in 0..5 {
        g.add_node(i);
    }
    let iter = g.nodes().iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(g.nodes().into_iter().count(), 5);
}

#[test]
fn test_empty_views() {
    let g: UndirectedGraph<u8> = UndirectedGraph::default();
    assert!(g.nodes().is_empty());
    assert!(g.edges().is_empty());
    assert_eq!(g.edges().iter().next(), None);
    assert!(!g.nodes().contains(&0));
    assert!(!g.edges().contains(&0, &1));
}

// ==================== Rendering ====================

#[test]
fn test_graph_display() {
    let mut u = UndirectedGraph::new();
    u.add_edge('a', 'b');
    u.add_node('c');
    assert_eq!(u.to_string(), "UndirectedGraph with 3 nodes and 1 edges");

    let d: DirectedGraph<char> = DirectedGraph::new();
    assert_eq!(d.to_string(), "DirectedGraph with 0 nodes and 0 edges");
}

#[test]
fn test_nodes_display() {
    let mut g = UndirectedGraph::new();
    g.add_node("Red");
    assert_eq!(g.nodes().to_string(), "<1 nodes: \"Red\">");

    let mut big = UndirectedGraph::new();
    for i in 0..25 {
        big.add_node(i);
    }
    let shown = big.nodes().to_string();
    assert!(shown.starts_with("<25 nodes: "));
    assert!(shown.ends_with("...>"));
    assert_eq!(shown.matches(", ").count(), 19);
}

#[test]
fn test_edges_display() {
    let mut g = DirectedGraph::new();
    g.add_edge(1, 2);
    assert_eq!(g.edges().to_string(), "<1 edges: (1, 2)>");

    let mut big = DirectedGraph::new();
    for i in 0..15 {
        big.add_edge(0, i + 1);
    }
    let shown = big.edges().to_string();
    assert!(shown.starts_with("<15 edges: "));
    assert!(shown.ends_with("...>"));
    assert_eq!(shown.matches('(').count(), 10);
}

#[test]
fn test_adjacent_display() {
    let mut g = UndirectedGraph::new();
    g.add_edge(1, 2);
    assert_eq!(g.neighbors(&1).unwrap().to_string(), "{2}");
}

// ==================== Construction ====================

#[test]
fn test_builder_undirected() {
    let g = GraphBuilder::new()
        .node("lonely")
        .edge("a", "b")
        .edges([("b", "c"), ("c", "a")])
        .build_undirected();

    assert_eq!(g.directionality(), Directionality::Undirected);
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 3);
    assert!(g.neighbors(&"lonely").unwrap().is_empty());
    assert!(g.has_edge(&"a", &"c"));
}

#[test]
fn test_builder_directed() {
    let g = GraphBuilder::new()
        .edge("a", "b")
        .edge("a", "b")
        .edge("b", "a")
        .build_directed();

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 2);
    assert!(g.predecessors(&"a").unwrap().contains(&"b"));
}

#[test]
fn test_extend_and_with_capacity() {
    let mut g = DirectedGraph::with_capacity(16);
    g.extend([(1, 2), (2, 3)]);
    g.extend([(1, 2)]);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.node_count(), 3);
}
