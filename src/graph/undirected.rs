//! Undirected graph over arbitrary hashable labels.

use std::fmt;

use crate::types::{Directionality, GraphResult, Label};

use super::adjacency::AdjacencyMap;
use super::views::{Adjacent, Edges, Nodes};

/// An undirected graph. Edge `{x, y}` is the same edge as `{y, x}`.
///
/// ```
/// use labeled_graph::UndirectedGraph;
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_edge("Red", "Blue");
/// graph.add_edge("Blue", "Green");
/// assert!(graph.edges().contains(&"Red", &"Blue"));
/// assert!(graph.edges().contains(&"Blue", &"Red"));
/// assert!(!graph.edges().contains(&"Red", &"Green"));
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<L> {
    adjacency: AdjacencyMap<L>,
}

impl<L: Label> UndirectedGraph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: AdjacencyMap::new(Directionality::Undirected),
        }
    }

    /// Create a new empty graph with room for `nodes` labels.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: AdjacencyMap::with_capacity(Directionality::Undirected, nodes),
        }
    }

    /// Always [`Directionality::Undirected`].
    pub fn directionality(&self) -> Directionality {
        Directionality::Undirected
    }

    /// Add a node. If the node already exists, nothing is done.
    pub fn add_node(&mut self, label: L) {
        self.adjacency.insert_node(label);
    }

    /// Remove a node and every edge incident to it.
    ///
    /// Average case O(degree). Fails with a does-not-exist error if the node
    /// is absent, leaving the graph untouched.
    pub fn remove_node(&mut self, label: &L) -> GraphResult<()> {
        self.adjacency.remove_node(label)
    }

    /// Add the edge `{u, v}`, creating either endpoint if missing.
    ///
    /// Self-loops are allowed. If the edge already exists, nothing is done.
    pub fn add_edge(&mut self, u: L, v: L) {
        self.adjacency.insert_edge(u, v);
    }

    /// Remove the edge `{u, v}`. Either orientation names the same edge.
    pub fn remove_edge(&mut self, u: &L, v: &L) -> GraphResult<()> {
        self.adjacency.remove_edge(u, v)
    }

    /// The neighbors of a node.
    pub fn neighbors(&self, label: &L) -> GraphResult<Adjacent<'_, L>> {
        self.adjacency.successors(label).map(Adjacent::new)
    }

    /// Some node of the graph. Which one is unspecified.
    pub fn arbitrary_node(&self) -> GraphResult<&L> {
        self.adjacency.arbitrary_node()
    }

    /// A view into the graph's nodes.
    pub fn nodes(&self) -> Nodes<'_, L> {
        Nodes::new(&self.adjacency)
    }

    /// A view into the graph's edges.
    pub fn edges(&self) -> Edges<'_, L> {
        Edges::new(&self.adjacency)
    }

    pub fn has_node(&self, label: &L) -> bool {
        self.adjacency.contains_node(label)
    }

    pub fn has_edge(&self, u: &L, v: &L) -> bool {
        self.adjacency.contains_edge(u, v)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }
}

impl<L: Label> Default for UndirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> PartialEq for UndirectedGraph<L> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<L: Label> Eq for UndirectedGraph<L> {}

impl<L: Label> Extend<(L, L)> for UndirectedGraph<L> {
    fn extend<I: IntoIterator<Item = (L, L)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }
}

impl<L: Label> FromIterator<(L, L)> for UndirectedGraph<L> {
    fn from_iter<I: IntoIterator<Item = (L, L)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

impl<L: Label> fmt::Display for UndirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UndirectedGraph with {} nodes and {} edges",
            self.node_count(),
            self.edge_count()
        )
    }
}
