//! Directed graph over arbitrary hashable labels.

use std::fmt;

use crate::types::{Directionality, GraphResult, Label};

use super::adjacency::AdjacencyMap;
use super::views::{Adjacent, Edges, Nodes};

/// A directed graph. Edge `(u, v)` is distinct from `(v, u)`.
///
/// Every edge is recorded twice: `v` among the successors of `u`, and `u`
/// among the predecessors of `v`.
#[derive(Debug, Clone)]
pub struct DirectedGraph<L> {
    adjacency: AdjacencyMap<L>,
}

impl<L: Label> DirectedGraph<L> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: AdjacencyMap::new(Directionality::Directed),
        }
    }

    /// Create a new empty graph with room for `nodes` labels.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: AdjacencyMap::with_capacity(Directionality::Directed, nodes),
        }
    }

    /// Always [`Directionality::Directed`].
    pub fn directionality(&self) -> Directionality {
        Directionality::Directed
    }

    /// Add a node. If the node already exists, nothing is done.
    pub fn add_node(&mut self, label: L) {
        self.adjacency.insert_node(label);
    }

    /// Remove a node with all of its in-edges and out-edges.
    pub fn remove_node(&mut self, label: &L) -> GraphResult<()> {
        self.adjacency.remove_node(label)
    }

    /// Add the edge `u -> v`, creating either endpoint if missing.
    ///
    /// A self-loop puts `u` in both its own successor and predecessor sets.
    /// If the edge already exists, nothing is done.
    pub fn add_edge(&mut self, u: L, v: L) {
        self.adjacency.insert_edge(u, v);
    }

    /// Remove the edge `u -> v`. The reverse edge, if any, is left alone.
    pub fn remove_edge(&mut self, u: &L, v: &L) -> GraphResult<()> {
        self.adjacency.remove_edge(u, v)
    }

    /// Nodes reachable via one outgoing edge.
    pub fn successors(&self, label: &L) -> GraphResult<Adjacent<'_, L>> {
        self.adjacency.successors(label).map(Adjacent::new)
    }

    /// Nodes with one outgoing edge into this node.
    pub fn predecessors(&self, label: &L) -> GraphResult<Adjacent<'_, L>> {
        self.adjacency.predecessors(label).map(Adjacent::new)
    }

    /// Alias of [`DirectedGraph::successors`].
    pub fn neighbors(&self, label: &L) -> GraphResult<Adjacent<'_, L>> {
        self.successors(label)
    }

    /// Some node of the graph. Which one is unspecified.
    pub fn arbitrary_node(&self) -> GraphResult<&L> {
        self.adjacency.arbitrary_node()
    }

    pub fn nodes(&self) -> Nodes<'_, L> {
        Nodes::new(&self.adjacency)
    }

    /// A view into the graph's edges. Membership is order-sensitive.
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

impl<L: Label> Default for DirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> PartialEq for DirectedGraph<L> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<L: Label> Eq for DirectedGraph<L> {}

impl<L: Label> Extend<(L, L)> for DirectedGraph<L> {
    fn extend<I: IntoIterator<Item = (L, L)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }
}

impl<L: Label> FromIterator<(L, L)> for DirectedGraph<L> {
    fn from_iter<I: IntoIterator<Item = (L, L)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

impl<L: Label> fmt::Display for DirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DirectedGraph with {} nodes and {} edges",
            self.node_count(),
            self.edge_count()
        )
    }
}
