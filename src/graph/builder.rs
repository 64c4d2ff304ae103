//! Fluent API for building graph instances.

use crate::types::Label;

use super::{DirectedGraph, UndirectedGraph};

/// Fluent builder for constructing either graph variant.
///
/// Nodes are inserted before edges, so `build_*` applies the same upsert
/// rules as calling `add_node`/`add_edge` by hand.
#[derive(Debug, Clone)]
pub struct GraphBuilder<L> {
    nodes: Vec<L>,
    edges: Vec<(L, L)>,
}

impl<L: Label> GraphBuilder<L> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node (kept even if no edge touches it).
    pub fn node(mut self, label: L) -> Self {
        self.nodes.push(label);
        self
    }

    /// Add an edge between two labels.
    pub fn edge(mut self, u: L, v: L) -> Self {
        self.edges.push((u, v));
        self
    }

    /// Add every pair as an edge.
    pub fn edges<I: IntoIterator<Item = (L, L)>>(mut self, edges: I) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Build an undirected graph.
    pub fn build_undirected(self) -> UndirectedGraph<L> {
        let mut graph = UndirectedGraph::with_capacity(self.nodes.len());
        for label in self.nodes {
            graph.add_node(label);
        }
        graph.extend(self.edges);
        graph
    }

    /// Build a directed graph; each pair is read as `(source, target)`.
    pub fn build_directed(self) -> DirectedGraph<L> {
        let mut graph = DirectedGraph::with_capacity(self.nodes.len());
        for label in self.nodes {
            graph.add_node(label);
        }
        graph.extend(self.edges);
        graph
    }
}

impl<L: Label> Default for GraphBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
