//! labeled-graph — undirected and directed graph data structures.
//!
//! Nodes are arbitrary hashable labels. Graphs are built by adding nodes and
//! edges, then queried for adjacency, membership and counts through read-only
//! views. Graph algorithms are left to callers.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    Adjacent, DirectedGraph, Edges, EdgesIter, GraphBuilder, Nodes, NodesIter, UndirectedGraph,
};
pub use types::{
    Directionality, ErrorKind, GraphError, GraphResult, Label, MAX_EDGES_DISPLAYED,
    MAX_NODES_DISPLAYED,
};
