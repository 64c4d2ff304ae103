//! In-memory graph operations — the core data structures.

mod adjacency;
pub mod builder;
pub mod directed;
pub mod undirected;
pub mod views;

pub use builder::GraphBuilder;
pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;
pub use views::{Adjacent, Edges, EdgesIter, Nodes, NodesIter};
