//! Shared data types for the labeled-graph library.

pub mod error;
pub mod label;

pub use error::{ErrorKind, GraphError, GraphResult};
pub use label::{Directionality, Label};

/// Maximum number of nodes rendered by the node view's `Display`.
pub const MAX_NODES_DISPLAYED: usize = 20;

/// Maximum number of edges rendered by the edge view's `Display`.
pub const MAX_EDGES_DISPLAYED: usize = 10;
