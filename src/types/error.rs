//! Error types for the labeled-graph library.

use thiserror::Error;

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The operation referenced a node or edge absent from the graph.
    DoesNotExist,
}

/// All errors that can occur in the labeled-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node not found by label.
    #[error("The node {0} does not exist")]
    NodeDoesNotExist(String),

    /// Edge not found between two labels.
    #[error("The edge ({0}, {1}) does not exist")]
    EdgeDoesNotExist(String, String),

    /// The graph has no nodes.
    #[error("The graph is empty")]
    EmptyGraph,
}

impl GraphError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeDoesNotExist(_) | Self::EdgeDoesNotExist(_, _) | Self::EmptyGraph => {
                ErrorKind::DoesNotExist
            }
        }
    }

    /// True when the operation referenced something missing from the graph.
    pub fn is_does_not_exist(&self) -> bool {
        self.kind() == ErrorKind::DoesNotExist
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
