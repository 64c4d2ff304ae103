//! Node labels and graph directionality.

use std::fmt::Debug;
use std::hash::Hash;

/// Capability set required of a node label.
///
/// Labels are keys: they need equality and a stable hash. `Clone` lets the
/// same label sit in both endpoints' adjacency sets, and `Debug` is used when
/// a label shows up in an error message or a log record.
pub trait Label: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Label for T {}

/// Whether edges are ordered pairs or unordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directionality {
    /// Edge `{x, y}` is the same as `{y, x}`.
    Undirected,
    /// Edge `(u, v)` is distinct from `(v, u)`.
    Directed,
}

impl Directionality {
    /// Return a human-readable name for this directionality.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::Directed => "directed",
        }
    }

    /// True for [`Directionality::Directed`].
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }
}
