//! Read-only views into a graph's nodes, edges and adjacency sets.
//!
//! Views borrow the graph, so the borrow checker rules out mutating the graph
//! while a view is alive. None of them expose mutation.

use std::collections::{hash_map, hash_set, HashSet};
use std::fmt;

use crate::types::{Label, MAX_EDGES_DISPLAYED, MAX_NODES_DISPLAYED};

use super::adjacency::AdjacencyMap;

/// A view into a graph's nodes.
#[derive(Debug)]
pub struct Nodes<'a, L> {
    adjacency: &'a AdjacencyMap<L>,
}

impl<L> Clone for Nodes<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Nodes<'_, L> {}

impl<'a, L: Label> Nodes<'a, L> {
    pub(crate) fn new(adjacency: &'a AdjacencyMap<L>) -> Self {
        Self { adjacency }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership query. Average case O(1).
    pub fn contains(&self, label: &L) -> bool {
        self.adjacency.contains_node(label)
    }

    /// Iterate over the node labels in no particular order.
    pub fn iter(&self) -> NodesIter<'a, L> {
        NodesIter {
            inner: self.adjacency.successor_map().keys(),
        }
    }
}

impl<'a, L: Label> IntoIterator for Nodes<'a, L> {
    type Item = &'a L;
    type IntoIter = NodesIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Label> fmt::Display for Nodes<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} nodes: ", self.len())?;
        for (i, label) in self.iter().take(MAX_NODES_DISPLAYED).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", label)?;
        }
        if self.len() > MAX_NODES_DISPLAYED {
            f.write_str("...")?;
        }
        f.write_str(">")
    }
}

/// Iterator over node labels.
#[derive(Debug, Clone)]
pub struct NodesIter<'a, L> {
    inner: hash_map::Keys<'a, L, HashSet<L>>,
}

impl<'a, L> Iterator for NodesIter<'a, L> {
    type Item = &'a L;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L> ExactSizeIterator for NodesIter<'_, L> {}

/// A view into a graph's edges.
#[derive(Debug)]
pub struct Edges<'a, L> {
    adjacency: &'a AdjacencyMap<L>,
}

impl<L> Clone for Edges<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Edges<'_, L> {}

impl<'a, L: Label> Edges<'a, L> {
    pub(crate) fn new(adjacency: &'a AdjacencyMap<L>) -> Self {
        Self { adjacency }
    }

    /// Number of edges. O(1).
    pub fn len(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Edge query. Average case O(1).
    ///
    /// For undirected graphs `contains(x, y) == contains(y, x)`; for directed
    /// graphs this asks whether `v` is a successor of `u`.
    pub fn contains(&self, u: &L, v: &L) -> bool {
        self.adjacency.contains_edge(u, v)
    }

    /// Iterate over the edges.
    ///
    /// Undirected edges are yielded exactly once, in arbitrary orientation: an
    /// edge between `1` and `2` shows up as `(1, 2)` or `(2, 1)`, never both.
    /// Directed edges are yielded as ordered `(source, target)` pairs.
    pub fn iter(&self) -> EdgesIter<'a, L> {
        let finished = if self.adjacency.directionality().is_directed() {
            None
        } else {
            Some(HashSet::new())
        };
        EdgesIter {
            outer: self.adjacency.successor_map().iter(),
            current: None,
            finished,
        }
    }
}

impl<'a, L: Label> IntoIterator for Edges<'a, L> {
    type Item = (&'a L, &'a L);
    type IntoIter = EdgesIter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Label> fmt::Display for Edges<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} edges: ", self.len())?;
        for (i, (u, v)) in self.iter().take(MAX_EDGES_DISPLAYED).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({:?}, {:?})", u, v)?;
        }
        if self.len() > MAX_EDGES_DISPLAYED {
            f.write_str("...")?;
        }
        f.write_str(">")
    }
}

/// Iterator over edges as label pairs.
#[derive(Debug, Clone)]
pub struct EdgesIter<'a, L> {
    outer: hash_map::Iter<'a, L, HashSet<L>>,
    current: Option<(&'a L, hash_set::Iter<'a, L>)>,
    /// Nodes whose incident edges have all been yielded. `None` when directed.
    finished: Option<HashSet<&'a L>>,
}

impl<'a, L: Label> Iterator for EdgesIter<'a, L> {
    type Item = (&'a L, &'a L);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((u, targets)) = self.current.as_mut() {
                let u: &'a L = *u;
                for v in targets.by_ref() {
                    if self.finished.as_ref().is_some_and(|done| done.contains(v)) {
                        continue;
                    }
                    return Some((u, v));
                }
                if let Some(done) = self.finished.as_mut() {
                    done.insert(u);
                }
            }
            let (u, targets) = self.outer.next()?;
            self.current = Some((u, targets.iter()));
        }
    }
}

/// A read-only view of one node's adjacency set.
#[derive(Debug)]
pub struct Adjacent<'a, L> {
    set: &'a HashSet<L>,
}

impl<L> Clone for Adjacent<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Adjacent<'_, L> {}

impl<'a, L: Label> Adjacent<'a, L> {
    pub(crate) fn new(set: &'a HashSet<L>) -> Self {
        Self { set }
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains(&self, label: &L) -> bool {
        self.set.contains(label)
    }

    /// Iterate over the adjacent labels in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'a, L> {
        self.set.iter()
    }
}

impl<'a, L: Label> IntoIterator for Adjacent<'a, L> {
    type Item = &'a L;
    type IntoIter = hash_set::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.iter()
    }
}

impl<L: Label> PartialEq<HashSet<L>> for Adjacent<'_, L> {
    fn eq(&self, other: &HashSet<L>) -> bool {
        self.set == other
    }
}

impl<L: Label> fmt::Display for Adjacent<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.set.iter()).finish()
    }
}
