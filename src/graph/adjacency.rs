//! Adjacency bookkeeping shared by both graph variants.
//!
//! The keys of the successor map double as the Node Index: a label is live
//! exactly when it is a key there. Undirected graphs keep a single symmetric
//! map; directed graphs add a predecessor map with the same key set.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::types::{Directionality, GraphError, GraphResult, Label};

/// Node Index, adjacency sets and edge counter for one graph.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyMap<L> {
    /// Live labels -> labels reachable by one edge.
    succ: HashMap<L, HashSet<L>>,
    /// Live labels -> labels with one edge into them. `None` when undirected.
    pred: Option<HashMap<L, HashSet<L>>>,
    /// Number of distinct edges (a self-loop counts once).
    edge_count: usize,
}

impl<L: Label> AdjacencyMap<L> {
    /// Create an empty map for the given directionality.
    pub(crate) fn new(directionality: Directionality) -> Self {
        Self::with_capacity(directionality, 0)
    }

    /// Create an empty map with room for `nodes` labels.
    pub(crate) fn with_capacity(directionality: Directionality, nodes: usize) -> Self {
        let pred = match directionality {
            Directionality::Undirected => None,
            Directionality::Directed => Some(HashMap::with_capacity(nodes)),
        };
        Self {
            succ: HashMap::with_capacity(nodes),
            pred,
            edge_count: 0,
        }
    }

    pub(crate) fn directionality(&self) -> Directionality {
        if self.pred.is_some() {
            Directionality::Directed
        } else {
            Directionality::Undirected
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.succ.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Successor map; its key set is the Node Index.
    pub(crate) fn successor_map(&self) -> &HashMap<L, HashSet<L>> {
        &self.succ
    }

    pub(crate) fn contains_node(&self, label: &L) -> bool {
        self.succ.contains_key(label)
    }

    /// Edge query. Symmetric for undirected maps since `succ` is symmetric.
    pub(crate) fn contains_edge(&self, u: &L, v: &L) -> bool {
        self.succ.get(u).is_some_and(|out| out.contains(v))
    }

    /// Insert `label` with empty adjacency. Returns false if it was already live.
    pub(crate) fn insert_node(&mut self, label: L) -> bool {
        if self.succ.contains_key(&label) {
            return false;
        }
        trace!("added node {:?}", label);
        if let Some(pred) = self.pred.as_mut() {
            pred.insert(label.clone(), HashSet::new());
        }
        self.succ.insert(label, HashSet::new());
        true
    }

    /// Insert edge `u -> v` (or `{u, v}`), creating missing endpoints.
    /// Returns false if the edge was already present.
    pub(crate) fn insert_edge(&mut self, u: L, v: L) -> bool {
        self.insert_node(u.clone());
        self.insert_node(v.clone());

        let inserted = self
            .succ
            .get_mut(&u)
            .is_some_and(|out| out.insert(v.clone()));
        if !inserted {
            return false;
        }

        let mirror = match self.pred.as_mut() {
            Some(pred) => pred.get_mut(&v),
            None => self.succ.get_mut(&v),
        };
        if let Some(set) = mirror {
            set.insert(u.clone());
        }

        self.edge_count += 1;
        trace!("added edge ({:?}, {:?})", u, v);
        true
    }

    /// Remove edge `u -> v` (or `{u, v}`).
    pub(crate) fn remove_edge(&mut self, u: &L, v: &L) -> GraphResult<()> {
        if !self.contains_edge(u, v) {
            debug!("rejected removal of missing edge ({:?}, {:?})", u, v);
            return Err(GraphError::EdgeDoesNotExist(
                format!("{:?}", u),
                format!("{:?}", v),
            ));
        }

        if let Some(out) = self.succ.get_mut(u) {
            out.remove(v);
        }
        let mirror = match self.pred.as_mut() {
            Some(pred) => pred.get_mut(v),
            None => self.succ.get_mut(v),
        };
        if let Some(set) = mirror {
            set.remove(u);
        }

        self.edge_count -= 1;
        trace!("removed edge ({:?}, {:?})", u, v);
        Ok(())
    }

    /// Remove `label` together with every edge incident to it.
    pub(crate) fn remove_node(&mut self, label: &L) -> GraphResult<()> {
        let out = self.succ.remove(label).ok_or_else(|| missing_node(label))?;

        let removed = match self.pred.as_mut() {
            None => {
                for n in out.iter().filter(|n| *n != label) {
                    if let Some(adj) = self.succ.get_mut(n) {
                        adj.remove(label);
                    }
                }
                out.len()
            }
            Some(pred) => {
                let inc = pred.remove(label).unwrap_or_default();
                for v in out.iter().filter(|v| *v != label) {
                    if let Some(parents) = pred.get_mut(v) {
                        parents.remove(label);
                    }
                }
                for u in inc.iter().filter(|u| *u != label) {
                    if let Some(children) = self.succ.get_mut(u) {
                        children.remove(label);
                    }
                }
                // A self-loop sits in both sets but is one edge.
                out.len() + inc.len() - usize::from(out.contains(label))
            }
        };

        self.edge_count -= removed;
        debug!("removed node {:?} and {} incident edge(s)", label, removed);
        Ok(())
    }

    /// Outgoing adjacency of `label` (all neighbors when undirected).
    pub(crate) fn successors(&self, label: &L) -> GraphResult<&HashSet<L>> {
        self.succ.get(label).ok_or_else(|| missing_node(label))
    }

    /// Incoming adjacency of `label` (all neighbors when undirected).
    pub(crate) fn predecessors(&self, label: &L) -> GraphResult<&HashSet<L>> {
        let map = self.pred.as_ref().unwrap_or(&self.succ);
        map.get(label).ok_or_else(|| missing_node(label))
    }

    pub(crate) fn arbitrary_node(&self) -> GraphResult<&L> {
        self.succ.keys().next().ok_or_else(|| {
            debug!("arbitrary node requested from an empty graph");
            GraphError::EmptyGraph
        })
    }
}

impl<L: Label> PartialEq for AdjacencyMap<L> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.succ == other.succ && self.pred == other.pred
    }
}

impl<L: Label> Eq for AdjacencyMap<L> {}

fn missing_node<L: Label>(label: &L) -> GraphError {
    debug!("node {:?} does not exist", label);
    GraphError::NodeDoesNotExist(format!("{:?}", label))
}
