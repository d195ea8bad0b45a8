//! Precedence graph over the primitives of one page.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Axis, Bounded};

use super::relation::relation;

/// Directed "visually before" graph over item indices.
///
/// Each node maps to the set of nodes it precedes. The relation is
/// deliberately permissive (overlap on either axis is enough), so the graph
/// may contain mutual edges and cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecedenceGraph {
    successors: BTreeMap<usize, BTreeSet<usize>>,
}

impl PrecedenceGraph {
    /// Build the graph for a page of items.
    ///
    /// Every index `0..items.len()` gets a node, with or without edges.
    pub fn build<T: Bounded>(items: &[T], tolerance: f64) -> Self {
        let mut successors: BTreeMap<usize, BTreeSet<usize>> =
            (0..items.len()).map(|i| (i, BTreeSet::new())).collect();

        for (i, a) in items.iter().enumerate() {
            for (j, b) in items.iter().enumerate() {
                if i == j {
                    continue;
                }
                if is_before(a, b, tolerance) {
                    if let Some(set) = successors.get_mut(&i) {
                        set.insert(j);
                    }
                }
            }
        }

        let graph = Self { successors };
        log::trace!(
            "Built precedence graph: {} nodes, {} edges",
            graph.len(),
            graph.edge_count()
        );
        graph
    }

    /// Build a graph from explicit edges over `node_count` nodes.
    ///
    /// Edges naming a node outside `0..node_count`, and self edges, are ignored.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut successors: BTreeMap<usize, BTreeSet<usize>> =
            (0..node_count).map(|i| (i, BTreeSet::new())).collect();
        for &(from, to) in edges {
            if from != to && to < node_count {
                if let Some(set) = successors.get_mut(&from) {
                    set.insert(to);
                }
            }
        }
        Self { successors }
    }

    /// Number of remaining nodes.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    /// Check if no nodes remain.
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.successors.values().map(BTreeSet::len).sum()
    }

    /// Check if a node is still present.
    pub fn contains(&self, node: usize) -> bool {
        self.successors.contains_key(&node)
    }

    /// Check for the edge `from -> to`.
    pub fn precedes(&self, from: usize, to: usize) -> bool {
        self.successors
            .get(&from)
            .is_some_and(|set| set.contains(&to))
    }

    /// Nodes that `node` precedes, in ascending order.
    pub fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.successors
            .get(&node)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Number of outstanding edges leaving `node` (0 if absent).
    pub fn out_degree(&self, node: usize) -> usize {
        self.successors.get(&node).map_or(0, BTreeSet::len)
    }

    /// Remaining nodes with their out-degree, in ascending node order.
    pub fn out_degrees(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors.iter().map(|(&node, set)| (node, set.len()))
    }

    /// Remove a node and every edge pointing at it.
    ///
    /// Returns `false` if the node was not present.
    pub fn remove(&mut self, node: usize) -> bool {
        if self.successors.remove(&node).is_none() {
            return false;
        }
        for set in self.successors.values_mut() {
            set.remove(&node);
        }
        true
    }
}

/// Whether `a` comes visually before `b` on either axis.
pub fn is_before<A: Bounded + ?Sized, B: Bounded + ?Sized>(a: &A, b: &B, tolerance: f64) -> bool {
    Axis::ALL
        .iter()
        .any(|&axis| relation(axis, a.bbox(), b.bbox(), tolerance).is_before())
}
