//! Greedy linearization of a precedence graph.

use std::iter::FusedIterator;

use super::graph::PrecedenceGraph;

/// Yields the nodes of a [`PrecedenceGraph`] in reading order.
///
/// At each step the node with the most outstanding successors is emitted,
/// ties going to the smallest index, and is then removed from the graph
/// together with every edge pointing at it. Nodes are always removable, so
/// cycles never stall the order: every node is yielded exactly once.
///
/// The linearizer owns its graph and consumes it; it cannot be restarted.
#[derive(Debug, Clone)]
pub struct Linearizer {
    graph: PrecedenceGraph,
}

impl Linearizer {
    /// Start linearizing a graph.
    pub fn new(graph: PrecedenceGraph) -> Self {
        Self { graph }
    }

    /// The part of the graph not yet emitted.
    pub fn remaining(&self) -> &PrecedenceGraph {
        &self.graph
    }

    fn select(&self) -> Option<usize> {
        let max = self.graph.out_degrees().map(|(_, degree)| degree).max()?;
        self.graph
            .out_degrees()
            .find(|&(_, degree)| degree == max)
            .map(|(node, _)| node)
    }
}

impl From<PrecedenceGraph> for Linearizer {
    fn from(graph: PrecedenceGraph) -> Self {
        Self::new(graph)
    }
}

impl Iterator for Linearizer {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let node = self.select()?;
        self.graph.remove(node);
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.graph.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Linearizer {}

impl FusedIterator for Linearizer {}
