//! Directed Graph Storage
//!
//! [`Digraph`] owns the node and edge storage and computes topological
//! orders with Kahn's algorithm.
//!
//! # Ordering
//!
//! Both the node table and every adjacency row are insertion-ordered maps.
//! Everything the graph produces (node listings, successor lists,
//! topological orders, traversals) follows that order, so output is
//! deterministic for a given sequence of insertions.
//!
//! # Scope
//!
//! Nodes and edges can only be added. Removing a node or an edge is not
//! supported.

use std::collections::VecDeque;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, trace};

use super::node::{NodeKey, Weight};
use super::traverse::Adjacency;
use crate::error::{GraphError, Result};

/// A weighted directed graph.
///
/// # Type Parameters
///
/// - `N`: node identifier.
/// - `V`: optional value attached to a node (defaults to `()`).
/// - `W`: edge weight (defaults to `i64`). Edges added without a weight
///   get [`Weight::unit`].
///
/// At most one edge exists per ordered pair of nodes; adding it again
/// overwrites the weight.
#[derive(Debug, Clone)]
pub struct Digraph<N, V = (), W = i64> {
    /// node -> (successor -> weight)
    adjacency: IndexMap<N, IndexMap<N, W>>,

    /// Values for the nodes that were given one.
    values: IndexMap<N, V>,
}

impl<N, V, W> Digraph<N, V, W>
where
    N: NodeKey,
    W: Weight,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            values: IndexMap::new(),
        }
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(nodes),
            values: IndexMap::new(),
        }
    }

    /// Add a node if it is not already present.
    ///
    /// Returns true if the node was newly inserted.
    pub fn add_node(&mut self, node: N) -> bool {
        match self.adjacency.entry(node) {
            Entry::Vacant(e) => {
                trace!(node = ?e.key(), "adding node");
                e.insert(IndexMap::new());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Add a node if needed and set its value, replacing any previous one.
    ///
    /// Returns the previous value.
    pub fn add_node_with_value(&mut self, node: N, value: V) -> Option<V> {
        self.add_node(node.clone());
        self.values.insert(node, value)
    }

    /// Add the edge `start -> end` with unit weight.
    ///
    /// Returns the previous weight if the edge already existed.
    pub fn add_edge(&mut self, start: N, end: N) -> Option<W> {
        self.add_weighted_edge(start, end, W::unit())
    }

    /// Add the edge `start -> end`, inserting either endpoint that is not yet
    /// a node (`start` first).
    ///
    /// Returns the previous weight if the edge already existed.
    pub fn add_weighted_edge(&mut self, start: N, end: N, weight: W) -> Option<W> {
        self.add_node(start.clone());
        self.add_node(end.clone());
        trace!(start = ?start, end = ?end, weight = ?weight, "adding edge");
        self.adjacency.entry(start).or_default().insert(end, weight)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// All edges as `(start, end, weight)`, grouped by start node.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, W)> + '_ {
        self.adjacency.iter().flat_map(|(start, row)| {
            row.iter().map(move |(end, weight)| (start, end, *weight))
        })
    }

    /// Get the value stored for a node.
    pub fn node_value(&self, node: &N) -> Option<&V> {
        self.values.get(node)
    }

    /// Get the weight of the edge `start -> end`.
    ///
    /// Fails with [`GraphError::MissingEdge`] when the edge (or either
    /// endpoint) does not exist.
    pub fn edge_weight(&self, start: &N, end: &N) -> Result<W> {
        self.adjacency
            .get(start)
            .and_then(|row| row.get(end))
            .copied()
            .ok_or_else(|| GraphError::missing_edge(start, end))
    }

    /// Direct successors of a node, in edge insertion order.
    ///
    /// Unknown nodes have no successors.
    pub fn successors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|row| row.keys())
    }

    /// Direct predecessors of a node, in node insertion order.
    ///
    /// There is no reverse index, so this scans every adjacency row.
    pub fn predecessors<'a>(&'a self, node: &'a N) -> impl Iterator<Item = &'a N> + 'a {
        self.adjacency
            .iter()
            .filter(move |(_, row)| row.contains_key(node))
            .map(|(start, _)| start)
    }

    /// Check whether a node exists.
    pub fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Check whether the edge `start -> end` exists.
    pub fn has_edge(&self, start: &N, end: &N) -> bool {
        self.adjacency
            .get(start)
            .is_some_and(|row| row.contains_key(end))
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Check whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Order all nodes so that every edge points from an earlier node to a
    /// later one (Kahn's algorithm).
    ///
    /// Ties are broken first-in-first-out: the initial zero in-degree nodes
    /// in insertion order, then nodes in the order they become free.
    ///
    /// Fails with [`GraphError::CycleDetected`] if the graph has a cycle.
    pub fn topological_sort(&self) -> Result<Vec<N>> {
        let mut in_degree: IndexMap<&N, usize> =
            self.adjacency.keys().map(|node| (node, 0)).collect();

        for row in self.adjacency.values() {
            for end in row.keys() {
                if let Some(degree) = in_degree.get_mut(end) {
                    *degree += 1;
                }
            }
        }

        let mut queue: VecDeque<&N> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&node, _)| node)
            .collect();
        let mut order = Vec::with_capacity(self.adjacency.len());

        while let Some(node) = queue.pop_front() {
            order.push(node.clone());

            for succ in self.successors(node) {
                if let Some(degree) = in_degree.get_mut(succ) {
                    *degree = degree.saturating_sub(1);
                    if *degree == 0 {
                        queue.push_back(succ);
                    }
                }
            }
        }

        if order.len() != self.adjacency.len() {
            debug!(
                ordered = order.len(),
                total = self.adjacency.len(),
                "cycle detected during topological sort"
            );
            return Err(GraphError::CycleDetected {
                ordered: order.len(),
                total: self.adjacency.len(),
            });
        }

        Ok(order)
    }
}

impl<N, V, W> Default for Digraph<N, V, W>
where
    N: NodeKey,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, V, W> FromIterator<(N, N)> for Digraph<N, V, W>
where
    N: NodeKey,
    W: Weight,
{
    /// Build a graph from unit-weight edges.
    fn from_iter<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        let mut graph = Self::new();
        for (start, end) in edges {
            graph.add_edge(start, end);
        }
        graph
    }
}

impl<N, V, W> Adjacency for Digraph<N, V, W>
where
    N: NodeKey,
    W: Weight,
{
    type Node = N;

    fn neighbors<'a>(&'a self, node: &'a N) -> impl Iterator<Item = &'a N> + 'a {
        self.successors(node)
    }
}
