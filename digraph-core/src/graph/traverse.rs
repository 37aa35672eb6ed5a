//! Graph Traversal
//!
//! Depth-first and breadth-first traversal, written against the
//! [`Adjacency`] capability rather than a concrete graph type, so the same
//! iterators serve [`Digraph`](super::Digraph) and [`Dag`](super::Dag).
//!
//! # Semantics
//!
//! Both traversals:
//!
//! - yield every node reachable from the start node exactly once,
//! - never yield the start node itself, even when a cycle leads back to it,
//! - mark a node visited the moment it is scheduled (pushed or enqueued),
//! - yield nothing when the start node is not part of the graph.
//!
//! Iterators are lazy and only do work for the nodes already yielded, so a
//! caller can stop early with `take`, `find` and friends. Each iterator owns
//! its visited set and stack or queue; it only borrows the graph, so any
//! number of traversals may run side by side while the graph cannot be
//! mutated underneath them.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use smallvec::{smallvec, SmallVec};

/// Read-only access to a graph's out-edges.
pub trait Adjacency {
    /// The node identifier type.
    type Node: Eq + Hash;

    /// Direct successors of `node`, in adjacency order.
    ///
    /// Unknown nodes have no successors.
    fn neighbors<'a>(&'a self, node: &'a Self::Node) -> impl Iterator<Item = &'a Self::Node> + 'a;
}

/// Traversal methods for every [`Adjacency`] implementor.
pub trait Traverse: Adjacency + Sized {
    /// Lazily walk the nodes reachable from `start`, depth first.
    fn depth_first<'a>(&'a self, start: &'a Self::Node) -> DepthFirst<'a, Self> {
        DepthFirst::new(self, start)
    }

    /// Lazily walk the nodes reachable from `start`, breadth first.
    fn breadth_first<'a>(&'a self, start: &'a Self::Node) -> BreadthFirst<'a, Self> {
        BreadthFirst::new(self, start)
    }

    /// Whether a directed path leads from `from` to `to`.
    fn reaches(&self, from: &Self::Node, to: &Self::Node) -> bool {
        reachable(self, from, to)
    }
}

impl<G: Adjacency> Traverse for G {}

/// Depth-first iterator over the nodes reachable from a start node.
///
/// Uses an explicit stack, so traversal depth is not limited by the call
/// stack. Emission order is last-pushed-first over each node's adjacency
/// order.
pub struct DepthFirst<'a, G: Adjacency> {
    graph: &'a G,
    start: &'a G::Node,
    stack: SmallVec<[&'a G::Node; 16]>,
    visited: HashSet<&'a G::Node>,
}

impl<'a, G: Adjacency> DepthFirst<'a, G> {
    /// Start a traversal at `start`. The start node is marked visited up
    /// front and is never yielded.
    pub fn new(graph: &'a G, start: &'a G::Node) -> Self {
        Self {
            graph,
            start,
            stack: smallvec![start],
            visited: HashSet::from([start]),
        }
    }
}

impl<'a, G: Adjacency> Iterator for DepthFirst<'a, G> {
    type Item = &'a G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(node) = self.stack.pop() {
            for neighbor in graph.neighbors(node) {
                if self.visited.insert(neighbor) {
                    self.stack.push(neighbor);
                }
            }
            if node != self.start {
                return Some(node);
            }
        }
        None
    }
}

/// Breadth-first iterator over the nodes reachable from a start node.
///
/// Nodes come out in the order they were enqueued, so nearer nodes (by hop
/// count) always precede farther ones.
pub struct BreadthFirst<'a, G: Adjacency> {
    graph: &'a G,
    start: &'a G::Node,
    queue: VecDeque<&'a G::Node>,
    visited: HashSet<&'a G::Node>,
}

impl<'a, G: Adjacency> BreadthFirst<'a, G> {
    /// Start a traversal at `start`. The start node is marked visited up
    /// front and is never yielded.
    pub fn new(graph: &'a G, start: &'a G::Node) -> Self {
        Self {
            graph,
            start,
            queue: VecDeque::from([start]),
            visited: HashSet::from([start]),
        }
    }
}

impl<'a, G: Adjacency> Iterator for BreadthFirst<'a, G> {
    type Item = &'a G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(node) = self.queue.pop_front() {
            for neighbor in graph.neighbors(node) {
                if self.visited.insert(neighbor) {
                    self.queue.push_back(neighbor);
                }
            }
            if node != self.start {
                return Some(node);
            }
        }
        None
    }
}

/// Depth-first traversal of `graph` from `start`.
pub fn depth_first<'a, G: Adjacency>(graph: &'a G, start: &'a G::Node) -> DepthFirst<'a, G> {
    DepthFirst::new(graph, start)
}

/// Breadth-first traversal of `graph` from `start`.
pub fn breadth_first<'a, G: Adjacency>(graph: &'a G, start: &'a G::Node) -> BreadthFirst<'a, G> {
    BreadthFirst::new(graph, start)
}

/// Find a directed path from `from` to `to` by depth-first search.
///
/// Returns `[from, ..., to]`, or `[from]` when both are the same node.
/// The path is not necessarily the shortest one.
pub fn find_path<'a, G: Adjacency>(
    graph: &'a G,
    from: &'a G::Node,
    to: &'a G::Node,
) -> Option<Vec<&'a G::Node>> {
    let mut stack: SmallVec<[&'a G::Node; 16]> = smallvec![from];
    let mut visited = HashSet::from([from]);
    let mut parents: HashMap<&'a G::Node, &'a G::Node> = HashMap::new();

    while let Some(node) = stack.pop() {
        if node == to {
            let mut path = vec![node];
            let mut cursor = node;
            while let Some(&parent) = parents.get(cursor) {
                path.push(parent);
                cursor = parent;
            }
            path.reverse();
            return Some(path);
        }

        for neighbor in graph.neighbors(node) {
            if visited.insert(neighbor) {
                parents.insert(neighbor, node);
                stack.push(neighbor);
            }
        }
    }

    None
}

/// Whether a directed path leads from `from` to `to`.
///
/// A node always reaches itself.
pub fn reachable<G: Adjacency>(graph: &G, from: &G::Node, to: &G::Node) -> bool {
    find_path(graph, from, to).is_some()
}
