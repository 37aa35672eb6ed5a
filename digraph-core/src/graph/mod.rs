//! Directed Graphs
//!
//! This module implements a small directed-graph library: weighted edge
//! storage, topological ordering, lazy depth-first and breadth-first
//! traversal, and acyclic graphs that refuse cycle-forming edges.
//!
//! # Overview
//!
//! The pieces build on each other by composition:
//!
//! - [`Digraph`] owns node and edge storage and computes topological orders.
//! - [`Adjacency`] is the read-only capability traversal needs. The
//!   [`Traverse`] extension trait gives every implementor `depth_first`,
//!   `breadth_first` and `reaches`.
//! - [`Dag`] wraps a [`Digraph`] and checks reachability before each edge
//!   insertion.
//!
//! # Design Decisions
//!
//! 1. Node identifiers are any `Eq + Hash + Clone + Debug` type; the graph
//!    never looks inside them.
//!
//! 2. Storage is insertion-ordered (`IndexMap`), so every listing, sort and
//!    traversal is deterministic.
//!
//! 3. There is no reverse index. Predecessor queries scan all rows, which
//!    keeps insertion cheap and the storage a single map.
//!
//! 4. Traversals are lazy iterators borrowing the graph, so callers can stop
//!    early and the borrow checker rules out mutation mid-traversal.

mod acyclic;
mod digraph;
mod node;
mod traverse;

pub use acyclic::Dag;
pub use digraph::Digraph;
pub use node::{NodeKey, Weight};
pub use traverse::{
    breadth_first, depth_first, find_path, reachable, Adjacency, BreadthFirst, DepthFirst,
    Traverse,
};
