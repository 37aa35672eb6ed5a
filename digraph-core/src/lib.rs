//! Digraph Core
//!
//! This crate provides in-memory directed graphs. It implements:
//!
//! - Weighted node and edge storage with optional node values
//! - Topological sorting (Kahn's algorithm, FIFO tie-breaking)
//! - Lazy depth-first and breadth-first traversal
//! - Acyclic graphs that reject cycle-forming edges at insertion time
//!
//! # Architecture
//!
//! - `graph`: graph storage, traversal and the acyclic wrapper
//! - `error`: the error type shared by all fallible operations
//!
//! Nodes and edges can only be added; there is no removal. The graph has no
//! internal locking: wrap it in a lock to share it between threads.
//!
//! # Example
//!
//! ```rust
//! use digraph_core::{Dag, Digraph, GraphError, Traverse};
//!
//! let mut graph: Digraph<&str> = Digraph::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("A", "C");
//! graph.add_edge("B", "D");
//! graph.add_edge("C", "D");
//!
//! assert_eq!(graph.topological_sort()?, vec!["A", "B", "C", "D"]);
//! let bfs: Vec<_> = graph.breadth_first(&"A").copied().collect();
//! assert_eq!(bfs, vec!["B", "C", "D"]);
//!
//! let mut dag: Dag<&str> = Dag::new();
//! dag.add_edge("A", "B")?;
//! dag.add_edge("B", "C")?;
//! assert!(matches!(dag.add_edge("C", "A"), Err(GraphError::CycleRejected { .. })));
//! # Ok::<(), GraphError>(())
//! ```

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{Adjacency, Dag, Digraph, NodeKey, Traverse, Weight};
