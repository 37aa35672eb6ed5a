//! Acyclic Graphs
//!
//! [`Dag`] wraps a [`Digraph`] and refuses any edge that would close a
//! cycle. The check runs before the insertion, so a rejected edge leaves the
//! graph exactly as it was.
//!
//! # Algorithm
//!
//! Adding `start -> end` creates a cycle exactly when `end` can already
//! reach `start`. Every insertion runs a depth-first search from `end`
//! looking for `start`, costing O(V + E). Self-loops are caught by the same
//! probe since a node always reaches itself.
//!
//! Reads go through `Deref<Target = Digraph>`. There is no mutable access to
//! the wrapped graph, so the check cannot be bypassed.

use std::ops::Deref;

use tracing::debug;

use super::digraph::Digraph;
use super::node::{NodeKey, Weight};
use super::traverse::{find_path, Adjacency};
use crate::error::{label, GraphError, Result};

/// A directed graph that stays acyclic.
#[derive(Debug, Clone)]
pub struct Dag<N, V = (), W = i64> {
    graph: Digraph<N, V, W>,
}

impl<N, V, W> Dag<N, V, W>
where
    N: NodeKey,
    W: Weight,
{
    /// Create an empty DAG.
    pub fn new() -> Self {
        Self {
            graph: Digraph::new(),
        }
    }

    /// Add a node if it is not already present.
    ///
    /// Returns true if the node was newly inserted.
    pub fn add_node(&mut self, node: N) -> bool {
        self.graph.add_node(node)
    }

    /// Add a node if needed and set its value, replacing any previous one.
    pub fn add_node_with_value(&mut self, node: N, value: V) -> Option<V> {
        self.graph.add_node_with_value(node, value)
    }

    /// Add the edge `start -> end` with unit weight, unless it would create
    /// a cycle.
    pub fn add_edge(&mut self, start: N, end: N) -> Result<Option<W>> {
        self.add_weighted_edge(start, end, W::unit())
    }

    /// Add the edge `start -> end`, unless it would create a cycle.
    ///
    /// Returns the previous weight if the edge already existed. Fails with
    /// [`GraphError::CycleRejected`] if `end` already reaches `start`; the
    /// graph is left unchanged in that case.
    pub fn add_weighted_edge(&mut self, start: N, end: N, weight: W) -> Result<Option<W>> {
        if let Some(path) = find_path(&self.graph, &end, &start) {
            // end -> ... -> start, closed by the new edge back to end.
            let cycle = path
                .iter()
                .chain(std::iter::once(&&end))
                .map(|node| label(*node))
                .collect::<Vec<_>>()
                .join(" → ");
            debug!(start = ?start, end = ?end, %cycle, "rejected cycle-forming edge");
            return Err(GraphError::CycleRejected {
                start: label(&start),
                end: label(&end),
                cycle,
            });
        }

        Ok(self.graph.add_weighted_edge(start, end, weight))
    }

    /// Unwrap into the underlying graph.
    pub fn into_inner(self) -> Digraph<N, V, W> {
        self.graph
    }
}

impl<N, V, W> Default for Dag<N, V, W>
where
    N: NodeKey,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, V, W> Deref for Dag<N, V, W> {
    type Target = Digraph<N, V, W>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl<N, V, W> TryFrom<Digraph<N, V, W>> for Dag<N, V, W>
where
    N: NodeKey,
    W: Weight,
{
    type Error = GraphError;

    /// Adopt an existing graph after checking it has no cycle.
    fn try_from(graph: Digraph<N, V, W>) -> Result<Self> {
        graph.topological_sort()?;
        Ok(Self { graph })
    }
}

impl<N, V, W> Adjacency for Dag<N, V, W>
where
    N: NodeKey,
    W: Weight,
{
    type Node = N;

    fn neighbors<'a>(&'a self, node: &'a N) -> impl Iterator<Item = &'a N> + 'a {
        self.graph.successors(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Traverse;

    fn chain() -> Dag<&'static str> {
        let mut dag = Dag::new();
        dag.add_edge("A", "B").unwrap();
        dag.add_edge("B", "C").unwrap();
        dag
    }

    #[test]
    fn accepts_acyclic_edges() {
        let mut dag = chain();
        assert_eq!(dag.add_edge("A", "C"), Ok(None));
        assert_eq!(dag.edge_count(), 3);
        assert_eq!(dag.topological_sort(), Ok(vec!["A", "B", "C"]));
    }

    #[test]
    fn rejects_back_edge_and_leaves_graph_untouched() {
        let mut dag = chain();

        let err = dag.add_edge("C", "A").unwrap_err();
        assert_eq!(
            err,
            GraphError::CycleRejected {
                start: r#""C""#.to_string(),
                end: r#""A""#.to_string(),
                cycle: r#""A" → "B" → "C" → "A""#.to_string(),
            }
        );

        let edges: Vec<_> = dag.edges().map(|(s, e, _)| (*s, *e)).collect();
        assert_eq!(edges, vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn rejects_self_loop() {
        let mut dag = chain();
        assert!(matches!(
            dag.add_edge("B", "B"),
            Err(GraphError::CycleRejected { .. })
        ));

        // Not even the node is created for an unknown self-loop.
        assert!(dag.add_edge("Z", "Z").is_err());
        assert!(!dag.has_node(&"Z"));
    }

    #[test]
    fn overwriting_weight_is_always_allowed() {
        let mut dag: Dag<&str> = Dag::new();
        dag.add_weighted_edge("A", "B", 5).unwrap();

        assert_eq!(dag.add_weighted_edge("A", "B", 9), Ok(Some(5)));
        assert_eq!(dag.edge_weight(&"A", &"B"), Ok(9));
        assert_eq!(dag.edge_count(), 1);
    }

    #[test]
    fn node_values_pass_through() {
        let mut dag: Dag<&str, String> = Dag::default();
        dag.add_node_with_value("A", "root".to_string());
        assert!(!dag.add_node("A"));
        assert_eq!(dag.node_value(&"A").map(String::as_str), Some("root"));
    }

    #[test]
    fn traverses_like_a_digraph() {
        let dag = chain();
        assert_eq!(dag.depth_first(&"A").copied().collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(dag.breadth_first(&"A").copied().collect::<Vec<_>>(), vec!["B", "C"]);
        assert!(dag.reaches(&"A", &"C"));
    }

    #[test]
    fn try_from_checks_for_cycles() {
        let acyclic: Digraph<&str> = [("A", "B"), ("B", "C")].into_iter().collect();
        let dag = Dag::try_from(acyclic).unwrap();
        assert_eq!(dag.node_count(), 3);

        let cyclic: Digraph<&str> = [("A", "B"), ("B", "A")].into_iter().collect();
        assert!(matches!(
            Dag::try_from(cyclic),
            Err(GraphError::CycleDetected { .. })
        ));
    }

    #[test]
    fn into_inner_keeps_edges() {
        let graph = chain().into_inner();
        assert!(graph.has_edge(&"A", &"B"));
        assert!(graph.has_edge(&"B", &"C"));
    }
}
