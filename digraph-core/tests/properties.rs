//! Property Tests
//!
//! Random edge sequences checked against a brute-force reachability
//! closure.

use std::collections::HashSet;

use digraph_core::{Dag, Digraph, GraphError, Traverse};
use proptest::prelude::*;

const NODES: u8 = 12;

fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..48)
}

/// Nodes reachable from `start` by a path of at least one edge, minus `start`.
fn reachable_set(edges: &[(u8, u8)], start: u8) -> HashSet<u8> {
    let mut seen = HashSet::new();
    let mut frontier = vec![start];
    while let Some(node) = frontier.pop() {
        for &(from, to) in edges {
            if from == node && seen.insert(to) {
                frontier.push(to);
            }
        }
    }
    seen.remove(&start);
    seen
}

fn has_cycle(edges: &[(u8, u8)]) -> bool {
    edges
        .iter()
        .any(|&(from, to)| from == to || reachable_set(edges, to).contains(&from))
}

fn assert_respects_edges(order: &[u8], edges: &[(u8, u8)]) -> Result<(), TestCaseError> {
    let position = |node: u8| order.iter().position(|&n| n == node);
    for &(from, to) in edges {
        prop_assert!(position(from) < position(to), "{from} must precede {to}");
    }
    Ok(())
}

proptest! {
    #[test]
    fn dag_stays_acyclic_after_every_insertion(edges in edge_list()) {
        let mut dag: Dag<u8> = Dag::new();
        let mut accepted: Vec<(u8, u8)> = Vec::new();

        for (from, to) in edges {
            let nodes_before = dag.node_count();
            let edges_before = dag.edge_count();

            match dag.add_edge(from, to) {
                Ok(_) => {
                    if !accepted.contains(&(from, to)) {
                        accepted.push((from, to));
                    }
                }
                Err(GraphError::CycleRejected { .. }) => {
                    prop_assert!(from == to || dag.reaches(&to, &from));
                    prop_assert_eq!(dag.node_count(), nodes_before);
                    prop_assert_eq!(dag.edge_count(), edges_before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }

            prop_assert!(!has_cycle(&accepted));
            let order = dag.topological_sort().map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(order.len(), dag.node_count());
            assert_respects_edges(&order, &accepted)?;
        }
    }

    #[test]
    fn topological_sort_is_permutation_of_nodes(edges in edge_list()) {
        // Orient every edge from lower to higher id so the graph is acyclic.
        let edges: Vec<(u8, u8)> = edges
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        let graph: Digraph<u8> = edges.iter().copied().collect();

        let order = graph.topological_sort().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut sorted = order.clone();
        sorted.sort_unstable();
        let mut nodes: Vec<u8> = graph.nodes().copied().collect();
        nodes.sort_unstable();

        prop_assert_eq!(sorted, nodes);
        assert_respects_edges(&order, &edges)?;
    }

    #[test]
    fn cyclic_graphs_fail_to_sort(edges in edge_list()) {
        let graph: Digraph<u8> = edges.iter().copied().collect();
        let result = graph.topological_sort();

        if has_cycle(&edges) {
            let is_cycle_error = matches!(result, Err(GraphError::CycleDetected { .. }));
            prop_assert!(is_cycle_error);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn traversals_yield_exactly_the_reachable_set(edges in edge_list(), start in 0..NODES) {
        let graph: Digraph<u8> = edges.iter().copied().collect();
        let expected = reachable_set(&edges, start);

        let dfs: Vec<u8> = graph.depth_first(&start).copied().collect();
        let bfs: Vec<u8> = graph.breadth_first(&start).copied().collect();

        prop_assert_eq!(dfs.len(), expected.len());
        prop_assert_eq!(bfs.len(), expected.len());
        prop_assert_eq!(dfs.into_iter().collect::<HashSet<_>>(), expected.clone());
        prop_assert_eq!(bfs.into_iter().collect::<HashSet<_>>(), expected);
    }
}
