//! Error types for graph operations.

use std::fmt::Debug;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced by [`Digraph`](crate::graph::Digraph) and
/// [`Dag`](crate::graph::Dag).
///
/// Node identifiers are rendered with their `Debug` representation so the
/// error stays independent of the node type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The requested edge is not stored (or one of its endpoints is unknown).
    #[error("no edge {start} -> {end}")]
    MissingEdge { start: String, end: String },

    /// Kahn's algorithm could not order every node.
    #[error("graph contains a cycle: only {ordered} of {total} nodes could be ordered")]
    CycleDetected { ordered: usize, total: usize },

    /// An acyclic graph refused an edge that would close a cycle.
    #[error("adding {start} -> {end} would create a cycle: {cycle}")]
    CycleRejected {
        start: String,
        end: String,
        cycle: String,
    },
}

impl GraphError {
    pub(crate) fn missing_edge<N: Debug>(start: &N, end: &N) -> Self {
        Self::MissingEdge {
            start: label(start),
            end: label(end),
        }
    }
}

/// Render a node for an error message.
pub(crate) fn label<N: Debug>(node: &N) -> String {
    format!("{node:?}")
}
