//! Node Identifiers and Edge Weights
//!
//! This module defines the capability bounds for the two type parameters a
//! graph is generic over: node identifiers and edge weights.

use std::fmt::Debug;
use std::hash::Hash;

/// A value usable as a node identifier.
///
/// Identifiers are opaque to the graph: it only compares and hashes them,
/// and clones them when an edge endpoint has to be inserted as a node.
/// `Debug` is required so errors can name the nodes involved.
///
/// Implemented for every type meeting the bounds (`&str`, `String`,
/// integers, caller-defined IDs, ...).
pub trait NodeKey: Eq + Hash + Clone + Debug {}

impl<T> NodeKey for T where T: Eq + Hash + Clone + Debug {}

/// A numeric edge weight.
///
/// Any `Copy` number convertible from `u8` qualifies, which covers the
/// signed integers wider than `i8`, the unsigned integers and both floats.
pub trait Weight: Copy + PartialEq + Debug + From<u8> {
    /// The weight given to edges added without an explicit one.
    fn unit() -> Self {
        Self::from(1)
    }
}

impl<T> Weight for T where T: Copy + PartialEq + Debug + From<u8> {}
