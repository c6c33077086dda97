//! Crate-wide error type.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised by graph construction and the algorithms built on it.
///
/// A missing path is not an error: A* reports it as
/// [`SearchOutcome::NoPathFound`](crate::astar::SearchOutcome::NoPathFound).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge or lookup referenced a vertex that is not in the graph.
    #[error("vertex {0} does not exist in the graph")]
    InvalidVertex(VertexId),

    /// An edge from a vertex to itself was requested.
    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),

    /// Edge weights must be finite and non-negative.
    #[error("invalid edge weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),

    /// A tour permutation is malformed (duplicate vertex, or start vertex present).
    #[error("invalid individual: {0}")]
    InvalidIndividual(String),

    /// A solver configuration was rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
