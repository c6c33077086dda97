//! Planarity verdicts and the Euler characteristic report.

use std::fmt;

use crate::graph::VertexId;

/// Result of [`PlanarityChecker::check`](super::PlanarityChecker::check).
///
/// This is a heuristic verdict: `planar` may be wrong for graphs outside
/// the patterns the checker special-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarityVerdict {
    pub planar: bool,
    pub reason: PlanarityReason,
}

impl PlanarityVerdict {
    pub(crate) fn planar(reason: PlanarityReason) -> Self {
        Self {
            planar: true,
            reason,
        }
    }

    pub(crate) fn non_planar(reason: PlanarityReason) -> Self {
        Self {
            planar: false,
            reason,
        }
    }

    /// Human-readable justification.
    pub fn justification(&self) -> String {
        self.reason.to_string()
    }
}

/// Which rule decided the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanarityReason {
    /// At most four vertices.
    TooSmall { vertices: usize },
    /// `E > 3V - 6`.
    EulerBound { edges: usize, bound: usize },
    /// Bipartite and `E > 2V - 4`.
    BipartiteBound { edges: usize, bound: usize },
    /// Cubic, `V >= 10`, girth at least 5, `E >= 15`.
    PetersenLike {
        vertices: usize,
        edges: usize,
        girth: usize,
    },
    /// Two DFS subtrees of `vertex` have interleaving back edges.
    Interlacing {
        vertex: VertexId,
        branches: (VertexId, VertexId),
    },
    /// No rule fired and the DFS found no interlacing.
    NoInterlacing,
}

impl fmt::Display for PlanarityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanarityReason::TooSmall { vertices } => {
                write!(f, "graph with {vertices} vertices (<= 4) is always planar")
            }
            PlanarityReason::EulerBound { edges, bound } => {
                write!(f, "violates E <= 3V - 6: {edges} > {bound}")
            }
            PlanarityReason::BipartiteBound { edges, bound } => {
                write!(f, "bipartite graph violates E <= 2V - 4: {edges} > {bound}")
            }
            PlanarityReason::PetersenLike {
                vertices,
                edges,
                girth,
            } => write!(
                f,
                "3-regular graph with V={vertices}, E={edges} and girth {girth} >= 5 \
                 (Petersen pattern, non-planar)"
            ),
            PlanarityReason::Interlacing { vertex, branches } => write!(
                f,
                "back edges of DFS branches {} and {} under vertex {vertex} interleave \
                 (K5 or K3,3 subdivision suspected)",
                branches.0, branches.1
            ),
            PlanarityReason::NoInterlacing => write!(f, "graph is planar"),
        }
    }
}

/// Euler characteristic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerCharacteristic {
    /// `F = 2 - V + E`, so `V - E + F = 2`.
    Connected {
        vertices: usize,
        edges: usize,
        faces: i64,
        characteristic: i64,
    },
    /// Faces are not computable; per component `V - E + F = 1 + C`.
    Disconnected {
        vertices: usize,
        edges: usize,
        components: usize,
    },
}

impl EulerCharacteristic {
    pub fn faces(&self) -> Option<i64> {
        match self {
            EulerCharacteristic::Connected { faces, .. } => Some(*faces),
            EulerCharacteristic::Disconnected { .. } => None,
        }
    }
}

impl fmt::Display for EulerCharacteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EulerCharacteristic::Connected {
                vertices,
                edges,
                faces,
                characteristic,
            } => write!(
                f,
                "V - E + F = {vertices} - {edges} + {faces} = {characteristic}"
            ),
            EulerCharacteristic::Disconnected {
                vertices,
                edges,
                components,
            } => write!(
                f,
                "V = {vertices}, E = {edges}, F = N/A (graph has {components} components); \
                 V - E + F = 1 + C"
            ),
        }
    }
}
