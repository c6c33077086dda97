//! Planarity decision sequence.

use tracing::debug;

use super::dfs::LowpointDfs;
use super::structure;
use super::types::{EulerCharacteristic, PlanarityReason, PlanarityVerdict};
use crate::graph::Graph;

/// Heuristic planarity checker.
///
/// Applies cheap necessary conditions first and falls back to a low-point
/// DFS interlacing test. The answer is approximate: it is exact for the
/// patterns the rules cover (small graphs, Euler-bound violations, dense
/// bipartite graphs, Petersen-like cubic graphs, trees) and best-effort
/// elsewhere.
///
/// # Examples
///
/// ```
/// use u_graphkit::graph::Graph;
/// use u_graphkit::planarity::PlanarityChecker;
///
/// let mut k5 = Graph::new();
/// for _ in 0..5 {
///     k5.add_vertex(None, None);
/// }
/// for u in 0..5 {
///     for v in (u + 1)..5 {
///         k5.add_edge(u, v, 1.0).unwrap();
///     }
/// }
/// let verdict = PlanarityChecker::new(&k5).check();
/// assert!(!verdict.planar);
/// ```
pub struct PlanarityChecker<'g> {
    graph: &'g Graph,
}

impl<'g> PlanarityChecker<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Runs the decision sequence; the first rule that fires decides.
    pub fn check(&self) -> PlanarityVerdict {
        let verdict = self.decide();
        debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            planar = verdict.planar,
            reason = %verdict.reason,
            "planarity checked"
        );
        verdict
    }

    fn decide(&self) -> PlanarityVerdict {
        let v = self.graph.vertex_count();
        let e = self.graph.edge_count();

        if v <= 4 {
            return PlanarityVerdict::planar(PlanarityReason::TooSmall { vertices: v });
        }

        // v >= 5 from here, so the bounds below cannot underflow.
        let euler_bound = 3 * v - 6;
        if e > euler_bound {
            return PlanarityVerdict::non_planar(PlanarityReason::EulerBound {
                edges: e,
                bound: euler_bound,
            });
        }

        let bipartite_bound = 2 * v - 4;
        if e > bipartite_bound && structure::is_bipartite(self.graph) {
            return PlanarityVerdict::non_planar(PlanarityReason::BipartiteBound {
                edges: e,
                bound: bipartite_bound,
            });
        }

        if v >= 10 && e >= 15 && structure::is_cubic(self.graph) {
            if let Some(girth) = structure::girth(self.graph).filter(|&g| g >= 5) {
                return PlanarityVerdict::non_planar(PlanarityReason::PetersenLike {
                    vertices: v,
                    edges: e,
                    girth,
                });
            }
        }

        match LowpointDfs::new(self.graph).find_interlacing() {
            Some(hit) => PlanarityVerdict::non_planar(PlanarityReason::Interlacing {
                vertex: hit.vertex,
                branches: hit.branches,
            }),
            None => PlanarityVerdict::planar(PlanarityReason::NoInterlacing),
        }
    }

    /// Euler characteristic of the graph.
    ///
    /// Only connected graphs get a face count.
    pub fn euler_characteristic(&self) -> EulerCharacteristic {
        let vertices = self.graph.vertex_count();
        let edges = self.graph.edge_count();
        let components = structure::connected_components(self.graph).len();

        if components > 1 {
            return EulerCharacteristic::Disconnected {
                vertices,
                edges,
                components,
            };
        }

        let faces = 2 - vertices as i64 + edges as i64;
        EulerCharacteristic::Connected {
            vertices,
            edges,
            faces,
            characteristic: vertices as i64 - edges as i64 + faces,
        }
    }
}
