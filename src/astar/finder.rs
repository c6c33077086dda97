//! A* search loop.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use tracing::{debug, trace};

use super::heuristic::{Heuristic, ManhattanHeuristic};
use super::types::{SearchOutcome, ShortestPath};
use crate::error::GraphError;
use crate::graph::{Graph, VertexId};

/// Frontier entry ordered so that `BinaryHeap` pops the lowest `f` first,
/// ties going to the lower vertex id.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f: f64,
    vertex: VertexId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Single-source single-target shortest path search.
///
/// # Examples
///
/// ```
/// use u_graphkit::astar::{PathFinder, ZeroHeuristic};
/// use u_graphkit::graph::Graph;
///
/// let mut g = Graph::new();
/// let a = g.add_named_vertex("A");
/// let b = g.add_named_vertex("B");
/// let c = g.add_named_vertex("C");
/// g.add_edge(a, b, 1.0).unwrap();
/// g.add_edge(b, c, 1.0).unwrap();
/// g.add_edge(a, c, 3.0).unwrap();
///
/// let finder = PathFinder::with_heuristic(&g, ZeroHeuristic);
/// let path = finder.find_path(a, c).unwrap().into_path().unwrap();
/// assert_eq!(path.vertices, vec![a, b, c]);
/// assert_eq!(path.cost, 2.0);
/// ```
pub struct PathFinder<'g, H = ManhattanHeuristic> {
    graph: &'g Graph,
    heuristic: H,
}

impl<'g> PathFinder<'g, ManhattanHeuristic> {
    /// Uses the default scaled-Manhattan heuristic.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            heuristic: ManhattanHeuristic::new(),
        }
    }
}

impl<'g, H: Heuristic> PathFinder<'g, H> {
    pub fn with_heuristic(graph: &'g Graph, heuristic: H) -> Self {
        Self { graph, heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Heuristic value `h(from, goal)`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either id is not in the graph.
    pub fn estimate(&self, from: VertexId, goal: VertexId) -> Result<f64, GraphError> {
        self.graph.check_vertex(from)?;
        self.graph.check_vertex(goal)?;
        Ok(self.h(from, goal))
    }

    fn h(&self, from: VertexId, goal: VertexId) -> f64 {
        self.heuristic.estimate(self.graph, from, goal)
    }

    /// Finds the minimum-weight path from `start` to `goal`.
    ///
    /// Stale frontier entries are never removed; a popped vertex that is
    /// already closed is skipped. The first pop of `goal` is optimal when the
    /// heuristic is admissible.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either endpoint is not in the graph.
    pub fn find_path(&self, start: VertexId, goal: VertexId) -> Result<SearchOutcome, GraphError> {
        self.graph.check_vertex(start)?;
        self.graph.check_vertex(goal)?;

        let n = self.graph.vertex_count();
        let mut g_score = vec![f64::INFINITY; n];
        let mut came_from: Vec<Option<VertexId>> = vec![None; n];
        let mut closed = vec![false; n];
        let mut frontier = BinaryHeap::new();
        let mut expanded = 0usize;

        g_score[start] = 0.0;
        frontier.push(FrontierEntry {
            f: self.h(start, goal),
            vertex: start,
        });

        while let Some(FrontierEntry { f, vertex: current }) = frontier.pop() {
            if closed[current] {
                continue;
            }
            closed[current] = true;
            expanded += 1;
            trace!(
                vertex = current,
                f,
                g = g_score[current],
                frontier = frontier.len(),
                "expanding"
            );

            if current == goal {
                let vertices = reconstruct(&came_from, goal);
                debug!(
                    start,
                    goal,
                    cost = g_score[goal],
                    hops = vertices.len() - 1,
                    expanded,
                    "path found"
                );
                return Ok(SearchOutcome::Found(ShortestPath {
                    vertices,
                    cost: g_score[goal],
                    expanded,
                }));
            }

            for &(neighbor, weight) in self.graph.adjacent(current) {
                if closed[neighbor] {
                    continue;
                }
                let tentative = g_score[current] + weight;
                if tentative < g_score[neighbor] {
                    came_from[neighbor] = Some(current);
                    g_score[neighbor] = tentative;
                    frontier.push(FrontierEntry {
                        f: tentative + self.h(neighbor, goal),
                        vertex: neighbor,
                    });
                }
            }
        }

        debug!(start, goal, expanded, "frontier exhausted, no path");
        Ok(SearchOutcome::NoPathFound)
    }

    /// Heuristic value of every vertex toward `destination`, keyed by name.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `destination` is not in the graph.
    pub fn heuristic_table(&self, destination: VertexId) -> Result<BTreeMap<String, f64>, GraphError> {
        self.graph.check_vertex(destination)?;
        Ok(self
            .graph
            .vertices()
            .map(|v| (self.graph.name(v).to_owned(), self.h(v, destination)))
            .collect())
    }
}

/// Walks predecessor links from `goal` back to the start, then reverses.
fn reconstruct(came_from: &[Option<VertexId>], goal: VertexId) -> Vec<VertexId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
