//! Tour individuals.

use std::fmt;

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};

/// A closed tour `start → route[0] → … → route[n-1] → start`.
///
/// Immutable once built; the cost is computed at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    start: VertexId,
    route: Vec<VertexId>,
    cost: f64,
}

impl Tour {
    /// Builds a tour and computes its cost.
    ///
    /// Each leg without an edge in `graph` costs `penalty`. An empty route
    /// costs `+∞`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidVertex`] if any id is not in the graph
    /// - [`GraphError::InvalidIndividual`] if the route repeats a vertex or
    ///   contains `start`
    pub fn new(
        route: Vec<VertexId>,
        start: VertexId,
        graph: &Graph,
        penalty: f64,
    ) -> Result<Self, GraphError> {
        graph.check_vertex(start)?;
        let mut seen = vec![false; graph.vertex_count()];
        for &v in &route {
            graph.check_vertex(v)?;
            if v == start {
                return Err(GraphError::InvalidIndividual(format!(
                    "start vertex {start} must not appear in the route"
                )));
            }
            if seen[v] {
                return Err(GraphError::InvalidIndividual(format!(
                    "vertex {v} appears more than once in {route:?}"
                )));
            }
            seen[v] = true;
        }

        let cost = tour_cost(graph, start, &route, penalty)?;
        Ok(Self { start, route, cost })
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    /// The permutation, without the start vertex.
    pub fn route(&self) -> &[VertexId] {
        &self.route
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The closed walk including the start at both ends.
    pub fn full_route(&self) -> Vec<VertexId> {
        let mut full = Vec::with_capacity(self.route.len() + 2);
        full.push(self.start);
        full.extend_from_slice(&self.route);
        full.push(self.start);
        full
    }

    /// Whether the cost stays below `penalty`, i.e. no leg was penalized.
    pub fn is_valid(&self, penalty: f64) -> bool {
        self.cost < penalty
    }

    /// Formats the tour with vertex names: `A → B → A | cost: 12`.
    pub fn display<'a>(&'a self, graph: &'a Graph) -> TourDisplay<'a> {
        TourDisplay { tour: self, graph }
    }
}

/// Sum of edge weights along the closed tour.
///
/// Each leg without an edge costs `penalty`; an empty route costs `+∞`.
///
/// # Errors
///
/// [`GraphError::InvalidVertex`] if `start` or any route id is not in the
/// graph.
pub fn tour_cost(
    graph: &Graph,
    start: VertexId,
    route: &[VertexId],
    penalty: f64,
) -> Result<f64, GraphError> {
    graph.check_vertex(start)?;
    if route.is_empty() {
        return Ok(f64::INFINITY);
    }
    let mut total = 0.0;
    let mut prev = start;
    for &next in route.iter().chain(std::iter::once(&start)) {
        graph.check_vertex(next)?;
        total += graph.weight_between(prev, next).unwrap_or(penalty);
        prev = next;
    }
    Ok(total)
}

/// See [`Tour::display`].
pub struct TourDisplay<'a> {
    tour: &'a Tour,
    graph: &'a Graph,
}

impl fmt::Display for TourDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .tour
            .full_route()
            .into_iter()
            .map(|v| self.graph.name(v))
            .collect();
        write!(f, "{} | cost: {}", names.join(" → "), self.tour.cost)
    }
}
