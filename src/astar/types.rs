//! A* result types.

use crate::graph::{Graph, VertexId};

/// A minimum-weight path from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    /// Vertex ids in travel order.
    pub vertices: Vec<VertexId>,

    /// Sum of edge weights along `vertices`.
    pub cost: f64,

    /// Number of vertices expanded (closed), the goal included.
    pub expanded: usize,
}

impl ShortestPath {
    /// Consecutive `(from, to)` pairs along the path.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        self.vertices.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// Names, cost, and per-segment distances for presentation.
    pub fn details(&self, graph: &Graph) -> PathDetails {
        let segments = self
            .edges()
            .into_iter()
            .map(|(from, to)| PathSegment {
                from: graph.name(from).to_owned(),
                to: graph.name(to).to_owned(),
                distance: graph.weight_between(from, to).unwrap_or(f64::NAN),
            })
            .collect();

        PathDetails {
            names: self.vertices.iter().map(|&v| graph.name(v).to_owned()).collect(),
            ids: self.vertices.clone(),
            total_cost: self.cost,
            vertex_count: self.vertices.len(),
            segments,
        }
    }
}

/// Outcome of a search that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(ShortestPath),
    /// The frontier emptied without reaching the goal.
    NoPathFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&ShortestPath> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            SearchOutcome::NoPathFound => None,
        }
    }

    pub fn into_path(self) -> Option<ShortestPath> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            SearchOutcome::NoPathFound => None,
        }
    }
}

/// Human-oriented view of a [`ShortestPath`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathDetails {
    pub names: Vec<String>,
    pub ids: Vec<VertexId>,
    pub total_cost: f64,
    pub vertex_count: usize,
    pub segments: Vec<PathSegment>,
}

/// One hop of a path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSegment {
    pub from: String,
    pub to: String,
    pub distance: f64,
}
