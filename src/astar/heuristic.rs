//! Heuristics for A*.
//!
//! A heuristic estimates the remaining cost from a vertex to the goal. For
//! A* to return optimal paths it must be admissible (never overestimate).
//! Neither implementation here checks that; the caller pairs a heuristic
//! with a graph it is admissible for.

use std::collections::HashMap;

use crate::graph::{Graph, VertexId};

/// Remaining-cost estimate used to order the A* frontier.
pub trait Heuristic {
    /// Estimated cost from `from` to `goal`. Must be non-negative.
    ///
    /// Both ids belong to `graph`; implementations may panic otherwise.
    fn estimate(&self, graph: &Graph, from: VertexId, goal: VertexId) -> f64;
}

/// Always `0`. Makes A* behave as Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _graph: &Graph, _from: VertexId, _goal: VertexId) -> f64 {
        0.0
    }
}

/// Precomputed heuristic values toward one specific goal, keyed by vertex
/// display name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeuristicTable {
    /// Display name of the goal these values were computed for.
    pub goal: String,
    pub values: HashMap<String, f64>,
}

impl HeuristicTable {
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            values: HashMap::new(),
        }
    }

    /// Adds or replaces the value for `vertex`.
    pub fn with_value(mut self, vertex: impl Into<String>, h: f64) -> Self {
        self.values.insert(vertex.into(), h);
        self
    }

    /// Value for `vertex` when this table targets `goal`.
    pub fn lookup(&self, goal: &str, vertex: &str) -> Option<f64> {
        if self.goal == goal {
            self.values.get(vertex).copied()
        } else {
            None
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for HeuristicTable {
    /// Collects `(name, value)` pairs; the goal is left empty and must be
    /// set before use.
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            goal: String::new(),
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Scaled Manhattan distance between vertex coordinates, overridden by an
/// optional [`HeuristicTable`] for its goal.
///
/// The estimate is `(|dx| + |dy|) * scale` rounded to the nearest integer
/// with ties to even, or `0` when either vertex has no coordinate.
#[derive(Debug, Clone)]
pub struct ManhattanHeuristic {
    pub scale: f64,
    pub table: Option<HeuristicTable>,
}

impl ManhattanHeuristic {
    /// Coordinate units to cost units.
    pub const DEFAULT_SCALE: f64 = 100.0;

    pub fn new() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            table: None,
        }
    }

    pub fn with_table(mut self, table: HeuristicTable) -> Self {
        self.table = Some(table);
        self
    }

    /// The coordinate-only estimate, ignoring any table.
    pub fn manhattan(&self, graph: &Graph, from: VertexId, goal: VertexId) -> f64 {
        match (graph.coord(from), graph.coord(goal)) {
            (Some(a), Some(b)) => (a.manhattan(&b) * self.scale).round_ties_even(),
            _ => 0.0,
        }
    }
}

impl Default for ManhattanHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for ManhattanHeuristic {
    fn estimate(&self, graph: &Graph, from: VertexId, goal: VertexId) -> f64 {
        if let Some(table) = &self.table {
            if let Some(h) = table.lookup(graph.name(goal), graph.name(from)) {
                return h;
            }
        }
        self.manhattan(graph, from, goal)
    }
}
