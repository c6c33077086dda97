//! Plain data carried by the graph.

/// Vertex identifier, assigned densely by insertion order.
pub type VertexId = usize;

/// A 2-D position, used only as heuristic input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to another coordinate.
    pub fn manhattan(&self, other: &Coord) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Per-vertex metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// Display name. Defaults to the decimal id.
    pub name: String,
    pub coord: Option<Coord>,
}

/// An undirected weighted edge as inserted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: f64,
}
