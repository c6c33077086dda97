//! Weighted undirected graph.
//!
//! [`Graph`] stores vertices densely (ids are insertion indices), an edge list
//! in insertion order, and an adjacency index mirroring it. Every algorithm in
//! this crate borrows the graph immutably and reads it through the query
//! methods below.
//!
//! # Example
//!
//! ```
//! use u_graphkit::graph::Graph;
//!
//! let mut g = Graph::new();
//! let a = g.add_vertex_at("A", 0.0, 0.0);
//! let b = g.add_vertex_at("B", 1.0, 0.0);
//! assert!(g.add_edge(a, b, 4.0).unwrap());
//! assert!(!g.add_edge(b, a, 9.0).unwrap()); // duplicate: no-op
//! assert_eq!(g.edge_weight(a, b), Ok(Some(4.0)));
//! ```

mod types;

use std::fmt;

use crate::error::GraphError;

pub use types::{Coord, Edge, Vertex, VertexId};

/// Adjacency-list weighted undirected graph.
///
/// Invariant: each edge in `edges` appears exactly once in the adjacency
/// entry of each endpoint.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(VertexId, f64)>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `n` vertices.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(n),
            edges: Vec::new(),
            adjacency: Vec::with_capacity(n),
        }
    }

    /// Adds a vertex and returns its id.
    ///
    /// When `name` is `None` the vertex is named after its id.
    pub fn add_vertex(&mut self, name: Option<&str>, coord: Option<Coord>) -> VertexId {
        let id = self.vertices.len();
        let name = name.map_or_else(|| id.to_string(), str::to_owned);
        self.vertices.push(Vertex { name, coord });
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds a named vertex without coordinates.
    pub fn add_named_vertex(&mut self, name: &str) -> VertexId {
        self.add_vertex(Some(name), None)
    }

    /// Adds a named vertex at `(x, y)`.
    pub fn add_vertex_at(&mut self, name: &str, x: f64, y: f64) -> VertexId {
        self.add_vertex(Some(name), Some(Coord::new(x, y)))
    }

    /// Adds the undirected edge `u -- v`.
    ///
    /// Returns `Ok(false)` if the pair is already connected; the first
    /// weight is kept.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidVertex`] if either endpoint is absent
    /// - [`GraphError::SelfLoop`] if `u == v`
    /// - [`GraphError::InvalidWeight`] if the weight is negative or not finite
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        if self.adjacency[u].iter().any(|&(n, _)| n == v) {
            return Ok(false);
        }

        self.edges.push(Edge { u, v, weight });
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        Ok(true)
    }

    /// Returns `Err(InvalidVertex)` unless `v` is in the graph.
    pub fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(v))
        }
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.vertices.len()
    }

    /// Neighbors of `v` with edge weights, in insertion order.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `v` is not in the graph.
    pub fn neighbors(&self, v: VertexId) -> Result<&[(VertexId, f64)], GraphError> {
        self.check_vertex(v)?;
        Ok(self.adjacent(v))
    }

    /// Weight of the edge `u -- v`, `None` if the vertices are not adjacent.
    /// O(degree(u)).
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either endpoint is not in the graph.
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> Result<Option<f64>, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.weight_between(u, v))
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        Ok(self.edge_weight(u, v)?.is_some())
    }

    pub fn degree(&self, v: VertexId) -> Result<usize, GraphError> {
        Ok(self.neighbors(v)?.len())
    }

    /// All vertex ids in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        0..self.vertices.len()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, v: VertexId) -> Result<&Vertex, GraphError> {
        self.vertices.get(v).ok_or(GraphError::InvalidVertex(v))
    }

    pub fn vertex_name(&self, v: VertexId) -> Result<&str, GraphError> {
        Ok(&self.vertex(v)?.name)
    }

    /// Position of `v`, `None` if it was added without one.
    pub fn vertex_coord(&self, v: VertexId) -> Result<Option<Coord>, GraphError> {
        Ok(self.vertex(v)?.coord)
    }

    /// First vertex carrying `name`.
    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.vertices.iter().position(|vx| vx.name == name)
    }

    // Unchecked accessors for ids the algorithms already validated. They
    // panic on ids outside the graph.

    pub(crate) fn adjacent(&self, v: VertexId) -> &[(VertexId, f64)] {
        &self.adjacency[v]
    }

    pub(crate) fn weight_between(&self, u: VertexId, v: VertexId) -> Option<f64> {
        self.adjacency[u]
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, w)| w)
    }

    pub(crate) fn name(&self, v: VertexId) -> &str {
        &self.vertices[v].name
    }

    pub(crate) fn coord(&self, v: VertexId) -> Option<Coord> {
        self.vertices[v].coord
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices and {} edges",
            self.vertex_count(),
            self.edge_count()
        )?;
        let names: Vec<&str> = self.vertices.iter().map(|v| v.name.as_str()).collect();
        writeln!(f, "Vertices: {}", names.join(", "))?;
        writeln!(f, "Edges:")?;
        for e in &self.edges {
            writeln!(
                f,
                "  {} -- {} (weight: {})",
                self.vertices[e.u].name, self.vertices[e.v].name, e.weight
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new();
        let a = g.add_vertex_at("A", 0.0, 0.0);
        let b = g.add_vertex_at("B", 1.0, 0.0);
        let c = g.add_vertex_at("C", 1.0, 1.0);
        g.add_edge(a, b, 1.0).unwrap();
        g.add_edge(b, c, 1.0).unwrap();
        g.add_edge(a, c, 3.0).unwrap();
        g
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut g = Graph::new();
        assert_eq!(g.add_named_vertex("x"), 0);
        assert_eq!(g.add_vertex(None, None), 1);
        assert_eq!(g.vertex_name(1), Ok("1"));
        assert_eq!(g.vertex_by_name("x"), Some(0));
    }

    #[test]
    fn test_duplicate_edge_is_noop() {
        let mut g = triangle();
        assert_eq!(g.add_edge(1, 0, 42.0), Ok(false));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_weight(0, 1), Ok(Some(1.0)));
        assert_eq!(g.degree(0), Ok(2));
    }

    #[test]
    fn test_missing_vertex_rejected() {
        let mut g = triangle();
        assert_eq!(g.add_edge(0, 9, 1.0), Err(GraphError::InvalidVertex(9)));
        assert_eq!(g.add_edge(7, 0, 1.0), Err(GraphError::InvalidVertex(7)));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_self_loop_and_weight_rejected() {
        let mut g = triangle();
        assert_eq!(g.add_edge(2, 2, 1.0), Err(GraphError::SelfLoop(2)));
        assert!(matches!(
            g.add_edge(0, 1, -1.0),
            Err(GraphError::InvalidWeight(_))
        ));
        assert!(matches!(
            g.add_edge(0, 1, f64::NAN),
            Err(GraphError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_adjacency_mirrors_edges() {
        let g = triangle();
        for e in g.edges() {
            let from_u = g.adjacent(e.u).iter().filter(|&&(n, _)| n == e.v).count();
            let from_v = g.adjacent(e.v).iter().filter(|&&(n, _)| n == e.u).count();
            assert_eq!((from_u, from_v), (1, 1));
        }
        let total_degree: usize = g.vertices().map(|v| g.adjacent(v).len()).sum();
        assert_eq!(total_degree, 2 * g.edge_count());
    }

    #[test]
    fn test_unknown_vertex_queries() {
        let g = triangle();
        assert_eq!(g.neighbors(99), Err(GraphError::InvalidVertex(99)));
        assert_eq!(g.degree(7), Err(GraphError::InvalidVertex(7)));
        assert_eq!(g.edge_weight(7, 8), Err(GraphError::InvalidVertex(7)));
        assert_eq!(g.edge_weight(0, 8), Err(GraphError::InvalidVertex(8)));
        assert_eq!(g.has_edge(0, 8), Err(GraphError::InvalidVertex(8)));
        assert_eq!(g.vertex_name(99), Err(GraphError::InvalidVertex(99)));
        assert_eq!(g.vertex_coord(99), Err(GraphError::InvalidVertex(99)));
        assert!(g.vertex(99).is_err());
    }

    #[test]
    fn test_known_vertex_queries() {
        let g = triangle();
        assert_eq!(g.neighbors(1), Ok(&[(0, 1.0), (2, 1.0)][..]));
        assert_eq!(g.edge_weight(0, 2), Ok(Some(3.0)));
        assert_eq!(g.has_edge(0, 2), Ok(true));
        assert_eq!(g.vertex_coord(2), Ok(Some(Coord::new(1.0, 1.0))));

        let mut g = Graph::new();
        let a = g.add_named_vertex("A");
        let b = g.add_named_vertex("B");
        assert_eq!(g.edge_weight(a, b), Ok(None));
        assert_eq!(g.vertex_coord(a), Ok(None));
    }

    #[test]
    fn test_display_lists_edges() {
        let text = triangle().to_string();
        assert!(text.starts_with("Graph with 3 vertices and 3 edges"));
        assert!(text.contains("A -- C (weight: 3)"));
    }
}
