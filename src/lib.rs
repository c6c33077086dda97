//! Weighted undirected graphs and classic algorithms over them.
//!
//! - **Graph**: Named, optionally positioned vertices with weighted,
//!   de-duplicated undirected edges.
//! - **A\***: Best-first shortest path with a pluggable heuristic
//!   (Manhattan distance on vertex coordinates by default).
//! - **Coloring**: Welsh–Powell greedy coloring with validation and a
//!   step-by-step trace.
//! - **Planarity**: Fast necessary conditions followed by a low-point DFS
//!   interlacing test; heuristic, not an exact planarity algorithm.
//! - **TSP**: A generational genetic solver (tournament selection, PMX,
//!   swap/invert mutation, elitism) for closed tours.
//!
//! All algorithms borrow a [`graph::Graph`] immutably and report failures
//! through [`GraphError`]. Randomized parts take an optional seed and are
//! reproducible when one is given.

pub mod astar;
pub mod coloring;
pub mod error;
pub mod graph;
pub mod planarity;
pub mod random;
pub mod tsp;

pub use error::GraphError;
