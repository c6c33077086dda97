//! A* shortest-path search.
//!
//! [`PathFinder`] runs a heuristic-guided best-first search from a start to a
//! goal vertex over a borrowed [`Graph`](crate::graph::Graph).
//!
//! # Key Types
//!
//! - [`PathFinder`]: the search, generic over its [`Heuristic`]
//! - [`SearchOutcome`]: either a [`ShortestPath`] or `NoPathFound`
//! - [`ManhattanHeuristic`]: scaled L1 distance with an optional
//!   [`HeuristicTable`] override for one goal
//! - [`ZeroHeuristic`]: reduces A* to Dijkstra
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"

mod finder;
mod heuristic;
mod types;

pub use finder::PathFinder;
pub use heuristic::{Heuristic, HeuristicTable, ManhattanHeuristic, ZeroHeuristic};
pub use types::{PathDetails, PathSegment, SearchOutcome, ShortestPath};
