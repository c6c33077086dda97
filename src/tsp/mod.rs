//! Genetic solver for the closed traveling-salesman tour.
//!
//! Individuals are permutations of every vertex except a fixed start. A tour
//! that uses a missing edge is not discarded: each missing leg costs
//! [`TspConfig::missing_edge_penalty`], so evolution steers away from it.
//!
//! # Key Types
//!
//! - [`TspConfig`]: Algorithm parameters (population, rates, cut points, seed)
//! - [`TspGeneticSolver`]: Runs, steps, and continues the evolutionary loop
//! - [`Tour`]: An immutable tour with its cost
//! - [`TspResult`] / [`GenerationStats`]: Run results and population snapshots
//!
//! # Submodules
//!
//! - [`operators`]: PMX crossover with fixed cut points, swap and invert mutation
//! - [`selection`]: Tournament selection without replacement
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
pub mod operators;
pub mod selection;
mod solver;
mod tour;
mod types;

pub use config::{TspConfig, MIN_POPULATION_SIZE, MISSING_EDGE_PENALTY};
pub use solver::TspGeneticSolver;
pub use tour::{tour_cost, Tour, TourDisplay};
pub use types::{GenerationStats, TspResult};
