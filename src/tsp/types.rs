//! Run results and per-generation statistics.

use super::tour::Tour;

/// Result of [`TspGeneticSolver::run`](super::TspGeneticSolver::run) or
/// [`advance`](super::TspGeneticSolver::advance).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspResult {
    /// The best tour found since the population was initialized.
    pub best: Tour,

    /// Best cost (same as `best.cost()`).
    pub best_cost: f64,

    /// Generation counter at the end of the call.
    pub generations: usize,

    /// Population best cost per generation, starting with generation 0.
    pub best_cost_history: Vec<f64>,

    /// Population mean cost per generation, starting with generation 0.
    pub mean_cost_history: Vec<f64>,
}

/// Snapshot of the current population.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,
    pub best_cost: f64,
    pub mean_cost: f64,
    pub worst_cost: f64,
    /// Tours that use only existing edges.
    pub valid_tours: usize,
    /// Best tour found so far.
    pub best: Tour,
    /// Up to ten cheapest tours of the current population.
    pub top: Vec<Tour>,
}
