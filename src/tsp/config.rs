//! TSP genetic solver configuration.
//!
//! [`TspConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GraphError;

/// Smallest accepted population.
pub const MIN_POPULATION_SIZE: usize = 100;

/// Cost charged for each tour leg whose edge is absent from the graph.
pub const MISSING_EDGE_PENALTY: f64 = 999_999.0;

/// Configuration for [`TspGeneticSolver`](super::TspGeneticSolver).
///
/// # Defaults
///
/// ```
/// use u_graphkit::tsp::TspConfig;
///
/// let config = TspConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.cut_points, (2, 5));
/// assert_eq!(config.elite_count(), 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_graphkit::tsp::TspConfig;
///
/// let config = TspConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.05)
///     .with_cut_points(1, 4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspConfig {
    /// Number of tours in the population. At least [`MIN_POPULATION_SIZE`].
    pub population_size: usize,

    /// Generations evolved by [`run`](super::TspGeneticSolver::run).
    pub max_generations: usize,

    /// Competitors per tournament, sampled without replacement.
    pub tournament_size: usize,

    /// Probability of applying PMX to a selected pair (0.0–1.0).
    ///
    /// Otherwise the children are copies of the parents.
    pub crossover_rate: f64,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// PMX segment bounds, inclusive. Clamped to the route length at use.
    pub cut_points: (usize, usize),

    /// Fraction of the population replaced each generation (0.0–1.0).
    ///
    /// The remaining best tours survive unchanged.
    pub replacement_fraction: f64,

    /// Cost of each leg with no edge in the graph.
    pub missing_edge_penalty: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            population_size: MIN_POPULATION_SIZE,
            max_generations: 20,
            tournament_size: 3,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            cut_points: (2, 5),
            replacement_fraction: 0.5,
            missing_edge_penalty: MISSING_EDGE_PENALTY,
            seed: None,
        }
    }
}

impl TspConfig {
    /// Sets the population size, raised to at least [`MIN_POPULATION_SIZE`].
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n.max(MIN_POPULATION_SIZE);
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_cut_points(mut self, p1: usize, p2: usize) -> Self {
        self.cut_points = (p1, p2);
        self
    }

    pub fn with_replacement_fraction(mut self, fraction: f64) -> Self {
        self.replacement_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn with_missing_edge_penalty(mut self, penalty: f64) -> Self {
        self.missing_edge_penalty = penalty;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tours carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        let replaced = (self.population_size as f64 * self.replacement_fraction) as usize;
        self.population_size.saturating_sub(replaced)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidConfig`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), GraphError> {
        let invalid = |msg: &str| Err(GraphError::InvalidConfig(msg.to_owned()));

        if self.population_size < MIN_POPULATION_SIZE {
            return invalid("population_size must be at least 100");
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return invalid("crossover_rate must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid("mutation_rate must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.replacement_fraction) {
            return invalid("replacement_fraction must be within [0, 1]");
        }
        if self.elite_count() == 0 {
            return invalid("replacement_fraction too high: no tour survives a generation");
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return invalid("tournament_size must be between 1 and population_size");
        }
        if !self.missing_edge_penalty.is_finite() || self.missing_edge_penalty < 0.0 {
            return invalid("missing_edge_penalty must be finite and non-negative");
        }
        Ok(())
    }
}
