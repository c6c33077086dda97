//! Generational loop for the TSP genetic solver.
//!
//! [`TspGeneticSolver`] orchestrates the evolutionary process:
//! initialization → selection → crossover → mutation → elitist replacement.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use super::config::TspConfig;
use super::operators::{mutate, pmx_crossover};
use super::selection::tournament;
use super::tour::Tour;
use super::types::{GenerationStats, TspResult};
use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::random::{rng_from_seed, shuffle};

/// Tours listed in [`GenerationStats::top`].
const TOP_TOURS: usize = 10;

/// Genetic solver for the closed tour through every vertex of a graph.
///
/// Each generation keeps the cheapest
/// [`elite_count`](TspConfig::elite_count) tours and fills the rest of the
/// population with PMX children of tournament-selected parents. The
/// population is replaced as a whole and kept sorted by cost, so the best
/// cost per generation never increases.
///
/// The population is created lazily: by [`run`](Self::run), or by the first
/// [`step`](Self::step) or [`advance`](Self::advance).
///
/// # Examples
///
/// ```
/// use u_graphkit::graph::Graph;
/// use u_graphkit::tsp::{TspConfig, TspGeneticSolver};
///
/// let mut g = Graph::new();
/// for name in ["A", "B", "C", "D"] {
///     g.add_named_vertex(name);
/// }
/// for (u, v, w) in [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0), (0, 2, 5.0)] {
///     g.add_edge(u, v, w).unwrap();
/// }
///
/// let config = TspConfig::default().with_max_generations(10).with_seed(42);
/// let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
/// let result = solver.run().unwrap();
/// assert_eq!(result.best_cost, 4.0);
/// assert_eq!(result.best_cost_history.len(), 11);
/// ```
pub struct TspGeneticSolver<'g> {
    graph: &'g Graph,
    start: VertexId,
    config: TspConfig,
    cities: Vec<VertexId>,
    rng: StdRng,
    /// Sorted by cost, cheapest first. Empty until initialized.
    ///
    /// Elites lead the next generation and the sort is stable, so the first
    /// tour is also the best found since initialization.
    population: Vec<Tour>,
    generation: usize,
    best_cost_history: Vec<f64>,
    mean_cost_history: Vec<f64>,
}

impl<'g> TspGeneticSolver<'g> {
    /// Creates a solver for tours starting and ending at `start`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidConfig`] if `config` fails
    ///   [`TspConfig::validate`]
    /// - [`GraphError::InvalidVertex`] if `start` is not in the graph
    pub fn new(graph: &'g Graph, start: VertexId, config: TspConfig) -> Result<Self, GraphError> {
        config.validate()?;
        graph.check_vertex(start)?;

        let cities = graph.vertices().filter(|&v| v != start).collect();
        let rng = rng_from_seed(config.seed);

        Ok(Self {
            graph,
            start,
            config,
            cities,
            rng,
            population: Vec::new(),
            generation: 0,
            best_cost_history: Vec::new(),
            mean_cost_history: Vec::new(),
        })
    }

    /// Creates a fresh random population as generation 0.
    ///
    /// Resets the generation counter, the best tour and both histories.
    pub fn initialize(&mut self) -> Result<(), GraphError> {
        let mut tours = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let mut route = self.cities.clone();
            shuffle(&mut route, &mut self.rng);
            tours.push(self.tour(route)?);
        }

        self.population = sorted(tours);
        self.generation = 0;
        self.best_cost_history.clear();
        self.mean_cost_history.clear();
        self.record();

        debug!(
            population = self.population.len(),
            cities = self.cities.len(),
            best_cost = self.best_cost_history.last().copied(),
            "population initialized"
        );
        Ok(())
    }

    /// Evolves one generation, initializing first if needed.
    pub fn step(&mut self) -> Result<(), GraphError> {
        if self.population.is_empty() {
            self.initialize()?;
        }

        self.population = self.breed()?;
        self.generation += 1;
        self.record();

        debug!(
            generation = self.generation,
            best_cost = self.best_cost_history.last().copied(),
            mean_cost = self.mean_cost_history.last().copied(),
            "generation evolved"
        );
        Ok(())
    }

    /// Starts from a fresh population and evolves
    /// [`max_generations`](TspConfig::max_generations) generations.
    pub fn run(&mut self) -> Result<TspResult, GraphError> {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after generation 0 and
    /// after every evolved generation.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<TspResult, GraphError>
    where
        F: FnMut(&Self),
    {
        self.initialize()?;
        observer(&*self);
        for _ in 0..self.config.max_generations {
            self.step()?;
            observer(&*self);
        }
        Ok(self.result())
    }

    /// Continues evolution for `generations` more generations, keeping the
    /// current population and histories.
    pub fn advance(&mut self, generations: usize) -> Result<TspResult, GraphError> {
        self.advance_with(generations, |_| {})
    }

    /// Like [`advance`](Self::advance) with an observer. If the population
    /// was not yet created, the observer also sees generation 0.
    pub fn advance_with<F>(
        &mut self,
        generations: usize,
        mut observer: F,
    ) -> Result<TspResult, GraphError>
    where
        F: FnMut(&Self),
    {
        if self.population.is_empty() {
            self.initialize()?;
            observer(&*self);
        }
        for _ in 0..generations {
            self.step()?;
            observer(&*self);
        }
        Ok(self.result())
    }

    /// Statistics of the current population. `None` before initialization.
    pub fn statistics(&self) -> Option<GenerationStats> {
        let first = self.population.first()?;
        let last = self.population.last()?;
        let penalty = self.config.missing_edge_penalty;

        Some(GenerationStats {
            generation: self.generation,
            best_cost: first.cost(),
            mean_cost: mean_cost(&self.population),
            worst_cost: last.cost(),
            valid_tours: self
                .population
                .iter()
                .filter(|t| t.is_valid(penalty))
                .count(),
            best: first.clone(),
            top: self.best_individuals(TOP_TOURS).to_vec(),
        })
    }

    /// The `n` cheapest tours of the current population, cheapest first.
    pub fn best_individuals(&self, n: usize) -> &[Tour] {
        &self.population[..n.min(self.population.len())]
    }

    /// Population standard deviation of tour costs.
    ///
    /// 0 for fewer than two tours or when costs are not finite.
    pub fn diversity(&self) -> f64 {
        let n = self.population.len();
        if n < 2 {
            return 0.0;
        }
        let mean = mean_cost(&self.population);
        if !mean.is_finite() {
            return 0.0;
        }
        let variance = self
            .population
            .iter()
            .map(|t| (t.cost() - mean).powi(2))
            .sum::<f64>()
            / n as f64;
        variance.sqrt()
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn config(&self) -> &TspConfig {
        &self.config
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn is_initialized(&self) -> bool {
        !self.population.is_empty()
    }

    /// Best tour found since initialization.
    pub fn best(&self) -> Option<&Tour> {
        self.population.first()
    }

    /// Current population, cheapest first.
    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    pub fn best_cost_history(&self) -> &[f64] {
        &self.best_cost_history
    }

    pub fn mean_cost_history(&self) -> &[f64] {
        &self.mean_cost_history
    }

    fn tour(&self, route: Vec<VertexId>) -> Result<Tour, GraphError> {
        Tour::new(route, self.start, self.graph, self.config.missing_edge_penalty)
    }

    /// Elites plus children up to the population size, sorted.
    fn breed(&mut self) -> Result<Vec<Tour>, GraphError> {
        let size = self.config.population_size;
        let elite_count = self.config.elite_count().min(self.population.len());
        let mut next: Vec<Tour> = self.population[..elite_count].to_vec();

        while next.len() < size {
            let p1 = tournament(&self.population, self.config.tournament_size, &mut self.rng);
            let p2 = tournament(&self.population, self.config.tournament_size, &mut self.rng);
            let (parent1, parent2) = (self.population[p1].route(), self.population[p2].route());

            let (mut child1, mut child2) = if self.rng.random_bool(self.config.crossover_rate) {
                pmx_crossover(parent1, parent2, self.config.cut_points)
            } else {
                (parent1.to_vec(), parent2.to_vec())
            };

            for child in [&mut child1, &mut child2] {
                if self.rng.random_bool(self.config.mutation_rate) {
                    mutate(child, &mut self.rng);
                }
            }

            next.push(self.tour(child1)?);
            if next.len() < size {
                next.push(self.tour(child2)?);
            }
        }

        Ok(sorted(next))
    }

    fn record(&mut self) {
        if let Some(top) = self.population.first() {
            self.best_cost_history.push(top.cost());
            self.mean_cost_history.push(mean_cost(&self.population));
        }
    }

    /// Summary of the current state. Only called once a population exists;
    /// `new` guarantees it holds at least one tour.
    fn result(&self) -> TspResult {
        let best = self.population[0].clone();
        TspResult {
            best_cost: best.cost(),
            best,
            generations: self.generation,
            best_cost_history: self.best_cost_history.clone(),
            mean_cost_history: self.mean_cost_history.clone(),
        }
    }
}

/// Stable sort by cost, cheapest first.
fn sorted(mut tours: Vec<Tour>) -> Vec<Tour> {
    tours.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
    tours
}

fn mean_cost(tours: &[Tour]) -> f64 {
    if tours.is_empty() {
        return 0.0;
    }
    tours.iter().map(Tour::cost).sum::<f64>() / tours.len() as f64
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::tour_cost;

    /// Eight cities; F-N-K-G-H-E-C-L-F is one valid tour.
    fn eight_cities() -> Graph {
        let mut g = Graph::new();
        for name in ["F", "N", "C", "L", "K", "E", "H", "G"] {
            g.add_named_vertex(name);
        }
        let edges = [
            ("F", "N", 30.0),
            ("F", "C", 20.0),
            ("F", "L", 10.0),
            ("N", "K", 60.0),
            ("N", "C", 47.0),
            ("K", "G", 90.0),
            ("K", "E", 10.0),
            ("K", "C", 70.0),
            ("C", "L", 10.0),
            ("C", "E", 10.0),
            ("E", "G", 40.0),
            ("E", "H", 60.0),
            ("E", "L", 5.0),
            ("L", "H", 40.0),
            ("H", "G", 80.0),
            ("F", "H", 55.0),
            ("K", "H", 73.0),
        ];
        for (a, b, w) in edges {
            let u = g.vertex_by_name(a).unwrap();
            let v = g.vertex_by_name(b).unwrap();
            g.add_edge(u, v, w).unwrap();
        }
        g
    }

    fn complete(weights: &[[f64; 6]; 6]) -> Graph {
        let mut g = Graph::new();
        for _ in 0..6 {
            g.add_vertex(None, None);
        }
        for u in 0..6 {
            for v in (u + 1)..6 {
                g.add_edge(u, v, weights[u][v]).unwrap();
            }
        }
        g
    }

    fn brute_force_optimum(g: &Graph) -> f64 {
        fn permute(rest: &mut [usize], k: usize, g: &Graph, best: &mut f64) {
            if k == rest.len() {
                let cost = tour_cost(g, 0, rest, f64::INFINITY).unwrap();
                *best = best.min(cost);
                return;
            }
            for i in k..rest.len() {
                rest.swap(k, i);
                permute(rest, k + 1, g, best);
                rest.swap(k, i);
            }
        }
        let mut rest: Vec<usize> = (1..g.vertex_count()).collect();
        let mut best = f64::INFINITY;
        permute(&mut rest, 0, g, &mut best);
        best
    }

    #[test]
    fn test_finds_valid_tour() {
        let g = eight_cities();
        let config = TspConfig::default()
            .with_max_generations(50)
            .with_mutation_rate(0.2)
            .with_seed(42);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
        let result = solver.run().unwrap();

        assert!(
            result.best_cost < 999_999.0,
            "expected a tour without missing edges, got {}",
            result.best_cost
        );
        let full = result.best.full_route();
        assert_eq!(full.len(), 9);
        assert_eq!(full[0], 0);
        assert_eq!(full[8], 0);
    }

    #[test]
    fn test_reaches_optimum_on_complete_graph() {
        let weights = [
            [0.0, 12.0, 29.0, 22.0, 13.0, 24.0],
            [12.0, 0.0, 19.0, 3.0, 25.0, 6.0],
            [29.0, 19.0, 0.0, 21.0, 23.0, 28.0],
            [22.0, 3.0, 21.0, 0.0, 4.0, 5.0],
            [13.0, 25.0, 23.0, 4.0, 0.0, 16.0],
            [24.0, 6.0, 28.0, 5.0, 16.0, 0.0],
        ];
        let g = complete(&weights);
        let optimum = brute_force_optimum(&g);

        let config = TspConfig::default()
            .with_max_generations(50)
            .with_mutation_rate(0.3)
            .with_seed(7);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
        let result = solver.run().unwrap();
        assert_eq!(result.best_cost, optimum);
    }

    #[test]
    fn test_best_cost_history_non_increasing() {
        let g = eight_cities();
        let config = TspConfig::default().with_max_generations(30).with_seed(42);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
        let result = solver.run().unwrap();

        assert_eq!(result.best_cost_history.len(), 31);
        assert_eq!(result.mean_cost_history.len(), 31);
        for window in result.best_cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost should be monotonically non-increasing with elitism: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.best_cost, *result.best_cost_history.last().unwrap());
    }

    #[test]
    fn test_best_tour_survives_each_generation() {
        let g = eight_cities();
        let config = TspConfig::default().with_seed(5);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
        assert!(solver.best().is_none());

        solver.initialize().unwrap();
        let mut best = solver.best().unwrap().clone();
        for _ in 0..15 {
            solver.step().unwrap();
            let current = solver.best().unwrap();
            assert!(current.cost() <= best.cost());
            if current.cost() == best.cost() {
                assert_eq!(current, &best);
            }
            best = current.clone();
        }

        let result = solver.advance(0).unwrap();
        assert_eq!(result.best, best);
        assert_eq!(result.best_cost, best.cost());
        assert_eq!(result.generations, 15);
    }

    #[test]
    fn test_same_seed_same_run() {
        let g = eight_cities();
        let config = TspConfig::default().with_max_generations(10).with_seed(123);

        let a = TspGeneticSolver::new(&g, 0, config.clone())
            .unwrap()
            .run()
            .unwrap();
        let b = TspGeneticSolver::new(&g, 0, config).unwrap().run().unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost_history, b.best_cost_history);
        assert_eq!(a.mean_cost_history, b.mean_cost_history);
    }

    #[test]
    fn test_advance_accumulates() {
        let g = eight_cities();
        let config = TspConfig::default().with_max_generations(5).with_seed(42);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
        assert!(!solver.is_initialized());

        solver.run().unwrap();
        assert_eq!(solver.generation(), 5);

        let result = solver.advance(3).unwrap();
        assert_eq!(result.generations, 8);
        assert_eq!(result.best_cost_history.len(), 9);

        // A new run starts over.
        let result = solver.run().unwrap();
        assert_eq!(result.generations, 5);
        assert_eq!(result.best_cost_history.len(), 6);
    }

    #[test]
    fn test_advance_initializes_lazily() {
        let g = eight_cities();
        let config = TspConfig::default().with_seed(42);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();

        let mut seen = Vec::new();
        solver
            .advance_with(2, |s| seen.push(s.generation()))
            .unwrap();
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_run_with_notifies_every_generation() {
        let g = eight_cities();
        let config = TspConfig::default().with_max_generations(4).with_seed(42);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();

        let mut seen = Vec::new();
        solver.run_with(|s| seen.push(s.generation())).unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_step_initializes_lazily() {
        let g = eight_cities();
        let config = TspConfig::default().with_seed(42);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
        solver.step().unwrap();
        assert_eq!(solver.generation(), 1);
        assert_eq!(solver.population().len(), 100);
        assert_eq!(solver.best_cost_history().len(), 2);
    }

    #[test]
    fn test_statistics() {
        let g = eight_cities();
        let config = TspConfig::default().with_max_generations(5).with_seed(42);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
        assert!(solver.statistics().is_none());

        solver.run().unwrap();
        let stats = solver.statistics().unwrap();
        assert_eq!(stats.generation, 5);
        assert_eq!(stats.top.len(), 10);
        assert!(stats.best_cost <= stats.mean_cost);
        assert!(stats.mean_cost <= stats.worst_cost);
        assert!(stats.valid_tours <= 100);
        assert_eq!(stats.best.cost(), solver.best().unwrap().cost());
        for window in stats.top.windows(2) {
            assert!(window[0].cost() <= window[1].cost());
        }
        assert!(solver.diversity() >= 0.0);
        assert_eq!(solver.best_individuals(3).len(), 3);
        assert_eq!(solver.best_individuals(1000).len(), 100);
    }

    #[test]
    fn test_population_stays_permutations() {
        let g = eight_cities();
        let config = TspConfig::default()
            .with_max_generations(10)
            .with_mutation_rate(0.5)
            .with_seed(9);
        let mut solver = TspGeneticSolver::new(&g, 3, config).unwrap();
        solver.run().unwrap();
        for tour in solver.population() {
            let mut route = tour.route().to_vec();
            route.sort_unstable();
            assert_eq!(route, vec![0, 1, 2, 4, 5, 6, 7]);
        }
    }

    #[test]
    fn test_invalid_start() {
        let g = eight_cities();
        assert_eq!(
            TspGeneticSolver::new(&g, 42, TspConfig::default()).err(),
            Some(GraphError::InvalidVertex(42))
        );
    }

    #[test]
    fn test_invalid_config() {
        let g = eight_cities();
        let config = TspConfig::default().with_replacement_fraction(1.0);
        assert!(matches!(
            TspGeneticSolver::new(&g, 0, config),
            Err(GraphError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut g = Graph::new();
        g.add_named_vertex("A");
        let config = TspConfig::default().with_max_generations(2).with_seed(1);
        let mut solver = TspGeneticSolver::new(&g, 0, config).unwrap();
        let result = solver.run().unwrap();
        assert!(result.best_cost.is_infinite());
        assert_eq!(solver.diversity(), 0.0);
    }
}
