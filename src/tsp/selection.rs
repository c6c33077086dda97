//! Tournament selection over a tour population.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

use super::tour::Tour;

/// Tournament selection: sample `k` distinct tours, return the index of the
/// cheapest.
///
/// `k` is clamped to `1..=population.len()`. Ties go to the competitor
/// sampled first.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Tour], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();
    let k = k.clamp(1, n);

    let mut competitors = index::sample(rng, n, k).into_iter();
    let mut best_idx = competitors.next().unwrap_or(0);
    for idx in competitors {
        if population[idx].cost() < population[best_idx].cost() {
            best_idx = idx;
        }
    }
    best_idx
}
