//! Permutation operators for tour routes.
//!
//! Routes are permutations of vertex ids (the start vertex excluded), so
//! every operator here keeps its output a permutation of its input.
//!
//! # Crossover
//!
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985), with fixed cut points
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct positions
//! - [`invert_mutation`]: reverse the segment between two distinct positions
//! - [`mutate`]: one of the two, chosen uniformly
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use std::collections::{HashMap, HashSet};

use rand::seq::index;
use rand::Rng;

use crate::graph::VertexId;

// ============================================================================
// Crossover
// ============================================================================

/// Clamps both cut points to `n - 1` and orders them.
///
/// # Panics
/// Panics if `n == 0`.
pub fn clamp_cut_points(cut_points: (usize, usize), n: usize) -> (usize, usize) {
    assert!(n > 0, "cannot cut an empty route");
    let a = cut_points.0.min(n - 1);
    let b = cut_points.1.min(n - 1);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Partially Mapped Crossover (PMX) with fixed cut points.
///
/// # Algorithm
///
/// 1. Clamp the cut points to the route and order them: `[start, end]`
/// 2. Child 1 starts as parent1 with parent2's segment; child 2 the mirror
/// 3. Outside the segment, a value that already appears in the segment is
///    replaced by following the segment mapping until it leaves the segment
///
/// Empty parents give empty children.
///
/// # Complexity
/// O(n) expected time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or are not permutations of
/// the same values.
pub fn pmx_crossover(
    parent1: &[VertexId],
    parent2: &[VertexId],
    cut_points: (usize, usize),
) -> (Vec<VertexId>, Vec<VertexId>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n == 0 {
        return (Vec::new(), Vec::new());
    }

    let (start, end) = clamp_cut_points(cut_points, n);

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    child1[start..=end].copy_from_slice(&parent2[start..=end]);
    child2[start..=end].copy_from_slice(&parent1[start..=end]);

    pmx_repair(&mut child1, start, end, parent2, parent1);
    pmx_repair(&mut child2, start, end, parent1, parent2);

    (child1, child2)
}

/// Resolves duplicates outside `[start, end]`.
///
/// `donor` supplied the child's segment; `recipient` supplied the rest.
fn pmx_repair(
    child: &mut [VertexId],
    start: usize,
    end: usize,
    donor: &[VertexId],
    recipient: &[VertexId],
) {
    let n = child.len();
    let segment: HashSet<VertexId> = donor[start..=end].iter().copied().collect();
    let donor_pos: HashMap<VertexId, usize> =
        donor.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    for i in (0..start).chain(end + 1..n) {
        let mut value = child[i];
        let mut hops = 0;
        while segment.contains(&value) {
            hops += 1;
            assert!(hops <= n, "parents must be permutations of the same values");
            value = recipient[donor_pos[&value]];
        }
        child[i] = value;
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// No-op for routes shorter than 2.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(route: &mut [VertexId], rng: &mut R) {
    if let Some((i, j)) = distinct_pair(route.len(), rng) {
        route.swap(i, j);
    }
}

/// Invert mutation: reverse the segment between two distinct random
/// positions, both ends included.
///
/// No-op for routes shorter than 2.
///
/// # Complexity
/// O(n) worst case
pub fn invert_mutation<R: Rng>(route: &mut [VertexId], rng: &mut R) {
    if let Some((i, j)) = distinct_pair(route.len(), rng) {
        route[i..=j].reverse();
    }
}

/// Applies [`swap_mutation`] or [`invert_mutation`] with equal probability.
pub fn mutate<R: Rng>(route: &mut [VertexId], rng: &mut R) {
    if rng.random_bool(0.5) {
        swap_mutation(route, rng);
    } else {
        invert_mutation(route, rng);
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct positions in `0..n`, ascending. `None` if `n < 2`.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    let picked = index::sample(rng, n, 2);
    let (a, b) = (picked.index(0), picked.index(1));
    Some(if a < b { (a, b) } else { (b, a) })
}

// ============================================================================
// Tests
// ============================================================================
