//! Parent selection.
//!
//! Fitness-proportional (roulette wheel) sampling over a slice of fitness
//! values, where higher fitness is better.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Roulette wheel selection.
///
/// Draws a threshold `T` uniformly from `[0, S]` where `S` is the fitness
/// sum, then walks the slice in order and returns the first index whose
/// running sum reaches `T`.
///
/// When `S` is zero or not finite the wheel is meaningless and the index is
/// drawn uniformly instead.
///
/// # Complexity
/// O(n) per selection
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn roulette<R: Rng>(fitnesses: &[f64], rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");

    let n = fitnesses.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = fitnesses.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        tracing::trace!(total, "degenerate fitness sum, selecting uniformly");
        return uniform(n, rng);
    }

    let threshold = rng.random_range(0.0..=total);
    let mut cumulative = 0.0;
    for (i, &f) in fitnesses.iter().enumerate() {
        cumulative += f;
        if cumulative >= threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Uniform selection over `0..n`.
///
/// # Panics
/// Panics if `n == 0`.
pub fn uniform<R: Rng>(n: usize, rng: &mut R) -> usize {
    assert!(n > 0, "cannot select from empty population");
    rng.random_range(0..n)
}
