//! Permutation operators.
//!
//! Free functions over `&[usize]` tours. [`Genome`](super::Genome) wraps
//! them with the permutation invariant; they are public so other
//! permutation-encoded problems can reuse them.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): copies a window from one parent and fills the
//!   rest in the other parent's relative order.
//! - [`ordered_crossover_child`]: the deterministic single-child primitive.
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct positions.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Oliver, Smith & Holland (1987), "A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem"

use rand::Rng;

use crate::random::shuffle;

// ============================================================================
// Construction and validation
// ============================================================================

/// Uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}

/// Returns `true` iff `perm` holds every value of `0..n` exactly once.
///
/// The bound is strict: a value equal to `n` is out of range.
pub fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) with random cut points.
///
/// Returns `(child1, child2)` where `child1` keeps `parent1`'s window and
/// `child2` keeps `parent2`'s window, both over the same cut points.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (begin, end) = random_cut_points(n, rng);
    (
        ordered_crossover_child(parent1, parent2, begin, end),
        ordered_crossover_child(parent2, parent1, begin, end),
    )
}

/// Builds one OX child.
///
/// Positions in `begin..end` copy `primary` verbatim. Every other position,
/// in increasing index order, takes the next value of `secondary` that is
/// not inside `primary`'s window. `secondary` is scanned once, front to
/// back.
///
/// ```
/// use u_tour::ga::operators::ordered_crossover_child;
///
/// let child = ordered_crossover_child(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 3);
/// assert_eq!(child, vec![4, 1, 2, 3, 0]);
/// ```
///
/// # Panics
/// Panics if the parents differ in length, if `begin < end <= n` does not
/// hold, or if either parent is not a permutation of `0..n`.
pub fn ordered_crossover_child(
    primary: &[usize],
    secondary: &[usize],
    begin: usize,
    end: usize,
) -> Vec<usize> {
    let n = primary.len();
    assert_eq!(n, secondary.len(), "parents must have equal length");
    assert!(
        begin < end && end <= n,
        "cut points must satisfy begin < end <= n (begin={begin}, end={end}, n={n})"
    );
    assert!(is_valid_permutation(primary, n), "primary parent is not a permutation");
    assert!(is_valid_permutation(secondary, n), "secondary parent is not a permutation");

    let mut in_window = vec![false; n];
    for &v in &primary[begin..end] {
        in_window[v] = true;
    }

    let mut donor = secondary.iter().copied().filter(|&v| !in_window[v]);
    let child: Vec<usize> = (0..n)
        .map(|i| {
            if (begin..end).contains(&i) {
                primary[i]
            } else {
                donor
                    .next()
                    .expect("secondary parent has a value for every position outside the window")
            }
        })
        .collect();

    assert!(is_valid_permutation(&child, n), "crossover produced an invalid child");
    child
}

/// Draws cut points `(begin, end)` uniformly from `0..=n` with `begin < end`.
///
/// Pairs are resampled until the constraint holds.
///
/// # Panics
/// Panics if `n == 0`.
pub fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n > 0, "cannot cut an empty permutation");
    loop {
        let begin = rng.random_range(0..=n);
        let end = rng.random_range(0..=n);
        if begin < end {
            return (begin, end);
        }
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange the values at two distinct random positions.
///
/// Returns the swapped positions, or `None` when `perm` has fewer than two
/// elements (nothing to swap).
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) -> Option<(usize, usize)> {
    let n = perm.len();
    if n < 2 {
        return None;
    }
    let mut i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while i == j {
        i = rng.random_range(0..n);
        j = rng.random_range(0..n);
    }
    perm.swap(i, j);
    Some((i, j))
}

// ============================================================================
// Tests
// ============================================================================
