//! Tour genome.
//!
//! A [`Genome`] is an owned permutation of point indices. Every operator
//! re-checks the permutation invariant and panics if it is broken: a
//! corrupt tour would make every later fitness comparison meaningless.

use rand::Rng;

use super::operators::{
    is_valid_permutation, order_crossover, ordered_crossover_child, random_permutation,
    swap_mutation,
};
use crate::cities::TourLength;
use crate::error::GaError;

/// Tour length scale in the fitness curve.
pub const FITNESS_SCALE: f64 = 10_000.0;

/// Exponent in the fitness curve. Large values sharpen selection pressure.
pub const FITNESS_EXPONENT: i32 = 30;

/// One candidate tour.
///
/// Fitness is not stored: it is recomputed from the order and the distance
/// provider on every call, so a mutated genome never reports a stale value.
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Genome {
    order: Vec<usize>,
}

impl TryFrom<Vec<usize>> for Genome {
    type Error = GaError;

    /// Fallible [`Genome::from_order`]; rejects anything but a permutation.
    fn try_from(order: Vec<usize>) -> Result<Self, Self::Error> {
        if is_valid_permutation(&order, order.len()) {
            Ok(Self { order })
        } else {
            Err(GaError::InvalidPermutation(order))
        }
    }
}

impl From<Genome> for Vec<usize> {
    fn from(genome: Genome) -> Self {
        genome.order
    }
}

impl Clone for Genome {
    /// Deep copy; the copy is re-checked like any new genome.
    fn clone(&self) -> Self {
        Self::from_order(self.order.clone())
    }
}

impl Genome {
    /// Creates a uniformly random tour over `distances.point_count()` points.
    pub fn random<D: TourLength + ?Sized, R: Rng>(distances: &D, rng: &mut R) -> Self {
        Self::from_order(random_permutation(distances.point_count(), rng))
    }

    /// Wraps an explicit visiting order.
    ///
    /// # Panics
    /// Panics if `order` is not a permutation of `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Self {
        let genome = Self { order };
        genome.assert_valid();
        genome
    }

    /// The visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the genome, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Swaps two distinct random positions. No-op for fewer than two points.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        swap_mutation(&mut self.order, rng);
        self.assert_valid();
    }

    /// Ordered crossover with random cut points.
    ///
    /// Returns `(child1, child2)`: `child1` keeps `self`'s window and takes
    /// the rest in `other`'s order; `child2` is the mirror image.
    ///
    /// # Panics
    /// Panics if the parents differ in length or are empty.
    pub fn recombine<R: Rng>(&self, other: &Genome, rng: &mut R) -> (Genome, Genome) {
        let (first, second) = order_crossover(&self.order, &other.order, rng);
        (Genome::from_order(first), Genome::from_order(second))
    }

    /// Ordered crossover over the fixed window `begin..end`.
    ///
    /// # Panics
    /// Panics unless `begin < end <= self.len()` and both parents are valid.
    pub fn recombine_at(&self, other: &Genome, begin: usize, end: usize) -> (Genome, Genome) {
        let first = ordered_crossover_child(&self.order, &other.order, begin, end);
        let second = ordered_crossover_child(&other.order, &self.order, begin, end);
        (Genome::from_order(first), Genome::from_order(second))
    }

    /// Closed tour length under `distances`.
    ///
    /// The genome must cover exactly `distances.point_count()` points;
    /// debug builds assert it.
    pub fn tour_length<D: TourLength + ?Sized>(&self, distances: &D) -> f64 {
        debug_assert_eq!(
            self.len(),
            distances.point_count(),
            "genome length must match the point count"
        );
        distances.tour_length(&self.order)
    }

    /// Selection score; higher means a shorter tour.
    ///
    /// `1 / (length / 10000)^30`, clamped to `f64::MAX` where the curve
    /// would overflow (including a zero-length tour). A NaN length scores 0.
    pub fn fitness<D: TourLength + ?Sized>(&self, distances: &D) -> f64 {
        fitness_for_length(self.tour_length(distances))
    }

    /// Whether the order is a permutation of `0..len`.
    pub fn is_valid(&self) -> bool {
        is_valid_permutation(&self.order, self.order.len())
    }

    fn assert_valid(&self) {
        assert!(
            self.is_valid(),
            "genome order is not a permutation: {:?}",
            self.order
        );
    }
}

/// Maps a tour length to its fitness.
///
/// NaN lengths map to 0.0 so a broken distance provider never wins
/// selection.
pub fn fitness_for_length(length: f64) -> f64 {
    if length.is_nan() {
        return 0.0;
    }
    let fitness = 1.0 / (length / FITNESS_SCALE).powi(FITNESS_EXPONENT);
    if fitness == f64::INFINITY {
        f64::MAX
    } else {
        fitness
    }
}
