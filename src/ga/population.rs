//! Generational population (deme).
//!
//! [`Population`] owns every [`Genome`] of the current generation. Each
//! call to [`advance_generation`](Population::advance_generation) breeds a
//! complete replacement and drops the old generation; only clones handed
//! out by [`best_individual`](Population::best_individual) outlive it.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::GaConfig;
use super::genome::Genome;
use super::selection::roulette;
use crate::cities::TourLength;
use crate::error::{GaError, Result};
use crate::random::rng_from_seed;

/// Snapshot of the fittest individual of a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct BestIndividual {
    /// Independent copy of the genome.
    pub genome: Genome,
    /// Fitness at the time of the snapshot.
    pub fitness: f64,
    /// Closed tour length of `genome`.
    pub tour_length: f64,
}

/// A fixed-size population evolved by fitness-proportional selection,
/// swap mutation and ordered crossover.
///
/// The distance provider is borrowed read-only for the population's
/// lifetime; the random source is owned.
///
/// ```
/// use u_tour::{Cities, Population};
/// use u_tour::random::create_rng;
///
/// let cities = Cities::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let mut population = Population::new(&cities, 20, 0.1, create_rng(42)).unwrap();
/// for _ in 0..50 {
///     population.advance_generation();
/// }
/// let best = population.best_individual();
/// assert_eq!(best.genome.len(), 4);
/// ```
#[derive(Debug)]
pub struct Population<'a, D: TourLength + ?Sized, R: Rng = StdRng> {
    distances: &'a D,
    individuals: Vec<Genome>,
    population_size: usize,
    mutation_rate: f64,
    generation: usize,
    rng: R,
}

impl<'a, D: TourLength + ?Sized> Population<'a, D, StdRng> {
    /// Builds a population from a [`GaConfig`], seeding from `config.seed`.
    pub fn from_config(distances: &'a D, config: &GaConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            distances,
            config.population_size,
            config.mutation_rate,
            rng_from_seed(config.seed),
        )
    }
}

impl<'a, D: TourLength + ?Sized, R: Rng> Population<'a, D, R> {
    /// Creates `population_size` random tours.
    ///
    /// # Errors
    /// [`GaError::InvalidConfiguration`] if `population_size` is 0,
    /// `mutation_rate` is outside `[0, 1]`, or `distances` has no points.
    pub fn new(
        distances: &'a D,
        population_size: usize,
        mutation_rate: f64,
        mut rng: R,
    ) -> Result<Self> {
        GaConfig::default()
            .with_population_size(population_size)
            .with_mutation_rate(mutation_rate)
            .validate()?;

        let point_count = distances.point_count();
        if point_count == 0 {
            return Err(GaError::InvalidConfiguration(
                "distance provider reports no points".into(),
            ));
        }

        let individuals: Vec<Genome> = (0..population_size)
            .map(|_| Genome::random(distances, &mut rng))
            .collect();

        tracing::debug!(population_size, mutation_rate, point_count, "population created");

        Ok(Self {
            distances,
            individuals,
            population_size,
            mutation_rate,
            generation: 0,
            rng,
        })
    }

    /// Replaces the current generation with a bred one.
    ///
    /// `ceil(size / 2)` times: pick two parents by roulette, mutate each
    /// copy with probability `mutation_rate`, and recombine the pair into
    /// two children. An odd size leaves one surplus child, which is dropped.
    pub fn advance_generation(&mut self) {
        let fitnesses = self.fitnesses();
        let pairs = self.population_size.div_ceil(2);
        let mut next = Vec::with_capacity(pairs * 2);

        for _ in 0..pairs {
            let mut mother = self.individuals[roulette(&fitnesses, &mut self.rng)].clone();
            let mut father = self.individuals[roulette(&fitnesses, &mut self.rng)].clone();

            if self.rng.random_range(0.0..1.0) < self.mutation_rate {
                mother.mutate(&mut self.rng);
            }
            if self.rng.random_range(0.0..1.0) < self.mutation_rate {
                father.mutate(&mut self.rng);
            }

            let (first, second) = mother.recombine(&father, &mut self.rng);
            next.push(first);
            next.push(second);
        }

        next.truncate(self.population_size);
        self.individuals = next;
        self.generation += 1;
    }

    /// Picks one individual by fitness-proportional selection.
    ///
    /// Falls back to uniform choice when the fitness sum is zero or not
    /// finite.
    pub fn select_parent(&mut self) -> &Genome {
        let fitnesses = self.fitnesses();
        let idx = roulette(&fitnesses, &mut self.rng);
        &self.individuals[idx]
    }

    /// Copy of the fittest individual; ties go to the earliest one.
    ///
    /// Has no effect on the population.
    pub fn best_individual(&self) -> BestIndividual {
        let mut best = &self.individuals[0];
        let mut best_fitness = best.fitness(self.distances);
        for ind in &self.individuals[1..] {
            let fitness = ind.fitness(self.distances);
            if fitness > best_fitness {
                best = ind;
                best_fitness = fitness;
            }
        }
        BestIndividual {
            genome: best.clone(),
            fitness: best_fitness,
            tour_length: best.tour_length(self.distances),
        }
    }

    /// Current generation, read-only.
    pub fn individuals(&self) -> &[Genome] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Number of completed [`advance_generation`](Self::advance_generation) calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn distances(&self) -> &'a D {
        self.distances
    }

    fn fitnesses(&self) -> Vec<f64> {
        self.individuals
            .iter()
            .map(|ind| ind.fitness(self.distances))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::Cities;
    use crate::random::create_rng;

    fn unit_square() -> Cities {
        Cities::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    fn circle(n: usize) -> Cities {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let theta = i as f64 * std::f64::consts::TAU / n as f64;
                (1000.0 * theta.cos(), 1000.0 * theta.sin())
            })
            .collect();
        Cities::from_coords(&coords)
    }

    /// Fixed tour lengths, independent of order, for selection tests.
    struct ConstantLength(usize, f64);

    impl TourLength for ConstantLength {
        fn point_count(&self) -> usize {
            self.0
        }
        fn tour_length(&self, _order: &[usize]) -> f64 {
            self.1
        }
    }

    #[test]
    fn test_new_creates_valid_individuals() {
        let cities = circle(12);
        let pop = Population::new(&cities, 30, 0.2, create_rng(42)).unwrap();
        assert_eq!(pop.len(), 30);
        assert_eq!(pop.generation(), 0);
        assert!(pop.individuals().iter().all(|g| g.len() == 12 && g.is_valid()));
    }

    #[test]
    fn test_new_rejects_zero_population() {
        let cities = unit_square();
        let err = Population::new(&cities, 0, 0.1, create_rng(1)).unwrap_err();
        assert!(matches!(err, GaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_new_rejects_bad_mutation_rate() {
        let cities = unit_square();
        assert!(Population::new(&cities, 10, 1.5, create_rng(1)).is_err());
        assert!(Population::new(&cities, 10, -0.1, create_rng(1)).is_err());
    }

    #[test]
    fn test_new_rejects_empty_instance() {
        let cities = Cities::default();
        let err = Population::new(&cities, 10, 0.1, create_rng(1)).unwrap_err();
        assert!(matches!(err, GaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_from_config() {
        let cities = circle(8);
        let config = GaConfig::default()
            .with_population_size(7)
            .with_mutation_rate(0.3)
            .with_seed(5);
        let pop = Population::from_config(&cities, &config).unwrap();
        assert_eq!(pop.len(), 7);
        assert!((pop.mutation_rate() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_size_stable_even_and_odd() {
        let cities = circle(10);
        for size in [1, 2, 3, 10, 11] {
            let mut pop = Population::new(&cities, size, 0.5, create_rng(3)).unwrap();
            for _ in 0..10 {
                pop.advance_generation();
                assert_eq!(pop.len(), size, "size {size} drifted");
            }
            assert_eq!(pop.generation(), 10);
        }
    }

    #[test]
    fn test_generations_stay_valid() {
        let cities = circle(15);
        let mut pop = Population::new(&cities, 21, 1.0, create_rng(8)).unwrap();
        for _ in 0..30 {
            pop.advance_generation();
            assert!(pop.individuals().iter().all(Genome::is_valid));
        }
    }

    #[test]
    fn test_single_point_instance() {
        let cities = Cities::from_coords(&[(3.0, 4.0)]);
        let mut pop = Population::new(&cities, 5, 1.0, create_rng(2)).unwrap();
        pop.advance_generation();
        let best = pop.best_individual();
        assert_eq!(best.genome.order(), &[0]);
        assert_eq!(best.tour_length, 0.0);
        assert_eq!(best.fitness, f64::MAX);
    }

    #[test]
    fn test_same_seed_reproducible() {
        let cities = circle(9);
        let mut a = Population::new(&cities, 12, 0.2, create_rng(77)).unwrap();
        let mut b = Population::new(&cities, 12, 0.2, create_rng(77)).unwrap();
        for _ in 0..15 {
            a.advance_generation();
            b.advance_generation();
        }
        assert_eq!(a.individuals(), b.individuals());
    }

    #[test]
    fn test_best_individual_picks_max_fitness() {
        let cities = circle(8);
        let pop = Population::new(&cities, 25, 0.1, create_rng(4)).unwrap();
        let best = pop.best_individual();
        let max = pop
            .individuals()
            .iter()
            .map(|g| g.fitness(&cities))
            .fold(f64::MIN, f64::max);
        assert_eq!(best.fitness, max);
        assert!((best.tour_length - best.genome.tour_length(&cities)).abs() < 1e-12);
    }

    #[test]
    fn test_best_individual_tie_takes_first() {
        let provider = ConstantLength(5, 100.0);
        let pop = Population::new(&provider, 6, 0.0, create_rng(4)).unwrap();
        let best = pop.best_individual();
        assert_eq!(&best.genome, &pop.individuals()[0]);
    }

    #[test]
    fn test_best_individual_survives_next_generation() {
        let cities = circle(10);
        let mut pop = Population::new(&cities, 10, 0.5, create_rng(6)).unwrap();
        let snapshot = pop.best_individual();
        let kept = snapshot.clone();
        pop.advance_generation();
        pop.advance_generation();
        assert_eq!(snapshot, kept);
        assert!(snapshot.genome.is_valid());
    }

    #[test]
    fn test_best_individual_is_read_only() {
        let cities = circle(10);
        let pop = Population::new(&cities, 10, 0.5, create_rng(6)).unwrap();
        let before = pop.individuals().to_vec();
        let _ = pop.best_individual();
        assert_eq!(pop.individuals(), &before[..]);
    }

    #[test]
    fn test_select_parent_uniform_when_fitness_overflows() {
        // Zero-length tours clamp to f64::MAX; their sum is infinite.
        let provider = ConstantLength(4, 0.0);
        let mut pop = Population::new(&provider, 4, 0.0, create_rng(10)).unwrap();
        let members = pop.individuals().to_vec();
        let mut hits = vec![0u32; members.len()];
        for _ in 0..4000 {
            let chosen = pop.select_parent().clone();
            let idx = members.iter().position(|g| *g == chosen).unwrap();
            hits[idx] += 1;
        }
        // Duplicate genomes would all map to the first match; only check spread.
        assert!(hits.iter().filter(|&&h| h > 0).count() >= 2, "got {hits:?}");
    }

    #[test]
    fn test_select_parent_uniform_when_fitness_underflows() {
        // Huge tours give fitness 0.0 for everyone.
        let provider = ConstantLength(6, 1e12);
        let mut pop = Population::new(&provider, 8, 0.0, create_rng(10)).unwrap();
        for _ in 0..100 {
            assert!(pop.select_parent().is_valid());
        }
        pop.advance_generation();
        assert_eq!(pop.len(), 8);
    }

    #[test]
    fn test_selection_pressure_improves_square() {
        let cities = unit_square();
        let mut pop = Population::new(&cities, 20, 0.1, create_rng(42)).unwrap();
        for _ in 0..200 {
            pop.advance_generation();
        }
        let best = pop.best_individual();
        assert!(
            (best.tour_length - 4.0).abs() < 1e-9,
            "expected perimeter 4.0, got {}",
            best.tour_length
        );
    }
}
