//! GA run driver.
//!
//! [`GaRunner`] builds a [`Population`] and advances it until the
//! generation budget, the stagnation limit or a cancellation flag stops it,
//! keeping the best tour seen in any generation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::GaConfig;
use super::genome::Genome;
use super::population::Population;
use crate::cities::TourLength;
use crate::error::Result;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Shortest tour found in any generation.
    pub best: Genome,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Closed tour length of `best`.
    pub best_length: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run stopped on the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-so-far tour length: the initial population, then one entry per
    /// generation. Never increases.
    pub length_history: Vec<f64>,
}

/// Executes a GA run.
///
/// ```
/// use u_tour::{Cities, GaConfig, GaRunner};
///
/// let cities = Cities::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(100)
///     .with_seed(42);
/// let result = GaRunner::run(&cities, &config).unwrap();
/// assert!(result.best_length >= 4.0 - 1e-9);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    pub fn run<D: TourLength + ?Sized>(distances: &D, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(distances, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the best tour so far.
    pub fn run_with_cancel<D: TourLength + ?Sized>(
        distances: &D,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate_run()?;

        let span = tracing::info_span!(
            "ga_run",
            population_size = config.population_size,
            mutation_rate = config.mutation_rate,
            max_generations = config.max_generations,
            seed = ?config.seed,
        );
        let _guard = span.enter();

        let mut population = Population::from_config(distances, config)?;

        let initial = population.best_individual();
        let mut best = initial.genome;
        let mut best_fitness = initial.fitness;
        let mut best_length = initial.tour_length;

        let mut length_history = vec![best_length];

        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population.advance_generation();

            let gen_best = population.best_individual();
            if gen_best.tour_length < best_length {
                tracing::debug!(
                    generation = gen + 1,
                    length = gen_best.tour_length,
                    previous = best_length,
                    "shorter tour found"
                );
                best = gen_best.genome;
                best_fitness = gen_best.fitness;
                best_length = gen_best.tour_length;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            length_history.push(best_length);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        let generations = population.generation();
        if cancelled {
            tracing::info!(generations, best_length, "run cancelled");
        } else if stagnated {
            tracing::info!(generations, best_length, "run stagnated");
        } else {
            tracing::info!(generations, best_length, "run completed");
        }

        Ok(GaResult {
            best,
            best_fitness,
            best_length,
            generations,
            stagnated,
            cancelled,
            length_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
