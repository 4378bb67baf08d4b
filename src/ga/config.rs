//! GA configuration.
//!
//! [`GaConfig`] holds the fixed parameters of one run.

use crate::error::{GaError, Result};

/// Configuration for the tour GA.
///
/// # Defaults
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_mutation_rate(0.1)
///     .with_max_generations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals kept in every generation.
    pub population_size: usize,

    /// Probability (0.0–1.0) that a selected parent is mutated before
    /// recombination.
    pub mutation_rate: f64,

    /// Maximum number of generations for [`GaRunner`](super::GaRunner).
    pub max_generations: usize,

    /// Generations without a shorter tour before the runner stops.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            max_generations: 500,
            stagnation_limit: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Individuals per generation; must be at least 1.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Per-parent mutation probability.
    ///
    /// The value is stored as given; [`validate`](Self::validate) rejects
    /// rates outside `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Generation budget for the runner.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Stop after this many generations without a shorter tour; 0 never stops.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Fixes the seed so the run can be replayed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters a population needs.
    ///
    /// The generation budget is checked separately by the runner.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfiguration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus a non-zero generation budget.
    pub fn validate_run(&self) -> Result<()> {
        self.validate()?;
        if self.max_generations == 0 {
            return Err(GaError::InvalidConfiguration(
                "max_generations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
