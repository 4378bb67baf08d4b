//! Generational genetic algorithm over closed tours.
//!
//! A [`Population`] holds a fixed number of [`Genome`]s, each a permutation
//! of point indices. One generation is bred by roulette-wheel selection,
//! optional swap mutation of each parent copy, and ordered crossover.
//!
//! # Key Types
//!
//! - [`Genome`]: one tour and its operators (mutate, recombine, fitness)
//! - [`Population`]: the current generation and the breeding step
//! - [`GaConfig`]: run parameters (population size, mutation rate, budget)
//! - [`GaRunner`]: drives a population through a whole run
//! - [`GaResult`]: best tour and run statistics
//!
//! # Submodules
//!
//! - [`operators`]: permutation crossover and mutation on plain slices
//! - [`selection`]: fitness-proportional selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod genome;
pub mod operators;
mod population;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use genome::{fitness_for_length, Genome, FITNESS_EXPONENT, FITNESS_SCALE};
pub use population::{BestIndividual, Population};
pub use runner::{GaResult, GaRunner};
