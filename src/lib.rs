//! Genetic algorithm for short closed tours over a fixed point set.
//!
//! - **Genome**: a permutation of point indices with swap mutation,
//!   ordered crossover (OX) and a length-based fitness.
//! - **Population**: a fixed-size generation evolved by roulette-wheel
//!   selection; the fittest individual is reported as an independent copy.
//! - **Runner**: drives a population for a generation budget with
//!   stagnation and cancellation stops.
//!
//! The GA only sees the point set through the [`TourLength`] trait;
//! [`Cities`] is the planar Euclidean implementation.
//!
//! # Example
//!
//! ```
//! use u_tour::{Cities, GaConfig, GaRunner};
//!
//! let cities = Cities::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_mutation_rate(0.1)
//!     .with_max_generations(200)
//!     .with_seed(42);
//! let result = GaRunner::run(&cities, &config).unwrap();
//! assert!((result.best_length - 4.0).abs() < 1e-9);
//! ```
//!
//! # Randomness
//!
//! Every stochastic operation takes an explicit random source, so a fixed
//! seed reproduces a run exactly.

pub mod cities;
pub mod error;
pub mod ga;
pub mod random;

pub use cities::{Cities, Point, TourLength};
pub use error::{GaError, Result};
pub use ga::{BestIndividual, GaConfig, GaResult, GaRunner, Genome, Population};
