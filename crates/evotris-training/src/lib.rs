//! Evolutionary training of placement heuristic weights.
//!
//! This crate evolves the feature weights consumed by
//! `evotris-evaluator::strategy::HeuristicStrategy`:
//!
//! 1. **Population** - Start from a population of chromosomes with random
//!    gene vectors ([`genes`], [`genetic`]).
//! 2. **Evaluation** - Each chromosome plays a batch of simulated games; its
//!    fitness is the median game score ([`fitness`]).
//! 3. **Selection & Reproduction** - Each generation, the fitter half
//!    survives and breeds fitness-weighted, mutated children to replace the
//!    rest.
//!
//! Evaluation fans out over threads, one per chromosome. All randomness
//! flows from a caller-supplied master RNG, so a training run is reproduced
//! exactly by reusing its seed.
//!
//! # Examples
//!
//! ```
//! use evotris_training::{fitness::SimulationFitness, genetic::Population};
//!
//! let mut rng = rand::rng();
//! let evaluator = SimulationFitness::new(2, 50);
//! let mut population = Population::random(4, Population::DEFAULT_MUTATION_CHANCE, &mut rng);
//!
//! population.evaluate(&evaluator, &mut rng);
//! population.run_generation(&evaluator, &mut rng);
//!
//! assert_eq!(population.generation(), 1);
//! println!("best fitness so far: {:?}", population.fittest().fitness());
//! ```

pub mod fitness;
pub mod genes;
pub mod genetic;
