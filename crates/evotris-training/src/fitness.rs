//! Fitness evaluation: how good a gene vector is at actually playing.

use evotris_engine::{GameDriver, GameSeed};
use evotris_evaluator::strategy::HeuristicStrategy;
use evotris_stats::descriptive::DescriptiveStats;
use rand::Rng as _;

use crate::genes::GeneVector;

/// Scores a gene vector.
///
/// Implementations must be [`Sync`]: the population evaluates its members on
/// parallel threads sharing one evaluator.
pub trait FitnessEvaluator: Sync {
    /// Returns the fitness of `genes`. Higher is better.
    ///
    /// The seed pins down all randomness of the evaluation, so the same genes
    /// and seed always produce the same fitness.
    fn evaluate(&self, genes: &GeneVector, seed: GameSeed) -> f32;
}

/// Fitness as the median score over a batch of simulated games.
///
/// Each game runs a [`HeuristicStrategy`] built from the gene vector until it
/// tops out or hits the turn limit. The median over the batch keeps one lucky
/// or disastrous tetromino sequence from dominating the result; the turn
/// limit keeps strong chromosomes, which otherwise play on indefinitely, from
/// stalling a generation.
#[derive(Debug, Clone)]
pub struct SimulationFitness {
    simulations: usize,
    turn_limit: usize,
}

impl SimulationFitness {
    /// Default number of games per evaluation.
    pub const DEFAULT_SIMULATIONS: usize = 4;
    /// Default number of turns before a game is cut off.
    pub const DEFAULT_TURN_LIMIT: usize = 1000;

    /// Creates an evaluator running `simulations` games of at most
    /// `turn_limit` turns each.
    ///
    /// # Panics
    ///
    /// Panics if `simulations` is zero.
    #[must_use]
    pub fn new(simulations: usize, turn_limit: usize) -> Self {
        assert!(simulations > 0, "at least one simulation is required");
        Self {
            simulations,
            turn_limit,
        }
    }

    /// Returns the number of games per evaluation.
    #[must_use]
    pub const fn simulations(&self) -> usize {
        self.simulations
    }

    /// Returns the per-game turn limit.
    #[must_use]
    pub const fn turn_limit(&self) -> usize {
        self.turn_limit
    }
}

impl Default for SimulationFitness {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIMULATIONS, Self::DEFAULT_TURN_LIMIT)
    }
}

impl FitnessEvaluator for SimulationFitness {
    #[expect(clippy::cast_precision_loss)]
    fn evaluate(&self, genes: &GeneVector, seed: GameSeed) -> f32 {
        let strategy = HeuristicStrategy::new(*genes);
        let mut rng = seed.rng();
        let scores = (0..self.simulations).map(|_| {
            let mut driver = GameDriver::with_seed(rng.random());
            driver.play(&strategy, self.turn_limit).score() as f32
        });
        DescriptiveStats::new(scores).unwrap().median
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(value: u8) -> GameSeed {
        format!("{value:032x}").parse().unwrap()
    }

    #[test]
    fn test_same_genes_and_seed_reproduce_the_fitness() {
        let evaluator = SimulationFitness::new(3, 30);
        let genes = [0.8, 0.5, 0.2, 0.3, 0.6];
        let first = evaluator.evaluate(&genes, seed(9));
        let second = evaluator.evaluate(&genes, seed(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_capped_games_score_at_least_the_turn_limit() {
        // 40 tetrominoes cannot top out a 22x10 board, so every game reaches
        // the cap and scores at least 40.
        let evaluator = SimulationFitness::new(2, 40);
        let genes = [0.8, 0.5, 0.2, 0.3, 0.6];
        assert!(evaluator.evaluate(&genes, seed(10)) >= 40.0);
    }

    #[test]
    #[should_panic(expected = "at least one simulation")]
    fn test_zero_simulations_are_rejected() {
        let _ = SimulationFitness::new(0, 100);
    }
}
