//! Greedy placement policy built on the weighted feature score.

use std::iter;

use arrayvec::ArrayVec;
use evotris_engine::{Field, PlacementStrategy, Tetromino, TurnDecision};

use crate::features::{FieldFeature, feature_vector};

/// Placement policy that scores every reachable drop with a weighted feature
/// sum and picks the cheapest one.
///
/// Each turn enumerates the drawn tetromino in all four rotations, then the
/// held tetromino in all four rotations (only when a held tetromino of a
/// different type exists), and sweeps every column for each orientation. Every
/// candidate drop is probed on a clone of the board and the resulting board is
/// scored with [`Self::score_field`]; the lowest score wins, and ties keep the
/// earliest candidate so the choice is deterministic.
///
/// The search looks a single placement ahead and ignores which tetromino comes
/// next.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    weights: [f32; FieldFeature::COUNT],
}

impl HeuristicStrategy {
    /// Creates a strategy from feature weights in [`FieldFeature::ALL`] order.
    #[must_use]
    pub const fn new(weights: [f32; FieldFeature::COUNT]) -> Self {
        Self { weights }
    }

    /// Returns the feature weights.
    #[must_use]
    pub const fn weights(&self) -> &[f32; FieldFeature::COUNT] {
        &self.weights
    }

    /// Scores a board as the dot product of its feature vector and the
    /// weights. Lower is better.
    #[must_use]
    pub fn score_field(&self, field: &Field) -> f32 {
        iter::zip(feature_vector(field), self.weights)
            .map(|(feature, weight)| feature * weight)
            .sum()
    }
}

impl PlacementStrategy for HeuristicStrategy {
    fn plan_turn(&self, field: &Field, drawn: Tetromino, held: Option<Tetromino>) -> TurnDecision {
        let mut candidates = ArrayVec::<(Tetromino, bool), 8>::new();
        candidates.extend((0..4).map(|turns| (drawn.rotated_by(turns), false)));
        if let Some(held) = held.filter(|held| held.kind() != drawn.kind()) {
            candidates.extend((0..4).map(|turns| (held.rotated_by(turns), true)));
        }

        let mut best_score = f32::INFINITY;
        let mut best_decision = TurnDecision::NoValidMove;
        for &(tetromino, from_hold) in &candidates {
            for column in 0..Field::WIDTH {
                let mut probe = field.clone();
                if probe.drop_piece(tetromino, column).is_err() {
                    continue;
                }
                let score = self.score_field(&probe);
                if score < best_score {
                    best_score = score;
                    best_decision = if from_hold {
                        TurnDecision::PlaceHeld { tetromino, column }
                    } else {
                        TurnDecision::PlaceDrawn { tetromino, column }
                    };
                }
            }
        }
        best_decision
    }
}
