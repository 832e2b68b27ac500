use std::path::Path;

use chrono::{DateTime, Utc};
use evotris_engine::GameSeed;
use evotris_training::genes::GeneVector;
use serde::{Deserialize, Serialize};

use crate::util;

/// A trained model: the gene vector of the fittest chromosome plus the
/// provenance needed to reproduce or resume the run.
///
/// Genes are stored as an ordered array, one weight per board feature in
/// feature-vector order; deserialization rejects files with the wrong number
/// of weights.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub seed: GameSeed,
    pub final_fitness: f32,
    pub genes: GeneVector,
}

impl AiModel {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        util::read_json_file("AI model", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_json_roundtrip() {
        let json = r#"{
            "name": "evotris",
            "trained_at": "2026-03-01T12:00:00Z",
            "seed": "0123456789abcdeffedcba9876543210",
            "final_fitness": 512.5,
            "genes": [0.4, -0.2, 0.1, 0.3, -0.5]
        }"#;
        let model: AiModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.name, "evotris");
        assert_eq!(model.genes, [0.4, -0.2, 0.1, 0.3, -0.5]);
        assert_eq!(model.seed.to_string(), "0123456789abcdeffedcba9876543210");

        let serialized = serde_json::to_string(&model).unwrap();
        let restored: AiModel = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored.genes, model.genes);
        assert_eq!(restored.trained_at, model.trained_at);
    }

    #[test]
    fn test_model_with_wrong_gene_count_is_rejected() {
        let json = r#"{
            "name": "evotris",
            "trained_at": "2026-03-01T12:00:00Z",
            "seed": "0123456789abcdeffedcba9876543210",
            "final_fitness": 512.5,
            "genes": [0.4, -0.2]
        }"#;
        assert!(serde_json::from_str::<AiModel>(json).is_err());
    }
}
