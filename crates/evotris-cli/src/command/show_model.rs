use std::{iter, path::PathBuf};

use evotris_evaluator::features::FieldFeature;

use crate::model::ai_model::AiModel;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ShowModelArg {
    /// Trained model file to inspect
    model: PathBuf,
}

pub(crate) fn run(arg: &ShowModelArg) -> anyhow::Result<()> {
    let model = AiModel::open(&arg.model)?;

    println!("Name: {}", model.name);
    println!("Trained at: {}", model.trained_at);
    println!("Seed: {}", model.seed);
    println!("Final fitness: {:.3}", model.final_fitness);
    println!("Weights:");
    for (feature, weight) in iter::zip(FieldFeature::ALL, model.genes) {
        println!("  {:<24} {weight:>8.4}", feature.name());
    }

    Ok(())
}
