use std::{
    iter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::Utc;
use evotris_engine::GameSeed;
use evotris_evaluator::features::FieldFeature;
use evotris_training::{
    fitness::SimulationFitness,
    genetic::{Chromosome, Population},
};
use rand::Rng as _;

use crate::{model::ai_model::AiModel, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Output file path for the trained model (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Number of generations to run
    #[arg(long, default_value_t = 25)]
    generations: usize,
    /// Number of chromosomes; must be a positive multiple of 4
    #[arg(long, default_value_t = 16)]
    population_size: usize,
    /// Games played per fitness evaluation
    #[arg(long, default_value_t = SimulationFitness::DEFAULT_SIMULATIONS)]
    simulations: usize,
    /// Turn cap per simulated game
    #[arg(long, default_value_t = SimulationFitness::DEFAULT_TURN_LIMIT)]
    simulation_length: usize,
    /// Per-gene mutation probability in [0, 1]
    #[arg(long, default_value_t = Population::DEFAULT_MUTATION_CHANCE)]
    mutation_chance: f32,
    /// Master seed as 32 hex characters (random when omitted)
    #[arg(long)]
    seed: Option<GameSeed>,
    /// Seed every chromosome from a previously trained model
    #[arg(long)]
    resume: Option<PathBuf>,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let TrainArg {
        output,
        generations,
        population_size,
        simulations,
        simulation_length,
        mutation_chance,
        seed,
        resume,
    } = arg;

    anyhow::ensure!(
        *population_size > 0 && population_size % 4 == 0,
        "population size must be a positive multiple of 4 (got {population_size})"
    );
    anyhow::ensure!(
        (0.0..=1.0).contains(mutation_chance),
        "mutation chance must lie in [0, 1] (got {mutation_chance})"
    );
    anyhow::ensure!(
        *simulations > 0,
        "at least one simulation per evaluation is required"
    );

    let master_seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = master_seed.rng();
    eprintln!("Master seed: {master_seed}");

    let evaluator = SimulationFitness::new(*simulations, *simulation_length);
    let mut population = match resume {
        Some(path) => {
            let model = AiModel::open(path)?;
            eprintln!(
                "Resuming from model {} (fitness {:.3})",
                model.name, model.final_fitness
            );
            let members = vec![Chromosome::from_genes(model.genes); *population_size];
            Population::new(members, *mutation_chance)
        }
        None => Population::random(*population_size, *mutation_chance, &mut rng),
    };

    population.evaluate(&evaluator, &mut rng);
    log_generation(&population);
    for _ in 0..*generations {
        population.run_generation(&evaluator, &mut rng);
        log_generation(&population);
    }

    let fittest = population.fittest();
    let final_fitness = fittest
        .fitness()
        .context("fittest chromosome has no fitness")?;
    let name = match output.as_deref().and_then(Path::file_stem) {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => "evotris".to_owned(),
    };
    let model = AiModel {
        name,
        trained_at: Utc::now(),
        seed: master_seed,
        final_fitness,
        genes: *fittest.genes(),
    };
    Output::save_json(&model, output.clone())?;

    eprintln!();
    eprintln!("Model saved successfully");
    if let Some(path) = output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Name: {}", model.name);
    eprintln!("  Trained at: {}", model.trained_at);
    eprintln!("  Seed: {}", model.seed);
    eprintln!("  Final fitness: {:.3}", model.final_fitness);

    Ok(())
}

fn log_generation(population: &Population) {
    let fitness_stats = population.compute_fitness_stats();
    let gene_stats = population.compute_gene_stats();

    eprintln!("Generation #{}:", population.generation());
    eprintln!("  Chromosomes:");
    for (i, member) in population.members().iter().enumerate() {
        eprintln!(
            "  {i:2}: {:.3?} => {:.3}",
            member.genes(),
            member.fitness().unwrap_or(f32::NAN)
        );
    }
    eprintln!("  Fitness Stats:");
    eprintln!("    Min:    {:.3}", fitness_stats.min);
    eprintln!("    Median: {:.3}", fitness_stats.median);
    eprintln!("    Mean:   {:.3}", fitness_stats.mean);
    eprintln!("    Max:    {:.3}", fitness_stats.max);
    eprintln!("  Gene Stats:");
    for (feature, stats) in iter::zip(FieldFeature::ALL, &gene_stats) {
        eprintln!(
            "    {:<24} Mean: {:>6.3}  NormStddev: {:.3}",
            feature.name(),
            stats.mean,
            stats.normalized_std_dev
        );
    }
}
