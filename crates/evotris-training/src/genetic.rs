//! The genetic algorithm: chromosomes, selection, and reproduction.

use std::thread;

use evotris_engine::GameSeed;
use evotris_stats::descriptive::DescriptiveStats;
use rand::{Rng, seq::SliceRandom as _};

use crate::{
    fitness::FitnessEvaluator,
    genes::{self, GENE_COUNT, GeneVector},
};

/// One candidate solution: a gene vector plus its fitness, once known.
///
/// Chromosomes start out unevaluated; [`Population::evaluate`] fills the
/// fitness in. Reproduction requires evaluated parents because the blend is
/// weighted by fitness.
#[derive(Debug, Clone)]
pub struct Chromosome {
    genes: GeneVector,
    fitness: Option<f32>,
}

impl Chromosome {
    /// Creates an unevaluated chromosome with random genes.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_genes(genes::random(rng))
    }

    /// Creates an unevaluated chromosome with the given genes.
    #[must_use]
    pub const fn from_genes(genes: GeneVector) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Returns the gene vector.
    #[must_use]
    pub const fn genes(&self) -> &GeneVector {
        &self.genes
    }

    /// Returns the fitness, or `None` before the first evaluation.
    #[must_use]
    pub const fn fitness(&self) -> Option<f32> {
        self.fitness
    }

    fn evaluated_fitness(&self) -> f32 {
        self.fitness.expect("chromosome has not been evaluated")
    }

    /// Produces an unevaluated child by fitness-weighted blending followed by
    /// mutation.
    ///
    /// # Panics
    ///
    /// Panics if either parent is unevaluated or the parent fitness values do
    /// not sum to a positive number.
    #[must_use]
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        other: &Self,
        mutation_chance: f32,
        rng: &mut R,
    ) -> Self {
        let mut genes = genes::blend(
            &self.genes,
            self.evaluated_fitness(),
            &other.genes,
            other.evaluated_fitness(),
        );
        genes::mutate(&mut genes, mutation_chance, rng);
        Self::from_genes(genes)
    }
}

/// A generation of chromosomes evolving together.
///
/// The population size is fixed at construction and must be a positive
/// multiple of 4, so that the surviving half always splits into whole breeding
/// pairs.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Chromosome>,
    mutation_chance: f32,
    generation: usize,
}

impl Population {
    /// Default per-gene mutation probability.
    pub const DEFAULT_MUTATION_CHANCE: f32 = 0.075;

    /// Creates generation zero from the given members.
    ///
    /// # Panics
    ///
    /// Panics if the member count is not a positive multiple of 4 or the
    /// mutation chance lies outside `[0, 1]`.
    #[must_use]
    pub fn new(members: Vec<Chromosome>, mutation_chance: f32) -> Self {
        assert!(
            !members.is_empty() && members.len() % 4 == 0,
            "population size must be a positive multiple of 4"
        );
        assert!(
            (0.0..=1.0).contains(&mutation_chance),
            "mutation chance must lie in [0, 1]"
        );
        Self {
            members,
            mutation_chance,
            generation: 0,
        }
    }

    /// Creates generation zero from `size` random chromosomes.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Self::new`].
    pub fn random<R: Rng + ?Sized>(size: usize, mutation_chance: f32, rng: &mut R) -> Self {
        let members = (0..size).map(|_| Chromosome::random(rng)).collect();
        Self::new(members, mutation_chance)
    }

    /// Returns the members of the current generation.
    #[must_use]
    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    /// Returns the per-gene mutation probability.
    #[must_use]
    pub const fn mutation_chance(&self) -> f32 {
        self.mutation_chance
    }

    /// Returns how many generations have been run.
    #[must_use]
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Evaluates every member on its own thread.
    ///
    /// Each member receives a [`GameSeed`] drawn from `rng` in member order
    /// before the threads start, so a given master RNG state always hands out
    /// the same seeds and the run stays reproducible regardless of thread
    /// scheduling.
    pub fn evaluate<E, R>(&mut self, evaluator: &E, rng: &mut R)
    where
        E: FitnessEvaluator + ?Sized,
        R: Rng + ?Sized,
    {
        thread::scope(|scope| {
            for member in &mut self.members {
                let seed: GameSeed = rng.random();
                scope.spawn(move || {
                    member.fitness = Some(evaluator.evaluate(&member.genes, seed));
                });
            }
        });
    }

    /// Replaces the weaker half of the population with offspring of the
    /// stronger half and evaluates the result.
    ///
    /// The members are sorted by fitness, the top half survives, and the
    /// survivors are shuffled into random breeding pairs. Each pair
    /// contributes two children, restoring the original population size.
    ///
    /// # Panics
    ///
    /// Panics if any member is unevaluated.
    pub fn run_generation<E, R>(&mut self, evaluator: &E, rng: &mut R)
    where
        E: FitnessEvaluator + ?Sized,
        R: Rng + ?Sized,
    {
        self.members
            .sort_by(|a, b| f32::total_cmp(&a.evaluated_fitness(), &b.evaluated_fitness()));
        let mut survivors = self.members.split_off(self.members.len() / 2);
        survivors.shuffle(rng);

        let mut children = Vec::with_capacity(survivors.len());
        for pair in survivors.chunks_exact(2) {
            for _ in 0..2 {
                children.push(pair[0].crossover(&pair[1], self.mutation_chance, rng));
            }
        }
        survivors.append(&mut children);
        self.members = survivors;

        self.evaluate(evaluator, rng);
        self.generation += 1;
    }

    /// Runs `generations` rounds of selection and reproduction.
    ///
    /// The population must already be evaluated; see [`Self::evaluate`].
    pub fn run<E, R>(&mut self, generations: usize, evaluator: &E, rng: &mut R)
    where
        E: FitnessEvaluator + ?Sized,
        R: Rng + ?Sized,
    {
        for _ in 0..generations {
            self.run_generation(evaluator, rng);
        }
    }

    /// Returns the member with the highest fitness.
    ///
    /// # Panics
    ///
    /// Panics if any member is unevaluated.
    #[must_use]
    pub fn fittest(&self) -> &Chromosome {
        self.members
            .iter()
            .max_by(|a, b| f32::total_cmp(&a.evaluated_fitness(), &b.evaluated_fitness()))
            .expect("population is never empty")
    }

    /// Summarizes the fitness values across the population.
    ///
    /// # Panics
    ///
    /// Panics if any member is unevaluated.
    #[must_use]
    pub fn compute_fitness_stats(&self) -> DescriptiveStats {
        DescriptiveStats::new(self.members.iter().map(Chromosome::evaluated_fitness)).unwrap()
    }

    /// Summarizes each gene's values across the population, in
    /// feature-vector order.
    #[must_use]
    pub fn compute_gene_stats(&self) -> [DescriptiveStats; GENE_COUNT] {
        std::array::from_fn(|i| {
            DescriptiveStats::new(self.members.iter().map(|member| member.genes[i])).unwrap()
        })
    }
}
