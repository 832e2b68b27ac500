//! Gene vectors: the feature weights evolution works on.
//!
//! A gene vector holds one weight per [`FieldFeature`], in
//! [`FieldFeature::ALL`] order, so a chromosome plugs straight into
//! [`HeuristicStrategy`](evotris_evaluator::strategy::HeuristicStrategy).

use evotris_evaluator::features::FieldFeature;
use rand::Rng;

/// Number of genes in a vector, one per board feature.
pub const GENE_COUNT: usize = FieldFeature::COUNT;

/// Feature weights in [`FieldFeature::ALL`] order.
pub type GeneVector = [f32; GENE_COUNT];

/// Draws a gene vector with every gene uniform in `[-1, 1)`.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> GeneVector {
    std::array::from_fn(|_| random_gene(rng))
}

/// Draws a single gene uniform in `[-1, 1)`.
pub fn random_gene<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(-1.0..1.0)
}

/// Blends two parent vectors gene by gene, weighting each parent by its
/// fitness share.
///
/// A parent with twice the fitness pulls each gene twice as hard toward its
/// own value. Equal fitness yields the plain average.
///
/// # Panics
///
/// Panics if the fitness values do not sum to a positive number.
#[must_use]
pub fn blend(
    parent1: &GeneVector,
    fitness1: f32,
    parent2: &GeneVector,
    fitness2: f32,
) -> GeneVector {
    let total = fitness1 + fitness2;
    assert!(total > 0.0, "parent fitness must sum to a positive number");
    std::array::from_fn(|i| parent1[i] * fitness1 / total + parent2[i] * fitness2 / total)
}

/// Independently redraws each gene with probability `mutation_chance`,
/// replacing it by a fresh uniform value in `[-1, 1)`.
pub fn mutate<R: Rng + ?Sized>(genes: &mut GeneVector, mutation_chance: f32, rng: &mut R) {
    for gene in genes {
        if rng.random_bool(mutation_chance.into()) {
            *gene = random_gene(rng);
        }
    }
}
