use located_error::prelude::*;
use pedigree::Pedigree;

use crate::{World, Posterior, normalize};

mod distribution;
pub use distribution::{GeneDistribution, TraitDistribution};

/// Unnormalized per-person marginals, obtained by summing the joint probability of every
/// enumerated `World` into the buckets matching each individual's assigned values.
///
/// Accumulators built over disjoint sets of worlds may be combined with `merge()`: summation is
/// commutative, so the merge order does not matter (up to floating point rounding).
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    genes : Vec<GeneDistribution>,
    traits: Vec<TraitDistribution>,
    worlds: u64,
}

impl Accumulator {
    /// Zero-initialized accumulator for a population of `n` individuals.
    pub fn zeroed(n: usize) -> Self {
        Self{genes: vec![GeneDistribution::default(); n], traits: vec![TraitDistribution::default(); n], worlds: 0}
    }

    /// Add the joint probability `p` of `world` to the marginals of every individual.
    #[inline]
    pub fn update(&mut self, world: &World, p: f64) {
        for (i, (gene, traits)) in self.genes.iter_mut().zip(self.traits.iter_mut()).enumerate() {
            gene.add(world.gene(i), p);
            traits.add(world.has_trait(i), p);
        }
        self.worlds += 1;
    }

    /// Elementwise sum of two accumulators.
    pub fn merge(mut self, other: Self) -> Self {
        self.genes.iter_mut().zip(&other.genes).for_each(|(lhs, rhs)| lhs.merge(rhs));
        self.traits.iter_mut().zip(&other.traits).for_each(|(lhs, rhs)| lhs.merge(rhs));
        self.worlds += other.worlds;
        self
    }

    /// Number of worlds accumulated so far.
    pub fn worlds(&self) -> u64 {
        self.worlds
    }

    pub fn gene(&self, person: usize) -> Option<&GeneDistribution> {
        self.genes.get(person)
    }

    pub fn traits(&self, person: usize) -> Option<&TraitDistribution> {
        self.traits.get(person)
    }

    pub(crate) fn into_parts(self) -> (Vec<GeneDistribution>, Vec<TraitDistribution>) {
        (self.genes, self.traits)
    }

    /// Normalize every marginal. See `normalize()`
    pub fn finalize(self, pedigree: &Pedigree) -> Result<Posterior> {
        normalize(self, pedigree)
    }
}
