use pedigree::{Pedigree, Parents};

use crate::{InheritanceTables, World};

/// Probability of one complete `World` under the pedigree's generative model.
///
/// Each individual contributes P(gene | parents' genes) -- or the gene prior for founders -- times
/// P(trait | gene). Individuals are conditionally independent given their parents, so the joint
/// probability is the product of these per-person factors.
pub fn joint_probability(pedigree: &Pedigree, tables: &InheritanceTables, world: &World) -> f64 {
    pedigree.iter().enumerate()
        .map(|(i, person)| {
            let gene = world.gene(i);
            let p_gene = match person.parents() {
                Some(Parents{mother, father}) => tables.inheritance(world.gene(mother), world.gene(father), gene),
                None                          => tables.prior(gene),
            };
            p_gene * tables.emission(gene, world.has_trait(i))
        })
        .product()
}
