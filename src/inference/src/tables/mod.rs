use log::trace;

use located_error::prelude::*;

use crate::{GeneCount, ModelParams};

/// Precomputed, immutable probability tables of the inheritance and trait emission models.
/// # Fields:
/// - `inheritance`: `inheritance[mother][father][child]` = P(child gene count | parents gene counts)
/// - `prior`      : `prior[gene]` = P(gene count), for individuals without known parents.
/// - `emission`   : `emission[gene][trait as usize]` = P(trait | gene count)
///
/// Every table is indexed using `GeneCount::index()`
#[derive(Debug, Clone, PartialEq)]
pub struct InheritanceTables {
    inheritance: [[[f64; 3]; 3]; 3],
    prior      : [f64; 3],
    emission   : [[f64; 2]; 3],
}

impl InheritanceTables {
    /// Validate `params` and derive every probability table from them.
    ///
    /// # Errors
    /// - if any of the provided probabilities lies outside of [0, 1]
    /// - if the gene prior does not sum to 1.
    pub fn new(params: &ModelParams) -> Result<Self> {
        params.validate().loc("While building inheritance tables")?;
        Ok(Self::build(params))
    }

    fn build(params: &ModelParams) -> Self {
        let rate = params.mutation_rate;
        let mut inheritance = [[[0.0; 3]; 3]; 3];
        for mother in GeneCount::ALL {
            for father in GeneCount::ALL {
                inheritance[mother.index()][father.index()] = Self::offspring_distribution(
                    Self::transmission_probability(mother, rate),
                    Self::transmission_probability(father, rate),
                );
                trace!("P(child | mother={mother}, father={father}) = {:?}", inheritance[mother.index()][father.index()]);
            }
        }

        let mut emission = [[0.0; 2]; 3];
        for gene in GeneCount::ALL {
            let p_trait = params.trait_given_gene.get(gene);
            emission[gene.index()] = [1.0 - p_trait, p_trait];
        }

        Self{inheritance, prior: params.gene_prior.to_array(), emission}
    }

    /// Probability that a parent carrying `gene` copies passes the variant allele on to its child.
    pub fn transmission_probability(gene: GeneCount, mutation_rate: f64) -> f64 {
        match gene {
            GeneCount::Two  => 1.0 - mutation_rate,
            GeneCount::One  => 0.5,
            GeneCount::Zero => mutation_rate,
        }
    }

    /// Child gene count distribution, given the independent transmission probabilities of both parents.
    fn offspring_distribution(t_mother: f64, t_father: f64) -> [f64; 3] {
        [
            (1.0 - t_mother) * (1.0 - t_father),
            (1.0 - t_mother) * t_father + (1.0 - t_father) * t_mother,
            t_mother * t_father,
        ]
    }

    /// P(child = `child` | mother = `mother`, father = `father`)
    #[inline(always)]
    pub fn inheritance(&self, mother: GeneCount, father: GeneCount, child: GeneCount) -> f64 {
        self.inheritance[mother.index()][father.index()][child.index()]
    }

    /// Unconditional probability of carrying `gene` copies.
    #[inline(always)]
    pub fn prior(&self, gene: GeneCount) -> f64 {
        self.prior[gene.index()]
    }

    /// P(trait = `has_trait` | `gene`)
    #[inline(always)]
    pub fn emission(&self, gene: GeneCount, has_trait: bool) -> f64 {
        self.emission[gene.index()][usize::from(has_trait)]
    }
}

impl Default for InheritanceTables {
    fn default() -> Self {
        Self::build(&ModelParams::default())
    }
}
