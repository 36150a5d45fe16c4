use std::{fs::File, path::Path};

use serde::{Serialize, Deserialize};
use thiserror::Error;
use log::debug;

use located_error::prelude::*;

use crate::GeneCount;

/// Tolerance applied when checking that the gene prior sums to one.
pub const PRIOR_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("Failed to open model parameters file")]
    OpenFile(#[source] std::io::Error),

    #[error("Failed to deserialize model parameters")]
    Deserialize(#[source] serde_yaml::Error),

    #[error("Invalid value for {field}: {value}. Probabilities must lie within [0, 1]")]
    OutOfRange{field: String, value: f64},

    #[error("The gene prior must sum to 1. Got {0}")]
    PriorSum(f64),
}

/// One probability per gene count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneTable {
    pub zero: f64,
    pub one : f64,
    pub two : f64,
}

impl GeneTable {
    pub fn get(&self, gene: GeneCount) -> f64 {
        match gene {
            GeneCount::Zero => self.zero,
            GeneCount::One  => self.one,
            GeneCount::Two  => self.two,
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.zero, self.one, self.two]
    }
}

/// Parameters of the inheritance and trait emission models.
/// # Fields:
/// - `gene_prior`      : probability of each gene count, for individuals whose parents are unknown.
/// - `trait_given_gene`: probability of exhibiting the trait, given the gene count.
/// - `mutation_rate`   : probability that a transmitted allele flips type during inheritance.
///
/// Missing fields fall back on `ModelParams::default()` when deserializing, e.g.:
/// ```yaml
/// mutation_rate: 0.05
/// trait_given_gene: {zero: 0.01, one: 0.56, two: 0.65}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelParams {
    pub gene_prior      : GeneTable,
    pub trait_given_gene: GeneTable,
    pub mutation_rate   : f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            gene_prior      : GeneTable{zero: 0.96, one: 0.03, two: 0.01},
            trait_given_gene: GeneTable{zero: 0.01, one: 0.56, two: 0.65},
            mutation_rate   : 0.01,
        }
    }
}

impl ModelParams {
    /// Deserialize and validate model parameters from a `.yaml` file.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let loc_msg = || format!("While parsing model parameters from {}", path.display());
        let file = File::open(path).map_err(ParamsError::OpenFile).with_loc(loc_msg)?;
        let params: Self = serde_yaml::from_reader(file).map_err(ParamsError::Deserialize).with_loc(loc_msg)?;
        params.validate().with_loc(loc_msg)?;
        debug!("Model parameters: {params:?}");
        Ok(params)
    }

    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Ensure every probability lies within [0, 1] and that the gene prior sums to 1.
    pub fn validate(&self) -> Result<(), ParamsError> {
        use ParamsError::{OutOfRange, PriorSum};
        let check = |field: String, value: f64| match (0.0..=1.0).contains(&value) {
            true  => Ok(()),
            false => Err(OutOfRange{field, value}),
        };

        for gene in GeneCount::ALL {
            check(format!("gene_prior[{gene}]"), self.gene_prior.get(gene))?;
            check(format!("trait_given_gene[{gene}]"), self.trait_given_gene.get(gene))?;
        }
        check("mutation_rate".to_string(), self.mutation_rate)?;

        let prior_sum: f64 = self.gene_prior.to_array().iter().sum();
        if (prior_sum - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(PriorSum(prior_sum))
        }
        Ok(())
    }
}
