//! Exact posterior inference over the gene/trait Bayesian network of a pedigree.
//!
//! Every evidence-consistent `World` (one gene count and one trait value per individual) is
//! enumerated, its joint probability computed, and accumulated into per-person marginals, which
//! are finally normalized. Runtime is `O(2^u · 3^n)` for `n` individuals, `u` of which have an
//! unobserved trait: keep pedigrees small (n <= ~15).

mod gene;
pub use gene::GeneCount;

pub mod params;
pub use params::{ModelParams, GeneTable};

mod tables;
pub use tables::InheritanceTables;

mod world;
pub use world::World;

mod joint;
pub use joint::joint_probability;

mod accumulator;
pub use accumulator::{Accumulator, GeneDistribution, TraitDistribution};

mod normalize;
pub use normalize::normalize;

pub mod enumeration;
pub use enumeration::{EnumerationEngine, EngineOptions};

mod posterior;
pub use posterior::{Posterior, PersonPosterior};

mod error;
pub use error::InferenceError;

#[cfg(test)]
pub(crate) mod tests;
