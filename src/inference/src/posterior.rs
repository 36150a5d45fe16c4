use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::{GeneDistribution, TraitDistribution};

/// Number of decimal digits used when displaying probabilities.
pub const DISPLAY_PRECISION: usize = 4;

/// Normalized gene and trait distributions of a single individual.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonPosterior {
    name  : String,
    #[serde(rename = "gene")]
    genes : GeneDistribution,
    #[serde(rename = "trait")]
    traits: TraitDistribution,
}

impl PersonPosterior {
    pub(crate) fn new(name: &str, genes: GeneDistribution, traits: TraitDistribution) -> Self {
        Self{name: name.to_string(), genes, traits}
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn genes(&self) -> &GeneDistribution {
        &self.genes
    }

    pub fn traits(&self) -> &TraitDistribution {
        &self.traits
    }
}

impl Display for PersonPosterior {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "  Gene:")?;
        for (gene, p) in self.genes.iter() {
            writeln!(f, "    {gene}: {p:.DISPLAY_PRECISION$}")?;
        }
        writeln!(f, "  Trait:")?;
        for (has_trait, p) in self.traits.iter() {
            let label = if has_trait {"True"} else {"False"};
            writeln!(f, "    {label}: {p:.DISPLAY_PRECISION$}")?;
        }
        Ok(())
    }
}

/// Posterior distributions of every individual, in pedigree order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Posterior {
    people: Vec<PersonPosterior>,
}

impl Posterior {
    pub(crate) fn new(people: Vec<PersonPosterior>) -> Self {
        Self{people}
    }

    pub fn get(&self, name: &str) -> Option<&PersonPosterior> {
        self.people.iter().find(|person| person.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonPosterior> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Display for Posterior {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.iter().try_for_each(|person| write!(f, "{person}"))
    }
}
