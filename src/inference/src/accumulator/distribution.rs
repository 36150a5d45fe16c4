use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::GeneCount;

/// Probability mass over the gene count of one individual. Indexed by `GeneCount::index()`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeneDistribution([f64; 3]);

impl GeneDistribution {
    #[inline(always)]
    pub fn add(&mut self, gene: GeneCount, p: f64) {
        self.0[gene.index()] += p;
    }

    pub fn get(&self, gene: GeneCount) -> f64 {
        self.0[gene.index()]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub(crate) fn masses_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        self.0.iter_mut().zip(other.0).for_each(|(mass, other)| *mass += other);
    }

    /// Iterate over (gene count, probability) pairs, in decreasing number of copies.
    pub fn iter(&self) -> impl Iterator<Item = (GeneCount, f64)> + '_ {
        GeneCount::ALL.into_iter().rev().map(|gene| (gene, self.get(gene)))
    }
}

impl From<[f64; 3]> for GeneDistribution {
    fn from(masses: [f64; 3]) -> Self {
        Self(masses)
    }
}

impl Serialize for GeneDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        for (gene, p) in self.iter() {
            map.serialize_entry(&gene.copies(), &p)?;
        }
        map.end()
    }
}

/// Probability mass over the trait of one individual: `[P(false), P(true)]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraitDistribution([f64; 2]);

impl TraitDistribution {
    #[inline(always)]
    pub fn add(&mut self, has_trait: bool, p: f64) {
        self.0[usize::from(has_trait)] += p;
    }

    pub fn get(&self, has_trait: bool) -> f64 {
        self.0[usize::from(has_trait)]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub(crate) fn masses_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        self.0.iter_mut().zip(other.0).for_each(|(mass, other)| *mass += other);
    }

    /// Iterate over (trait, probability) pairs: `true` first.
    pub fn iter(&self) -> impl Iterator<Item = (bool, f64)> + '_ {
        [true, false].into_iter().map(|has_trait| (has_trait, self.get(has_trait)))
    }
}

impl From<[f64; 2]> for TraitDistribution {
    fn from(masses: [f64; 2]) -> Self {
        Self(masses)
    }
}

impl Serialize for TraitDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        for (has_trait, p) in self.iter() {
            map.serialize_entry(&has_trait, &p)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gene_iteration_order() {
        let dist = GeneDistribution::from([0.96, 0.03, 0.01]);
        let order: Vec<u8> = dist.iter().map(|(gene, _)| gene.copies()).collect();
        assert_eq!(order, [2, 1, 0]);
        assert_eq!(dist.get(GeneCount::Zero), 0.96);
    }

    #[test]
    fn merge_adds_elementwise() {
        let mut lhs = TraitDistribution::from([0.25, 0.5]);
        lhs.merge(&TraitDistribution::from([0.25, 0.0]));
        assert_eq!(lhs, TraitDistribution::from([0.5, 0.5]));
        assert_eq!(lhs.iter().collect::<Vec<_>>(), [(true, 0.5), (false, 0.5)]);
    }

    #[test]
    fn serialize_gene_keys() -> Result<(), serde_yaml::Error> {
        let dist = GeneDistribution::from([0.5, 0.25, 0.25]);
        assert_eq!(serde_yaml::to_string(&dist)?, "---\n2: 0.25\n1: 0.25\n0: 0.5\n");
        Ok(())
    }
}
