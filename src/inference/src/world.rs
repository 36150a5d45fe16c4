use crate::GeneCount;

/// One complete assignment of a gene count and a trait value to every individual of a pedigree.
///
/// Both slices are indexed by pedigree index (see `pedigree::Pedigree::index_of()`). Worlds are
/// borrowed views over the enumeration buffers and never outlive a single enumeration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct World<'a> {
    genes : &'a [GeneCount],
    traits: &'a [bool],
}

impl<'a> World<'a> {
    pub fn new(genes: &'a [GeneCount], traits: &'a [bool]) -> Self {
        debug_assert_eq!(genes.len(), traits.len());
        Self{genes, traits}
    }

    #[inline(always)]
    pub fn gene(&self, person: usize) -> GeneCount {
        self.genes[person]
    }

    #[inline(always)]
    pub fn has_trait(&self, person: usize) -> bool {
        self.traits[person]
    }
}
