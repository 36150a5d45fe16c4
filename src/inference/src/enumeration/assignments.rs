use pedigree::Pedigree;

/// Trait assignments consistent with the observed evidence.
///
/// Observed individuals keep their observed value. The `u` individuals with an unknown trait are
/// assigned through the bits of a mask in `0..2^u`: bit `j` is the trait of the `j`-th unknown
/// individual. Contradicting assignments are thus never generated.
#[derive(Debug, Clone)]
pub struct TraitAssignments {
    observed: Vec<bool>,
    unknown : Vec<usize>,
}

impl TraitAssignments {
    pub fn new(pedigree: &Pedigree) -> Self {
        let observed = pedigree.iter().map(|person| person.observed_trait().unwrap_or(false)).collect();
        Self{observed, unknown: pedigree.unknown_trait_indices()}
    }

    /// Number of individuals with an unknown trait.
    pub fn unknown(&self) -> usize {
        self.unknown.len()
    }

    /// Write the assignment designated by `mask` within `traits`.
    pub fn fill(&self, mask: u64, traits: &mut Vec<bool>) {
        traits.clear();
        traits.extend_from_slice(&self.observed);
        for (bit, &person) in self.unknown.iter().enumerate() {
            traits[person] = (mask >> bit) & 1 == 1;
        }
    }
}
