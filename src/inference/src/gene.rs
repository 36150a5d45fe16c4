use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Deserialize};

/// Number of copies of the variant allele carried by an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    /// Every gene count, in increasing number of copies.
    pub const ALL: [GeneCount; 3] = [Self::Zero, Self::One, Self::Two];

    pub fn copies(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One  => 1,
            Self::Two  => 2,
        }
    }

    /// Position of this gene count within `GeneCount::ALL` and per-gene tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next gene count, wrapping `Two` back to `Zero`. The returned `bool` is the carry.
    #[inline]
    pub(crate) fn increment(self) -> (Self, bool) {
        match self {
            Self::Zero => (Self::One, false),
            Self::One  => (Self::Two, false),
            Self::Two  => (Self::Zero, true),
        }
    }
}

impl From<GeneCount> for u8 {
    fn from(gene: GeneCount) -> Self {
        gene.copies()
    }
}

impl TryFrom<u8> for GeneCount {
    type Error = String;

    fn try_from(copies: u8) -> Result<Self, Self::Error> {
        match copies {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            n => Err(format!("Invalid gene count {n}: expected 0, 1 or 2")),
        }
    }
}

impl Display for GeneCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}
