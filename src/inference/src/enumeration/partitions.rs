use crate::GeneCount;

/// Ternary odometer over the gene counts of `n` individuals.
///
/// Partition of rank `r` assigns `GeneCount` digit `i` of `r` (written in base 3, least significant
/// digit first) to individual `i`. Enumeration may start at any rank, which allows the `3^n`
/// partitions to be split into contiguous chunks. Only a single buffer of `n` digits is ever
/// allocated: `next_partition()` lends it out.
#[derive(Debug, Clone)]
pub struct GenePartitions {
    digits   : Vec<GeneCount>,
    remaining: u64,
    started  : bool,
}

impl GenePartitions {
    /// `len` consecutive partitions of `n` individuals, starting at rank `start`.
    pub fn range(n: usize, start: u64, len: u64) -> Self {
        let mut digits = Vec::with_capacity(n);
        let mut rank = start;
        for _ in 0..n {
            digits.push(GeneCount::ALL[(rank % 3) as usize]);
            rank /= 3;
        }
        Self{digits, remaining: len, started: false}
    }

    /// Advance to the next partition, and lend it.
    #[inline]
    pub fn next_partition(&mut self) -> Option<&[GeneCount]> {
        if self.remaining == 0 {
            return None
        }
        if self.started {
            for digit in &mut self.digits {
                let (next, carry) = digit.increment();
                *digit = next;
                if !carry {
                    break
                }
            }
        }
        self.started = true;
        self.remaining -= 1;
        Some(&self.digits)
    }
}
