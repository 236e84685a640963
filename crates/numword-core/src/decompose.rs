use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// One base-1000 digit group of a number: its value and zero-indexed
/// magnitude position (tier 0 = units, 1 = thousands, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecomposedChunk {
    pub value: u16,
    pub tier: u32,
}

/// Walks a non-negative integer from its least-significant base-1000 chunk
/// to its most-significant one. Zero yields no chunks; zero-valued chunks
/// in the middle of a number are yielded so the tier counter keeps
/// advancing past them.
pub fn chunks(value: &BigUint) -> Chunks {
    Chunks {
        remaining: value.clone(),
        tier: 0,
    }
}

#[derive(Clone, Debug)]
pub struct Chunks {
    remaining: BigUint,
    tier: u32,
}

impl Iterator for Chunks {
    type Item = DecomposedChunk;

    fn next(&mut self) -> Option<DecomposedChunk> {
        if self.remaining.is_zero() {
            return None;
        }
        let value = (&self.remaining % 1000u32).to_u16().unwrap_or(0);
        self.remaining = &self.remaining / 1000u32;
        let tier = self.tier;
        self.tier += 1;
        Some(DecomposedChunk { value, tier })
    }
}
