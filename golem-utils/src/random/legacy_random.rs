//! The game's legacy linear congruential generator.

use crate::random::Random;

/// The 48 bit linear congruential generator used by `java.util.Random`.
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Seeds the generator the way `new Random(seed)` does, scrambling the
    /// seed with the multiplier and keeping the low 48 bits.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed as i64 ^ 0x5DEECE66D) & 0xFFFFFFFFFFFF,
        }
    }

    fn next(&mut self, bits: u64) -> i32 {
        (self.next_random() >> (48 - bits)) as i32
    }

    fn next_random(&mut self) -> i64 {
        let l = self.seed;
        let m = l.wrapping_mul(0x5DEECE66D).wrapping_add(0xB) & 0xFFFFFFFFFFFF;
        self.seed = m;
        m
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        if bound & bound.wrapping_sub(1) == 0 {
            ((bound as i64).wrapping_mul(self.next(31) as i64) >> 31) as i32
        } else {
            loop {
                let i = self.next(31);
                let j = i % bound;
                if i.wrapping_sub(j).wrapping_add(bound.wrapping_sub(1)) >= 0 {
                    return j;
                }
            }
        }
    }

    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 * 5.9604645e-8f32
    }
}
