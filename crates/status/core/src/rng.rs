//! RNG oracle for level thresholds and attribute growth.
//!
//! The model never owns an RNG. Operations that roll take a `&mut R` where
//! `R: RngOracle`, so callers decide between a seeded deterministic
//! generator, an entropy-backed one, or a fixed one in tests.

/// Source of uniformly distributed integers.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Generate the next random u64 value from two u32 draws.
    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    /// Random integer in `[min, max]`, inclusive on both ends.
    ///
    /// Returns `min` when the range is empty or a single value.
    fn randint(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        let span = max.abs_diff(min).saturating_add(1);
        min.wrapping_add_unsigned(self.next_u64() % span)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn randint(&mut self, min: i64, max: i64) -> i64 {
        (**self).randint(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Deterministic: the same seed
/// always produces the same sequence, which makes level-up rolls replayable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    const fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    const fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Always yields the lower bound of the requested range.
///
/// Makes thresholds and growth fully predictable: `randint(0, 30)` is `0`,
/// `randint(1, 5)` is `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LowerBoundRng;

impl RngOracle for LowerBoundRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn randint(&mut self, min: i64, _max: i64) -> i64 {
        min
    }
}
