//! Entropy-backed [`RngOracle`] for interactive use.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use status_core::RngOracle;

/// [`RngOracle`] over `rand`'s standard generator.
///
/// Use [`PcgRng`](status_core::PcgRng) when rolls must be replayable across
/// platforms and crate versions; `EntropyRng::seeded` is only stable for a
/// given `rand` release.
#[derive(Clone, Debug)]
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngOracle for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn randint(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randint_stays_in_range() {
        let mut rng = EntropyRng::seeded(4);
        for _ in 0..500 {
            let roll = rng.randint(0, 30);
            assert!((0..=30).contains(&roll));
        }
        assert_eq!(rng.randint(5, 5), 5);
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = EntropyRng::seeded(11);
        let mut b = EntropyRng::seeded(11);
        let rolls_a: Vec<_> = (0..16).map(|_| a.randint(1, 100)).collect();
        let rolls_b: Vec<_> = (0..16).map(|_| b.randint(1, 100)).collect();
        assert_eq!(rolls_a, rolls_b);
    }
}
