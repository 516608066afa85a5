use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// The contract the generator/mutator engine requires from a source of
/// randomness: seedable and deterministic (spec §2), nothing more. The real
/// PRNG implementation is an external collaborator (spec §1's "Out of
/// scope"); this trait is the seam a caller substitutes at.
pub trait Prng: std::fmt::Debug {
    /// A uniform integer in `[0, k.get())`.
    fn next_mod(&mut self, k: NonZeroUsize) -> usize;
}

/// The workspace's default [`Prng`]: a seedable, reproducible generator
/// built on `rand`'s `SmallRng`. Per the Design Notes' "ambient PRNG state"
/// flag, this handle is owned by the caller and threaded explicitly through
/// `mutate_sequence` rather than hidden behind process-wide state, so two
/// handles can drive independent mutations concurrently.
#[derive(Debug, Clone)]
pub struct DeterministicPrng {
    inner: SmallRng,
}

impl DeterministicPrng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Prng for DeterministicPrng {
    fn next_mod(&mut self, k: NonZeroUsize) -> usize {
        self.inner.random_range(0..k.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_is_deterministic() {
        let k = NonZeroUsize::new(1000).unwrap();
        let mut a = DeterministicPrng::from_seed(7);
        let mut b = DeterministicPrng::from_seed(7);
        let sequence_a: Vec<_> = (0..16).map(|_| a.next_mod(k)).collect();
        let sequence_b: Vec<_> = (0..16).map(|_| b.next_mod(k)).collect();
        assert_eq!(sequence_a, sequence_b);
    }

    #[test]
    fn values_stay_in_range() {
        let k = NonZeroUsize::new(3).unwrap();
        let mut rng = DeterministicPrng::from_seed(1);
        for _ in 0..256 {
            assert!(rng.next_mod(k) < 3);
        }
    }
}
