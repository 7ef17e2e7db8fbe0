use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `0..bound`. `bound` is always positive.
    fn next_int_below(&mut self, bound: u32) -> u32;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_int_below(&mut self, bound: u32) -> u32 {
        (**self).next_int_below(bound)
    }
}

/// `StdRng`-backed source that remembers its seed for reproducible sessions.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Picks a fresh seed from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().r#gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_int_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "random bound must be positive");
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomSource, SeededRandom};

    #[test]
    fn draws_stay_below_bound() {
        let mut random = SeededRandom::new(11);

        for bound in 1..200 {
            assert!(random.next_int_below(bound) < bound);
        }
    }

    #[test]
    fn same_seed_replays_same_sequence() {
        let mut first = SeededRandom::new(42);
        let mut second = SeededRandom::new(first.seed());

        let a: Vec<u32> = (0..32).map(|_| first.next_int_below(100)).collect();
        let b: Vec<u32> = (0..32).map(|_| second.next_int_below(100)).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut random = SeededRandom::from_entropy();

        for _ in 0..16 {
            assert_eq!(random.next_int_below(1), 0);
        }
    }
}
