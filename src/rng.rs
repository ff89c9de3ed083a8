use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Source of uniform randomness used to build rounds
pub trait RandomSource {
    /// Uniform integer in the inclusive range [lo, hi]
    fn next_int(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform pick from a non-empty slice
    fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let last = items.len() as u32 - 1;
        &items[self.next_int(0, last) as usize]
    }

    /// Fisher-Yates shuffle for a mutable slice
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}

/// Seeded random number generator for reproducible deals
#[derive(Clone)]
pub struct DealRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    /// Create a new DealRng with an optional seed
    /// If seed is None, generates a random seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            use rand::thread_rng;
            thread_rng().gen()
        });

        let rng = ChaCha8Rng::seed_from_u64(seed);
        DealRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DealRng {
    fn next_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.gen_range(lo..=hi)
    }
}
