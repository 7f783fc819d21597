/// Source of randomness for the one non-deterministic choice the engine
/// makes (which activity suggestion to append).
///
/// Every `rand::Rng` is a `RandomSource`; production code passes
/// `rand::rng()`. Tests pass [`FixedPick`] or a seeded [`DeterministicRng`].
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.random_range(0..len)
    }
}

/// Always picks the same index, clamped to the list length.
#[derive(Debug, Clone, Copy)]
pub struct FixedPick(pub usize);

impl RandomSource for FixedPick {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Seeded splitmix64 generator; the same seed always yields the same picks.
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for DeterministicRng {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let bound = u64::try_from(len).unwrap_or(u64::MAX);
        usize::try_from(self.next_u64() % bound).unwrap_or(0)
    }
}
