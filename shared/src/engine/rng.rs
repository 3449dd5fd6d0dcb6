/// Linear-congruential generator for repeatable mock price data.
///
/// Owned by a single forecast construction; each call to [`SeededRng::next_f64`]
/// advances the seed and returns a value in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
}

impl SeededRng {
    const MULTIPLIER: u64 = 9301;
    const INCREMENT: u64 = 49297;
    const MODULUS: u64 = 233280;

    pub fn new(seed: u64) -> Self {
        // Reducing up front leaves every later draw unchanged.
        Self {
            seed: seed % Self::MODULUS,
        }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.seed = (self.seed * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.seed as f64 / Self::MODULUS as f64
    }
}
