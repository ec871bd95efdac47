use rand::Rng;

/// Uniform draws every generator is built on.
///
/// Implemented for any [`rand::Rng`], so a thread RNG, a seeded
/// `ChaCha8Rng` or `&mut dyn RngCore` can be passed directly. Callers keep
/// `min <= max`; generators check their own bounds first.
pub trait RandomSource {
    /// Uniform integer in `min..=max`.
    fn random_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `min..=max`, for any finite `min <= max`.
    fn random_float(&mut self, min: f64, max: f64) -> f64;

    /// Uniform pick from `pool`, `None` when the pool is empty.
    fn choice(&mut self, pool: &[char]) -> Option<char>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.random_range(min..=max)
    }

    fn random_float(&mut self, min: f64, max: f64) -> f64 {
        if min == max {
            return min;
        }
        // Weighting both ends keeps the result finite even when `max - min`
        // does not fit in an f64.
        let weight: f64 = self.random();
        (min * (1.0 - weight) + max * weight).clamp(min, max)
    }

    fn choice(&mut self, pool: &[char]) -> Option<char> {
        if pool.is_empty() {
            return None;
        }
        let idx = self.random_range(0..pool.len());
        Some(pool[idx])
    }
}
