//! Bounded pseudo-random values derived from an identifier seed.
//!
//! In [`GenerationMode::Hybrid`] each draw mixes a sine transform of the seed
//! with fresh entropy, so profiles look stable in shape but change between
//! requests. [`GenerationMode::Seeded`] drops the entropy and is fully
//! reproducible.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::GenerationMode;

pub struct SeededRandom {
    seed: u64,
    draws: u64,
    mode: GenerationMode,
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64, mode: GenerationMode) -> Self {
        let rng = match mode {
            GenerationMode::Hybrid => StdRng::from_entropy(),
            GenerationMode::Seeded => StdRng::seed_from_u64(seed),
        };
        Self {
            seed,
            draws: 0,
            mode,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Fractional part of `sin(seed + n) * 10000` for the n-th draw
    fn sine_unit(&mut self) -> f64 {
        let x = (self.seed.wrapping_add(self.draws) as f64).sin() * 10_000.0;
        self.draws += 1;
        x - x.floor()
    }

    /// Next value in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        let sine = self.sine_unit();
        match self.mode {
            GenerationMode::Hybrid => (sine + self.rng.r#gen::<f64>()).fract(),
            GenerationMode::Seeded => sine,
        }
    }

    /// Next value in `[min, max)`
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        let value = min + self.next_unit() * (max - min);
        // float rounding can land exactly on the open bound
        if value < max { value } else { min }
    }

    /// Next integer in `[min, max)`
    pub fn range_int(&mut self, min: u64, max: u64) -> u64 {
        (self.range(min as f64, max as f64).floor() as u64).clamp(min, max.saturating_sub(1))
    }

    /// Plain uniform draw in `[0, 1)` without the sine transform.
    ///
    /// Entropy-backed in hybrid mode, seed-backed in seeded mode.
    pub fn uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Truncate towards negative infinity. Keeps a value below an exclusive bound
/// where [`round_to`] could round up onto it.
pub fn floor_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).floor() / factor
}
