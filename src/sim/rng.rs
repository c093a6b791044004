//! Injectable randomness
//!
//! The simulation never touches a global RNG. Anything random (spawn
//! positions, asteroid velocities) is drawn from a `RandomSource`, which is a
//! seeded `Pcg32` in real games and a scripted sequence in tests.

use rand::Rng;
use rand_pcg::Pcg32;

/// A source of uniform floats
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn unit(&mut self) -> f32;

    /// Uniform sample in `[min, max)`
    fn range(&mut self, min: f32, max: f32) -> f32 {
        self.unit() * (max - min) + min
    }
}

impl RandomSource for Pcg32 {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Replays a fixed list of unit samples, cycling when exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "unit samples must lie in [0, 1)"
        );
        Self { values, cursor: 0 }
    }

    /// Always yields the same sample
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl RandomSource for SequenceRandom {
    fn unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
