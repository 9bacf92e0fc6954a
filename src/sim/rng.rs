//! Injected randomness for obstacle placement
//!
//! The sim never owns an RNG. Callers hand in a [`RandomSource`]: any
//! `rand` generator (sessions use a seeded `Pcg32`), or a
//! [`ScriptedSource`] when a test needs exact spawn heights.

use rand::Rng;

/// Source of uniformly distributed values
pub trait RandomSource {
    /// Uniform value in `[min, max]`
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// Replays fractions in `[0, 1]` across the requested range, cycling
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    fractions: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(fractions: impl Into<Vec<f32>>) -> Self {
        Self {
            fractions: fractions.into(),
            cursor: 0,
        }
    }

    /// How many values have been drawn
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        let t = if self.fractions.is_empty() {
            0.5
        } else {
            self.fractions[self.cursor % self.fractions.len()].clamp(0.0, 1.0)
        };
        self.cursor += 1;
        min + (max - min) * t
    }
}
