//! Random source used by enemy AI and spawning.
//!
//! Systems draw randomness only through [`RandomSource`], so tests can swap in
//! a scripted sequence and assert exact outcomes.

use rand::Rng;

/// The randomness the simulation consumes.
pub trait RandomSource {
    /// Returns `true` with probability `p` (clamped to `0.0..=1.0`).
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn chance(&mut self, p: f64) -> bool {
        self.gen_bool(p.clamp(0.0, 1.0))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index requires a non-empty range");
        self.gen_range(0..len)
    }
}

/// Replays fixed answers, cycling when exhausted. Empty scripts answer
/// `false` and index 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    chances: Vec<bool>,
    indices: Vec<usize>,
    next_chance: usize,
    next_index: usize,
}

impl ScriptedRandom {
    pub fn new(chances: Vec<bool>, indices: Vec<usize>) -> Self {
        Self {
            chances,
            indices,
            next_chance: 0,
            next_index: 0,
        }
    }

    /// A source that never triggers any probabilistic behaviour.
    pub fn quiet() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedRandom {
    fn chance(&mut self, _p: f64) -> bool {
        if self.chances.is_empty() {
            return false;
        }
        let answer = self.chances[self.next_chance % self.chances.len()];
        self.next_chance += 1;
        answer
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let answer = self.indices[self.next_index % self.indices.len()];
        self.next_index += 1;
        answer % len
    }
}
