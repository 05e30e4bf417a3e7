//! Random source abstraction and the Fisher–Yates position shuffle
//!
//! The generator never talks to `rand` directly. It asks a [`SlotDraw`]
//! for one bounded integer per swap, so tests can replay a fixed
//! sequence while production wraps a ChaCha8 generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed integers in `[0, upper_inclusive]`
pub trait SlotDraw {
    fn draw(&mut self, upper_inclusive: usize) -> usize;
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandDraw<R> {
    rng: R,
}

impl<R: Rng> RandDraw<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// Production random source
pub type ChaChaDraw = RandDraw<ChaCha8Rng>;

impl RandDraw<ChaCha8Rng> {
    /// Same seed = same batting order
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> SlotDraw for RandDraw<R> {
    fn draw(&mut self, upper_inclusive: usize) -> usize {
        self.rng.gen_range(0..=upper_inclusive)
    }
}

/// Replays a fixed list of draws, clamping each one to the requested bound.
/// Once the script runs out every draw returns the upper bound (no swap).
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraw {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedDraw {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Draws consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl SlotDraw for ScriptedDraw {
    fn draw(&mut self, upper_inclusive: usize) -> usize {
        let value = match self.script.get(self.cursor) {
            Some(&v) => v.min(upper_inclusive),
            None => upper_inclusive,
        };
        self.cursor += 1;
        value
    }
}

/// Uniform random permutation of `1..=n`.
///
/// Walks from the last index down to 1, swapping each element with one
/// drawn from `[0, i]`. Exactly `n - 1` draws are made (none for n <= 1).
pub fn shuffle_positions(n: usize, draw: &mut impl SlotDraw) -> Vec<u8> {
    let mut positions: Vec<u8> = (1..=n).map(|p| p as u8).collect();
    for i in (1..positions.len()).rev() {
        let j = draw.draw(i);
        positions.swap(i, j);
    }
    positions
}
