//! RNG module - uniform shape generation
//!
//! Every new shape draws its kind and color independently and uniformly.
//! The engine takes its randomness through the [`Randomizer`] trait so games
//! can be replayed from a seed ([`SimpleRng`]) or scripted outright
//! ([`SequenceRandomizer`]).

use crate::types::{BlockColor, ShapeKind};

/// Source of shape kinds and colors
pub trait Randomizer {
    fn next_kind(&mut self) -> ShapeKind;
    fn next_color(&mut self) -> BlockColor;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Randomizer for SimpleRng {
    fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }

    fn next_color(&mut self) -> BlockColor {
        BlockColor::ALL[self.next_range(BlockColor::ALL.len() as u32) as usize]
    }
}

/// Replays fixed kind and color sequences, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRandomizer {
    kinds: Vec<ShapeKind>,
    colors: Vec<BlockColor>,
    kind_index: usize,
    color_index: usize,
}

impl SequenceRandomizer {
    /// Empty sequences fall back to `ShapeKind::O` / `BlockColor::Blue`.
    pub fn new(kinds: Vec<ShapeKind>, colors: Vec<BlockColor>) -> Self {
        Self {
            kinds,
            colors,
            kind_index: 0,
            color_index: 0,
        }
    }

    /// Always the same kind, colors cycling through the palette
    pub fn repeating(kind: ShapeKind) -> Self {
        Self::new(vec![kind], BlockColor::ALL.to_vec())
    }
}

impl Randomizer for SequenceRandomizer {
    fn next_kind(&mut self) -> ShapeKind {
        let Some(&kind) = self.kinds.get(self.kind_index % self.kinds.len().max(1)) else {
            return ShapeKind::O;
        };
        self.kind_index += 1;
        kind
    }

    fn next_color(&mut self) -> BlockColor {
        let Some(&color) = self.colors.get(self.color_index % self.colors.len().max(1)) else {
            return BlockColor::Blue;
        };
        self.color_index += 1;
        color
    }
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next_kind(&mut self) -> ShapeKind {
        (**self).next_kind()
    }

    fn next_color(&mut self) -> BlockColor {
        (**self).next_color()
    }
}
