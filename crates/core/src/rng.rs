//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization algorithm: each bag contains one of
//! each shape kind, shuffled. Draws walk the bag until it is exhausted, then a
//! fresh bag is shuffled.
//!
//! Also provides a simple LCG so that a seed reproduces the same game.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::ShapeKind;

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle with a short period; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Seed derived from the current time; falls back to 1 on a pre-epoch clock
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    /// Current bag of pieces
    bag: [ShapeKind; ShapeKind::COUNT],
    /// Index into current bag
    cursor: usize,
    /// RNG for shuffling
    rng: SimpleRng,
    /// Last kind handed out, used by the boundary guard
    last: Option<ShapeKind>,
    /// Prevent the first piece of a fresh bag from repeating the previous piece
    boundary_guard: bool,
}

impl Bag {
    /// Create a new bag with the given seed. Repeats across bag boundaries are allowed.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ShapeKind::ALL,
            // Starts exhausted so the first draw shuffles
            cursor: ShapeKind::COUNT,
            rng: SimpleRng::new(seed),
            last: None,
            boundary_guard: false,
        }
    }

    /// Create a bag whose refills never start with the kind drawn last
    pub fn with_boundary_guard(seed: u32) -> Self {
        Self {
            boundary_guard: true,
            ..Self::new(seed)
        }
    }

    /// Generate a new shuffled bag
    fn refill(&mut self) {
        self.bag = ShapeKind::ALL;
        self.rng.shuffle(&mut self.bag);

        if self.boundary_guard && self.last == Some(self.bag[0]) {
            // Any later slot holds a different kind; swapping keeps the bag a permutation.
            let j = 1 + self.rng.next_range((ShapeKind::COUNT - 1) as u32) as usize;
            self.bag.swap(0, j);
        }

        self.cursor = 0;
    }

    /// Draw the next piece, reshuffling when the bag is exhausted
    pub fn next(&mut self) -> ShapeKind {
        if self.cursor >= ShapeKind::COUNT {
            self.refill();
        }

        let kind = self.bag[self.cursor];
        self.cursor += 1;
        self.last = Some(kind);
        kind
    }

    /// Kind the next call to [`Bag::next`] will return, without consuming it
    pub fn peek(&self) -> ShapeKind {
        if self.cursor < ShapeKind::COUNT {
            return self.bag[self.cursor];
        }

        // Preview the next bag on a clone so the real RNG is untouched; the
        // clone shuffles exactly as the next refill will.
        let mut preview = self.clone();
        preview.refill();
        preview.bag[0]
    }

    /// Pieces left before the next reshuffle
    pub fn remaining(&self) -> usize {
        ShapeKind::COUNT - self.cursor.min(ShapeKind::COUNT)
    }

    pub fn has_boundary_guard(&self) -> bool {
        self.boundary_guard
    }

    /// Get current bag for testing/debugging
    #[cfg(test)]
    pub fn current_bag(&self) -> &[ShapeKind] {
        &self.bag[self.cursor.min(ShapeKind::COUNT)..]
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}
