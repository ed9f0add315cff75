//! RNG module - deterministic piece generation
//!
//! The tray deals pieces with a small LCG: the kind is drawn uniformly from
//! `PieceKind::ALL` and the id comes from a monotonic counter that no queue
//! or stack operation ever resets. Same seed, same kind sequence; ids are
//! 0, 1, 2, ... regardless of seed.

use crate::types::{Piece, PieceKind};

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
        // The low bits of a power-of-two LCG cycle quickly; draw from the
        // upper half of the state instead.
        (self.next_u32() >> 16) % max
    }
}

/// Deterministic piece source: a uniform kind draw plus the monotonic id
/// counter that makes every dealt piece unique for the process lifetime.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    next_id: u32,
}

impl PieceGenerator {
    /// Create a generator with the given seed. Ids always start at 0.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Deal the next piece: a uniformly drawn kind paired with the next id.
    pub fn next_piece(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Piece::new(kind, id)
    }

    /// How many pieces have been dealt. This equals the id the next piece
    /// will get.
    pub fn spawned(&self) -> u32 {
        self.next_id
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
