//! RNG module - random piece generation
//!
//! Every draw is an independent, uniform choice over the seven catalog shapes
//! (no 7-bag). The generator is seeded from OS entropy; a fixed seed is
//! available for deterministic tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::piece::Piece;
use crate::shapes::ShapeId;

/// Anything the game can draw its next piece from
pub trait PieceSource {
    fn next_piece(&mut self) -> Piece;
}

/// Uniform random piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator<R = StdRng> {
    spawn_x: i32,
    spawn_y: i32,
    rng: R,
}

impl PieceGenerator<StdRng> {
    /// Create a generator seeded from OS entropy
    pub fn new(spawn_x: i32, spawn_y: i32) -> Self {
        Self::with_rng(spawn_x, spawn_y, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed (same seed, same sequence)
    pub fn with_seed(spawn_x: i32, spawn_y: i32, seed: u64) -> Self {
        Self::with_rng(spawn_x, spawn_y, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PieceGenerator<R> {
    pub fn with_rng(spawn_x: i32, spawn_y: i32, rng: R) -> Self {
        Self {
            spawn_x,
            spawn_y,
            rng,
        }
    }

    pub fn spawn_point(&self) -> (i32, i32) {
        (self.spawn_x, self.spawn_y)
    }

    /// Draw a shape uniformly at random
    pub fn next_shape(&mut self) -> ShapeId {
        ShapeId::ALL[self.rng.gen_range(0..ShapeId::ALL.len())]
    }

    /// Draw a new piece at the spawn point
    pub fn next(&mut self) -> Piece {
        let shape = self.next_shape();
        Piece::new(shape, self.spawn_x, self.spawn_y)
    }
}

impl<R: Rng> PieceSource for PieceGenerator<R> {
    fn next_piece(&mut self) -> Piece {
        self.next()
    }
}
