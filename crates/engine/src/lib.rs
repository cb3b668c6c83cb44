//! Game engine: the loop that drives the core with real time and real input.
//!
//! The terminal is reached only through the [`KeySource`] and [`Screen`]
//! traits, so the loop can run against scripted fakes in tests.

pub mod game_loop;
pub mod pacing;

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_types as types;

pub use game_loop::{run, KeySource, Outcome, Screen, Summary};
pub use pacing::{FramePacer, GravityClock, Pacing, RealTimePacing};
