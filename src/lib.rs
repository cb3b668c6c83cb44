//! Terminal Tetris (workspace facade crate).
//!
//! Exposes `term_tetris::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
