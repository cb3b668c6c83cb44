//! Terminal input module (engine-facing).
//!
//! Maps single key bytes to [`crate::types::GameAction`] and provides a
//! non-blocking key reader on top of `crossterm` events.

pub mod map;
pub mod reader;

pub use term_tetris_types as types;

pub use map::{handle_key, should_quit, CTRL_C};
pub use reader::{key_byte, KeyReader};
