//! Terminal rendering module.
//!
//! This is a small rendering layer for terminal gameplay. The field is drawn
//! into a framebuffer first and then flushed as one full-frame redraw.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Own the raw-mode terminal as a scoped resource
//! - Compensate for glyph aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod field_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use fb::{Cell, FrameBuffer};
pub use field_view::{FieldView, WALL_COLOR};
pub use renderer::{encode_full_into, TerminalRenderer};
