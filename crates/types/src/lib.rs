//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Field Dimensions
//!
//! - **Width**: 11 columns (indexed 0-10)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (width / 2, 0) = (5, 0)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RENDER_FPS` | 15 | Frames drawn per second |
//! | `GRAVITY_HZ` | 1 | Gravity ticks per second |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{GameConfig, Rotation, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.field_width, FIELD_WIDTH);
//! assert_eq!(config.field_height, FIELD_HEIGHT);
//! assert_eq!(config.spawn_point(), (5, 0));
//!
//! assert_eq!(Rotation::Deg270.next(), Rotation::Deg0);
//! ```

use std::time::Duration;

/// Field width in cells (11 columns)
pub const FIELD_WIDTH: usize = 11;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: usize = 20;

/// Render rate in frames per second
pub const RENDER_FPS: u32 = 15;

/// Gravity rate in ticks per second
pub const GRAVITY_HZ: u32 = 1;

/// Color of a single field cell.
///
/// The discriminant is the ANSI palette index used for the cell background,
/// so `Empty` renders black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellColor {
    #[default]
    Empty = 0,
    Red = 1,
    Green = 2,
    Orange = 3,
    Blue = 4,
    Purple = 5,
    LightBlue = 6,
    White = 7,
}

impl CellColor {
    /// ANSI palette index (0-7)
    pub fn ansi_index(self) -> u8 {
        self as u8
    }

    pub fn is_empty(self) -> bool {
        self == CellColor::Empty
    }
}

/// Rotation states, counted in quarter turns from the spawn orientation.
///
/// The cycle goes: 0° → 90° → 180° → 270° → 0°
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Advance one quarter turn.
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::Deg0.next(), Rotation::Deg90);
    /// assert_eq!(Rotation::Deg90.next(), Rotation::Deg180);
    /// assert_eq!(Rotation::Deg180.next(), Rotation::Deg270);
    /// assert_eq!(Rotation::Deg270.next(), Rotation::Deg0);
    /// ```
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// True for 90° and 270°, where width and height trade places.
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Player actions applied to the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Advance the piece one quarter turn
    Rotate,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
}

impl GameAction {
    /// Convert to camelCase string (used in log records)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Rotate => "rotate",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
        }
    }
}

/// Runtime configuration of a game session.
///
/// There is no CLI surface; the binary runs with [`GameConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub field_width: usize,
    pub field_height: usize,
    pub render_fps: u32,
    pub gravity_hz: u32,
}

impl GameConfig {
    /// Anchor for freshly spawned pieces: horizontal center, top row.
    pub fn spawn_point(&self) -> (i32, i32) {
        ((self.field_width / 2) as i32, 0)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.render_fps.max(1)
    }

    pub fn gravity_interval(&self) -> Duration {
        Duration::from_secs(1) / self.gravity_hz.max(1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            render_fps: RENDER_FPS,
            gravity_hz: GRAVITY_HZ,
        }
    }
}
