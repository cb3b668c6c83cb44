//! Core game logic module - pure, synchronous, and testable
//!
//! This module contains the block/field simulation: shapes, pieces, the
//! occupancy grid, collision and line clearing, and the controller state
//! machine. It has no dependencies on terminals or clocks.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven static tetromino masks and their colors
//! - [`piece`]: a shape with an anchor and rotation; rotation is a coordinate
//!   transform over the spawn-orientation mask
//! - [`rng`]: uniform random piece generation
//! - [`field`]: the grid with placement checks, locking and row clearing
//! - [`game_state`]: spawn / fall / lock / game-over controller
//!
//! # Game Rules
//!
//! - **Placement**: a piece fits when every occupied cell on or below the top
//!   row is inside the walls and empty. Cells above the top are ignored.
//! - **Speculative moves**: every action is tried on a copy and kept only if
//!   it fits; a blocked action is simply dropped.
//! - **Lock**: when gravity cannot move the piece down it is written into the
//!   field, filled rows are removed, and the next piece spawns.
//! - **Game over**: a freshly spawned piece does not fit.
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{Field, Game, PieceGenerator, Phase};
//!
//! let mut game = Game::new(Field::new(11, 20), PieceGenerator::with_seed(5, 0, 42));
//! assert!(game.spawn());
//! assert_eq!(game.phase(), Phase::Falling);
//!
//! game.gravity_tick();
//! assert!(game.field().cells().iter().all(|c| c.is_empty()));
//! ```

pub mod field;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use game_state::{Game, Phase, TickOutcome};
pub use piece::{attempt, CellRange, Piece};
pub use rng::{PieceGenerator, PieceSource};
pub use shapes::{Shape, ShapeId, SHAPES};
