//! Game state module - the controller state machine
//!
//! Ties the field, the falling piece and the piece source together:
//!
//! ```text
//! Spawning --placeable--> Falling --landed--> (lock, clear rows) --> Spawning
//!     \
//!      `--blocked--> GameOver
//! ```
//!
//! Timing lives outside this module; callers decide when a gravity tick is
//! due and feed in player actions.

use log::{debug, info};

use crate::field::Field;
use crate::piece::{attempt, Piece};
use crate::rng::{PieceGenerator, PieceSource};
use crate::types::{GameAction, GameConfig};

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next piece
    Spawning,
    /// A piece is falling and accepts actions
    Falling,
    /// A fresh piece could not be placed; terminal
    GameOver,
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No falling piece (spawning or game over)
    Idle,
    /// The piece moved down one row
    Fell,
    /// The piece could not move, was written into the field, and `rows`
    /// filled rows were removed
    Locked { rows: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<S = PieceGenerator> {
    field: Field,
    active: Option<Piece>,
    phase: Phase,
    source: S,
    rows_cleared: u32,
    pieces_locked: u32,
}

impl Game<PieceGenerator> {
    /// New game with an entropy-seeded generator
    pub fn from_config(config: &GameConfig) -> Self {
        let (x, y) = config.spawn_point();
        Self::new(
            Field::new(config.field_width, config.field_height),
            PieceGenerator::new(x, y),
        )
    }
}

impl<S: PieceSource> Game<S> {
    pub fn new(field: Field, source: S) -> Self {
        Self {
            field,
            active: None,
            phase: Phase::Spawning,
            source,
            rows_cleared: 0,
            pieces_locked: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Total rows removed since the game started
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Draw the next piece. Returns false if it does not fit, which ends the
    /// game without touching the field.
    ///
    /// Does nothing outside [`Phase::Spawning`].
    pub fn spawn(&mut self) -> bool {
        if self.phase != Phase::Spawning {
            return self.phase == Phase::Falling;
        }

        let piece = self.source.next_piece();
        if !self.field.is_placeable(&piece) {
            info!(
                "game over: {} blocked at {:?} after {} pieces, {} rows",
                piece.shape_id().as_str(),
                piece.position(),
                self.pieces_locked,
                self.rows_cleared
            );
            self.phase = Phase::GameOver;
            return false;
        }

        debug!("spawn {} at {:?}", piece.shape_id().as_str(), piece.position());
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Apply gravity: drop the piece one row, or lock it if it has landed.
    pub fn gravity_tick(&mut self) -> TickOutcome {
        let Some(mut piece) = self.active else {
            return TickOutcome::Idle;
        };

        if attempt(&mut piece, &self.field, |p| p.move_by(0, 1)) {
            self.active = Some(piece);
            return TickOutcome::Fell;
        }

        let rows = self.lock(piece);
        TickOutcome::Locked { rows }
    }

    /// Try a player action on the falling piece.
    ///
    /// Returns whether it was applied; a blocked action is a no-op.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let applied = match action {
            GameAction::Rotate => attempt(piece, &self.field, Piece::rotate),
            GameAction::MoveLeft => attempt(piece, &self.field, |p| p.move_by(-1, 0)),
            GameAction::MoveRight => attempt(piece, &self.field, |p| p.move_by(1, 0)),
            GameAction::SoftDrop => attempt(piece, &self.field, |p| p.move_by(0, 1)),
        };
        if !applied {
            debug!("{} blocked", action.as_str());
        }
        applied
    }

    /// Field with the falling piece drawn on top. The real field is not
    /// modified.
    pub fn render_field(&self) -> Field {
        match &self.active {
            Some(piece) => self.field.with_piece(piece),
            None => self.field.clone(),
        }
    }

    fn lock(&mut self, piece: Piece) -> u32 {
        self.field.commit(&piece);
        let rows = self.field.clear_filled_rows();

        self.active = None;
        self.pieces_locked += 1;
        self.rows_cleared += rows;
        self.phase = Phase::Spawning;

        debug!(
            "lock {} at {:?} ({:?}), cleared {} rows",
            piece.shape_id().as_str(),
            piece.position(),
            piece.rotation(),
            rows
        );
        rows
    }
}
