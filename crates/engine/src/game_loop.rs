//! The fixed-timestep game loop.
//!
//! One iteration: spawn if needed, apply gravity when the clock says so,
//! draw, handle at most one key, then wait for the next frame.

use anyhow::Result;
use log::info;

use crate::core::{Field, Game, Phase, PieceSource};
use crate::input::{handle_key, should_quit, KeyReader};
use crate::pacing::Pacing;

/// Non-blocking keyboard
pub trait KeySource {
    /// The pending key byte, or `None` when no key is waiting.
    fn try_read_key(&mut self) -> Result<Option<u8>>;
}

/// Anything that can show the field
pub trait Screen {
    fn draw(&mut self, field: &Field) -> Result<()>;
}

impl KeySource for KeyReader {
    fn try_read_key(&mut self) -> Result<Option<u8>> {
        KeyReader::try_read_key(self)
    }
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    GameOver,
}

/// End-of-game report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub outcome: Outcome,
    pub rows_cleared: u32,
    pub pieces_locked: u32,
    pub frames: u64,
}

/// Drive `game` until the player quits or a spawn is blocked.
pub fn run<S, K, D, P>(
    game: &mut Game<S>,
    keys: &mut K,
    screen: &mut D,
    pacing: &mut P,
) -> Result<Summary>
where
    S: PieceSource,
    K: KeySource,
    D: Screen,
    P: Pacing,
{
    info!("game loop started");
    let mut frames: u64 = 0;

    let outcome = loop {
        if game.phase() == Phase::Spawning && !game.spawn() {
            break Outcome::GameOver;
        }

        if pacing.gravity_due() {
            game.gravity_tick();
        }

        screen.draw(&game.render_field())?;
        frames += 1;

        if let Some(key) = keys.try_read_key()? {
            if should_quit(key) {
                break Outcome::Quit;
            }
            if let Some(action) = handle_key(key) {
                game.apply_action(action);
            }
        }

        pacing.wait_frame();
    };

    let summary = Summary {
        outcome,
        rows_cleared: game.rows_cleared(),
        pieces_locked: game.pieces_locked(),
        frames,
    };
    info!("game loop finished: {:?}", summary);
    Ok(summary)
}
