//! Terminal Tetris runner (default binary).
//!
//! Takes no arguments: an 11x20 field, 15 fps rendering, one gravity tick
//! per second. Keys: space/r rotate, h/l move, j drop one row, q quit.
//!
//! On exit it prints `Game Over` or `Bye`; the end-of-game statistics go to
//! the log.
//!
//! Set `TERM_TETRIS_LOG=<path>` to send log records (filtered by `RUST_LOG`)
//! to a file; the terminal itself is busy drawing the field.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use term_tetris::core::Game;
use term_tetris::engine::{self, Outcome, RealTimePacing, Summary};
use term_tetris::input::KeyReader;
use term_tetris::term::TerminalRenderer;
use term_tetris::types::GameConfig;

const LOG_FILE_ENV: &str = "TERM_TETRIS_LOG";

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::default();
    log::info!("starting with {:?}", config);

    let mut term = TerminalRenderer::open().context("failed to enter raw terminal mode")?;
    let result = run(&config, &mut term);

    // Always try to restore terminal state before printing.
    let restored = term.exit();
    let summary = result?;
    restored.context("failed to restore terminal")?;

    println!("{}", exit_message(summary.outcome));
    Ok(())
}

fn exit_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::GameOver => "Game Over",
        Outcome::Quit => "Bye",
    }
}

fn run(config: &GameConfig, term: &mut TerminalRenderer) -> Result<Summary> {
    let mut game = Game::from_config(config);
    let mut keys = KeyReader::new();
    let mut pacing = RealTimePacing::from_config(config);
    engine::run(&mut game, &mut keys, term, &mut pacing)
}

fn init_logging() -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {:?}", path))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            // Nowhere to put records without scribbling over the field.
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
    Ok(())
}
