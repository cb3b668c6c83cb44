//! Non-blocking key reader.
//!
//! Polls crossterm with a zero timeout so the game loop never waits on the
//! keyboard. At most one event is consumed per call, mirroring one byte read
//! from a raw terminal. Raw mode itself is owned by the terminal renderer.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::map::CTRL_C;

#[derive(Debug, Default)]
pub struct KeyReader {
    _private: (),
}

impl KeyReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the pending key, or `None` when nothing is waiting.
    pub fn try_read_key(&mut self) -> Result<Option<u8>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(key_byte(key)),
            _ => Ok(None),
        }
    }
}

/// Reduce a key event to the byte a raw terminal would have delivered.
///
/// Only presses of printable ASCII keys (plus Ctrl+C) produce a byte;
/// releases, repeats, special keys and other Ctrl chords are dropped.
pub fn key_byte(key: KeyEvent) -> Option<u8> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(CTRL_C),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn test_ascii_press_becomes_byte() {
        assert_eq!(key_byte(KeyEvent::from(KeyCode::Char('h'))), Some(b'h'));
        assert_eq!(key_byte(KeyEvent::from(KeyCode::Char(' '))), Some(b' '));
    }

    #[test]
    fn test_ctrl_c_becomes_etx() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_byte(key), Some(CTRL_C));
    }

    #[test]
    fn test_other_ctrl_chords_dropped() {
        for c in ['j', 'q', 'h', 'r'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
            assert_eq!(key_byte(key), None, "ctrl+{}", c);
        }
        // Shift still yields the plain character
        let key = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(key_byte(key), Some(b'Q'));
    }

    #[test]
    fn test_special_and_release_dropped() {
        assert_eq!(key_byte(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(key_byte(KeyEvent::from(KeyCode::Char('é'))), None);

        let release = KeyEvent {
            code: KeyCode::Char('h'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_byte(release), None);
    }
}
