//! Key mapping from raw key bytes to game actions.

use crate::types::GameAction;

/// Map a key byte to a game action.
///
/// Space or `r` rotates, `h`/`l` move left/right, `j` drops one row.
/// Everything else (including `q`, see [`should_quit`]) maps to nothing.
pub fn handle_key(key: u8) -> Option<GameAction> {
    match key {
        b' ' | b'r' => Some(GameAction::Rotate),
        b'h' => Some(GameAction::MoveLeft),
        b'l' => Some(GameAction::MoveRight),
        b'j' => Some(GameAction::SoftDrop),
        _ => None,
    }
}

/// ETX, what Ctrl+C produces once the terminal is in raw mode
pub const CTRL_C: u8 = 0x03;

/// Check if key should quit the game.
pub fn should_quit(key: u8) -> bool {
    key == b'q' || key == CTRL_C
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key(b'h'), Some(GameAction::MoveLeft));
        assert_eq!(handle_key(b'l'), Some(GameAction::MoveRight));
        assert_eq!(handle_key(b'j'), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(handle_key(b' '), Some(GameAction::Rotate));
        assert_eq!(handle_key(b'r'), Some(GameAction::Rotate));
    }

    #[test]
    fn test_other_keys_ignored() {
        for key in [b'H', b'L', b'k', b'x', b'\n', 0x1b] {
            assert_eq!(handle_key(key), None, "key {:#x}", key);
        }
        assert_eq!(handle_key(b'q'), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(b'q'));
        assert!(should_quit(CTRL_C));
        assert!(!should_quit(b'Q'));
        assert!(!should_quit(b'x'));
    }
}
