//! Render tests - game state to framebuffer to terminal bytes

use term_tetris::core::{Field, Game, Piece, PieceSource, ShapeId};
use term_tetris::term::{encode_full_into, FieldView, WALL_COLOR};
use term_tetris::types::{CellColor, FIELD_HEIGHT, FIELD_WIDTH};

struct Only(ShapeId);

impl PieceSource for Only {
    fn next_piece(&mut self) -> Piece {
        Piece::new(self.0, 5, 0)
    }
}

#[test]
fn test_falling_piece_is_drawn_inside_wall() {
    let mut game = Game::new(Field::default(), Only(ShapeId::T));
    assert!(game.spawn());

    let view = FieldView::default();
    let fb = view.render(&game.render_field());
    assert_eq!(fb.width() as usize, (FIELD_WIDTH + 2) * 2);
    assert_eq!(fb.height() as usize, FIELD_HEIGHT + 2);

    // T's visible row is field (4..=6, 0), two columns per cell after the wall
    for px in 10..16 {
        assert_eq!(fb.get(px, 1).map(|c| c.bg), Some(CellColor::Purple), "x {}", px);
    }
    assert_eq!(fb.get(8, 1).map(|c| c.bg), Some(CellColor::Empty));
    assert_eq!(fb.get(0, 1).map(|c| c.bg), Some(WALL_COLOR));
    assert_eq!(fb.get(10, 0).map(|c| c.bg), Some(WALL_COLOR));
}

#[test]
fn test_encoded_frame_has_one_line_per_row() {
    let mut field = Field::default();
    field.set(0, 19, CellColor::Green);

    let fb = FieldView::default().render(&field);
    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("\r\n").count(), FIELD_HEIGHT + 2);
    // Green palette index 2
    assert!(text.contains("\x1b[48;5;2m  "));
}
