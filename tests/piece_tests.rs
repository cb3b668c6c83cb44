//! Piece tests - rotation and bounding range properties for every shape

use term_tetris::core::{attempt, Field, Piece, ShapeId};
use term_tetris::types::{CellColor, Rotation};

/// Every cell the piece occupies inside a generous window around its anchor
fn occupied_window(piece: &Piece) -> Vec<(i32, i32)> {
    let (ax, ay) = piece.position();
    let mut cells = Vec::new();
    for y in ay - 6..=ay + 6 {
        for x in ax - 6..=ax + 6 {
            if piece.occupies(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[test]
fn test_occupied_cells_inside_bounding_range() {
    for shape in ShapeId::ALL {
        let mut piece = Piece::new(shape, 5, 5);
        for _ in 0..4 {
            let range = piece.bounding_range();
            let cells = occupied_window(&piece);
            assert_eq!(cells.len(), 4, "{:?} at {:?}", shape, piece.rotation());
            for (x, y) in cells {
                assert!(
                    range.contains(x, y),
                    "{:?} at {:?}: ({}, {}) outside {:?}",
                    shape,
                    piece.rotation(),
                    x,
                    y,
                    range
                );
            }
            piece.rotate();
        }
    }
}

#[test]
fn test_cells_match_occupancy() {
    for shape in ShapeId::ALL {
        let mut piece = Piece::new(shape, 3, 8);
        for _ in 0..4 {
            let mut listed: Vec<_> = piece.cells().into_iter().collect();
            listed.sort();
            let mut scanned = occupied_window(&piece);
            scanned.sort();
            assert_eq!(listed, scanned, "{:?} at {:?}", shape, piece.rotation());
            piece.rotate();
        }
    }
}

#[test]
fn test_four_rotations_restore_occupancy() {
    for shape in ShapeId::ALL {
        let start = Piece::new(shape, 4, 4);
        let mut piece = start;
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(piece.rotation(), Rotation::Deg0);
        assert_eq!(occupied_window(&piece), occupied_window(&start), "{:?}", shape);
    }
}

#[test]
fn test_bounding_range_swaps_on_quarter_turn() {
    for shape in ShapeId::ALL {
        let def = shape.shape();
        let mut piece = Piece::new(shape, 5, 5);
        for _ in 0..4 {
            let r = piece.bounding_range();
            let (w, h) = ((r.ex - r.sx + 1) as usize, (r.ey - r.sy + 1) as usize);
            if piece.rotation().is_quarter_turn() {
                assert_eq!((w, h), (def.height(), def.width()), "{:?}", shape);
            } else {
                assert_eq!((w, h), (def.width(), def.height()), "{:?}", shape);
            }
            piece.rotate();
        }
    }
}

#[test]
fn test_move_does_not_change_shape() {
    let mut piece = Piece::new(ShapeId::S, 5, 5);
    let before = occupied_window(&piece);
    piece.move_by(2, -3);
    let after = occupied_window(&piece);
    let shifted: Vec<_> = before.iter().map(|&(x, y)| (x + 2, y - 3)).collect();
    assert_eq!(after, shifted);
}

#[test]
fn test_clone_is_independent() {
    let original = Piece::new(ShapeId::J, 5, 5);
    let mut copy = original;
    copy.rotate();
    copy.move_by(1, 1);
    assert_eq!(original.position(), (5, 5));
    assert_eq!(original.rotation(), Rotation::Deg0);
}

#[test]
fn test_attempt_keeps_piece_on_rejection() {
    let mut field = Field::default();
    let mut piece = Piece::new(ShapeId::T, 5, 10);

    // Wall one column left of the piece
    for y in 0..field.height() as i32 {
        field.set(3, y, CellColor::Red);
    }
    let before = piece;
    assert!(!attempt(&mut piece, &field, |p| p.move_by(-1, 0)));
    assert_eq!(piece, before);

    assert!(attempt(&mut piece, &field, |p| p.move_by(1, 0)));
    assert_eq!(piece.position(), (6, 10));
}

#[test]
fn test_attempt_rejects_leaving_the_field() {
    let field = Field::default();
    let mut piece = Piece::new(ShapeId::O, 1, 5);
    assert!(!attempt(&mut piece, &field, |p| p.move_by(-1, 0)));
    assert_eq!(piece.position(), (1, 5));

    let mut piece = Piece::new(ShapeId::O, 5, 19);
    assert!(!attempt(&mut piece, &field, |p| p.move_by(0, 1)));
    assert_eq!(piece.position(), (5, 19));
}
