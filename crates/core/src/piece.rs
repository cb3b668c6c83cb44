//! Piece module - a catalog shape placed on the field
//!
//! A piece is a shape id, an anchor and a rotation. The anchor sits at the
//! shape's approximate center: `width / 2` columns right of the mask's left
//! edge and `height / 2` rows below its top edge (floor division, so even and
//! odd sizes are offset differently). Rotation never touches the mask; reads go
//! through an inverse coordinate transform instead.

use arrayvec::ArrayVec;

use crate::field::Field;
use crate::shapes::{Shape, ShapeId, MAX_SHAPE_SIDE};
use crate::types::{CellColor, Rotation};

/// Upper bound on occupied cells for any catalog mask
pub const MAX_PIECE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Inclusive rectangle of field coordinates: `[sx, ex] x [sy, ey]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub sx: i32,
    pub sy: i32,
    pub ex: i32,
    pub ey: i32,
}

impl CellRange {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.sx && x <= self.ex && y >= self.sy && y <= self.ey
    }

    /// Iterate all coordinates row by row
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> {
        let (sx, ex) = (self.sx, self.ex);
        (self.sy..=self.ey).flat_map(move |y| (sx..=ex).map(move |x| (x, y)))
    }
}

/// The falling tetromino.
///
/// `Piece` is a plain value: copying it yields a fully independent piece,
/// which is what speculative moves rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: ShapeId,
    x: i32,
    y: i32,
    rotation: Rotation,
}

impl Piece {
    /// Create a piece in spawn orientation anchored at `(x, y)`
    pub fn new(shape: ShapeId, x: i32, y: i32) -> Self {
        Self {
            shape,
            x,
            y,
            rotation: Rotation::Deg0,
        }
    }

    pub fn shape_id(&self) -> ShapeId {
        self.shape
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn color(&self) -> CellColor {
        self.def().color()
    }

    /// Translate the anchor. No validation.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Advance to the next rotation state. No validation.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.next();
    }

    /// Rectangle that holds every cell the piece can occupy at its rotation.
    ///
    /// Quarter turns swap the horizontal and vertical half-extents.
    pub fn bounding_range(&self) -> CellRange {
        let (left, right, up, down) = self.half_extents();
        let (left, right, up, down) = if self.rotation.is_quarter_turn() {
            (up, down, left, right)
        } else {
            (left, right, up, down)
        };
        CellRange {
            sx: self.x - left,
            sy: self.y - up,
            ex: self.x + right - 1,
            ey: self.y + down - 1,
        }
    }

    /// Whether the rotated mask covers field cell `(x, y)`.
    ///
    /// Coordinates that map outside the mask report `false`; meaningful
    /// answers only come from inside [`Piece::bounding_range`].
    pub fn occupies(&self, x: i32, y: i32) -> bool {
        let def = self.def();
        let (left, _, up, _) = self.half_extents();
        let w = def.width() as i32;
        let h = def.height() as i32;
        let lx = x - (self.x - left);
        let ly = y - (self.y - up);

        match self.rotation {
            Rotation::Deg0 => def.filled(lx, ly),
            Rotation::Deg90 => def.filled(h - ly - 1, lx),
            Rotation::Deg180 => def.filled(w - lx - 1, h - ly - 1),
            Rotation::Deg270 => def.filled(ly, w - lx - 1),
        }
    }

    /// All occupied field cells at the current rotation, row by row
    pub fn cells(&self) -> ArrayVec<(i32, i32), MAX_PIECE_CELLS> {
        self.bounding_range()
            .iter()
            .filter(|&(x, y)| self.occupies(x, y))
            .collect()
    }

    fn def(&self) -> &'static Shape {
        self.shape.shape()
    }

    /// `(left, right, up, down)` extents around the anchor in mask space
    fn half_extents(&self) -> (i32, i32, i32, i32) {
        let def = self.def();
        let left = (def.width() / 2) as i32;
        let up = (def.height() / 2) as i32;
        (left, def.width() as i32 - left, up, def.height() as i32 - up)
    }
}

/// Try a transform on a copy of `piece` and keep it only if `field` accepts it.
///
/// Returns whether the transform was applied. A rejected transform leaves
/// `piece` untouched.
pub fn attempt(piece: &mut Piece, field: &Field, transform: impl FnOnce(&mut Piece)) -> bool {
    let mut candidate = *piece;
    transform(&mut candidate);
    if field.is_placeable(&candidate) {
        *piece = candidate;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offsets_follow_floor_division() {
        // 3x3: one column left of the anchor, two to the right (incl. anchor)
        let t = Piece::new(ShapeId::T, 5, 5);
        assert_eq!(
            t.bounding_range(),
            CellRange { sx: 4, sy: 4, ex: 6, ey: 6 }
        );

        // 4x4: two left, two right (incl. anchor)
        let i = Piece::new(ShapeId::I, 5, 5);
        assert_eq!(
            i.bounding_range(),
            CellRange { sx: 3, sy: 3, ex: 6, ey: 6 }
        );

        // 2x2: one left, one right (the anchor column)
        let o = Piece::new(ShapeId::O, 5, 5);
        assert_eq!(
            o.bounding_range(),
            CellRange { sx: 4, sy: 4, ex: 5, ey: 5 }
        );
    }

    #[test]
    fn t_piece_cells_per_rotation() {
        let mut t = Piece::new(ShapeId::T, 1, 1);
        // 0°: .X. / XXX
        assert_eq!(t.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);

        // 90°: nub points left
        t.rotate();
        assert_eq!(t.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (1, 2)]);

        // 180°: nub points down
        t.rotate();
        assert_eq!(t.cells().as_slice(), &[(0, 1), (1, 1), (2, 1), (1, 2)]);

        // 270°: nub points right
        t.rotate();
        assert_eq!(t.cells().as_slice(), &[(1, 0), (1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn i_piece_turns_vertical() {
        let mut i = Piece::new(ShapeId::I, 2, 2);
        assert_eq!(i.cells().as_slice(), &[(0, 1), (1, 1), (2, 1), (3, 1)]);

        i.rotate();
        assert_eq!(i.cells().as_slice(), &[(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn move_by_translates_cells() {
        let mut o = Piece::new(ShapeId::O, 1, 1);
        let before = o.cells();
        o.move_by(3, -2);
        let after = o.cells();
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!((a.0 + 3, a.1 - 2), *b);
        }
    }

    #[test]
    fn copy_is_independent() {
        let original = Piece::new(ShapeId::S, 4, 4);
        let mut trial = original;
        trial.move_by(1, 1);
        trial.rotate();
        assert_eq!(original.position(), (4, 4));
        assert_eq!(original.rotation(), Rotation::Deg0);
        assert_eq!(trial.position(), (5, 5));
    }

    #[test]
    fn attempt_commits_or_discards() {
        let field = Field::new(4, 4);
        let mut o = Piece::new(ShapeId::O, 1, 1);

        assert!(attempt(&mut o, &field, |p| p.move_by(1, 0)));
        assert_eq!(o.position(), (2, 1));

        // Two more columns right puts the right half at x = 4.
        assert!(!attempt(&mut o, &field, |p| p.move_by(2, 0)));
        assert_eq!(o.position(), (2, 1));
    }
}
