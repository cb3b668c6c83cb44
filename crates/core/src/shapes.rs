//! Shape catalog - the seven tetromino definitions
//!
//! Each shape is a fixed occupancy mask plus a color. Masks are stored in
//! their spawn orientation only; rotation is applied by [`crate::piece`] as a
//! coordinate transform when the mask is read.

use crate::types::CellColor;

/// Largest mask side across the catalog (the I piece is 4x4)
pub const MAX_SHAPE_SIDE: usize = 4;

/// Identifier of one of the seven catalog shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeId {
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::J,
        ShapeId::L,
        ShapeId::O,
        ShapeId::S,
        ShapeId::T,
        ShapeId::Z,
    ];

    /// Look up the static definition for this id
    pub fn shape(self) -> &'static Shape {
        &SHAPES[self.index()]
    }

    /// Position in [`ShapeId::ALL`]
    pub fn index(self) -> usize {
        match self {
            ShapeId::I => 0,
            ShapeId::J => 1,
            ShapeId::L => 2,
            ShapeId::O => 3,
            ShapeId::S => 4,
            ShapeId::T => 5,
            ShapeId::Z => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeId::I => "i",
            ShapeId::J => "j",
            ShapeId::L => "l",
            ShapeId::O => "o",
            ShapeId::S => "s",
            ShapeId::T => "t",
            ShapeId::Z => "z",
        }
    }
}

/// Immutable shape definition.
///
/// Only the top-left `height x width` corner of `mask` is meaningful.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    height: usize,
    mask: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
    color: CellColor,
}

impl Shape {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color(&self) -> CellColor {
        self.color
    }

    /// Mask cell at local column `col` and row `row`.
    /// Indices outside the mask read as empty.
    #[inline(always)]
    pub fn filled(&self, col: i32, row: i32) -> bool {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return false;
        }
        self.mask[row as usize][col as usize]
    }
}

const X: bool = true;
const O: bool = false;

/// The catalog, indexed by [`ShapeId::index`]
pub static SHAPES: [Shape; 7] = [
    // I
    Shape {
        width: 4,
        height: 4,
        mask: [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
        color: CellColor::LightBlue,
    },
    // J
    Shape {
        width: 3,
        height: 3,
        mask: [[X, O, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
        color: CellColor::Blue,
    },
    // L
    Shape {
        width: 3,
        height: 3,
        mask: [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
        color: CellColor::Orange,
    },
    // O
    Shape {
        width: 2,
        height: 2,
        mask: [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
        color: CellColor::White,
    },
    // S
    Shape {
        width: 3,
        height: 3,
        mask: [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
        color: CellColor::Green,
    },
    // T
    Shape {
        width: 3,
        height: 3,
        mask: [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
        color: CellColor::Purple,
    },
    // Z
    Shape {
        width: 3,
        height: 3,
        mask: [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
        color: CellColor::Red,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_is_a_tetromino() {
        for id in ShapeId::ALL {
            let cells = id.shape().mask.iter().flatten().filter(|&&c| c).count();
            assert_eq!(cells, 4, "{:?}", id);
        }
    }

    #[test]
    fn log_names_are_single_lowercase_letters() {
        for id in ShapeId::ALL {
            let name = id.as_str();
            assert_eq!(name, format!("{:?}", id).to_lowercase());
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, id) in ShapeId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn filled_outside_mask_is_empty() {
        let o = ShapeId::O.shape();
        assert!(o.filled(0, 0));
        assert!(o.filled(1, 1));
        assert!(!o.filled(2, 0));
        assert!(!o.filled(-1, 0));
        assert!(!o.filled(0, 2));
    }

    #[test]
    fn shape_colors_are_distinct_and_not_empty() {
        let mut seen = Vec::new();
        for id in ShapeId::ALL {
            let color = id.shape().color();
            assert!(!color.is_empty());
            assert!(!seen.contains(&color));
            seen.push(color);
        }
    }
}
