//! Field module - the occupancy grid pieces fall into
//!
//! The field is a `width x height` grid where each cell is empty or holds the
//! color of a locked piece. Storage is a flat row-major vector.
//! Coordinates: (x, y) with x growing left to right and y growing top to
//! bottom. Rows above y = 0 exist only for collision purposes (a fresh piece
//! may hang over the top edge) and are never stored.

use crate::piece::Piece;
use crate::types::{CellColor, FIELD_HEIGHT, FIELD_WIDTH};

/// The playing area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellColor>,
}

impl Field {
    /// Create a new empty field
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellColor::Empty; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellColor> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, color: CellColor) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if !c.is_empty())
    }

    /// One row as a slice, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[CellColor]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Check if a row is completely filled
    pub fn is_row_filled(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellColor] {
        &self.cells
    }

    /// Whether `piece` can sit where it is.
    ///
    /// Occupied piece cells above the top edge are ignored. Every other
    /// occupied cell must be inside the side and bottom walls and empty.
    /// All movement, rotation, spawn and game-over decisions go through here.
    pub fn is_placeable(&self, piece: &Piece) -> bool {
        piece
            .bounding_range()
            .iter()
            .filter(|&(x, y)| y >= 0 && piece.occupies(x, y))
            .all(|(x, y)| matches!(self.get(x, y), Some(CellColor::Empty)))
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// No validation. The bounding range is clamped to the field first, so
    /// covered cells outside the grid (e.g. above the top edge) are dropped.
    pub fn commit(&mut self, piece: &Piece) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let range = piece.bounding_range();
        let sx = range.sx.max(0);
        let sy = range.sy.max(0);
        let ex = range.ex.min(self.width as i32 - 1);
        let ey = range.ey.min(self.height as i32 - 1);

        let color = piece.color();
        for y in sy..=ey {
            for x in sx..=ex {
                if piece.occupies(x, y) {
                    self.set(x, y, color);
                }
            }
        }
    }

    /// Remove every filled row and return how many were removed.
    ///
    /// Rows are scanned bottom to top. A filled row at `y` is removed by
    /// copying each row above it one step down and blanking row 0; the scan
    /// then re-checks `y`, since a new row has slid into it.
    pub fn clear_filled_rows(&mut self) -> u32 {
        let width = self.width;
        if width == 0 {
            return 0;
        }
        let mut cleared = 0;
        let mut y = self.height;

        while y > 0 {
            let row = y - 1;
            if !self.is_row_filled(row) {
                y -= 1;
                continue;
            }

            cleared += 1;
            for yy in (1..=row).rev() {
                let src_start = (yy - 1) * width;
                self.cells
                    .copy_within(src_start..src_start + width, yy * width);
            }
            self.cells[..width].fill(CellColor::Empty);
        }

        cleared
    }

    /// Scratch copy with `piece` drawn on top (used for rendering)
    pub fn with_piece(&self, piece: &Piece) -> Field {
        let mut scratch = self.clone();
        scratch.commit(piece);
        scratch
    }

    /// Create from row strings for testing: `.` is empty, anything else is
    /// a filled cell.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut field = Field::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width);
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    field.set(x as i32, y as i32, CellColor::White);
                }
            }
        }
        field
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}
