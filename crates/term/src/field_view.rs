//! FieldView: maps a `core::Field` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Field;
use crate::fb::{Cell, FrameBuffer};
use crate::types::CellColor;

/// Color of the wall framing the field
pub const WALL_COLOR: CellColor = CellColor::White;

/// Lays out the field as a grid of colored blocks inside a wall.
pub struct FieldView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for FieldView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl FieldView {
    /// Framebuffer size needed for `field`: one wall cell on every side.
    pub fn frame_size(&self, field: &Field) -> (u16, u16) {
        let w = (field.width() as u16 + 2) * self.cell_w;
        let h = field.height() as u16 + 2;
        (w, h)
    }

    /// Render `field` into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, field: &Field, fb: &mut FrameBuffer) {
        let (w, h) = self.frame_size(field);
        fb.resize(w, h);
        fb.clear(block(WALL_COLOR));

        for y in 0..field.height() {
            let Some(row) = field.row(y) else {
                continue;
            };
            for (x, &color) in row.iter().enumerate() {
                let px = (x as u16 + 1) * self.cell_w;
                let py = y as u16 + 1;
                fb.fill_rect(px, py, self.cell_w, 1, block(color));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, field: &Field) -> FrameBuffer {
        let (w, h) = self.frame_size(field);
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(field, &mut fb);
        fb
    }
}

fn block(bg: CellColor) -> Cell {
    Cell { ch: ' ', bg }
}
