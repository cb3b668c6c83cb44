//! TerminalRenderer: owns the raw-mode terminal and flushes frames to it.
//!
//! Every frame is a full redraw: clear the screen, home the cursor, then paint
//! the framebuffer row by row with a background color per cell and a color
//! reset at each line end.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::core::Field;
use crate::engine::Screen;
use crate::fb::FrameBuffer;
use crate::field_view::FieldView;
use crate::types::CellColor;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: FieldView,
    fb: FrameBuffer,
    buf: Vec<u8>,
    raw: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: FieldView::default(),
            fb: FrameBuffer::new(0, 0),
            buf: Vec::with_capacity(16 * 1024),
            raw: false,
        }
    }

    /// Create a renderer with the terminal already in raw mode.
    ///
    /// The previous terminal configuration comes back on [`exit`] or when the
    /// renderer is dropped, whichever happens first.
    ///
    /// [`exit`]: TerminalRenderer::exit
    pub fn open() -> Result<Self> {
        let mut term = Self::new();
        term.enter()?;
        Ok(term)
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a field framed by its wall.
    pub fn draw_field(&mut self, field: &Field) -> Result<()> {
        self.view.render_into(field, &mut self.fb);
        self.buf.clear();
        encode_full_into(&self.fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.exit();
    }
}

impl Screen for TerminalRenderer {
    fn draw(&mut self, field: &Field) -> Result<()> {
        self.draw_field(field)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        let mut current: Option<CellColor> = None;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current != Some(cell.bg) {
                out.queue(SetBackgroundColor(palette(cell.bg)))?;
                current = Some(cell.bg);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(Print("\r\n"))?;
    }

    Ok(())
}

fn palette(color: CellColor) -> Color {
    Color::AnsiValue(color.ansi_index())
}
