//! TerminalRenderer: flushes a glyph framebuffer to a real terminal.
//!
//! Every frame is encoded into one buffer and written with a single flush.
//! The first frame, and any frame after a size change, is a full redraw;
//! later frames only rewrite the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::Grid;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<Grid<char>>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Hide the cursor and clear the screen.
    ///
    /// Raw mode stays off so Ctrl-C still raises SIGINT.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Show the cursor again.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one framebuffer and pass it in every frame.
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut Grid<char>) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            other => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = other.unwrap_or_else(|| Grid::new(0, 0, ' '));
                prev.resize(fb.width(), fb.height(), ' ');
                prev
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Rows are joined with `\r\n`; no newline follows the last row, so a frame
/// exactly as tall as the terminal does not scroll.
pub fn encode_full_into(fb: &Grid<char>, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        if let Some(row) = fb.row(y) {
            for &ch in row {
                out.queue(Print(ch))?;
            }
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// The cursor is homed first, then moved to the start of each changed run.
pub fn encode_diff_into(prev: &Grid<char>, next: &Grid<char>, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            out.queue(Print(next.get(x + dx, y).unwrap_or(' ')))?;
        }
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &Grid<char>,
    next: &Grid<char>,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
