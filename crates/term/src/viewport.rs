//! Viewport sizing and centered composition of a frame onto the terminal.
//!
//! This module is pure apart from [`Viewport::query`]. It can be unit-tested.

use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::core::Grid;
use crate::types::BLANK_GLYPH;

/// Size assumed when the terminal cannot be queried (e.g. output is a pipe).
pub const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

static WARNED_FALLBACK: AtomicBool = AtomicBool::new(false);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Current terminal size, or [`FALLBACK_VIEWPORT`] if it cannot be read.
    pub fn query() -> Self {
        match crossterm::terminal::size() {
            Ok((width, height)) => Self { width, height },
            Err(err) => {
                if !WARNED_FALLBACK.swap(true, Ordering::Relaxed) {
                    warn!(
                        "terminal size unavailable ({err}), assuming {}x{}",
                        FALLBACK_VIEWPORT.width, FALLBACK_VIEWPORT.height
                    );
                }
                FALLBACK_VIEWPORT
            }
        }
    }
}

/// Placement of the frame along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Blank cells before the frame on screen.
    pub pad: u16,
    /// Frame cells cut off at the start.
    pub skip: u16,
    /// Frame cells shown.
    pub len: u16,
}

/// Center `frame` cells within `screen` cells.
///
/// The offset is half the unsigned size difference. It pads when the screen
/// is larger and crops the frame symmetrically when it is smaller.
pub fn center(screen: u16, frame: u16) -> Span {
    let offset = screen.abs_diff(frame) / 2;
    if screen >= frame {
        Span {
            pad: offset,
            skip: 0,
            len: frame,
        }
    } else {
        Span {
            pad: 0,
            skip: offset,
            len: screen,
        }
    }
}

/// Compose `frame` centered into a viewport-sized framebuffer.
///
/// This is the allocation-free hot path. Callers can reuse `fb` across
/// frames; it only reallocates when the viewport grows.
pub fn compose_centered(frame: &Grid<char>, viewport: Viewport, fb: &mut Grid<char>) {
    fb.resize(viewport.width, viewport.height, BLANK_GLYPH);
    fb.fill(BLANK_GLYPH);

    let xs = center(viewport.width, frame.width());
    let ys = center(viewport.height, frame.height());

    for dy in 0..ys.len {
        let Some(row) = frame.row(ys.skip + dy) else {
            break;
        };
        let visible = &row[xs.skip as usize..(xs.skip + xs.len) as usize];
        for (dx, &ch) in visible.iter().enumerate() {
            fb.set(xs.pad + dx as u16, ys.pad + dy, ch);
        }
    }
}
