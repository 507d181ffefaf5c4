//! Terminal output module.
//!
//! Takes finished glyph frames from the renderer and puts them on a real
//! terminal. It avoids any widget/layout library and instead composes into a
//! plain character framebuffer that is flushed with crossterm.
//!
//! Pieces:
//! - [`viewport`]: terminal size query and centered composition (pure)
//! - [`renderer`]: full/diff encoding and the buffered writer
//! - `signals` (unix): cursor-restoring exit on termination signals

pub mod renderer;
#[cfg(unix)]
pub mod signals;
pub mod viewport;

pub use tui_torus_core as core;
pub use tui_torus_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
#[cfg(unix)]
pub use signals::install_cleanup_hooks;
pub use viewport::{center, compose_centered, Span, Viewport, FALLBACK_VIEWPORT};
