//! Core rendering module - pure, deterministic, and testable
//!
//! This module contains the torus sampling, projection and rasterization
//! pipeline. It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same angles and configuration produce identical frames
//! - **Testable**: Every stage can be checked without a terminal
//! - **Reusable**: Independent renderers share no state
//! - **Fast**: Buffers and sample tables are allocated once; frames do not allocate
//!
//! # Module Structure
//!
//! - [`grid`]: Contiguous row-major 2D buffer with bounds-checked access
//! - [`geometry`]: A/B rotation of surface samples and the lighting term
//! - [`palette`]: Luminance to glyph mapping
//! - [`renderer`]: Depth-buffered frame renderer
//!
//! # Pipeline
//!
//! For every `(theta, pi)` sample, outer loop over theta:
//!
//! 1. Point on the cross-section circle: `(R2 + R1 cos theta, R1 sin theta)`
//! 2. Revolve by `pi`, rotate by `A` and `B`, push away by `K2`
//! 3. Project with `K1 / z` onto the grid
//! 4. Keep the sample when it faces the light and is strictly closer than
//!    what the cell already holds
//!
//! # Example
//!
//! ```
//! use tui_torus_core::FrameRenderer;
//! use tui_torus_types::TorusConfig;
//!
//! let mut renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
//! let frame = renderer.render_frame(-1.9, -1.4);
//! assert_eq!((frame.width(), frame.height()), (50, 50));
//! assert!(frame.cells().iter().any(|&c| c != ' '));
//! ```

pub mod geometry;
pub mod grid;
pub mod palette;
pub mod renderer;

pub use tui_torus_types as types;

// Re-export commonly used types for convenience
pub use geometry::{Rotation, Trig};
pub use grid::Grid;
pub use palette::{glyph_for, luminance_index};
pub use renderer::{CellWrite, FrameRenderer, FrameStats};
