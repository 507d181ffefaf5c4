//! Animation engine.
//!
//! Drives a [`FrameRenderer`](crate::core::FrameRenderer) in a loop, handing each
//! frame to a [`FrameSink`] and advancing the two rotation angles. The loop
//! runs until its [`StopCondition`] fires; the default never fires.

pub mod animator;

pub use tui_torus_core as core;
pub use tui_torus_types as types;

pub use animator::{Animator, FrameLimit, FrameSink, Orientation, RunForever, StopCondition};
