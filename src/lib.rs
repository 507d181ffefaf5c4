//! TUI Torus (workspace facade crate).
//!
//! Exposes `tui_torus::{core,engine,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use tui_torus_core as core;
pub use tui_torus_engine as engine;
pub use tui_torus_term as term;
pub use tui_torus_types as types;
