//! Terminal torus runner (default binary).
//!
//! Spins the torus forever, centered in the terminal. There are no flags and
//! no key bindings; Ctrl-C (or any termination signal) restores the cursor
//! and exits. Set `RUST_LOG` to see diagnostics on stderr.

use anyhow::{Context, Result};
use log::info;

use tui_torus::core::{FrameRenderer, Grid};
use tui_torus::engine::{Animator, RunForever};
use tui_torus::term::{compose_centered, TerminalRenderer, Viewport};
use tui_torus::types::{AnimationConfig, TorusConfig, BLANK_GLYPH};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    #[cfg(unix)]
    tui_torus::term::install_cleanup_hooks()?;

    let config = TorusConfig::default();
    let renderer = FrameRenderer::new(config).context("invalid torus configuration")?;
    info!(
        "rendering {}x{} torus, K1={:.1}",
        config.screen_width,
        config.screen_height,
        config.k1()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, renderer);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, renderer: FrameRenderer) -> Result<()> {
    let mut animator = Animator::new(renderer, AnimationConfig::default());
    let mut fb = Grid::new(0, 0, BLANK_GLYPH);

    let mut present = |frame: &Grid<char>| -> Result<()> {
        compose_centered(frame, Viewport::query(), &mut fb);
        term.draw_swap(&mut fb)
    };
    animator
        .run(&mut present, RunForever)
        .context("failed to draw frame")?;
    Ok(())
}
