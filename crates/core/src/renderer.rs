//! FrameRenderer: samples the torus surface and rasterizes it into a glyph grid.
//!
//! This module is pure (no I/O). One renderer owns one depth buffer and one
//! glyph buffer, both allocated at construction and reused every frame.

use crate::geometry::{sweep, Rotation, Trig};
use crate::grid::Grid;
use crate::palette::luminance_index;
use crate::types::{ConfigError, TorusConfig, BLANK_GLYPH, LUMINANCE_RAMP};

/// Samples closer to the eye plane than this are skipped.
pub const MIN_DEPTH: f64 = 1e-6;

/// One accepted write to the depth and glyph buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellWrite {
    pub x: u16,
    pub y: u16,
    /// Inverse depth written to the depth buffer.
    pub ooz: f64,
    pub glyph: char,
}

/// Per-frame sample counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Surface samples visited.
    pub samples: u64,
    /// Samples facing the light.
    pub lit: u64,
    /// Depth-test wins.
    pub written: u64,
    /// Lit samples projected outside the grid.
    pub out_of_bounds: u64,
    /// Samples with `|z| < MIN_DEPTH`.
    pub degenerate: u64,
}

/// Depth-buffered ASCII torus renderer.
pub struct FrameRenderer {
    config: TorusConfig,
    k1: f64,
    half_w: f64,
    half_h: f64,
    theta: Vec<Trig>,
    pi: Vec<Trig>,
    depth: Grid<f64>,
    glyphs: Grid<char>,
    stats: FrameStats,
}

impl FrameRenderer {
    pub fn new(config: TorusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (w, h) = (config.screen_width, config.screen_height);
        Ok(Self {
            k1: config.k1(),
            // Integer halves keep odd sizes aligned with whole cells.
            half_w: (w / 2) as f64,
            half_h: (h / 2) as f64,
            theta: sweep(config.theta_step),
            pi: sweep(config.pi_step),
            depth: Grid::new(w, h, 0.0),
            glyphs: Grid::new(w, h, BLANK_GLYPH),
            stats: FrameStats::default(),
            config,
        })
    }

    pub fn config(&self) -> &TorusConfig {
        &self.config
    }

    /// Glyph grid of the most recent frame.
    pub fn glyphs(&self) -> &Grid<char> {
        &self.glyphs
    }

    /// Depth grid of the most recent frame (0 = nothing drawn).
    pub fn depth(&self) -> &Grid<f64> {
        &self.depth
    }

    /// Counters of the most recent frame.
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Render one frame for rotation angles `a` and `b` (radians).
    pub fn render_frame(&mut self, a: f64, b: f64) -> &Grid<char> {
        self.render_frame_observed(a, b, |_| {});
        &self.glyphs
    }

    /// Render one frame, reporting every accepted cell write in sweep order.
    ///
    /// Theta is the outer loop, pi the inner loop. A later sample replaces a
    /// cell only when strictly closer, so the first sample wins depth ties.
    pub fn render_frame_observed<F>(&mut self, a: f64, b: f64, mut observe: F) -> FrameStats
    where
        F: FnMut(CellWrite),
    {
        self.depth.fill(0.0);
        self.glyphs.fill(BLANK_GLYPH);

        let rot = Rotation::new(a, b);
        let r1 = self.config.tube_radius;
        let r2 = self.config.revolution_radius;
        let k2 = self.config.viewer_distance;
        let mut stats = FrameStats::default();

        for &theta in &self.theta {
            let circle_x = r2 + r1 * theta.cos;
            let circle_y = r1 * theta.sin;

            for &pi in &self.pi {
                stats.samples += 1;

                let p = rot.rotate(circle_x, circle_y, pi);
                let z = k2 + p.z;
                if z.abs() < MIN_DEPTH {
                    stats.degenerate += 1;
                    continue;
                }
                let ooz = 1.0 / z;

                let Some(li) = luminance_index(rot.luminance(theta, pi)) else {
                    continue;
                };
                stats.lit += 1;

                let xf = self.half_w + self.k1 * p.x * ooz;
                let yf = self.half_h - self.k1 * p.y * ooz;
                let Some(i) = self.cell_index(xf, yf) else {
                    stats.out_of_bounds += 1;
                    continue;
                };

                if ooz > self.depth.at(i) {
                    let glyph = LUMINANCE_RAMP[li];
                    self.depth.put(i, ooz);
                    self.glyphs.put(i, glyph);
                    stats.written += 1;
                    observe(CellWrite {
                        x: xf as u16,
                        y: yf as u16,
                        ooz,
                        glyph,
                    });
                }
            }
        }

        self.stats = stats;
        stats
    }

    /// Truncate projected coordinates to a buffer offset, rejecting anything
    /// outside `[0, W) x [0, H)` (including NaN).
    #[inline(always)]
    fn cell_index(&self, xf: f64, yf: f64) -> Option<usize> {
        let w = self.config.screen_width as f64;
        let h = self.config.screen_height as f64;
        if !(xf >= 0.0 && xf < w && yf >= 0.0 && yf < h) {
            return None;
        }
        self.depth.index(xf as u16, yf as u16)
    }
}
