//! Core types module - shared configuration and constants
//!
//! This module defines the immutable configuration used throughout the renderer.
//! All types are plain data with no external dependencies, so they can be built
//! once and handed to any number of independent renderer instances.
//!
//! # Torus Geometry Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 50 | Output grid columns |
//! | `SCREEN_HEIGHT` | 50 | Output grid rows |
//! | `TUBE_RADIUS` | 1.0 | R1, radius of the tube cross-section |
//! | `REVOLUTION_RADIUS` | 1.7 | R2, distance from the axis to the tube center |
//! | `VIEWER_DISTANCE` | 180.0 | K2, offset pushing the torus away from the viewer |
//! | `THETA_STEP` | 0.03 | Sampling step around the tube |
//! | `PI_STEP` | 0.01 | Sampling step around the central axis |
//!
//! The projection scale K1 is derived, not configured:
//! `K1 = W * K2 * 3 / (8 * (R1 + R2))`.
//!
//! # Animation Defaults
//!
//! - Start orientation: `A = -1.9`, `B = -1.4`
//! - Per-frame increments: `dA = 0.007`, `dB = 0.002`
//! - Frame pacing: `FRAME_MS` (16ms, roughly 60 FPS)
//!
//! # Examples
//!
//! ```
//! use tui_torus_types::{TorusConfig, LUMINANCE_RAMP};
//!
//! let cfg = TorusConfig::default();
//! assert!(cfg.validate().is_ok());
//! assert!((cfg.k1() - 1250.0).abs() < 1e-9);
//!
//! assert_eq!(LUMINANCE_RAMP.len(), 12);
//! assert_eq!(LUMINANCE_RAMP[11], '@');
//! ```

use std::fmt;
use std::time::Duration;

/// Output grid width in columns
pub const SCREEN_WIDTH: u16 = 50;

/// Output grid height in rows
pub const SCREEN_HEIGHT: u16 = 50;

/// R1: tube radius
pub const TUBE_RADIUS: f64 = 1.0;

/// R2: revolution radius
pub const REVOLUTION_RADIUS: f64 = 1.7;

/// K2: distance from the viewer to the torus center
pub const VIEWER_DISTANCE: f64 = 180.0;

/// Sampling step around the tube (theta)
pub const THETA_STEP: f64 = 0.03;

/// Sampling step around the central axis (pi)
pub const PI_STEP: f64 = 0.01;

/// Initial rotation about the first axis
pub const START_A: f64 = -1.9;

/// Initial rotation about the second axis
pub const START_B: f64 = -1.4;

/// Per-frame increment of A
pub const A_STEP: f64 = 0.007;

/// Per-frame increment of B
pub const B_STEP: f64 = 0.002;

/// Frame pacing interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Glyph written to cells no sample reached.
pub const BLANK_GLYPH: char = ' ';

/// Luminance palette, least to most luminant.
///
/// Indexed by `floor(luminance * LUMINANCE_SCALE)`.
pub const LUMINANCE_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Multiplier mapping luminance in `(0, sqrt(2)]` onto palette indices `0..=11`.
pub const LUMINANCE_SCALE: f64 = 8.0;

/// Configuration rejected by [`TorusConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Output grid has a zero dimension.
    EmptyScreen { width: u16, height: u16 },
    /// A radius is zero, negative, or not finite.
    BadRadius { name: &'static str, value: f64 },
    /// A sampling step is zero, negative, or not finite.
    BadStep { name: &'static str, value: f64 },
    /// The viewer distance is zero, negative, or not finite.
    BadViewerDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyScreen { width, height } => {
                write!(f, "screen must be non-empty, got {width}x{height}")
            }
            ConfigError::BadRadius { name, value } => {
                write!(f, "{name} must be positive and finite, got {value}")
            }
            ConfigError::BadStep { name, value } => {
                write!(f, "{name} must be positive and finite, got {value}")
            }
            ConfigError::BadViewerDistance(value) => {
                write!(f, "viewer distance must be positive and finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Fixed torus geometry and output grid size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    /// R1
    pub tube_radius: f64,
    /// R2
    pub revolution_radius: f64,
    /// K2
    pub viewer_distance: f64,
    pub theta_step: f64,
    pub pi_step: f64,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tube_radius: TUBE_RADIUS,
            revolution_radius: REVOLUTION_RADIUS,
            viewer_distance: VIEWER_DISTANCE,
            theta_step: THETA_STEP,
            pi_step: PI_STEP,
        }
    }
}

impl TorusConfig {
    /// Projection scale K1, sized so the torus fills about 3/4 of the grid width.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_torus_types::TorusConfig;
    ///
    /// let cfg = TorusConfig { screen_width: 80, ..TorusConfig::default() };
    /// assert!((cfg.k1() - 2000.0).abs() < 1e-9);
    /// ```
    pub fn k1(&self) -> f64 {
        let w = self.screen_width as f64;
        w * self.viewer_distance * 3.0 / (8.0 * (self.tube_radius + self.revolution_radius))
    }

    /// Number of cells in the output grid.
    pub fn cell_count(&self) -> usize {
        (self.screen_width as usize) * (self.screen_height as usize)
    }

    /// Check the configuration can be rendered.
    ///
    /// A viewer distance smaller than `R1 + R2` is accepted: parts of the torus
    /// then sit at or behind the eye and the renderer skips those samples.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        check_positive(self.tube_radius)
            .map_err(|value| ConfigError::BadRadius { name: "tube radius", value })?;
        check_positive(self.revolution_radius)
            .map_err(|value| ConfigError::BadRadius { name: "revolution radius", value })?;
        check_positive(self.theta_step)
            .map_err(|value| ConfigError::BadStep { name: "theta step", value })?;
        check_positive(self.pi_step)
            .map_err(|value| ConfigError::BadStep { name: "pi step", value })?;
        check_positive(self.viewer_distance).map_err(ConfigError::BadViewerDistance)?;
        Ok(())
    }
}

fn check_positive(value: f64) -> Result<(), f64> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(value)
    }
}

/// Animation loop parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub start_a: f64,
    pub start_b: f64,
    pub a_step: f64,
    pub b_step: f64,
    /// Minimum wall time per frame; `None` renders as fast as possible.
    pub frame_interval: Option<Duration>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            start_a: START_A,
            start_b: START_B,
            a_step: A_STEP,
            b_step: B_STEP,
            frame_interval: Some(Duration::from_millis(FRAME_MS)),
        }
    }
}

impl AnimationConfig {
    /// Same increments, no frame pacing. Used by tests and benches.
    pub fn unpaced() -> Self {
        Self {
            frame_interval: None,
            ..Self::default()
        }
    }
}
