//! Torus surface rotation and lighting.
//!
//! A surface sample is given by the trig values of its two parameters:
//! `theta` around the tube and `pi` around the central axis. The torus is
//! rotated about the x-axis by `A` and about the z-axis by `B`; the light
//! comes from behind the viewer and above, along `(0, 1, -1)`.

use std::f64::consts::TAU;

/// Cosine and sine of one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trig {
    pub cos: f64,
    pub sin: f64,
}

impl Trig {
    /// Trig values of `angle`, reduced modulo 2π first so that `angle` and
    /// `angle + 2π` give bit-identical results.
    pub fn of(angle: f64) -> Self {
        let a = angle.rem_euclid(TAU);
        Self {
            cos: a.cos(),
            sin: a.sin(),
        }
    }
}

/// Sample angles `0, step, 2*step, ...` strictly below 2π, as trig pairs.
///
/// The order is the sweep order used by the renderer.
pub fn sweep(step: f64) -> Vec<Trig> {
    (0..)
        .map(|i| i as f64 * step)
        .take_while(|&t| t < TAU)
        .map(|t| Trig {
            cos: t.cos(),
            sin: t.sin(),
        })
        .collect()
}

/// A point in view space before the viewer offset is applied to `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Combined A/B rotation with its trig terms computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    a: Trig,
    b: Trig,
}

impl Rotation {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a: Trig::of(a),
            b: Trig::of(b),
        }
    }

    /// Rotate the point `(circle_x, circle_y, 0)` of the cross-section circle
    /// around the central axis by `pi`, then apply A and B.
    #[inline(always)]
    pub fn rotate(&self, circle_x: f64, circle_y: f64, pi: Trig) -> Point3 {
        let Trig { cos: cos_a, sin: sin_a } = self.a;
        let Trig { cos: cos_b, sin: sin_b } = self.b;
        Point3 {
            x: circle_x * (cos_b * pi.cos + sin_a * sin_b * pi.sin) - circle_y * cos_a * sin_b,
            y: circle_x * (sin_b * pi.cos - sin_a * cos_b * pi.sin) + circle_y * cos_a * cos_b,
            z: cos_a * circle_x * pi.sin + circle_y * sin_a,
        }
    }

    /// Dot product of the rotated surface normal with the light direction.
    ///
    /// Lies in `[-sqrt(2), sqrt(2)]`; positive when the surface faces the light.
    #[inline(always)]
    pub fn luminance(&self, theta: Trig, pi: Trig) -> f64 {
        let Trig { cos: cos_a, sin: sin_a } = self.a;
        let Trig { cos: cos_b, sin: sin_b } = self.b;
        theta.cos * pi.cos * sin_b - cos_a * pi.sin * theta.cos - sin_a * theta.sin
            + cos_b * (cos_a * theta.sin - pi.sin * sin_a * theta.cos)
    }
}
