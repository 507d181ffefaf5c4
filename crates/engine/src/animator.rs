//! Animation driver: render, present, advance, repeat.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, trace};

use crate::core::{FrameRenderer, Grid};
use crate::types::AnimationConfig;

/// Current rotation angles, owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub a: f64,
    pub b: f64,
}

impl Orientation {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Orientation after one frame.
    pub fn advanced(self, a_step: f64, b_step: f64) -> Self {
        Self {
            a: self.a + a_step,
            b: self.b + b_step,
        }
    }
}

/// Destination of rendered frames.
pub trait FrameSink {
    fn present(&mut self, frame: &Grid<char>) -> Result<()>;
}

impl<F> FrameSink for F
where
    F: FnMut(&Grid<char>) -> Result<()>,
{
    fn present(&mut self, frame: &Grid<char>) -> Result<()> {
        self(frame)
    }
}

/// Decides, before each frame, whether the loop ends.
///
/// `frames` is the number of frames presented so far.
pub trait StopCondition {
    fn should_stop(&mut self, frames: u64) -> bool;
}

/// Never stops. The process ends through a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunForever;

impl StopCondition for RunForever {
    fn should_stop(&mut self, _frames: u64) -> bool {
        false
    }
}

/// Stops after a fixed number of frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameLimit(pub u64);

impl StopCondition for FrameLimit {
    fn should_stop(&mut self, frames: u64) -> bool {
        frames >= self.0
    }
}

impl<F> StopCondition for F
where
    F: FnMut(u64) -> bool,
{
    fn should_stop(&mut self, frames: u64) -> bool {
        self(frames)
    }
}

/// Owns the renderer and the orientation state.
pub struct Animator {
    renderer: FrameRenderer,
    config: AnimationConfig,
    orientation: Orientation,
}

impl Animator {
    pub fn new(renderer: FrameRenderer, config: AnimationConfig) -> Self {
        Self {
            renderer,
            orientation: Orientation::new(config.start_a, config.start_b),
            config,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Render the current orientation, present it, then advance the angles.
    pub fn step<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        let Orientation { a, b } = self.orientation;
        let frame = self.renderer.render_frame(a, b);
        sink.present(frame)?;
        trace!("frame a={a:.3} b={b:.3} {:?}", self.renderer.stats());
        self.orientation = self
            .orientation
            .advanced(self.config.a_step, self.config.b_step);
        Ok(())
    }

    /// Run until `stop` says so or the sink fails. Returns frames presented.
    ///
    /// With [`RunForever`] this only returns on a sink error.
    pub fn run<S, C>(&mut self, sink: &mut S, mut stop: C) -> Result<u64>
    where
        S: FrameSink + ?Sized,
        C: StopCondition,
    {
        debug!(
            "animation start a={} b={} interval={:?}",
            self.orientation.a, self.orientation.b, self.config.frame_interval
        );
        let mut frames = 0u64;
        while !stop.should_stop(frames) {
            let started = Instant::now();
            self.step(sink)?;
            frames += 1;
            if let Some(interval) = self.config.frame_interval {
                let rest = interval.saturating_sub(started.elapsed());
                if rest > Duration::ZERO {
                    std::thread::sleep(rest);
                }
            }
        }
        debug!("animation stopped after {frames} frames");
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TorusConfig;

    fn animator() -> Animator {
        let renderer = FrameRenderer::new(TorusConfig::default()).unwrap();
        Animator::new(renderer, AnimationConfig::unpaced())
    }

    #[test]
    fn frame_limit_bounds_the_loop() {
        let mut anim = animator();
        let mut seen = 0;
        let mut sink = |_: &Grid<char>| -> Result<()> {
            seen += 1;
            Ok(())
        };
        let frames = anim.run(&mut sink, FrameLimit(3)).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(seen, 3);
    }

    #[test]
    fn angles_advance_by_their_own_rates() {
        let mut anim = animator();
        let start = anim.orientation();
        assert_eq!(start, Orientation::new(-1.9, -1.4));

        let mut sink = |_: &Grid<char>| -> Result<()> { Ok(()) };
        anim.run(&mut sink, FrameLimit(2)).unwrap();

        let o = anim.orientation();
        assert!((o.a - (-1.9 + 2.0 * 0.007)).abs() < 1e-12);
        assert!((o.b - (-1.4 + 2.0 * 0.002)).abs() < 1e-12);
    }

    #[test]
    fn closure_stop_condition() {
        let mut anim = animator();
        let mut sink = |_: &Grid<char>| -> Result<()> { Ok(()) };
        let frames = anim.run(&mut sink, |n: u64| n == 1).unwrap();
        assert_eq!(frames, 1);
    }

    #[test]
    fn sink_error_ends_the_loop() {
        let mut anim = animator();
        let mut sink = |_: &Grid<char>| -> Result<()> { anyhow::bail!("display gone") };
        let err = anim.run(&mut sink, RunForever).unwrap_err();
        assert_eq!(err.to_string(), "display gone");
        // The failed frame does not advance the orientation.
        assert_eq!(anim.orientation(), Orientation::new(-1.9, -1.4));
    }
}
