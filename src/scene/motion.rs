//! Curves shared by the scene renderers.

use crate::{
    animation::ease::Ease,
    animation::interpolate::{InterpolateOptions, Interpolation},
    animation::spring::{Spring, SpringConfig, SpringOptions},
    foundation::core::Fps,
    foundation::error::FramecastResult,
    foundation::math::lerp,
};

/// Clamped `0 -> 1` over the first `frames` frames.
pub fn fade_in(frames: i64) -> FramecastResult<Interpolation> {
    ramp(0, frames, 0.0, 1.0, Ease::Linear)
}

/// Clamped `1 -> 0` over the last `frames` frames of a `length`-frame window.
pub fn fade_out(length: u64, frames: i64) -> FramecastResult<Interpolation> {
    let end = length as i64;
    ramp(end - frames, end, 1.0, 0.0, Ease::Linear)
}

/// Clamped two-point mapping from frames `[start, end]` to `[from, to]`.
pub fn ramp(
    start: i64,
    end: i64,
    from: f64,
    to: f64,
    ease: Ease,
) -> FramecastResult<Interpolation> {
    Interpolation::new(
        [start as f64, end as f64],
        [from, to],
        InterpolateOptions::clamped().with_ease(ease),
    )
}

/// Smooth overdamped entrance (damping 200) that settles after `frames`.
pub fn entrance(fps: Fps, frames: u64) -> FramecastResult<Spring> {
    stretched(fps, SpringConfig::damped(200.0), frames)
}

/// Snappy scale-in with a little overshoot (damping 15, stiffness 200).
pub fn pop(fps: Fps, frames: u64) -> FramecastResult<Spring> {
    stretched(fps, SpringConfig::new(15.0, 200.0), frames)
}

/// Bouncier card entrance (damping 14, stiffness 160).
pub fn bounce(fps: Fps, frames: u64) -> FramecastResult<Spring> {
    stretched(fps, SpringConfig::new(14.0, 160.0), frames)
}

fn stretched(fps: Fps, config: SpringConfig, frames: u64) -> FramecastResult<Spring> {
    Spring::new(fps, SpringOptions::new(config).duration(frames))
}

/// Map `sin(x)` from `[-1, 1]` onto `[lo, hi]`.
pub fn wave(x: f64, lo: f64, hi: f64) -> f64 {
    lerp(lo, hi, (x.sin() + 1.0) / 2.0)
}

/// Map a `[0, 1]` progress onto `[a, b]` without clamping.
pub fn mix(progress: f64, a: f64, b: f64) -> f64 {
    lerp(a, b, progress)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/motion.rs"]
mod tests;
