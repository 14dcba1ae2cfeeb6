use crate::{
    foundation::core::Fps,
    foundation::error::{FramecastError, FramecastResult},
};

/// Distance from rest below which a spring counts as settled.
pub const SETTLE_THRESHOLD: f64 = 0.005;

const MAX_SETTLE_FRAMES: u64 = 1_000_000;
const CRITICAL_EPS: f64 = 1e-6;

/// Physical parameters of a damped harmonic oscillator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Mass `m`.
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Clamp progress to at most 1 (no visible overshoot).
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn default_mass() -> f64 {
    1.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Config with the given damping and stiffness, unit mass.
    pub fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            ..Self::default()
        }
    }

    /// Default stiffness with the given damping.
    pub fn damped(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    /// Reject configs that cannot settle.
    pub fn validate(&self) -> FramecastResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(FramecastError::animation(format!(
                    "spring {name} must be finite and > 0 (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// Damping ratio ζ; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// `true` when the response overshoots its rest point.
    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0 - CRITICAL_EPS
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Remaining displacement from rest `t` seconds after release from 1 with zero velocity.
    fn displacement(&self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < CRITICAL_EPS {
            (1.0 + w0 * t) * (-w0 * t).exp()
        } else if zeta < 1.0 {
            let root = (1.0 - zeta * zeta).sqrt();
            let wd = w0 * root;
            let e = (-zeta * w0 * t).exp();
            e * ((wd * t).cos() + (zeta / root) * (wd * t).sin())
        } else {
            let (slow, fast, c_slow, c_fast) = overdamped_terms(w0, zeta);
            c_slow * (slow * t).exp() - c_fast * (fast * t).exp()
        }
    }

    /// Upper bound on `|displacement(s)|` for every `s >= t`; non-increasing in `t`.
    fn envelope(&self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < CRITICAL_EPS {
            (1.0 + w0 * t) * (-w0 * t).exp()
        } else if zeta < 1.0 {
            (-zeta * w0 * t).exp() / (1.0 - zeta * zeta).sqrt()
        } else {
            let (slow, _, c_slow, _) = overdamped_terms(w0, zeta);
            c_slow * (slow * t).exp()
        }
    }
}

// Roots and weights of the overdamped response `c_slow*e^(slow*t) - c_fast*e^(fast*t)`.
fn overdamped_terms(w0: f64, zeta: f64) -> (f64, f64, f64, f64) {
    let z2 = (zeta * zeta - 1.0).sqrt();
    // zeta - z2 rewritten to avoid cancellation for large zeta.
    let small = 1.0 / (zeta + z2);
    let slow = -w0 * small;
    let fast = -w0 * (zeta + z2);
    let c_slow = (zeta + z2) / (2.0 * z2);
    let c_fast = small / (2.0 * z2);
    (slow, fast, c_slow, c_fast)
}

/// Everything a spring evaluation needs besides the frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringOptions {
    /// Oscillator parameters.
    pub config: SpringConfig,
    /// Value reported at and before the trigger.
    pub from: f64,
    /// Rest value.
    pub to: f64,
    /// Stretch the motion so it settles after this many frames.
    pub duration_in_frames: Option<u64>,
    /// Frames to wait before the spring is released.
    pub delay: i64,
    /// Play the motion backwards (from `to` to `from`).
    pub reverse: bool,
}

impl Default for SpringOptions {
    fn default() -> Self {
        Self {
            config: SpringConfig::default(),
            from: 0.0,
            to: 1.0,
            duration_in_frames: None,
            delay: 0,
            reverse: false,
        }
    }
}

impl SpringOptions {
    /// Options for `config` with the defaults for everything else.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Settle after `frames` frames.
    pub fn duration(self, frames: u64) -> Self {
        Self {
            duration_in_frames: Some(frames),
            ..self
        }
    }

    /// Release `frames` frames late.
    pub fn delay(self, frames: i64) -> Self {
        Self {
            delay: frames,
            ..self
        }
    }

    /// Animate between `from` and `to` instead of `0` and `1`.
    pub fn range(self, from: f64, to: f64) -> Self {
        Self { from, to, ..self }
    }

    /// Play backwards.
    pub fn reversed(self) -> Self {
        Self {
            reverse: true,
            ..self
        }
    }
}

/// A validated spring bound to a frame rate.
///
/// Construction measures the natural settle duration once; [`Spring::sample`] is a total closed
/// form, so the same frame always yields the same bits regardless of evaluation order.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    fps: f64,
    opts: SpringOptions,
    natural_frames: u64,
}

impl Spring {
    /// Validate `opts` and measure the settle duration at `fps`.
    pub fn new(fps: Fps, opts: SpringOptions) -> FramecastResult<Self> {
        opts.config.validate()?;
        if !opts.from.is_finite() || !opts.to.is_finite() {
            return Err(FramecastError::animation("spring from/to must be finite"));
        }
        if opts.duration_in_frames == Some(0) {
            return Err(FramecastError::animation("spring duration_in_frames must be > 0"));
        }
        let natural_frames = measure_spring(fps, opts.config, SETTLE_THRESHOLD)?;
        Ok(Self {
            fps: fps.as_f64(),
            opts,
            natural_frames,
        })
    }

    /// Frames the unstretched spring takes to settle.
    pub fn natural_frames(&self) -> u64 {
        self.natural_frames
    }

    /// Options this spring was built from.
    pub fn options(&self) -> &SpringOptions {
        &self.opts
    }

    /// Value at `frame` (relative to the scene, before `delay` is applied).
    pub fn sample(&self, frame: i64) -> f64 {
        let opts = &self.opts;
        let natural = self.natural_frames as f64;
        let span = opts
            .duration_in_frames
            .map_or(natural, |d| d as f64);

        let f = frame as f64;
        let f = if opts.reverse {
            span - f + opts.delay as f64
        } else {
            f - opts.delay as f64
        };
        if f <= 0.0 {
            return opts.from;
        }

        let f = match opts.duration_in_frames {
            Some(d) => f * natural / d as f64,
            None => f,
        };
        let mut progress = 1.0 - opts.config.displacement(f / self.fps);
        if opts.config.overshoot_clamping && progress > 1.0 {
            progress = 1.0;
        }
        opts.from + (opts.to - opts.from) * progress
    }
}

/// One-shot spring evaluation; validates and measures on every call.
pub fn spring(frame: i64, fps: Fps, opts: &SpringOptions) -> FramecastResult<f64> {
    Ok(Spring::new(fps, *opts)?.sample(frame))
}

/// First whole frame after which the spring provably stays within `threshold` of rest.
pub fn measure_spring(fps: Fps, config: SpringConfig, threshold: f64) -> FramecastResult<u64> {
    config.validate()?;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(FramecastError::animation("spring settle threshold must be finite and > 0"));
    }
    let per_sec = fps.as_f64();
    (1..=MAX_SETTLE_FRAMES)
        .find(|&f| config.envelope(f as f64 / per_sec) < threshold)
        .ok_or_else(|| {
            FramecastError::animation(format!(
                "spring does not settle within {MAX_SETTLE_FRAMES} frames"
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
