use crate::{
    animation::ease::Ease,
    foundation::error::{FramecastError, FramecastResult},
    foundation::math::lerp,
};

/// What an [`Interpolation`] does with inputs beyond its first or last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the nearest boundary output.
    Clamp,
    /// Continue along the boundary segment's slope.
    #[default]
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`] and [`Interpolation::new`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOptions {
    /// Policy left of the first breakpoint.
    #[serde(default)]
    pub left: Extrapolate,
    /// Policy right of the last breakpoint.
    #[serde(default)]
    pub right: Extrapolate,
    /// Easing applied to the in-segment parameter.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolateOptions {
    /// Clamp on both sides, linear easing.
    pub fn clamped() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    /// Clamp only past the last breakpoint.
    pub fn clamp_right() -> Self {
        Self {
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Replace the easing curve.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }
}

/// A validated piecewise-linear mapping.
///
/// Construction checks the breakpoints once; [`Interpolation::sample`] is then total and
/// allocation-free, so scenes build these at definition time and sample them per frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interpolation {
    input: Vec<f64>,
    output: Vec<f64>,
    opts: InterpolateOptions,
}

impl Interpolation {
    /// Validate breakpoints and build the mapping.
    ///
    /// Fails with [`FramecastError::InvalidRange`] when the ranges differ in length, have fewer
    /// than two entries, contain non-finite values, or `input` is not strictly increasing.
    pub fn new(
        input: impl Into<Vec<f64>>,
        output: impl Into<Vec<f64>>,
        opts: InterpolateOptions,
    ) -> FramecastResult<Self> {
        let input = input.into();
        let output = output.into();
        validate_ranges(&input, &output)?;
        Ok(Self {
            input,
            output,
            opts,
        })
    }

    /// Shorthand for a clamped mapping.
    pub fn clamped(
        input: impl Into<Vec<f64>>,
        output: impl Into<Vec<f64>>,
    ) -> FramecastResult<Self> {
        Self::new(input, output, InterpolateOptions::clamped())
    }

    /// Input breakpoints.
    pub fn input_range(&self) -> &[f64] {
        &self.input
    }

    /// Output values.
    pub fn output_range(&self) -> &[f64] {
        &self.output
    }

    /// Options the mapping was built with.
    pub fn options(&self) -> InterpolateOptions {
        self.opts
    }

    /// Map `x` through the curve.
    pub fn sample(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.output[0];
        }

        let n = self.input.len();
        let seg = self.input[1..n - 1].partition_point(|&b| b < x);
        let (lo, hi) = (self.input[seg], self.input[seg + 1]);
        let (out_lo, out_hi) = (self.output[seg], self.output[seg + 1]);

        if x < lo {
            return match self.opts.left {
                Extrapolate::Clamp => out_lo,
                Extrapolate::Identity => x,
                Extrapolate::Extend => lerp(out_lo, out_hi, (x - lo) / (hi - lo)),
            };
        }
        if x > hi {
            return match self.opts.right {
                Extrapolate::Clamp => out_hi,
                Extrapolate::Identity => x,
                Extrapolate::Extend => lerp(out_lo, out_hi, (x - lo) / (hi - lo)),
            };
        }

        let t = (x - lo) / (hi - lo);
        lerp(out_lo, out_hi, self.opts.ease.apply(t))
    }

    /// Map an integer frame through the curve.
    pub fn at(&self, frame: i64) -> f64 {
        self.sample(frame as f64)
    }
}

/// One-shot interpolation that validates its ranges on every call.
///
/// Prefer [`Interpolation`] for anything sampled per frame.
pub fn interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    opts: InterpolateOptions,
) -> FramecastResult<f64> {
    Ok(Interpolation::new(input, output, opts)?.sample(x))
}

fn validate_ranges(input: &[f64], output: &[f64]) -> FramecastResult<()> {
    if input.len() != output.len() {
        return Err(FramecastError::invalid_range(format!(
            "input range has {} entries but output range has {}",
            input.len(),
            output.len()
        )));
    }
    if input.len() < 2 {
        return Err(FramecastError::invalid_range("ranges need at least two breakpoints"));
    }
    if input.iter().chain(output).any(|v| !v.is_finite()) {
        return Err(FramecastError::invalid_range("range values must be finite"));
    }
    if let Some(w) = input.windows(2).find(|w| w[0] >= w[1]) {
        return Err(FramecastError::invalid_range(format!(
            "input range must be strictly increasing (found {} then {})",
            w[0], w[1]
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
