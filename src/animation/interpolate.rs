//! Breakpoint-based interpolation: the one numeric primitive every renderer is built on.
//!
//! A mapping is a list of `(input, output)` breakpoints with non-decreasing inputs. Inside the
//! breakpoint range the output is piecewise linear (optionally eased per segment); outside it the
//! left and right [`Extrapolate`] policies decide.

use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// Behavior outside the breakpoint range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the slope of the edge segment.
    #[default]
    Extend,
    /// Hold the edge output.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Per-call interpolation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Easing applied to the fraction inside each segment.
    #[serde(default)]
    pub easing: Ease,
    /// Policy below the first breakpoint.
    #[serde(default)]
    pub left: Extrapolate,
    /// Policy above the last breakpoint.
    #[serde(default)]
    pub right: Extrapolate,
}

impl InterpolateOpts {
    /// Extend on both edges (the default).
    pub fn extend() -> Self {
        Self::default()
    }

    /// Clamp on both edges.
    pub fn clamped() -> Self {
        Self {
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Extend on the left, clamp on the right: the usual "one-shot" animation.
    pub fn clamp_right() -> Self {
        Self {
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Replace the easing curve.
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
}

/// Validated breakpoint mapping; sample it as many times as needed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct KeyframeMapping {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl KeyframeMapping {
    /// Validate and build a mapping.
    ///
    /// Fails when the lengths differ, fewer than two breakpoints are given, any value is not
    /// finite, or the inputs decrease anywhere.
    pub fn new(inputs: impl Into<Vec<f64>>, outputs: impl Into<Vec<f64>>) -> ReelResult<Self> {
        let inputs = inputs.into();
        let outputs = outputs.into();
        validate_breakpoints(&inputs, &outputs)?;
        Ok(Self { inputs, outputs })
    }

    /// Breakpoint inputs.
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Breakpoint outputs.
    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    /// Output at `x`. Fails only for a non-finite `x`.
    pub fn sample(&self, x: f64, opts: InterpolateOpts) -> ReelResult<f64> {
        if !x.is_finite() {
            return Err(ReelError::animation(format!(
                "interpolation input must be finite, got {x}"
            )));
        }
        Ok(sample_validated(x, &self.inputs, &self.outputs, opts))
    }
}

/// Validate `inputs`/`outputs` and sample at `x` in one call.
pub fn interpolate(
    x: f64,
    inputs: &[f64],
    outputs: &[f64],
    opts: InterpolateOpts,
) -> ReelResult<f64> {
    validate_breakpoints(inputs, outputs)?;
    if !x.is_finite() {
        return Err(ReelError::animation(format!(
            "interpolation input must be finite, got {x}"
        )));
    }
    Ok(sample_validated(x, inputs, outputs, opts))
}

fn validate_breakpoints(inputs: &[f64], outputs: &[f64]) -> ReelResult<()> {
    if inputs.len() != outputs.len() {
        return Err(ReelError::animation(format!(
            "breakpoint count ({}) does not match output count ({})",
            inputs.len(),
            outputs.len()
        )));
    }
    if inputs.len() < 2 {
        return Err(ReelError::animation(format!(
            "interpolation needs at least 2 breakpoints, got {}",
            inputs.len()
        )));
    }
    if let Some(i) = inputs.iter().position(|v| !v.is_finite()) {
        return Err(ReelError::animation(format!(
            "breakpoint {i} is not finite ({})",
            inputs[i]
        )));
    }
    if let Some(i) = outputs.iter().position(|v| !v.is_finite()) {
        return Err(ReelError::animation(format!(
            "output {i} is not finite ({})",
            outputs[i]
        )));
    }
    if let Some(i) = inputs.windows(2).position(|w| w[0] > w[1]) {
        return Err(ReelError::animation(format!(
            "breakpoints must be non-decreasing: [{}] = {} > [{}] = {}",
            i,
            inputs[i],
            i + 1,
            inputs[i + 1]
        )));
    }
    Ok(())
}

// Callers guarantee: equal lengths, len >= 2, all finite, non-decreasing, finite `x`.
fn sample_validated(x: f64, inputs: &[f64], outputs: &[f64], opts: InterpolateOpts) -> f64 {
    let n = inputs.len();
    let first = inputs[0];
    let last = inputs[n - 1];

    if x <= first {
        if x == first {
            return outputs[0];
        }
        return extrapolate(
            x,
            opts.left,
            (inputs[0], inputs[1]),
            (outputs[0], outputs[1]),
            outputs[0],
        );
    }
    if x >= last {
        if x == last {
            return outputs[n - 1];
        }
        return extrapolate(
            x,
            opts.right,
            (inputs[n - 2], inputs[n - 1]),
            (outputs[n - 2], outputs[n - 1]),
            outputs[n - 1],
        );
    }

    // First segment whose right breakpoint is >= x.
    let j = (1 + inputs[1..].partition_point(|&b| b < x)).min(n - 1);
    let k = j - 1;
    if x == inputs[j] {
        return outputs[j];
    }
    if x == inputs[k] {
        return outputs[k];
    }
    let span = inputs[j] - inputs[k];
    if span == 0.0 {
        return outputs[k];
    }
    let t = opts.easing.apply((x - inputs[k]) / span);
    outputs[k] + t * (outputs[j] - outputs[k])
}

fn extrapolate(
    x: f64,
    policy: Extrapolate,
    (i0, i1): (f64, f64),
    (o0, o1): (f64, f64),
    edge: f64,
) -> f64 {
    match policy {
        Extrapolate::Clamp => edge,
        Extrapolate::Identity => x,
        Extrapolate::Extend => {
            let span = i1 - i0;
            if span == 0.0 {
                return edge;
            }
            o0 + (x - i0) / span * (o1 - o0)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
