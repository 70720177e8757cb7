//! Frame-driven renderers.
//!
//! Every renderer is a pure function of a [`FrameCtx`] and its own props, returning a
//! [`VisualNode`](crate::VisualNode) subtree positioned in canvas coordinates. Renderers never keep
//! state between calls, so frames may be evaluated in any order.

pub(crate) mod api;
pub(crate) mod code;
pub(crate) mod logo;
pub(crate) mod particles;
pub(crate) mod shapes;
pub(crate) mod terminal;
pub(crate) mod title;

use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    foundation::core::{Canvas, FrameIndex},
    foundation::error::ReelResult,
    theme::palette::{Theme, ThemePalette},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Inputs shared by every renderer.
pub struct FrameCtx {
    /// Frame relative to the renderer's own start.
    pub frame: FrameIndex,
    /// Output surface.
    pub canvas: Canvas,
    /// Active theme.
    pub theme: Theme,
}

impl FrameCtx {
    /// Bundle the renderer inputs.
    pub fn new(frame: FrameIndex, canvas: Canvas, theme: Theme) -> Self {
        Self {
            frame,
            canvas,
            theme,
        }
    }

    /// Same canvas and theme at another frame.
    pub fn with_frame(self, frame: FrameIndex) -> Self {
        Self { frame, ..self }
    }

    /// Same frame and canvas under another theme.
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Frame as a float.
    pub fn f(self) -> f64 {
        self.frame.as_f64()
    }

    /// Palette of the active theme.
    pub fn palette(self) -> &'static ThemePalette {
        self.theme.palette()
    }
}

/// One-shot animation: extends before the first breakpoint, holds after the last.
pub(crate) fn ramp(x: f64, inputs: &[f64], outputs: &[f64]) -> ReelResult<f64> {
    interpolate(x, inputs, outputs, InterpolateOpts::clamp_right())
}

/// Free-running animation: extends on both edges.
pub(crate) fn drift(x: f64, inputs: &[f64], outputs: &[f64]) -> ReelResult<f64> {
    interpolate(x, inputs, outputs, InterpolateOpts::extend())
}

/// Opacity of a 60-frame blink: fully on at 0, off at 30, on again at 60.
pub(crate) fn blink(f: f64) -> ReelResult<f64> {
    drift(f.rem_euclid(60.0), &[0.0, 30.0, 60.0], &[1.0, 0.0, 1.0])
}
