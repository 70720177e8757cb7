//! Scene windows of a multi-scene composition.
//!
//! Windows are half-open `[start, end)` frame intervals with linear fades at both ends. They are
//! validated once when the [`Timeline`] is built; sampling afterwards cannot fail on configuration.

use crate::{
    animation::interpolate::{InterpolateOpts, KeyframeMapping},
    foundation::core::FrameIndex,
    foundation::error::{ReelError, ReelResult},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Scenes of the TechVideo composition.
pub enum SceneKind {
    /// Kinetic title.
    Title,
    /// Logo morph.
    Logo,
    /// Code reveal.
    Code,
    /// Closing call to action.
    Final,
}

impl SceneKind {
    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Logo => "logo",
            Self::Code => "code",
            Self::Final => "final",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Named scene interval.
pub struct SceneWindow {
    /// Which scene.
    pub scene: SceneKind,
    /// First frame of the scene.
    pub start: FrameIndex,
    /// One past the last frame; `None` runs to the end of the composition.
    pub end: Option<FrameIndex>,
    /// Frames spent fading in from `start`.
    pub fade_in: u64,
    /// Frames spent fading out before `end`.
    pub fade_out: u64,
}

impl SceneWindow {
    /// Closed window `[start, end)`.
    pub fn closed(scene: SceneKind, start: u64, end: u64, fade: u64) -> Self {
        Self {
            scene,
            start: FrameIndex(start),
            end: Some(FrameIndex(end)),
            fade_in: fade,
            fade_out: fade,
        }
    }

    /// Window from `start` to the end of the composition; fades in only.
    pub fn open(scene: SceneKind, start: u64, fade_in: u64) -> Self {
        Self {
            scene,
            start: FrameIndex(start),
            end: None,
            fade_in,
            fade_out: 0,
        }
    }

    fn contains(&self, frame: FrameIndex) -> bool {
        frame >= self.start && self.end.is_none_or(|end| frame < end)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A window that contains the sampled frame.
pub struct ActiveScene {
    /// Which scene.
    pub scene: SceneKind,
    /// Frame relative to the window start.
    pub local_frame: FrameIndex,
    /// Cross-fade opacity in `[0, 1]`.
    pub opacity: f64,
}

#[derive(Clone, Debug)]
struct CompiledWindow {
    window: SceneWindow,
    fade: Option<KeyframeMapping>,
}

#[derive(Clone, Debug)]
/// Validated, ordered scene windows of one composition.
pub struct Timeline {
    duration: u64,
    windows: Vec<CompiledWindow>,
}

impl Timeline {
    /// Validate `windows` against a composition of `duration` frames.
    pub fn new(duration: u64, windows: Vec<SceneWindow>) -> ReelResult<Self> {
        if duration == 0 {
            return Err(ReelError::validation("timeline duration must be > 0"));
        }
        if windows.is_empty() {
            return Err(ReelError::validation("timeline needs at least one window"));
        }

        let mut compiled = Vec::with_capacity(windows.len());
        for (i, w) in windows.iter().enumerate() {
            let name = w.scene.name();
            if windows[..i].iter().any(|prev| prev.scene == w.scene) {
                return Err(ReelError::validation(format!(
                    "scene '{name}' appears more than once"
                )));
            }
            if i > 0 && w.start < windows[i - 1].start {
                return Err(ReelError::validation(format!(
                    "scene '{name}' starts before the previous scene"
                )));
            }
            if w.start.0 >= duration {
                return Err(ReelError::validation(format!(
                    "scene '{name}' starts at {} but the composition has {duration} frames",
                    w.start.0
                )));
            }
            match w.end {
                Some(end) => {
                    if end <= w.start {
                        return Err(ReelError::validation(format!(
                            "scene '{name}' must end after it starts"
                        )));
                    }
                    if end.0 > duration {
                        return Err(ReelError::validation(format!(
                            "scene '{name}' ends past the composition duration"
                        )));
                    }
                    if w.fade_in.saturating_add(w.fade_out) > end.0 - w.start.0 {
                        return Err(ReelError::validation(format!(
                            "scene '{name}' fades are longer than the scene"
                        )));
                    }
                }
                None => {
                    if i + 1 != windows.len() {
                        return Err(ReelError::validation(format!(
                            "open-ended scene '{name}' must be the last window"
                        )));
                    }
                    if w.fade_out != 0 {
                        return Err(ReelError::validation(format!(
                            "open-ended scene '{name}' cannot fade out"
                        )));
                    }
                }
            }
            compiled.push(CompiledWindow {
                window: *w,
                fade: fade_mapping(w)?,
            });
        }

        Ok(Self {
            duration,
            windows: compiled,
        })
    }

    /// The TechVideo schedule: Title `[0,60)`, Logo `[50,150)`, Code `[140,250)` and Final from
    /// 240 to the end, each with 20-frame fades.
    pub fn tech_video(duration: u64) -> ReelResult<Self> {
        Self::new(
            duration,
            vec![
                SceneWindow::closed(SceneKind::Title, 0, 60, 20),
                SceneWindow::closed(SceneKind::Logo, 50, 150, 20),
                SceneWindow::closed(SceneKind::Code, 140, 250, 20),
                SceneWindow::open(SceneKind::Final, 240, 20),
            ],
        )
    }

    /// Composition length in frames.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Configured windows in order.
    pub fn windows(&self) -> impl Iterator<Item = &SceneWindow> {
        self.windows.iter().map(|c| &c.window)
    }

    /// Every window containing `frame`, in timeline order.
    pub fn active(&self, frame: FrameIndex) -> ReelResult<Vec<ActiveScene>> {
        let mut out = Vec::new();
        for c in &self.windows {
            if !c.window.contains(frame) {
                continue;
            }
            let Some(local_frame) = frame.since(c.window.start) else {
                continue;
            };
            let opacity = match &c.fade {
                Some(mapping) => mapping.sample(frame.as_f64(), InterpolateOpts::clamped())?,
                None => 1.0,
            };
            out.push(ActiveScene {
                scene: c.window.scene,
                local_frame,
                opacity,
            });
        }
        Ok(out)
    }
}

fn fade_mapping(w: &SceneWindow) -> ReelResult<Option<KeyframeMapping>> {
    // Sampled with clamping on both edges, so a lone fade-out holds 1 before it begins.
    let start = w.start.as_f64();
    let mut inputs = Vec::with_capacity(4);
    let mut outputs = Vec::with_capacity(4);
    if w.fade_in > 0 {
        inputs.extend([start, start + w.fade_in as f64]);
        outputs.extend([0.0, 1.0]);
    }
    if let Some(end) = w.end
        && w.fade_out > 0
    {
        let end = end.as_f64();
        inputs.extend([end - w.fade_out as f64, end]);
        outputs.extend([1.0, 0.0]);
    }
    if inputs.is_empty() {
        return Ok(None);
    }
    KeyframeMapping::new(inputs, outputs).map(Some)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/window.rs"]
mod tests;
