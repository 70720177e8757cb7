use std::{fmt, str::FromStr};

use crate::{
    composition::props::{
        ApiVisualizationProps, CodeRevealProps, LogoMorphProps, TechVideoProps, TerminalProps,
    },
    composition::scenes::{Scene, Stage},
    foundation::core::{Canvas, Fps, FrameIndex, Rgba8},
    foundation::error::{ReelError, ReelResult},
    scene::node::VisualNode,
    theme::colors,
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
/// Identifier of a registered composition.
pub enum CompositionId {
    /// Four-scene product video.
    TechVideo,
    /// Code reveal showcase.
    CodeReveal,
    /// Logo morph showcase.
    LogoMorph,
    /// API documentation cards.
    #[serde(rename = "APIVisualization")]
    ApiVisualization,
    /// Terminal simulation.
    Terminal,
}

impl CompositionId {
    /// Every id, in registry order.
    pub const ALL: [CompositionId; 5] = [
        Self::TechVideo,
        Self::CodeReveal,
        Self::LogoMorph,
        Self::ApiVisualization,
        Self::Terminal,
    ];

    /// Registry name, e.g. `APIVisualization`.
    pub fn name(self) -> &'static str {
        match self {
            Self::TechVideo => "TechVideo",
            Self::CodeReveal => "CodeReveal",
            Self::LogoMorph => "LogoMorph",
            Self::ApiVisualization => "APIVisualization",
            Self::Terminal => "Terminal",
        }
    }
}

impl fmt::Display for CompositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompositionId {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| {
                ReelError::validation(format!(
                    "unknown composition \"{s}\" (expected one of: TechVideo, CodeReveal, \
                     LogoMorph, APIVisualization, Terminal)"
                ))
            })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
/// Props of any registered composition.
pub enum CompositionProps {
    /// TechVideo props.
    TechVideo(TechVideoProps),
    /// CodeReveal props.
    CodeReveal(CodeRevealProps),
    /// LogoMorph props.
    LogoMorph(LogoMorphProps),
    /// APIVisualization props.
    ApiVisualization(ApiVisualizationProps),
    /// Terminal props.
    Terminal(TerminalProps),
}

impl CompositionProps {
    /// Composition these props belong to.
    pub fn id(&self) -> CompositionId {
        match self {
            Self::TechVideo(_) => CompositionId::TechVideo,
            Self::CodeReveal(_) => CompositionId::CodeReveal,
            Self::LogoMorph(_) => CompositionId::LogoMorph,
            Self::ApiVisualization(_) => CompositionId::ApiVisualization,
            Self::Terminal(_) => CompositionId::Terminal,
        }
    }

    /// Default props of `id`.
    pub fn defaults(id: CompositionId) -> Self {
        match id {
            CompositionId::TechVideo => Self::TechVideo(TechVideoProps::default()),
            CompositionId::CodeReveal => Self::CodeReveal(CodeRevealProps::default()),
            CompositionId::LogoMorph => Self::LogoMorph(LogoMorphProps::default()),
            CompositionId::ApiVisualization => {
                Self::ApiVisualization(ApiVisualizationProps::default())
            }
            CompositionId::Terminal => Self::Terminal(TerminalProps::default()),
        }
    }

    /// Parse a JSON props object for `id`; missing keys keep their defaults.
    ///
    /// `null` yields the defaults. Anything other than an object or `null` is rejected.
    pub fn from_json(id: CompositionId, value: serde_json::Value) -> ReelResult<Self> {
        let value = match value {
            serde_json::Value::Null => return Ok(Self::defaults(id)),
            v @ serde_json::Value::Object(_) => v,
            other => {
                return Err(ReelError::validation(format!(
                    "props for {id} must be a JSON object, got {other}"
                )));
            }
        };
        Ok(match id {
            CompositionId::TechVideo => Self::TechVideo(serde_json::from_value(value)?),
            CompositionId::CodeReveal => Self::CodeReveal(serde_json::from_value(value)?),
            CompositionId::LogoMorph => Self::LogoMorph(serde_json::from_value(value)?),
            CompositionId::ApiVisualization => {
                Self::ApiVisualization(serde_json::from_value(value)?)
            }
            CompositionId::Terminal => Self::Terminal(serde_json::from_value(value)?),
        })
    }

    /// Props as a camelCase JSON object.
    pub fn to_json(&self) -> ReelResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn scene(&self) -> &dyn Scene {
        match self {
            Self::TechVideo(p) => p,
            Self::CodeReveal(p) => p,
            Self::LogoMorph(p) => p,
            Self::ApiVisualization(p) => p,
            Self::Terminal(p) => p,
        }
    }

    /// Draw `frame` of the composition these props belong to.
    pub fn render(&self, stage: Stage, frame: FrameIndex) -> ReelResult<VisualNode> {
        self.scene().render(stage, frame)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Static description of one registered composition.
pub struct CompositionDescriptor {
    /// Registry id.
    pub id: CompositionId,
    /// Length in frames.
    pub duration_frames: u64,
    /// Playback rate.
    pub fps: Fps,
    /// Output surface.
    pub canvas: Canvas,
    /// Color painted under every frame.
    pub background: Rgba8,
    /// Props used when the caller supplies none.
    pub default_props: CompositionProps,
}

impl CompositionDescriptor {
    /// Descriptor with the house settings: 60 fps on a 1920x1080 dark canvas.
    pub fn standard(id: CompositionId, duration_frames: u64) -> ReelResult<Self> {
        Ok(Self {
            id,
            duration_frames,
            fps: Fps::new(60, 1)?,
            canvas: Canvas::new(1920, 1080)?,
            background: colors::TECH_DARK,
            default_props: CompositionProps::defaults(id),
        })
    }

    /// Check invariants that public fields could have broken.
    pub fn validate(&self) -> ReelResult<()> {
        if self.duration_frames == 0 {
            return Err(ReelError::validation(format!(
                "{}: duration_frames must be > 0",
                self.id
            )));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ReelError::validation(format!(
                "{}: fps must be > 0",
                self.id
            )));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation(format!(
                "{}: canvas width and height must be > 0",
                self.id
            )));
        }
        if self.default_props.id() != self.id {
            return Err(ReelError::validation(format!(
                "{}: default props belong to {}",
                self.id,
                self.default_props.id()
            )));
        }
        Ok(())
    }

    /// Stage handed to the scene renderers.
    pub fn stage(&self) -> Stage {
        Stage {
            canvas: self.canvas,
            duration: self.duration_frames,
        }
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_frames)
    }
}

#[derive(Clone, Debug)]
/// Validated set of compositions, in registration order.
pub struct Registry {
    entries: Vec<CompositionDescriptor>,
}

impl Registry {
    /// Validate `entries`; ids must be unique.
    pub fn new(entries: Vec<CompositionDescriptor>) -> ReelResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if entries[..i].iter().any(|prev| prev.id == entry.id) {
                return Err(ReelError::validation(format!(
                    "composition {} is registered twice",
                    entry.id
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The five built-in compositions.
    pub fn builtin() -> ReelResult<Self> {
        Self::new(vec![
            CompositionDescriptor::standard(CompositionId::TechVideo, 300)?,
            CompositionDescriptor::standard(CompositionId::CodeReveal, 180)?,
            CompositionDescriptor::standard(CompositionId::LogoMorph, 120)?,
            CompositionDescriptor::standard(CompositionId::ApiVisualization, 240)?,
            CompositionDescriptor::standard(CompositionId::Terminal, 200)?,
        ])
    }

    /// Descriptor of `id`, if registered.
    pub fn get(&self, id: CompositionId) -> Option<&CompositionDescriptor> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Descriptor by registry name.
    pub fn lookup(&self, name: &str) -> ReelResult<&CompositionDescriptor> {
        let id: CompositionId = name.parse()?;
        tracing::debug!(composition = %id, "registry lookup");
        self.get(id)
            .ok_or_else(|| ReelError::validation(format!("composition {id} is not registered")))
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CompositionDescriptor> {
        self.entries.iter()
    }

    /// Number of registered compositions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
