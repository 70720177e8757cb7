//! techreel composes short animated tech videos from frame-driven templates.
//!
//! Every visual property is a pure function of one integer frame: renderers map the frame through
//! keyframe interpolation into opacity, transforms, colors, clips and hue rotation, and return a
//! declarative [`VisualNode`] tree. The preview pipeline serializes that tree to SVG and can
//! rasterize it to RGBA pixels or PNG files.
//!
//! # Pipeline overview
//!
//! 1. **Select**: pick a [`CompositionDescriptor`] from the [`Registry`] and its
//!    [`CompositionProps`] (defaults, or JSON merged over them).
//! 2. **Evaluate**: [`render_tree`] checks the frame against the composition length and draws the
//!    scene into a [`VisualNode`] tree.
//! 3. **Serialize**: [`render_svg`] writes the tree as a standalone SVG document.
//! 4. **Rasterize** (optional): [`render_frame`] and [`render_frames_with_stats`] produce
//!    premultiplied [`FrameRGBA`] buffers, optionally on a rayon pool with static-frame elision.
//!    [`render_frames_into`] streams a range chunk by chunk instead of collecting it.
//!
//! Renderers keep no state between calls; frames may be evaluated in any order and in parallel.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod components;
mod composition;
mod editor;
mod foundation;
mod render;
mod scene;
mod theme;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOpts, KeyframeMapping, interpolate};
pub use components::FrameCtx;
pub use components::api::{ApiEndpoint, CardState, api_visualization, card_state, method_color};
pub use components::code::{RevealState, code_reveal, reveal_state};
pub use components::logo::logo_morph;
pub use components::particles::{PARTICLE_COUNT, Particle, particle_field, particles};
pub use components::shapes::{ShapeKind, geometric_shapes};
pub use components::terminal::{
    CommandState, SLOT_FRAMES, TYPING_FRAMES, TerminalOutput, command_states, default_outputs,
    terminal,
};
pub use components::title::title_sequence;
pub use composition::props::{
    ApiVisualizationProps, CodeRevealProps, LogoMorphProps, TechVideoProps, TerminalProps,
};
pub use composition::registry::{
    CompositionDescriptor, CompositionId, CompositionProps, Registry,
};
pub use composition::scenes::{Scene, Stage};
pub use editor::launch::LaunchMode;
pub use editor::state::{EditorEvent, EditorState, PlayerConfig};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rgba8, Transform2D, Vec2,
};
pub use foundation::error::{ReelError, ReelResult};
pub use render::pipeline::{
    RenderStats, RenderThreading, render_frame, render_frames, render_frames_into,
    render_frames_with_stats, render_svg, render_tree,
};
pub use render::raster::{FrameRGBA, rasterize_svg};
pub use scene::node::{Font, NodeKind, Paint, Stroke, Style, TextAnchor, VisualNode};
pub use scene::svg::to_svg;
pub use theme::palette::{GlowSpec, Gradient, Theme, ThemePalette, resolve_theme};
pub use timeline::window::{ActiveScene, SceneKind, SceneWindow, Timeline};
