//! Full-frame scenes: each composition's props know how to draw one frame of it.

use crate::{
    components::{
        FrameCtx, api::api_visualization, code::code_reveal, logo::logo_morph,
        particles::particle_field, shapes::geometric_shapes, terminal::terminal,
        title::title_sequence,
    },
    composition::props::{
        ApiVisualizationProps, CodeRevealProps, LogoMorphProps, SHOWCASE_CODE, SHOWCASE_LOGO_URL,
        TechVideoProps, TerminalProps,
    },
    foundation::core::{Canvas, FrameIndex, Rgba8},
    foundation::error::ReelResult,
    scene::node::{Font, TextAnchor, VisualNode},
    theme::colors,
    theme::palette::Theme,
    timeline::window::{SceneKind, Timeline},
};

const DEMO_MARGIN: f64 = 32.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Output surface and length of the composition being drawn.
pub struct Stage {
    /// Output surface.
    pub canvas: Canvas,
    /// Composition length in frames.
    pub duration: u64,
}

/// Something that draws one full frame of a composition.
pub trait Scene {
    /// Visual tree of `frame`. `frame` is already bounds-checked against `stage.duration`.
    fn render(&self, stage: Stage, frame: FrameIndex) -> ReelResult<VisualNode>;
}

impl Scene for TechVideoProps {
    fn render(&self, stage: Stage, frame: FrameIndex) -> ReelResult<VisualNode> {
        let ctx = FrameCtx::new(frame, stage.canvas, self.theme);
        let timeline = Timeline::tech_video(stage.duration)?;

        let mut root = VisualNode::group("tech-video")
            .child(particle_field(ctx)?)
            .child(geometric_shapes(ctx)?);

        for active in timeline.active(frame)? {
            let local = ctx.with_frame(active.local_frame);
            let body = match active.scene {
                SceneKind::Title => title_sequence(local, &self.title, &self.subtitle)?,
                SceneKind::Logo => logo_morph(local, &self.logo_url)?,
                SceneKind::Code => code_reveal(local, &self.code_snippet, "typescript")?,
                SceneKind::Final => closing_card(stage.canvas),
            };
            root.children.push(
                VisualNode::group(format!("tech-video/{}", active.scene.name()))
                    .opacity(active.opacity)
                    .child(body),
            );
        }
        Ok(root)
    }
}

fn closing_card(canvas: Canvas) -> VisualNode {
    let c = canvas.center();
    VisualNode::group("final").children([
        VisualNode::text("final/heading", "Ready to Innovate?", Font::sans(60.0).bold())
            .at(c.x, c.y - 8.0)
            .fill(colors::NEON_BLUE),
        VisualNode::text(
            "final/tagline",
            "Let's build the future together.",
            Font::sans(24.0),
        )
        .at(c.x, c.y + 44.0)
        .fill(colors::GRAY_300),
    ])
}

/// Top-left heading block shared by the showcase compositions.
fn demo_header(id: &str, title: &str, caption: &str, color: Rgba8) -> VisualNode {
    let left = Font::sans(36.0).bold().anchored(TextAnchor::Start);
    VisualNode::group(id.to_string()).children([
        VisualNode::text(format!("{id}/title"), title, left)
            .at(DEMO_MARGIN, DEMO_MARGIN + 36.0)
            .fill(color),
        VisualNode::text(
            format!("{id}/caption"),
            caption,
            Font::sans(20.0).anchored(TextAnchor::Start),
        )
        .at(DEMO_MARGIN, DEMO_MARGIN + 76.0)
        .fill(colors::GRAY_400),
    ])
}

impl Scene for CodeRevealProps {
    fn render(&self, stage: Stage, frame: FrameIndex) -> ReelResult<VisualNode> {
        let ctx = FrameCtx::new(frame, stage.canvas, Theme::Cyberpunk);
        Ok(VisualNode::group("code-reveal")
            .child(code_reveal(ctx, SHOWCASE_CODE, &self.language)?)
            .child(demo_header(
                "code-reveal/header",
                &self.title,
                "Advanced Code Animation Showcase",
                colors::NEON_BLUE,
            )))
    }
}

impl Scene for LogoMorphProps {
    fn render(&self, stage: Stage, frame: FrameIndex) -> ReelResult<VisualNode> {
        let ctx = FrameCtx::new(frame, stage.canvas, Theme::Neon);
        let canvas = stage.canvas;
        let right = |size: f64| Font::sans(size).anchored(TextAnchor::End);

        let brand = VisualNode::group("logo-morph/brand").children([
            VisualNode::text("logo-morph/brand/name", self.brand_name.as_str(), right(24.0).bold())
                .at(canvas.w() - DEMO_MARGIN, canvas.h() - DEMO_MARGIN - 28.0)
                .fill(self.primary_color),
            VisualNode::text(
                "logo-morph/brand/motto",
                "Dynamic. Innovative. Future-Ready.",
                right(14.0),
            )
            .at(canvas.w() - DEMO_MARGIN, canvas.h() - DEMO_MARGIN - 4.0)
            .fill(colors::GRAY_400),
        ]);

        Ok(VisualNode::group("logo-morph")
            .child(demo_header(
                "logo-morph/header",
                "Logo Morphing Animation",
                "Dynamic Brand Identity Showcase",
                self.secondary_color,
            ))
            .child(logo_morph(ctx, SHOWCASE_LOGO_URL)?)
            .child(brand))
    }
}

impl Scene for ApiVisualizationProps {
    fn render(&self, stage: Stage, frame: FrameIndex) -> ReelResult<VisualNode> {
        let ctx = FrameCtx::new(frame, stage.canvas, Theme::Cyberpunk);
        api_visualization(ctx, &self.api_name, &self.endpoints)
    }
}

impl Scene for TerminalProps {
    fn render(&self, stage: Stage, frame: FrameIndex) -> ReelResult<VisualNode> {
        let ctx = FrameCtx::new(frame, stage.canvas, Theme::Matrix);
        terminal(ctx, &self.commands, &self.outputs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/scenes.rs"]
mod tests;
