//! Ambient particle field behind the TechVideo scenes.
//!
//! Particle placement uses fixed index arithmetic (`y = i * 37 mod 100`) so every frame lays the
//! field out identically without randomness.

use crate::{
    components::{FrameCtx, drift, ramp},
    foundation::core::{FrameIndex, Rgba8, Transform2D},
    foundation::error::ReelResult,
    scene::node::VisualNode,
    theme::palette::Theme,
};

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 50;
const LINK_COUNT: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
/// One particle at one frame.
pub struct Particle {
    /// Horizontal position in percent of the canvas width, within `[0, 100]`.
    pub x_pct: f64,
    /// Vertical position in percent of the canvas height, within `[0, 100]`.
    pub y_pct: f64,
    /// Pulsing opacity.
    pub opacity: f64,
    /// Diameter in pixels.
    pub size: f64,
    /// Breathing scale.
    pub scale: f64,
    /// Theme particle color.
    pub color: Rgba8,
}

/// Lay out all particles at `frame`.
pub fn particles(frame: FrameIndex, theme: Theme) -> ReelResult<Vec<Particle>> {
    let f = frame.as_f64();
    let colors = &theme.palette().particles;
    let amp_x = drift(f, &[0.0, 300.0], &[0.0, 20.0])?;
    let amp_y = drift(f, &[0.0, 300.0], &[0.0, 15.0])?;

    (0..PARTICLE_COUNT)
        .map(|i| {
            let fi = i as f64;
            let base_x = fi / PARTICLE_COUNT as f64 * 100.0;
            let base_y = ((i * 37) % 100) as f64;
            let x = base_x + amp_x * (fi * 0.1).sin();
            let y = base_y + amp_y * (fi * 0.15).cos();
            Ok(Particle {
                x_pct: x.clamp(0.0, 100.0),
                y_pct: y.clamp(0.0, 100.0),
                opacity: drift(f + fi * 10.0, &[0.0, 60.0, 120.0], &[0.3, 0.8, 0.3])?,
                size: 2.0 + (i % 3) as f64,
                scale: drift(f + fi * 50.0, &[0.0, 60.0], &[0.5, 1.0])?,
                color: colors[i % colors.len()],
            })
        })
        .collect()
}

/// Render the particle field and its connecting lines at `ctx.frame`.
pub fn particle_field(ctx: FrameCtx) -> ReelResult<VisualNode> {
    let field = particles(ctx.frame, ctx.theme)?;
    let canvas = ctx.canvas;

    let dots = field.iter().enumerate().map(|(i, p)| {
        let pos = canvas.at_percent(p.x_pct, p.y_pct);
        VisualNode::circle(format!("particles/dots/p-{i}"), p.size / 2.0)
            .transform(Transform2D::at(pos.x, pos.y).scaled(p.scale))
            .opacity(p.opacity)
            .fill(p.color)
            .glow(p.color, p.size * 3.0)
    });

    let link_opacity = ramp(ctx.f(), &[0.0, 100.0], &[0.0, 0.2])?;
    let links = (0..LINK_COUNT).map(|i| {
        let (a, b) = (&field[i], &field[(i + 1) % LINK_COUNT]);
        VisualNode::line(
            format!("particles/links/l-{i}"),
            canvas.at_percent(a.x_pct, a.y_pct),
            canvas.at_percent(b.x_pct, b.y_pct),
        )
        .opacity(link_opacity)
        .stroke(a.color, 1.0)
        .glow(a.color, 2.0)
    });

    Ok(VisualNode::group("particles").children([
        VisualNode::group("particles/dots").children(dots),
        VisualNode::group("particles/links").children(links),
    ]))
}

#[cfg(test)]
#[path = "../../tests/unit/components/particles.rs"]
mod tests;
