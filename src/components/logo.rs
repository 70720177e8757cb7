//! Logo morph: the logo scales in with an overshoot while spinning and shifting hue, its frame
//! morphs from square to circle and back, and a radial particle burst fires mid-way.

use std::f64::consts::TAU;

use crate::{
    components::{FrameCtx, drift, ramp},
    foundation::core::Transform2D,
    foundation::error::ReelResult,
    scene::node::{Font, Paint, VisualNode},
};

const LOGO_SIZE: f64 = 256.0;
const PARTICLE_COUNT: usize = 12;
const OUTLINE_COUNT: usize = 6;

/// Caption shown under the logo.
pub(crate) const CAPTION: &str = "TECH CORP";

/// Render the logo morph at `ctx.frame`. `logo_url` is carried into the tree as-is.
pub fn logo_morph(ctx: FrameCtx, logo_url: &str) -> ReelResult<VisualNode> {
    let f = ctx.f();
    let palette = ctx.palette();
    let center = ctx.canvas.center();

    let scale = ramp(f, &[0.0, 30.0, 70.0, 100.0], &[0.0, 1.2, 1.0, 0.8])?;
    let rotation = drift(f, &[0.0, 100.0], &[0.0, 360.0])?;
    let hue = drift(f, &[0.0, 100.0], &[0.0, 360.0])?;
    let corner_pct = ramp(f, &[20.0, 50.0, 80.0], &[0.0, 50.0, 0.0])?;

    let distance = ramp(f, &[30.0, 70.0], &[0.0, 150.0])?;
    let particle_opacity = ramp(f, &[30.0, 50.0, 70.0], &[0.0, 1.0, 0.0])?;
    let particles = (0..PARTICLE_COUNT).map(|i| {
        let angle = i as f64 / PARTICLE_COUNT as f64 * TAU;
        VisualNode::circle(format!("logo/particles/p-{i}"), 4.0)
            .at(angle.cos() * distance, angle.sin() * distance)
            .opacity(particle_opacity)
            .fill(palette.primary)
            .glow(palette.primary, 10.0)
    });
    let burst = VisualNode::group("logo/particles")
        .at(center.x, center.y)
        .children(particles);

    let half = LOGO_SIZE / 2.0;
    let [inner_halo, outer_halo] = palette.halo_radii;
    let ring = VisualNode::group("logo/mark/ring")
        .transform(Transform2D::default().scaled(drift(f, &[0.0, 100.0], &[1.0, 1.5])?))
        .opacity(drift(
            f,
            &[0.0, 20.0, 80.0, 100.0],
            &[0.0, 1.0, 1.0, 0.0],
        )?)
        .glow(palette.primary, outer_halo)
        .child(
            VisualNode::circle("logo/mark/ring/stroke", half)
                .stroke(palette.primary, 4.0)
                .glow(palette.primary, inner_halo),
        );

    let radius = corner_pct / 100.0 * LOGO_SIZE;
    let frame = VisualNode::group("logo/mark/frame")
        .clip(LOGO_SIZE, LOGO_SIZE)
        .children([
            VisualNode::image("logo/mark/frame/image", logo_url, LOGO_SIZE, LOGO_SIZE)
                .hue_rotate(hue),
            VisualNode::rounded_rect("logo/mark/frame/scanlines", LOGO_SIZE, LOGO_SIZE, radius)
                .paint(Paint::Stripes {
                    color: palette.primary.with_alpha(0x20),
                    period: 4.0,
                    thickness: 2.0,
                }),
            VisualNode::rounded_rect("logo/mark/frame/border", LOGO_SIZE, LOGO_SIZE, radius)
                .stroke(palette.secondary, 4.0)
                .glow(palette.primary, 30.0),
        ]);

    let caption = VisualNode::text("logo/mark/caption", CAPTION, Font::sans(24.0).bold())
        .at(0.0, half + 64.0)
        .opacity(ramp(f, &[50.0, 70.0], &[0.0, 1.0])?)
        .fill(palette.primary)
        .glow(palette.primary, 10.0);

    let mark = VisualNode::group("logo/mark")
        .transform(
            Transform2D::at(center.x, center.y)
                .rotated(rotation)
                .scaled(scale),
        )
        .hue_rotate(hue)
        .children([ring, frame, caption]);

    let outline_opacity = drift(f, &[0.0, 100.0], &[0.2, 0.0])?;
    let outlines = (0..OUTLINE_COUNT).map(|i| {
        let id = format!("logo/outlines/o-{i}");
        let size = 100.0 + 50.0 * i as f64;
        let shape = if i % 2 == 0 {
            VisualNode::rect(id, size, size)
        } else {
            VisualNode::circle(id, size / 2.0)
        };
        shape
            .transform(Transform2D::default().rotated(rotation + 15.0 * i as f64))
            .opacity(outline_opacity)
            .stroke(palette.primary, 1.0)
    });
    let outlines = VisualNode::group("logo/outlines")
        .at(center.x, center.y)
        .children(outlines);

    Ok(VisualNode::group("logo").children([burst, mark, outlines]))
}

#[cfg(test)]
#[path = "../../tests/unit/components/logo.rs"]
mod tests;
