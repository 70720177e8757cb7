//! Faint rotating outlines drifting behind the TechVideo scenes.

use crate::{
    components::{FrameCtx, drift},
    foundation::core::{Point, Transform2D},
    foundation::error::ReelResult,
    scene::node::VisualNode,
    theme::colors,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Outline kinds of the background shapes.
pub enum ShapeKind {
    /// Ring.
    Circle,
    /// Square outline.
    Square,
    /// Filled triangle.
    Triangle,
    /// Hexagon outline.
    Hexagon,
}

impl ShapeKind {
    fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Hexagon => "hexagon",
        }
    }
}

struct ShapeSpec {
    kind: ShapeKind,
    size: f64,
    x_pct: f64,
    y_pct: f64,
    speed: f64,
}

const SHAPES: [ShapeSpec; 4] = [
    ShapeSpec {
        kind: ShapeKind::Circle,
        size: 100.0,
        x_pct: 20.0,
        y_pct: 30.0,
        speed: 1.0,
    },
    ShapeSpec {
        kind: ShapeKind::Square,
        size: 80.0,
        x_pct: 70.0,
        y_pct: 60.0,
        speed: 1.5,
    },
    ShapeSpec {
        kind: ShapeKind::Triangle,
        size: 120.0,
        x_pct: 40.0,
        y_pct: 80.0,
        speed: 0.8,
    },
    ShapeSpec {
        kind: ShapeKind::Hexagon,
        size: 90.0,
        x_pct: 80.0,
        y_pct: 20.0,
        speed: 1.2,
    },
];

/// Render the four background shapes at `ctx.frame`.
pub fn geometric_shapes(ctx: FrameCtx) -> ReelResult<VisualNode> {
    let f = ctx.f();
    let scale = drift(f, &[0.0, 120.0, 240.0], &[0.8, 1.2, 0.8])?;
    let amp_x = drift(f, &[0.0, 300.0], &[0.0, 10.0])?;
    let amp_y = drift(f, &[0.0, 300.0], &[0.0, 8.0])?;
    let color = colors::NEON_BLUE;

    let shapes = SHAPES.iter().enumerate().map(|(i, spec)| {
        let phase = f * 0.01 + i as f64;
        let pos = ctx.canvas.at_percent(
            spec.x_pct + amp_x * phase.sin(),
            spec.y_pct + amp_y * phase.cos(),
        );
        let id = format!("shapes/{}", spec.kind.name());
        let half = spec.size / 2.0;
        let node = match spec.kind {
            ShapeKind::Circle => VisualNode::circle(id, half).stroke(color, 2.0),
            ShapeKind::Square => VisualNode::rect(id, spec.size, spec.size).stroke(color, 2.0),
            ShapeKind::Triangle => VisualNode::polygon(
                id,
                vec![
                    Point::new(0.0, -half),
                    Point::new(half, half),
                    Point::new(-half, half),
                ],
            )
            .fill(color),
            ShapeKind::Hexagon => VisualNode::polygon(
                id,
                [(0.3, 0.0), (0.7, 0.0), (1.0, 0.5), (0.7, 1.0), (0.3, 1.0), (0.0, 0.5)]
                    .into_iter()
                    .map(|(u, v)| Point::new((u - 0.5) * spec.size, (v - 0.5) * spec.size))
                    .collect(),
            )
            .stroke(color, 2.0),
        };
        node.transform(
            Transform2D::at(pos.x, pos.y)
                .rotated((f * spec.speed) % 360.0)
                .scaled(scale),
        )
        .glow(color, 10.0)
    });

    Ok(VisualNode::group("shapes").opacity(0.1).children(shapes))
}

#[cfg(test)]
#[path = "../../tests/unit/components/shapes.rs"]
mod tests;
