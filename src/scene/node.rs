//! Declarative visual tree emitted by every renderer.
//!
//! Shapes are centered on their node origin, so rotation and scale pivot around the shape
//! center. Lines and polygons use explicit local coordinates.

use crate::foundation::core::{Point, Rgba8, Transform2D, Vec2};
use crate::theme::palette::{GlowSpec, Gradient};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One node of the visual tree.
pub struct VisualNode {
    /// Slash-separated identifier, unique within its parent (e.g. `title/letter-3`).
    pub id: String,
    /// What to draw at this node.
    pub kind: NodeKind,
    /// How to draw it.
    pub style: Style,
    /// Children drawn after (on top of) this node, in their own coordinate space.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisualNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Drawable primitive.
pub enum NodeKind {
    /// Container only.
    Group,
    /// Rectangle centered on the origin.
    Rect {
        /// Width and height.
        size: Vec2,
        /// Corner radius in pixels.
        corner_radius: f64,
    },
    /// Ellipse centered on the origin.
    Ellipse {
        /// Horizontal and vertical radii.
        radii: Vec2,
    },
    /// Closed polygon in local coordinates.
    Polygon {
        /// Vertices.
        points: Vec<Point>,
    },
    /// Straight segment in local coordinates.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Single line of text; the origin sits on the baseline at the anchor.
    Text {
        /// Content.
        content: String,
        /// Font settings.
        font: Font,
    },
    /// External image centered on the origin; loading is the host's concern.
    Image {
        /// Image reference (URL or path).
        href: String,
        /// Displayed width and height.
        size: Vec2,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Text settings.
pub struct Font {
    /// Size in pixels.
    pub size: f64,
    /// Bold weight.
    pub bold: bool,
    /// Monospace family.
    pub mono: bool,
    /// Horizontal alignment relative to the origin.
    pub anchor: TextAnchor,
}

impl Font {
    /// Regular proportional font, centered.
    pub fn sans(size: f64) -> Self {
        Self {
            size,
            bold: false,
            mono: false,
            anchor: TextAnchor::Middle,
        }
    }

    /// Monospace font, left aligned.
    pub fn mono(size: f64) -> Self {
        Self {
            size,
            bold: false,
            mono: true,
            anchor: TextAnchor::Start,
        }
    }

    /// Bold variant.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Replace the anchor.
    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Approximate advance width of `text` in pixels; no shaping is performed.
    pub fn approx_width(&self, text: &str) -> f64 {
        let per_char = if self.mono { 0.6 } else { 0.55 };
        text.chars().count() as f64 * self.size * per_char
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal text alignment.
pub enum TextAnchor {
    /// Text starts at the origin.
    Start,
    /// Text is centered on the origin.
    #[default]
    Middle,
    /// Text ends at the origin.
    End,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Fill or stroke paint.
pub enum Paint {
    /// Flat color.
    Solid(Rgba8),
    /// Linear gradient across the shape's bounding box.
    Gradient(Gradient),
    /// Horizontal stripes: `thickness` of color every `period` pixels.
    Stripes {
        /// Stripe color.
        color: Rgba8,
        /// Repeat distance in pixels.
        period: f64,
        /// Painted height of each stripe.
        thickness: f64,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Outline.
pub struct Stroke {
    /// Outline color.
    pub color: Rgba8,
    /// Width in pixels.
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Per-node style. Opacity multiplies down the tree.
pub struct Style {
    /// Node opacity; values outside `[0, 1]` are clamped when drawn.
    pub opacity: f64,
    /// Placement relative to the parent.
    pub transform: Transform2D,
    /// Interior paint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    /// Outline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Soft glow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<GlowSpec>,
    /// Hue rotation filter in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_rotate_deg: Option<f64>,
    /// Clip this subtree to a rectangle of this size centered on the node origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<Vec2>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: Transform2D::default(),
            fill: None,
            stroke: None,
            glow: None,
            hue_rotate_deg: None,
            clip: None,
        }
    }
}

impl VisualNode {
    /// Node with default style and no children.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Empty group.
    pub fn group(id: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Group)
    }

    /// Centered rectangle.
    pub fn rect(id: impl Into<String>, w: f64, h: f64) -> Self {
        Self::new(
            id,
            NodeKind::Rect {
                size: Vec2::new(w, h),
                corner_radius: 0.0,
            },
        )
    }

    /// Centered rounded rectangle.
    pub fn rounded_rect(id: impl Into<String>, w: f64, h: f64, radius: f64) -> Self {
        Self::new(
            id,
            NodeKind::Rect {
                size: Vec2::new(w, h),
                corner_radius: radius,
            },
        )
    }

    /// Centered circle.
    pub fn circle(id: impl Into<String>, r: f64) -> Self {
        Self::new(
            id,
            NodeKind::Ellipse {
                radii: Vec2::new(r, r),
            },
        )
    }

    /// Segment in local coordinates.
    pub fn line(id: impl Into<String>, from: Point, to: Point) -> Self {
        Self::new(id, NodeKind::Line { from, to })
    }

    /// Closed polygon in local coordinates.
    pub fn polygon(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self::new(id, NodeKind::Polygon { points })
    }

    /// Text run.
    pub fn text(id: impl Into<String>, content: impl Into<String>, font: Font) -> Self {
        Self::new(
            id,
            NodeKind::Text {
                content: content.into(),
                font,
            },
        )
    }

    /// External image.
    pub fn image(id: impl Into<String>, href: impl Into<String>, w: f64, h: f64) -> Self {
        Self::new(
            id,
            NodeKind::Image {
                href: href.into(),
                size: Vec2::new(w, h),
            },
        )
    }

    /// Set opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity;
        self
    }

    /// Set the whole transform.
    pub fn transform(mut self, transform: Transform2D) -> Self {
        self.style.transform = transform;
        self
    }

    /// Set the translation only.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.style.transform.translate = Vec2::new(x, y);
        self
    }

    /// Set a flat fill.
    pub fn fill(mut self, color: Rgba8) -> Self {
        self.style.fill = Some(Paint::Solid(color));
        self
    }

    /// Set any paint as fill.
    pub fn paint(mut self, paint: Paint) -> Self {
        self.style.fill = Some(paint);
        self
    }

    /// Set an outline.
    pub fn stroke(mut self, color: Rgba8, width: f64) -> Self {
        self.style.stroke = Some(Stroke { color, width });
        self
    }

    /// Set a glow.
    pub fn glow(mut self, color: Rgba8, radius: f64) -> Self {
        self.style.glow = Some(GlowSpec { color, radius });
        self
    }

    /// Set a hue rotation filter.
    pub fn hue_rotate(mut self, deg: f64) -> Self {
        self.style.hue_rotate_deg = Some(deg);
        self
    }

    /// Clip the subtree to a centered `w x h` rectangle.
    pub fn clip(mut self, w: f64, h: f64) -> Self {
        self.style.clip = Some(Vec2::new(w, h));
        self
    }

    /// Append one child.
    pub fn child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn children(mut self, children: impl IntoIterator<Item = VisualNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search by exact id.
    pub fn find(&self, id: &str) -> Option<&VisualNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(VisualNode::count).sum::<usize>()
    }

    /// Text content if this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
