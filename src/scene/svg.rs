use std::fmt::Write as _;

use crate::{
    foundation::core::{Canvas, Rgba8, Vec2},
    scene::node::{Font, NodeKind, Paint, Style, TextAnchor, VisualNode},
    theme::palette::Gradient,
};

/// Serialize a visual tree to a standalone SVG document of `canvas` size.
///
/// `background` paints a full-canvas rectangle under the tree. Nodes whose clamped opacity is
/// zero are omitted together with their subtree.
pub fn to_svg(root: &VisualNode, canvas: Canvas, background: Option<Rgba8>) -> String {
    let mut w = SvgWriter::default();
    w.node(root);

    let mut out = String::with_capacity(w.body.len() + w.defs.len() + 256);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
        canvas.width, canvas.height
    );
    if !w.defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&w.defs);
        out.push_str("</defs>");
    }
    if let Some(bg) = background {
        let _ = write!(
            out,
            r#"<rect width="{}" height="{}"{}/>"#,
            canvas.width,
            canvas.height,
            color_attrs("fill", bg)
        );
    }
    out.push_str(&w.body);
    out.push_str("</svg>");
    out
}

#[derive(Default)]
struct SvgWriter {
    body: String,
    defs: String,
    next_def: usize,
}

impl SvgWriter {
    fn node(&mut self, node: &VisualNode) {
        let opacity = clamp_opacity(node.style.opacity);
        if opacity <= 0.0 {
            return;
        }

        self.body.push_str("<g");
        if !node.style.transform.is_identity() {
            let [a, b, c, d, e, f] = node.style.transform.to_affine().as_coeffs();
            let _ = write!(
                self.body,
                r#" transform="matrix({} {} {} {} {} {})""#,
                num(a),
                num(b),
                num(c),
                num(d),
                num(e),
                num(f)
            );
        }
        if opacity < 1.0 {
            let _ = write!(self.body, r#" opacity="{}""#, num(opacity));
        }
        if let Some(filter_id) = self.filter(&node.style) {
            let _ = write!(self.body, r#" filter="url(#{filter_id})""#);
        }
        if let Some(size) = node.style.clip {
            let clip_id = self.clip(size);
            let _ = write!(self.body, r#" clip-path="url(#{clip_id})""#);
        }
        self.body.push('>');

        self.shape(node);
        for child in &node.children {
            self.node(child);
        }
        self.body.push_str("</g>");
    }

    fn shape(&mut self, node: &VisualNode) {
        if matches!(node.kind, NodeKind::Group) {
            return;
        }
        let paint = self.paint_attrs(&node.style);
        match &node.kind {
            NodeKind::Group => {}
            NodeKind::Rect {
                size,
                corner_radius,
            } => {
                let _ = write!(
                    self.body,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    num(-size.x / 2.0),
                    num(-size.y / 2.0),
                    num(size.x.max(0.0)),
                    num(size.y.max(0.0))
                );
                if *corner_radius > 0.0 {
                    let _ = write!(self.body, r#" rx="{}""#, num(*corner_radius));
                }
                let _ = write!(self.body, "{paint}/>");
            }
            NodeKind::Ellipse { radii } => {
                let _ = write!(
                    self.body,
                    r#"<ellipse rx="{}" ry="{}"{paint}/>"#,
                    num(radii.x.max(0.0)),
                    num(radii.y.max(0.0))
                );
            }
            NodeKind::Polygon { points } => {
                let mut pts = String::new();
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        pts.push(' ');
                    }
                    let _ = write!(pts, "{},{}", num(p.x), num(p.y));
                }
                let _ = write!(self.body, r#"<polygon points="{pts}"{paint}/>"#);
            }
            NodeKind::Line { from, to } => {
                let _ = write!(
                    self.body,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{paint}/>"#,
                    num(from.x),
                    num(from.y),
                    num(to.x),
                    num(to.y)
                );
            }
            NodeKind::Text { content, font } => {
                let _ = write!(
                    self.body,
                    r#"<text xml:space="preserve"{}{paint}>"#,
                    font_attrs(font)
                );
                self.body.push_str(&escape(content));
                self.body.push_str("</text>");
            }
            NodeKind::Image { href, size } => {
                let _ = write!(
                    self.body,
                    r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice"/>"#,
                    escape(href),
                    num(-size.x / 2.0),
                    num(-size.y / 2.0),
                    num(size.x.max(0.0)),
                    num(size.y.max(0.0))
                );
            }
        }
    }

    fn paint_attrs(&mut self, style: &Style) -> String {
        let mut attrs = String::new();
        match &style.fill {
            None => attrs.push_str(r#" fill="none""#),
            Some(Paint::Solid(c)) => attrs.push_str(&color_attrs("fill", *c)),
            Some(Paint::Gradient(g)) => {
                let id = self.gradient(g);
                let _ = write!(attrs, r#" fill="url(#{id})""#);
            }
            Some(Paint::Stripes {
                color,
                period,
                thickness,
            }) => {
                let id = self.stripes(*color, *period, *thickness);
                let _ = write!(attrs, r#" fill="url(#{id})""#);
            }
        }
        if let Some(stroke) = &style.stroke {
            attrs.push_str(&color_attrs("stroke", stroke.color));
            let _ = write!(attrs, r#" stroke-width="{}""#, num(stroke.width));
        }
        attrs
    }

    fn def_id(&mut self, prefix: &str) -> String {
        self.next_def += 1;
        format!("{prefix}{}", self.next_def)
    }

    fn filter(&mut self, style: &Style) -> Option<String> {
        if style.glow.is_none() && style.hue_rotate_deg.is_none() {
            return None;
        }
        let id = self.def_id("fx");
        let _ = write!(
            self.defs,
            r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%">"#
        );
        let mut source = "SourceGraphic";
        if let Some(deg) = style.hue_rotate_deg {
            let _ = write!(
                self.defs,
                r#"<feColorMatrix in="SourceGraphic" type="hueRotate" values="{}" result="hue"/>"#,
                num(deg.rem_euclid(360.0))
            );
            source = "hue";
        }
        if let Some(glow) = &style.glow {
            let _ = write!(
                self.defs,
                r#"<feGaussianBlur in="{source}" stdDeviation="{}" result="blur"/><feFlood{}/><feComposite in2="blur" operator="in" result="glow"/><feMerge><feMergeNode in="glow"/><feMergeNode in="{source}"/></feMerge>"#,
                num((glow.radius / 2.0).max(0.0)),
                flood_attrs(glow.color)
            );
        }
        self.defs.push_str("</filter>");
        Some(id)
    }

    fn clip(&mut self, size: Vec2) -> String {
        let id = self.def_id("cp");
        let _ = write!(
            self.defs,
            r#"<clipPath id="{id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            num(-size.x / 2.0),
            num(-size.y / 2.0),
            num(size.x.max(0.0)),
            num(size.y.max(0.0))
        );
        id
    }

    fn gradient(&mut self, g: &Gradient) -> String {
        let id = self.def_id("lg");
        // CSS angles: 0deg points up, 90deg points right.
        let rad = g.angle_deg.to_radians();
        let (dx, dy) = (rad.sin() / 2.0, -rad.cos() / 2.0);
        let _ = write!(
            self.defs,
            r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}"><stop offset="0"{}/><stop offset="1"{}/></linearGradient>"#,
            num(0.5 - dx),
            num(0.5 - dy),
            num(0.5 + dx),
            num(0.5 + dy),
            stop_attrs(g.from),
            stop_attrs(g.to)
        );
        id
    }

    fn stripes(&mut self, color: Rgba8, period: f64, thickness: f64) -> String {
        let id = self.def_id("st");
        let period = period.max(1.0);
        let thickness = thickness.clamp(0.0, period);
        let _ = write!(
            self.defs,
            r#"<pattern id="{id}" patternUnits="userSpaceOnUse" width="{p}" height="{p}"><rect y="{}" width="{p}" height="{}"{}/></pattern>"#,
            num(period - thickness),
            num(thickness),
            color_attrs("fill", color),
            p = num(period)
        );
        id
    }
}

fn font_attrs(font: &Font) -> String {
    let family = if font.mono {
        "monospace"
    } else {
        "sans-serif"
    };
    let anchor = match font.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let mut attrs = format!(
        r#" font-family="{family}" font-size="{}" text-anchor="{anchor}""#,
        num(font.size)
    );
    if font.bold {
        attrs.push_str(r#" font-weight="bold""#);
    }
    attrs
}

fn color_attrs(attr: &str, c: Rgba8) -> String {
    let hex = Rgba8::rgb(c.r, c.g, c.b).to_hex();
    if c.a == 255 {
        format!(r#" {attr}="{hex}""#)
    } else {
        format!(r#" {attr}="{hex}" {attr}-opacity="{}""#, num(c.alpha_f64()))
    }
}

fn stop_attrs(c: Rgba8) -> String {
    format!(
        r#" stop-color="{}" stop-opacity="{}""#,
        Rgba8::rgb(c.r, c.g, c.b).to_hex(),
        num(c.alpha_f64())
    )
}

fn flood_attrs(c: Rgba8) -> String {
    format!(
        r#" flood-color="{}" flood-opacity="{}""#,
        Rgba8::rgb(c.r, c.g, c.b).to_hex(),
        num(c.alpha_f64())
    )
}

fn clamp_opacity(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

/// Fixed 3-decimal formatting with trailing zeros trimmed; non-finite values become `0`.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
