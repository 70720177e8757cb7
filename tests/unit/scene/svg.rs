use super::*;
use crate::foundation::core::{Point, Transform2D};

fn canvas() -> Canvas {
    Canvas::new(64, 32).unwrap()
}

#[test]
fn document_has_size_and_background() {
    let svg = to_svg(
        &VisualNode::group("root"),
        canvas(),
        Some(Rgba8::rgb(10, 10, 15)),
    );
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="0 0 64 32""#));
    assert!(svg.contains(r##"fill="#0A0A0F""##));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn invisible_subtrees_are_skipped() {
    let tree = VisualNode::group("root").children([
        VisualNode::rect("gone", 4.0, 4.0).opacity(-0.4).child(VisualNode::circle("inner", 1.0)),
        VisualNode::rect("kept", 4.0, 4.0).opacity(1.7),
    ]);
    let svg = to_svg(&tree, canvas(), None);
    assert_eq!(svg.matches("<rect").count(), 1);
    assert!(!svg.contains("<ellipse"));
    assert!(!svg.contains("opacity=\"1.7\""));
}

#[test]
fn transforms_and_partial_opacity_are_written() {
    let node = VisualNode::circle("c", 5.0)
        .transform(Transform2D::at(10.0, 20.0).scaled(2.0))
        .opacity(0.25)
        .fill(Rgba8::rgb(255, 0, 0).with_alpha(128));
    let svg = to_svg(&node, canvas(), None);
    assert!(svg.contains(r#"transform="matrix(2 0 0 2 10 20)""#));
    assert!(svg.contains(r#"opacity="0.25""#));
    assert!(svg.contains(r##"fill="#FF0000" fill-opacity="0.502""##));
}

#[test]
fn glow_and_hue_share_one_filter() {
    let node = VisualNode::rect("r", 2.0, 2.0)
        .glow(Rgba8::rgb(0, 191, 255), 10.0)
        .hue_rotate(400.0);
    let svg = to_svg(&node, canvas(), None);
    assert_eq!(svg.matches("<filter ").count(), 1);
    assert!(svg.contains(r#"values="40""#));
    assert!(svg.contains(r#"stdDeviation="5""#));
    assert!(svg.contains(r#"filter="url(#fx1)""#));
}

#[test]
fn text_is_escaped_and_styled() {
    let node = VisualNode::text("t", "a < b && \"c\"", Font::mono(14.0).bold());
    let svg = to_svg(&node, canvas(), None);
    assert!(svg.contains("a &lt; b &amp;&amp; &quot;c&quot;"));
    assert!(svg.contains(r#"font-family="monospace""#));
    assert!(svg.contains(r#"font-weight="bold""#));
    assert!(svg.contains(r#"text-anchor="start""#));
}

#[test]
fn gradients_and_stripes_become_defs() {
    let palette = crate::theme::palette::Theme::Cyberpunk.palette();
    let tree = VisualNode::group("root").children([
        VisualNode::rect("bg", 10.0, 10.0).paint(Paint::Gradient(palette.background)),
        VisualNode::rect("lines", 10.0, 10.0).paint(Paint::Stripes {
            color: palette.primary.with_alpha(32),
            period: 4.0,
            thickness: 2.0,
        }),
    ]);
    let svg = to_svg(&tree, canvas(), None);
    assert!(svg.contains("<linearGradient id=\"lg1\""));
    assert!(svg.contains("<pattern id=\"st2\""));
    assert!(svg.contains(r#"fill="url(#lg1)""#));
}

#[test]
fn polygons_and_lines_use_local_points() {
    let tree = VisualNode::group("root").children([
        VisualNode::polygon(
            "tri",
            vec![
                Point::new(0.0, -1.0),
                Point::new(1.0, 1.0),
                Point::new(-1.0, 1.0),
            ],
        ),
        VisualNode::line("ln", Point::new(0.0, 0.0), Point::new(3.5, 4.0))
            .stroke(Rgba8::rgb(1, 1, 1), 1.0),
    ]);
    let svg = to_svg(&tree, canvas(), None);
    assert!(svg.contains(r#"points="0,-1 1,1 -1,1""#));
    assert!(svg.contains(r#"x2="3.5" y2="4""#));
}

#[test]
fn clip_becomes_a_centered_clip_path() {
    let node = VisualNode::group("card")
        .clip(20.0, 10.0)
        .child(VisualNode::rect("wide", 100.0, 4.0).fill(Rgba8::rgb(9, 9, 9)));
    let svg = to_svg(&node, canvas(), None);
    assert!(svg.contains(r#"<clipPath id="cp1"><rect x="-10" y="-5" width="20" height="10"/></clipPath>"#));
    assert!(svg.contains(r#"clip-path="url(#cp1)""#));
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(0.5), "0.5");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::NAN), "0");
    assert_eq!(num(12.3456), "12.346");
}
