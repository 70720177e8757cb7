use super::*;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::scene::node::NodeKind;
use crate::theme::palette::Theme;

fn shapes_at(frame: u64) -> VisualNode {
    geometric_shapes(FrameCtx::new(
        FrameIndex(frame),
        Canvas::new(1920, 1080).unwrap(),
        Theme::Cyberpunk,
    ))
    .unwrap()
}

#[test]
fn four_faint_shapes() {
    let tree = shapes_at(0);
    assert_eq!(tree.style.opacity, 0.1);
    assert_eq!(tree.children.len(), 4);
    match &tree.find("shapes/hexagon").unwrap().kind {
        NodeKind::Polygon { points } => assert_eq!(points.len(), 6),
        other => panic!("unexpected kind {other:?}"),
    }
    assert!(tree.find("shapes/triangle").unwrap().style.fill.is_some());
}

#[test]
fn shapes_start_at_their_anchors() {
    let tree = shapes_at(0);
    let circle = tree.find("shapes/circle").unwrap();
    assert_eq!(circle.style.transform.translate.x, 384.0);
    assert_eq!(circle.style.transform.translate.y, 324.0);
    assert_eq!(circle.style.transform.scale.x, 0.8);
}

#[test]
fn rotation_wraps_at_a_full_turn() {
    let tree = shapes_at(400);
    let square = tree.find("shapes/square").unwrap();
    assert_eq!(square.style.transform.rotation_deg, 240.0);
}

#[test]
fn breathing_scale_extends_past_the_last_breakpoint() {
    assert_eq!(shapes_at(120).children[0].style.transform.scale.x, 1.2);
    let late = shapes_at(360).children[0].style.transform.scale.x;
    assert!((late - 0.4).abs() < 1e-9);
}
