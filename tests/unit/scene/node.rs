use super::*;

fn sample_tree() -> VisualNode {
    VisualNode::group("root").children([
        VisualNode::circle("dot", 4.0).fill(Rgba8::rgb(255, 0, 0)),
        VisualNode::group("label").child(VisualNode::text("label/text", "hi", Font::sans(12.0))),
    ])
}

#[test]
fn find_walks_depth_first() {
    let tree = sample_tree();
    assert_eq!(tree.count(), 4);
    assert_eq!(tree.find("label/text").unwrap().text_content(), Some("hi"));
    assert!(tree.find("missing").is_none());
}

#[test]
fn builders_set_style_fields() {
    let n = VisualNode::rect("r", 10.0, 20.0)
        .opacity(0.5)
        .at(3.0, 4.0)
        .stroke(Rgba8::rgb(1, 2, 3), 2.0)
        .glow(Rgba8::rgb(4, 5, 6), 10.0)
        .hue_rotate(90.0);
    assert_eq!(n.style.opacity, 0.5);
    assert_eq!(n.style.transform.translate, Vec2::new(3.0, 4.0));
    assert_eq!(n.style.stroke.as_ref().unwrap().width, 2.0);
    assert_eq!(n.style.glow.unwrap().radius, 10.0);
    assert_eq!(n.style.hue_rotate_deg, Some(90.0));
}

#[test]
fn json_omits_empty_optionals() {
    let json = serde_json::to_value(VisualNode::group("g")).unwrap();
    assert_eq!(json["id"], "g");
    assert_eq!(json["kind"], "group");
    assert!(json.get("children").is_none());
    assert!(json["style"].get("fill").is_none());
}

#[test]
fn approx_width_scales_with_font() {
    let mono = Font::mono(10.0);
    assert_eq!(mono.approx_width("abcd"), 24.0);
    assert_eq!(mono.approx_width("🚀"), 6.0);
    assert!(Font::sans(20.0).approx_width("ab") > Font::sans(10.0).approx_width("ab"));
}
