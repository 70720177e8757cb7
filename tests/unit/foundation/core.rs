use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.frames().count(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_since_is_none_before_start() {
    assert_eq!(FrameIndex(3).since(FrameIndex(5)), None);
    assert_eq!(FrameIndex(55).since(FrameIndex(50)), Some(FrameIndex(5)));
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.frames_to_secs(300), 5.0);
}

#[test]
fn canvas_percent_points() {
    let c = Canvas::new(1920, 1080).unwrap();
    assert_eq!(c.center(), Point::new(960.0, 540.0));
    assert_eq!(c.at_percent(50.0, 100.0), Point::new(960.0, 1080.0));
    assert!(Canvas::new(0, 10).is_err());
}

#[test]
fn hex_colors_parse_in_all_forms() {
    assert_eq!(Rgba8::from_hex("#00BFFF").unwrap(), Rgba8::rgb(0, 191, 255));
    assert_eq!(Rgba8::from_hex("9a4cff").unwrap(), Rgba8::rgb(154, 76, 255));
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::rgb(255, 255, 255));
    assert_eq!(
        Rgba8::from_hex("#00FF0033").unwrap(),
        Rgba8::rgba(0, 255, 0, 0x33)
    );
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
}

#[test]
fn hex_colors_reject_sign_characters() {
    for bad in ["#+f+f+f", "+ff", "#-1ffff", "#+0+0+0+0"] {
        assert!(Rgba8::from_hex(bad).is_err(), "{bad}");
    }
    let parsed: Result<Rgba8, _> = serde_json::from_str("\"#+f+f+f\"");
    assert!(parsed.is_err());
}

#[test]
fn hex_colors_serialize_as_strings() {
    let c = Rgba8::rgb(0, 191, 255);
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#00BFFF\"");
    let back: Rgba8 = serde_json::from_str("\"#00BFFF80\"").unwrap();
    assert_eq!(back, Rgba8::rgba(0, 191, 255, 0x80));
}

#[test]
fn with_opacity_scales_alpha() {
    let c = Rgba8::rgb(10, 20, 30).with_opacity(0.2);
    assert_eq!(c.a, 51);
    assert_eq!(Rgba8::rgb(1, 2, 3).with_opacity(4.0).a, 255);
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert!(t.is_identity());
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D::at(10.0, -2.5);
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn transform_scales_before_translating() {
    let t = Transform2D::at(100.0, 0.0).scaled(2.0);
    let p = t.to_affine() * Point::new(5.0, 5.0);
    assert_eq!(p, Point::new(110.0, 10.0));
}
