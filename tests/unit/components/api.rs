use super::*;
use crate::foundation::core::Canvas;
use crate::theme::palette::Theme;

fn endpoints() -> Vec<ApiEndpoint> {
    vec![
        ApiEndpoint::new("GET", "/users", "Fetch user data"),
        ApiEndpoint::new("POST", "/auth", "User authentication"),
        ApiEndpoint::new("PUT", "/profile", "Update profile"),
        ApiEndpoint::new("DELETE", "/sessions", "Logout user"),
    ]
}

fn render(frame: u64) -> VisualNode {
    let ctx = FrameCtx::new(
        FrameIndex(frame),
        Canvas::new(1920, 1080).unwrap(),
        Theme::Cyberpunk,
    );
    api_visualization(ctx, "TechAPI v2.0", &endpoints()).unwrap()
}

#[test]
fn verbs_map_to_badge_colors() {
    assert_eq!(method_color("GET"), colors::GREEN_400);
    assert_eq!(method_color("POST"), colors::BLUE_400);
    assert_eq!(method_color("PUT"), colors::YELLOW_400);
    assert_eq!(method_color("DELETE"), colors::RED_400);
    assert_eq!(method_color("PATCH"), colors::GRAY_400);
    assert_eq!(method_color("get"), colors::GRAY_400);
}

#[test]
fn cards_are_staggered_by_thirty_frames() {
    let first = card_state(FrameIndex(0), 0).unwrap();
    assert_eq!(first.opacity, 0.0);
    assert_eq!(first.rise, 50.0);

    let second_early = card_state(FrameIndex(30), 1).unwrap();
    assert_eq!(second_early.opacity, 0.0);
    let second = card_state(FrameIndex(60), 1).unwrap();
    assert_eq!(second.opacity, 1.0);
    assert_eq!(second.rise, 0.0);
}

#[test]
fn progress_and_sweep_follow_the_card_delay() {
    let s = card_state(FrameIndex(90), 2).unwrap();
    assert_eq!(s.progress_pct, 50.0);
    let s = card_state(FrameIndex(120), 2).unwrap();
    assert_eq!(s.progress_pct, 100.0);
    assert_eq!(s.sweep_pct, 0.0);
    let s = card_state(FrameIndex(239), 2).unwrap();
    assert_eq!(s.sweep_pct, 100.0);
}

#[test]
fn scene_has_header_cards_and_flow() {
    let tree = render(100);
    assert_eq!(
        tree.find("api/header/name").unwrap().text_content(),
        Some("TechAPI v2.0")
    );
    assert_eq!(
        tree.find("api/header/caption").unwrap().text_content(),
        Some("RESTful API Documentation")
    );
    for i in 0..4 {
        assert!(tree.find(&format!("api/card-{i}")).is_some());
    }
    assert_eq!(
        tree.find("api/card-3/badge/method").unwrap().text_content(),
        Some("DELETE")
    );
    assert!(tree.find("api/flow/client").is_some());
    assert!(tree.find("api/flow/api").is_some());
    assert!(tree.find("api/flow/dot-4").is_some());
}

#[test]
fn cards_lay_out_in_two_columns() {
    let tree = render(200);
    let pos = |i: usize| {
        tree.find(&format!("api/card-{i}"))
            .unwrap()
            .style
            .transform
            .translate
    };
    assert_eq!(pos(0).y, pos(1).y);
    assert!(pos(1).x > pos(0).x);
    assert_eq!(pos(0).x, pos(2).x);
    assert!(pos(2).y > pos(0).y);
}

#[test]
fn flow_dots_keep_extending() {
    let tree = render(60);
    assert_eq!(tree.find("api/flow/dot-0").unwrap().style.opacity, 2.0);
    let tree = render(5);
    assert_eq!(tree.find("api/flow/dot-1").unwrap().style.opacity, 0.0);
}
