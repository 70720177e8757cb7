use super::*;
use crate::foundation::core::Canvas;
use crate::theme::palette::Theme;

fn commands() -> Vec<String> {
    [
        "npm install @techcorp/advanced-toolkit",
        "npm run build:production",
        "docker build -t techapp .",
        "kubectl apply -f deployment.yaml",
        "echo 'Deployment successful! \u{1F680}'",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn render(frame: u64) -> VisualNode {
    let ctx = FrameCtx::new(
        FrameIndex(frame),
        Canvas::new(1920, 1080).unwrap(),
        Theme::Cyberpunk,
    );
    terminal(ctx, &commands(), &default_outputs()).unwrap()
}

#[test]
fn frame_39_shows_first_command_with_fading_output() {
    let states = command_states(FrameIndex(39), &commands()).unwrap();
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].typed, commands()[0]);
    assert!(!states[0].is_typing());
    let opacity = states[0].output_opacity.unwrap();
    assert!(opacity > 0.0 && opacity < 1.0);
    assert!((opacity - 0.9).abs() < 1e-12);
}

#[test]
fn typing_reveals_floor_of_progress() {
    let states = command_states(FrameIndex(15), &commands()).unwrap();
    let len = commands()[0].chars().count();
    assert_eq!(states[0].typed.chars().count(), len / 2);
    assert!(states[0].is_typing());
    assert_eq!(states[0].output_opacity, None);
}

#[test]
fn typing_window_is_fixed_regardless_of_length() {
    let short = vec!["ls".to_string()];
    let long = vec!["x".repeat(500)];
    let a = command_states(FrameIndex(30), &short).unwrap();
    let b = command_states(FrameIndex(30), &long).unwrap();
    assert_eq!(a[0].progress, 1.0);
    assert_eq!(b[0].progress, 1.0);
    assert_eq!(b[0].typed.len(), 500);
}

#[test]
fn all_blocks_present_from_frame_160() {
    let states = command_states(FrameIndex(160), &commands()).unwrap();
    assert_eq!(states.len(), 5);
    assert_eq!(states[4].typed, "");
    for s in &states[..4] {
        assert_eq!(s.output_opacity, Some(1.0));
    }
    let tree = render(160);
    for i in 0..5 {
        assert!(tree.find(&format!("terminal/cmd-{i}")).is_some());
    }
    assert!(tree.find("terminal/cmd-4/output").is_none());
    assert!(tree.find("terminal/cmd-4/caret").is_some());
}

#[test]
fn success_message_follows_the_fifth_slot() {
    let tree = render(199);
    let out = tree.find("terminal/cmd-4/output").unwrap();
    assert!((out.style.opacity - 0.9).abs() < 1e-12);
    assert_eq!(
        tree.find("terminal/cmd-4/output/text").unwrap().text_content(),
        Some("Deployment successful! \u{1F680}")
    );
    assert_eq!(
        tree.find("terminal/cmd-4/output/detail").unwrap().text_content(),
        Some("Application available at: https://app.techcorp.com")
    );
}

#[test]
fn missing_outputs_print_nothing() {
    let ctx = FrameCtx::new(
        FrameIndex(80),
        Canvas::new(1920, 1080).unwrap(),
        Theme::Cyberpunk,
    );
    let tree = terminal(ctx, &commands(), &[]).unwrap();
    assert!(tree.find("terminal/cmd-0").is_some());
    assert!(tree.find("terminal/cmd-0/output").is_none());
}

#[test]
fn stats_fade_in_one_after_another() {
    let tree = render(115);
    let op = |i: usize| tree.find(&format!("terminal/stat-{i}")).unwrap().style.opacity;
    assert_eq!(op(0), 0.75);
    assert_eq!(op(1), 0.25);
    assert!(op(2) < 0.0);
    assert_eq!(
        tree.find("terminal/stat-1/value").unwrap().text_content(),
        Some("4.2/16 GB")
    );
}

#[test]
fn prompt_cursor_blinks() {
    let cursor = |f| {
        render(f)
            .find("terminal/cursor/block")
            .unwrap()
            .style
            .opacity
    };
    assert_eq!(cursor(0), 1.0);
    assert_eq!(cursor(30), 0.0);
    assert_eq!(cursor(120), 1.0);
}

#[test]
fn default_outputs_end_with_the_success_line() {
    let outputs = default_outputs();
    assert_eq!(outputs.len(), 5);
    assert!(outputs[..4].iter().all(|o| !o.highlight && o.detail.is_none()));
    assert!(outputs[4].highlight);
}
