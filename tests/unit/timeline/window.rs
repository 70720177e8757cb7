use super::*;

fn tech() -> Timeline {
    Timeline::tech_video(300).unwrap()
}

fn scenes(frame: u64) -> Vec<(SceneKind, u64, f64)> {
    tech()
        .active(FrameIndex(frame))
        .unwrap()
        .into_iter()
        .map(|a| (a.scene, a.local_frame.0, a.opacity))
        .collect()
}

#[test]
fn frame_45_shows_only_the_fading_title() {
    assert_eq!(scenes(45), vec![(SceneKind::Title, 45, 0.75)]);
}

#[test]
fn frame_50_overlaps_title_and_logo() {
    assert_eq!(
        scenes(50),
        vec![(SceneKind::Title, 50, 0.5), (SceneKind::Logo, 0, 0.0)]
    );
}

#[test]
fn frame_60_shows_only_the_logo() {
    assert_eq!(scenes(60), vec![(SceneKind::Logo, 10, 0.5)]);
}

#[test]
fn final_scene_runs_to_the_end() {
    assert_eq!(scenes(250), vec![(SceneKind::Final, 10, 0.5)]);
    assert_eq!(scenes(299), vec![(SceneKind::Final, 59, 1.0)]);
    let both = scenes(245);
    assert_eq!(both.len(), 2);
    assert_eq!(both[0].0, SceneKind::Code);
}

#[test]
fn first_frame_is_title_at_zero_opacity() {
    assert_eq!(scenes(0), vec![(SceneKind::Title, 0, 0.0)]);
    assert_eq!(scenes(30), vec![(SceneKind::Title, 30, 1.0)]);
}

#[test]
fn windows_are_reported_in_order() {
    let names: Vec<&str> = tech().windows().map(|w| w.scene.name()).collect();
    assert_eq!(names, ["title", "logo", "code", "final"]);
    assert_eq!(tech().duration(), 300);
}

#[test]
fn fade_out_only_holds_full_opacity() {
    let tl = Timeline::new(
        100,
        vec![SceneWindow {
            scene: SceneKind::Code,
            start: FrameIndex(0),
            end: Some(FrameIndex(100)),
            fade_in: 0,
            fade_out: 10,
        }],
    )
    .unwrap();
    assert_eq!(tl.active(FrameIndex(0)).unwrap()[0].opacity, 1.0);
    assert_eq!(tl.active(FrameIndex(95)).unwrap()[0].opacity, 0.5);
}

#[test]
fn unfaded_windows_are_fully_opaque() {
    let tl = Timeline::new(10, vec![SceneWindow::closed(SceneKind::Title, 0, 10, 0)]).unwrap();
    assert_eq!(tl.active(FrameIndex(0)).unwrap()[0].opacity, 1.0);
    assert!(tl.active(FrameIndex(10)).unwrap().is_empty());
}

#[test]
fn invalid_windows_are_rejected() {
    let bad = [
        vec![],
        vec![SceneWindow::closed(SceneKind::Title, 10, 10, 0)],
        vec![SceneWindow::closed(SceneKind::Title, 0, 30, 20)],
        vec![SceneWindow::closed(SceneKind::Title, 0, 400, 20)],
        vec![SceneWindow::open(SceneKind::Final, 300, 20)],
        vec![
            SceneWindow::closed(SceneKind::Logo, 50, 100, 10),
            SceneWindow::closed(SceneKind::Title, 0, 60, 10),
        ],
        vec![
            SceneWindow::open(SceneKind::Final, 0, 10),
            SceneWindow::closed(SceneKind::Title, 10, 60, 10),
        ],
        vec![
            SceneWindow::closed(SceneKind::Title, 0, 60, 10),
            SceneWindow::closed(SceneKind::Title, 60, 120, 10),
        ],
    ];
    for windows in bad {
        let err = Timeline::new(300, windows.clone()).unwrap_err();
        assert!(
            matches!(err, ReelError::Validation(_)),
            "{windows:?} gave {err}"
        );
    }
    assert!(Timeline::new(0, vec![SceneWindow::open(SceneKind::Final, 0, 0)]).is_err());
}
