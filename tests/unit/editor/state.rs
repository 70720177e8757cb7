use super::*;

#[test]
fn starts_on_tech_video_with_template_props() {
    let s = EditorState::default();
    assert_eq!(s.selected(), CompositionId::TechVideo);
    assert_eq!(s.video(), &TechVideoProps::default());
}

#[test]
fn events_edit_single_fields() {
    let mut s = EditorState::default();
    assert!(s.apply(EditorEvent::SetTitle("Launch Day".to_string())));
    assert!(s.apply(EditorEvent::SetTheme(Theme::Matrix)));
    assert!(s.apply(EditorEvent::SetLogoUrl("logo.png".to_string())));
    assert!(s.apply(EditorEvent::SetSubtitle("Sub".to_string())));
    assert!(s.apply(EditorEvent::SetCodeSnippet("fn main() {}".to_string())));

    let v = s.video();
    assert_eq!(v.title, "Launch Day");
    assert_eq!(v.subtitle, "Sub");
    assert_eq!(v.theme, Theme::Matrix);
    assert_eq!(v.logo_url, "logo.png");
    assert_eq!(v.code_snippet, "fn main() {}");
}

#[test]
fn repeating_a_value_reports_no_change() {
    let mut s = EditorState::default();
    assert!(!s.apply(EditorEvent::SetTheme(Theme::Cyberpunk)));
    assert!(!s.apply(EditorEvent::SelectComposition(CompositionId::TechVideo)));
    assert!(s.apply(EditorEvent::SelectComposition(CompositionId::Terminal)));
}

#[test]
fn player_routes_edited_props_only_to_tech_video() {
    let reg = Registry::builtin().unwrap();
    let mut s = EditorState::default();
    s.apply(EditorEvent::SetTitle("Edited".to_string()));

    let cfg = s.player_config(&reg).unwrap();
    assert_eq!(cfg.composition, CompositionId::TechVideo);
    assert_eq!(cfg.duration_frames, 300);
    assert!(cfg.controls);
    let CompositionProps::TechVideo(p) = &cfg.props else {
        panic!("expected TechVideo props");
    };
    assert_eq!(p.title, "Edited");

    s.apply(EditorEvent::SelectComposition(CompositionId::LogoMorph));
    let cfg = s.player_config(&reg).unwrap();
    assert_eq!(cfg.duration_frames, 120);
    assert_eq!(cfg.props, CompositionProps::defaults(CompositionId::LogoMorph));
    assert_eq!(cfg.fps, Fps::new(60, 1).unwrap());
    assert_eq!(cfg.canvas, Canvas::new(1920, 1080).unwrap());
}

#[test]
fn unregistered_selection_is_an_error() {
    let reg = Registry::new(vec![
        crate::composition::registry::CompositionDescriptor::standard(
            CompositionId::Terminal,
            200,
        )
        .unwrap(),
    ])
    .unwrap();
    assert!(EditorState::default().player_config(&reg).is_err());
}

#[test]
fn events_deserialize_from_tagged_json() {
    let e: EditorEvent =
        serde_json::from_str(r#"{"kind":"set_theme","params":"neon"}"#).unwrap();
    assert_eq!(e, EditorEvent::SetTheme(Theme::Neon));
    let e: EditorEvent =
        serde_json::from_str(r#"{"kind":"select_composition","params":"APIVisualization"}"#)
            .unwrap();
    assert_eq!(e, EditorEvent::SelectComposition(CompositionId::ApiVisualization));
    assert!(serde_json::from_str::<EditorEvent>(r#"{"kind":"set_theme","params":"sepia"}"#).is_err());
}
