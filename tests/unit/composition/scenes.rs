use super::*;

fn stage(duration: u64) -> Stage {
    Stage {
        canvas: Canvas::new(1920, 1080).unwrap(),
        duration,
    }
}

fn tech(frame: u64) -> VisualNode {
    TechVideoProps::default()
        .render(stage(300), FrameIndex(frame))
        .unwrap()
}

#[test]
fn tech_video_background_is_always_present() {
    for f in [0, 55, 299] {
        let tree = tech(f);
        assert!(tree.find("particles").is_some());
        assert!(tree.find("shapes").is_some());
    }
}

#[test]
fn tech_video_overlap_at_frame_50() {
    let tree = tech(50);
    let title = tree.find("tech-video/title").unwrap();
    assert_eq!(title.style.opacity, 0.5);
    let logo = tree.find("tech-video/logo").unwrap();
    assert_eq!(logo.style.opacity, 0.0);
    assert!(tree.find("tech-video/code").is_none());
}

#[test]
fn tech_video_scenes_get_local_frames() {
    // Logo starts at 50, so frame 60 is local frame 10 of the logo scene.
    let tree = tech(60);
    assert!(tree.find("tech-video/title").is_none());
    let props = TechVideoProps::default();
    let direct = logo_morph(
        FrameCtx::new(FrameIndex(10), stage(300).canvas, props.theme),
        &props.logo_url,
    )
    .unwrap();
    assert_eq!(tree.find("logo").unwrap(), &direct);
}

#[test]
fn tech_video_final_scene_holds_to_the_end() {
    let tree = tech(299);
    let fin = tree.find("tech-video/final").unwrap();
    assert_eq!(fin.style.opacity, 1.0);
    assert_eq!(
        tree.find("final/heading").unwrap().text_content(),
        Some("Ready to Innovate?")
    );
    assert_eq!(
        tree.find("final/tagline").unwrap().text_content(),
        Some("Let's build the future together.")
    );
}

#[test]
fn tech_video_rejects_a_stage_too_short_for_its_schedule() {
    assert!(
        TechVideoProps::default()
            .render(stage(200), FrameIndex(0))
            .is_err()
    );
}

#[test]
fn code_reveal_showcase_uses_its_title_and_language() {
    let props = CodeRevealProps {
        language: "rust".to_string(),
        title: "Demo".to_string(),
    };
    let tree = props.render(stage(180), FrameIndex(90)).unwrap();
    assert_eq!(
        tree.find("code-reveal/header/title").unwrap().text_content(),
        Some("Demo")
    );
    assert_eq!(
        tree.find("code/header/label").unwrap().text_content(),
        Some("main.rust - Advanced Editor")
    );
}

#[test]
fn code_reveal_showcase_advances_with_the_frame() {
    let props = CodeRevealProps::default();
    let early = props.render(stage(180), FrameIndex(5)).unwrap();
    let late = props.render(stage(180), FrameIndex(60)).unwrap();
    assert_ne!(early, late);
}

#[test]
fn logo_showcase_colors_follow_props() {
    let props = LogoMorphProps {
        brand_name: "Acme".to_string(),
        primary_color: colors::RED_400,
        secondary_color: colors::YELLOW_400,
    };
    let tree = props.render(stage(120), FrameIndex(30)).unwrap();
    let brand = tree.find("logo-morph/brand/name").unwrap();
    assert_eq!(brand.text_content(), Some("Acme"));
    assert_eq!(brand.style.fill, Some(crate::scene::node::Paint::Solid(colors::RED_400)));
    let header = tree.find("logo-morph/header/title").unwrap();
    assert_eq!(header.style.fill, Some(crate::scene::node::Paint::Solid(colors::YELLOW_400)));

    let crate::scene::node::NodeKind::Image { href, .. } =
        &tree.find("logo/mark/frame/image").unwrap().kind
    else {
        panic!("expected an image node");
    };
    assert_eq!(href, SHOWCASE_LOGO_URL);
}

#[test]
fn api_and_terminal_scenes_wrap_their_components() {
    let api = ApiVisualizationProps::default()
        .render(stage(240), FrameIndex(100))
        .unwrap();
    assert!(api.find("api/card-0").is_some());

    let term = TerminalProps::default()
        .render(stage(200), FrameIndex(100))
        .unwrap();
    assert!(term.find("terminal/window").is_some());
}
