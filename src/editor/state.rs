use crate::{
    composition::props::TechVideoProps,
    composition::registry::{CompositionId, CompositionProps, Registry},
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    theme::palette::Theme,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
/// A single user edit.
pub enum EditorEvent {
    /// Switch the previewed composition.
    SelectComposition(CompositionId),
    /// Replace the TechVideo title.
    SetTitle(String),
    /// Replace the TechVideo subtitle.
    SetSubtitle(String),
    /// Replace the code typed by the code scene.
    SetCodeSnippet(String),
    /// Switch the TechVideo theme.
    SetTheme(Theme),
    /// Replace the logo reference.
    SetLogoUrl(String),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Editor session: the selected composition and the editable TechVideo props.
///
/// Owned by one session and changed only through [`EditorState::apply`].
pub struct EditorState {
    selected: CompositionId,
    video: TechVideoProps,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            selected: CompositionId::TechVideo,
            video: TechVideoProps::default(),
        }
    }
}

impl EditorState {
    /// Currently previewed composition.
    pub fn selected(&self) -> CompositionId {
        self.selected
    }

    /// Edited TechVideo props.
    pub fn video(&self) -> &TechVideoProps {
        &self.video
    }

    /// Apply one edit. Returns whether anything changed.
    pub fn apply(&mut self, event: EditorEvent) -> bool {
        fn set<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        }

        let v = &mut self.video;
        let changed = match event {
            EditorEvent::SelectComposition(id) => set(&mut self.selected, id),
            EditorEvent::SetTitle(s) => set(&mut v.title, s),
            EditorEvent::SetSubtitle(s) => set(&mut v.subtitle, s),
            EditorEvent::SetCodeSnippet(s) => set(&mut v.code_snippet, s),
            EditorEvent::SetTheme(t) => set(&mut v.theme, t),
            EditorEvent::SetLogoUrl(s) => set(&mut v.logo_url, s),
        };
        if changed {
            tracing::trace!(selected = %self.selected, "editor state changed");
        }
        changed
    }

    /// Player settings for the selected composition.
    ///
    /// TechVideo previews the edited props; every other composition previews its defaults.
    pub fn player_config(&self, registry: &Registry) -> ReelResult<PlayerConfig> {
        let desc = registry.get(self.selected).ok_or_else(|| {
            ReelError::validation(format!("composition {} is not registered", self.selected))
        })?;
        let props = match self.selected {
            CompositionId::TechVideo => CompositionProps::TechVideo(self.video.clone()),
            _ => desc.default_props.clone(),
        };
        Ok(PlayerConfig {
            composition: desc.id,
            duration_frames: desc.duration_frames,
            fps: desc.fps,
            canvas: desc.canvas,
            props,
            controls: true,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// What a preview player needs to play one composition.
pub struct PlayerConfig {
    /// Composition being played.
    pub composition: CompositionId,
    /// Length in frames.
    pub duration_frames: u64,
    /// Playback rate.
    pub fps: Fps,
    /// Output surface.
    pub canvas: Canvas,
    /// Props fed to the composition.
    pub props: CompositionProps,
    /// Show playback controls.
    pub controls: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/editor/state.rs"]
mod tests;
