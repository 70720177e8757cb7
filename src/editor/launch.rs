#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which surface a launch opens.
pub enum LaunchMode {
    /// The composition registry, as listed for a studio.
    Registry,
    /// The interactive editor with a preview player.
    Editor,
}

impl LaunchMode {
    /// Registry when the query string mentions `remotion` anywhere, otherwise the editor.
    pub fn from_query(query: &str) -> Self {
        if query.contains("remotion") {
            Self::Registry
        } else {
            Self::Editor
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/launch.rs"]
mod tests;
