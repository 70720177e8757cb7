/// Convenience result type used across techreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by the evaluator, renderers and preview pipeline.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided props, registry entries or timeline configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed interpolation input (breakpoints, outputs or sample value).
    #[error("animation error: {0}")]
    Animation(String),

    /// A theme name outside the closed theme set.
    #[error("unknown theme \"{0}\" (expected one of: cyberpunk, neon, matrix)")]
    UnknownTheme(String),

    /// Errors while evaluating or rasterizing a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing props and visual trees.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::UnknownTheme`] value.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme(name.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
