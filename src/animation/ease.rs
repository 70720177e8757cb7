/// Shaping curve for the fraction travelled inside one interpolation segment.
///
/// Every curve maps 0 to 0 and 1 to 1; only the path between differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Hermite `3t² - 2t³`: slow at both ends.
    Smoothstep,
    /// Fast start that decelerates into the end value.
    Decelerate,
}

impl Ease {
    /// Shape `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
            Self::Decelerate => {
                let rest = 1.0 - t;
                1.0 - rest * rest * rest
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
