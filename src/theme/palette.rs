use std::{fmt, str::FromStr};

use crate::{
    foundation::core::Rgba8,
    foundation::error::{ReelError, ReelResult},
    theme::colors,
};

/// Visual style of a rendered video. Closed set; unknown names are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Cyan and violet on deep purple.
    #[default]
    Cyberpunk,
    /// Green and hot pink.
    Neon,
    /// Greens on black.
    Matrix,
}

impl Theme {
    /// Every theme, in declaration order.
    pub const ALL: [Theme; 3] = [Theme::Cyberpunk, Theme::Neon, Theme::Matrix];

    /// Stable lowercase identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cyberpunk => "cyberpunk",
            Self::Neon => "neon",
            Self::Matrix => "matrix",
        }
    }

    /// Palette for this theme. Total over the enum.
    pub fn palette(self) -> &'static ThemePalette {
        match self {
            Self::Cyberpunk => &CYBERPUNK,
            Self::Neon => &NEON,
            Self::Matrix => &MATRIX,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cyberpunk" => Ok(Self::Cyberpunk),
            "neon" => Ok(Self::Neon),
            "matrix" => Ok(Self::Matrix),
            other => Err(ReelError::unknown_theme(other)),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Theme {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolve a theme name straight to its palette.
pub fn resolve_theme(name: &str) -> ReelResult<&'static ThemePalette> {
    Ok(name.parse::<Theme>()?.palette())
}

/// Two-stop linear gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Gradient {
    /// Start color.
    pub from: Rgba8,
    /// End color.
    pub to: Rgba8,
    /// Direction in degrees; 135 runs top-left to bottom-right.
    pub angle_deg: f64,
}

/// Soft light around a shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GlowSpec {
    /// Glow color.
    pub color: Rgba8,
    /// Blur radius in pixels.
    pub radius: f64,
}

/// Fixed palette and effect bundle of one theme.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ThemePalette {
    /// Theme this palette belongs to.
    pub theme: Theme,
    /// Main accent: logo rings, highlights, scan glows.
    pub primary: Rgba8,
    /// Second accent: logo frame.
    pub secondary: Rgba8,
    /// Third particle color.
    pub accent: Rgba8,
    /// Title text.
    pub title_text: Rgba8,
    /// Subtitle text.
    pub subtitle_text: Rgba8,
    /// Code container border, caret and scan line.
    pub border: Rgba8,
    /// Code container background.
    pub background: Gradient,
    /// Text glow.
    pub glow: GlowSpec,
    /// Radii of the layered logo halo, inner first.
    pub halo_radii: [f64; 2],
    /// Drop shadow under the code container.
    pub shadow: GlowSpec,
    /// Colors cycled across the particle field.
    pub particles: [Rgba8; 3],
}

static CYBERPUNK: ThemePalette = ThemePalette {
    theme: Theme::Cyberpunk,
    primary: colors::NEON_BLUE,
    secondary: colors::NEON_PURPLE,
    accent: colors::NEON_ROSE,
    title_text: colors::CYAN_400,
    subtitle_text: colors::PURPLE_400,
    border: colors::CYAN_400,
    background: Gradient {
        from: colors::PURPLE_900.with_alpha(51),
        to: colors::BLUE_900.with_alpha(51),
        angle_deg: 135.0,
    },
    glow: GlowSpec {
        color: colors::NEON_BLUE,
        radius: 10.0,
    },
    halo_radii: [50.0, 100.0],
    shadow: GlowSpec {
        color: colors::CYAN_400.with_alpha(51),
        radius: 50.0,
    },
    particles: [colors::NEON_BLUE, colors::NEON_PURPLE, colors::NEON_ROSE],
};

static NEON: ThemePalette = ThemePalette {
    theme: Theme::Neon,
    primary: colors::NEON_GREEN,
    secondary: colors::NEON_PINK,
    accent: colors::NEON_BLUE,
    title_text: colors::GREEN_400,
    subtitle_text: colors::PINK_400,
    border: colors::GREEN_400,
    background: Gradient {
        from: colors::PINK_900.with_alpha(51),
        to: colors::GREEN_900.with_alpha(51),
        angle_deg: 135.0,
    },
    glow: GlowSpec {
        color: colors::NEON_GREEN,
        radius: 10.0,
    },
    halo_radii: [50.0, 100.0],
    shadow: GlowSpec {
        color: colors::GREEN_400.with_alpha(51),
        radius: 50.0,
    },
    particles: [colors::NEON_GREEN, colors::NEON_PINK, colors::NEON_BLUE],
};

static MATRIX: ThemePalette = ThemePalette {
    theme: Theme::Matrix,
    primary: colors::NEON_GREEN,
    secondary: colors::MATRIX_GREEN,
    accent: colors::TERMINAL_GREEN,
    title_text: colors::GREEN_500,
    subtitle_text: colors::GREEN_300,
    border: colors::GREEN_500,
    background: Gradient {
        from: colors::GREEN_900.with_alpha(51),
        to: colors::BLACK.with_alpha(51),
        angle_deg: 135.0,
    },
    glow: GlowSpec {
        color: colors::NEON_GREEN,
        radius: 10.0,
    },
    halo_radii: [50.0, 100.0],
    shadow: GlowSpec {
        color: colors::GREEN_500.with_alpha(51),
        radius: 50.0,
    },
    particles: [
        colors::NEON_GREEN,
        colors::MATRIX_GREEN,
        colors::TERMINAL_GREEN,
    ],
};

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
