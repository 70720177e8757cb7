//! Named colors shared by the themes and the composition chrome.

use crate::foundation::core::Rgba8;

/// Studio background.
pub const TECH_DARK: Rgba8 = Rgba8::rgb(0x0A, 0x0A, 0x0F);
/// Card and panel surface.
pub const TECH_SURFACE: Rgba8 = Rgba8::rgb(0x1A, 0x1A, 0x2E);

pub const NEON_BLUE: Rgba8 = Rgba8::rgb(0x00, 0xBF, 0xFF);
pub const NEON_PURPLE: Rgba8 = Rgba8::rgb(0x9A, 0x4C, 0xFF);
pub const NEON_GREEN: Rgba8 = Rgba8::rgb(0x00, 0xFF, 0x00);
pub const NEON_PINK: Rgba8 = Rgba8::rgb(0xFF, 0x14, 0x93);
pub const NEON_ROSE: Rgba8 = Rgba8::rgb(0xFF, 0x6B, 0x9D);
pub const MATRIX_GREEN: Rgba8 = Rgba8::rgb(0x00, 0x80, 0x00);
pub const TERMINAL_GREEN: Rgba8 = Rgba8::rgb(0x00, 0xFF, 0x41);

pub const CYAN_400: Rgba8 = Rgba8::rgb(0x22, 0xD3, 0xEE);
pub const PURPLE_400: Rgba8 = Rgba8::rgb(0xC0, 0x84, 0xFC);
pub const PINK_400: Rgba8 = Rgba8::rgb(0xF4, 0x72, 0xB6);
pub const GREEN_300: Rgba8 = Rgba8::rgb(0x86, 0xEF, 0xAC);
pub const GREEN_400: Rgba8 = Rgba8::rgb(0x4A, 0xDE, 0x80);
pub const GREEN_500: Rgba8 = Rgba8::rgb(0x22, 0xC5, 0x5E);
pub const BLUE_400: Rgba8 = Rgba8::rgb(0x60, 0xA5, 0xFA);
pub const YELLOW_400: Rgba8 = Rgba8::rgb(0xFA, 0xCC, 0x15);
pub const RED_400: Rgba8 = Rgba8::rgb(0xF8, 0x71, 0x71);

pub const RED_500: Rgba8 = Rgba8::rgb(0xEF, 0x44, 0x44);
pub const YELLOW_500: Rgba8 = Rgba8::rgb(0xEA, 0xB3, 0x08);

pub const PURPLE_900: Rgba8 = Rgba8::rgb(0x58, 0x1C, 0x87);
pub const BLUE_900: Rgba8 = Rgba8::rgb(0x1E, 0x3A, 0x8A);
pub const PINK_900: Rgba8 = Rgba8::rgb(0x83, 0x18, 0x43);
pub const GREEN_900: Rgba8 = Rgba8::rgb(0x14, 0x53, 0x2D);

pub const GRAY_300: Rgba8 = Rgba8::rgb(0xD1, 0xD5, 0xDB);
pub const GRAY_400: Rgba8 = Rgba8::rgb(0x9C, 0xA3, 0xAF);
pub const GRAY_600: Rgba8 = Rgba8::rgb(0x4B, 0x55, 0x63);
pub const GRAY_700: Rgba8 = Rgba8::rgb(0x37, 0x41, 0x51);
pub const GRAY_800: Rgba8 = Rgba8::rgb(0x1F, 0x29, 0x37);

/// Default foreground of the dark code editor.
pub const CODE_TEXT: Rgba8 = Rgba8::rgb(0xD4, 0xD4, 0xD4);

pub const WHITE: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgba8 = Rgba8::rgb(0x00, 0x00, 0x00);
