//! Display colors and the fixed authoring palette.
//!
//! Colors are 8-bit RGB because that is what the backend configuration
//! schema stores (`"#rrggbb"` strings). Translucency is a rendering concern
//! and is carried per draw command, not per color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An RGB display color with `#rrggbb` round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` (or `rrggbb`) string.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s).ok_or_else(|| format!("invalid color string: {s:?}"))
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).ok_or_else(|| format!("invalid color string: {s:?}"))
    }
}

// ============================================================================
// Authoring palette
// ============================================================================

/// Default stroke color for new regions.
pub const REGION_COLOR: Color = Color::rgb(0x00, 0xff, 0x00);

/// Default stroke color for new lines.
pub const LINE_COLOR: Color = Color::rgb(0x00, 0x80, 0xff);

/// The fixed palette offered in the color picker.
pub const PALETTE: [Color; 8] = [
    Color::rgb(0x00, 0xff, 0x00),
    Color::rgb(0x00, 0x80, 0xff),
    Color::rgb(0xff, 0x00, 0x00),
    Color::rgb(0xff, 0xa5, 0x00),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0xff, 0x00, 0xff),
    Color::rgb(0x00, 0xff, 0xff),
    Color::rgb(0xff, 0xff, 0xff),
];

/// Tints for the two halves of the direction picker overlay. Which half gets
/// which tint is cosmetic; the click decides the direction.
pub const PICKER_TINTS: [Color; 2] = [Color::rgb(0x33, 0x99, 0xff), Color::rgb(0xff, 0x99, 0x33)];

/// Canvas clear color, visible when no background image is loaded.
pub const CANVAS_BACKGROUND: Color = Color::rgb(0x20, 0x20, 0x20);

/// Text color for geometry labels drawn on the canvas.
pub const LABEL_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);

// ============================================================================
// Tests
// ============================================================================
