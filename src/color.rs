//! Hex color handling for template palettes
//!
//! Palette colors in a [`TemplateConfig`](crate::TemplateConfig) are opaque CSS
//! strings. The only place color arithmetic happens is when an archetype derives
//! its secondary and accent shades from a single primary color, and that path
//! goes through [`HexColor`] so malformed input is rejected up front.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// A validated 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Build a color from its channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` (case-insensitive)
    ///
    /// Shorthand forms are expanded (`#0af` becomes `#00aaff`). Anything else is
    /// a configuration error.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::invalid_color(value, "expected hexadecimal digits"));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| ConfigError::invalid_color(value, "expected hexadecimal digits"))
        };

        match hex.len() {
            3 => Ok(Self {
                r: channel(&hex[0..1])? * 17,
                g: channel(&hex[1..2])? * 17,
                b: channel(&hex[2..3])? * 17,
            }),
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            n => Err(ConfigError::invalid_color(
                value,
                format!("expected 3 or 6 hex digits, found {}", n),
            )),
        }
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Shift every channel up by `percent` of the full channel range
    ///
    /// The step is `round(255 * percent / 100)` (halves round away from zero)
    /// and each channel is clamped to `[0, 255]`. Negative percentages darken.
    pub fn lighten(self, percent: f64) -> Self {
        // Any step beyond a full channel range saturates
        let amount = (percent * 255.0 / 100.0).round().clamp(-255.0, 255.0) as i32;
        let shift = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    /// Shift every channel down by `percent` of the full channel range
    pub fn darken(self, percent: f64) -> Self {
        self.lighten(-percent)
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw).map_err(serde::de::Error::custom)
    }
}
