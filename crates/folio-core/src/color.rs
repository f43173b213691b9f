//! RGB colour type with hex parsing and compositing helpers.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a hex colour string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("hex colour `{0}` must have 3 or 6 digits")]
    Length(String),
    #[error("hex colour `{0}` contains a non-hex digit")]
    Digit(String),
}

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A grey with all channels set to `value`.
    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(input.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(ColorError::Length(input.to_string())),
        };

        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ColorError::Digit(input.to_string()))?;
        Ok(Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Composite `over` onto `self` with the given alpha (source-over).
    pub fn blend(self, over: Rgb, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |base: u8, top: u8| -> u8 {
            (base as f32 + (top as f32 - base as f32) * a).round() as u8
        };
        Rgb::new(mix(self.r, over.r), mix(self.g, over.g), mix(self.b, over.b))
    }

    /// Linear interpolation from `self` to `to`, `t` clamped to 0..=1.
    pub fn lerp(self, to: Rgb, t: f32) -> Rgb {
        self.blend(to, t)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
