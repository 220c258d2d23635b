//! PaletteColor — the color record shown by each swatch.
//!
//! Keeps the hex, RGB and HSL forms of one color side by side so the UI
//! never converts on the render path.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::math;

/// 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        math::rgb_to_hex(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }
}

/// Integer HSL: hue in degrees (0–359), saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// An immutable color with synchronized hex, RGB and HSL representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteColor {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
}

impl PaletteColor {
    /// Parse a `#RRGGBB` string (the `#` is optional) into a full record.
    ///
    /// The stored hex is canonical: uppercase with a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let rgb =
            math::hex_to_rgb(hex).ok_or_else(|| ColorError::InvalidFormat(hex.to_string()))?;
        Ok(Self::from_rgb(rgb))
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: math::rgb_to_hsl(rgb.r, rgb.g, rgb.b),
        }
    }

    /// Uppercase `#RRGGBB`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Channels as 0.0–1.0 floats, the form Floem's `Color::rgb` expects.
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            f64::from(self.rgb.r) / 255.0,
            f64::from(self.rgb.g) / 255.0,
            f64::from(self.rgb.b) / 255.0,
        )
    }
}

impl FromStr for PaletteColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
