use crate::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use crate::error::{ColorError, ColorResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Red, green and blue channels, 0-255 each
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `rgb(r, g, b)`
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Hue in degrees (0-360), saturation and lightness in percent (0-100)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// `hsl(h, s%, l%)`
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// A single color; the canonical value behind every encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: Rgb,
}

impl Color {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// Parse `#rrggbb` or `rrggbb`, either case
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex_to_rgb(hex).map(Self::from_rgb)
    }

    /// Build from integer HSL. Out-of-range fields are clamped.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = f64::from(hsl.h.min(360)) / 360.0;
        let s = f64::from(hsl.s.min(100)) / 100.0;
        let l = f64::from(hsl.l.min(100)) / 100.0;
        Self::from_rgb(hsl_to_rgb(h, s, l))
    }

    /// Lower-case `#rrggbb`
    pub fn hex(&self) -> String {
        rgb_to_hex(self.rgb)
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::from_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Color", 3)?;
        state.serialize_field("hex", &self.hex())?;
        state.serialize_field("rgb", &self.rgb())?;
        state.serialize_field("hsl", &self.hsl())?;
        state.end()
    }
}
