//! Editing state for a color with three linked encodings

use crate::error::ColorError;
use crate::model::{Color, Hsl, Rgb};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    R,
    G,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HslChannel {
    H,
    S,
    L,
}

impl HslChannel {
    /// Upper bound of the field: 360 for hue, 100 otherwise
    pub fn max(self) -> i64 {
        match self {
            HslChannel::H => 360,
            HslChannel::S | HslChannel::L => 100,
        }
    }
}

impl FromStr for RgbChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(RgbChannel::R),
            "g" | "green" => Ok(RgbChannel::G),
            "b" | "blue" => Ok(RgbChannel::B),
            _ => Err(ColorError::UnknownChannel(s.to_string())),
        }
    }
}

impl FromStr for HslChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "hue" => Ok(HslChannel::H),
            "s" | "saturation" => Ok(HslChannel::S),
            "l" | "lightness" => Ok(HslChannel::L),
            _ => Err(ColorError::UnknownChannel(s.to_string())),
        }
    }
}

/// A single user edit to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorEdit {
    /// Typed hex text; ignored unless it is a complete 6-digit color
    Hex(String),
    /// Raw numeric entry, clamped to 0-255
    Rgb(RgbChannel, i64),
    /// Raw numeric entry, clamped to the channel's range
    Hsl(HslChannel, i64),
    /// A color chosen directly, e.g. from a palette
    Pick(Color),
}

/// Immutable editor state.
///
/// Only the canonical color is stored; the hex, RGB and HSL views are
/// derived on access so they cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorState {
    color: Color,
}

impl ColorState {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hex(&self) -> String {
        self.color.hex()
    }

    pub fn rgb(&self) -> Rgb {
        self.color.rgb()
    }

    pub fn hsl(&self) -> Hsl {
        self.color.hsl()
    }

    /// Apply one edit and return the next state
    #[must_use]
    pub fn apply(self, edit: ColorEdit) -> Self {
        match edit {
            ColorEdit::Hex(text) => match Color::from_hex(&text) {
                Some(color) => Self::new(color),
                None => {
                    debug!(input = %text, "ignoring malformed hex edit");
                    self
                }
            },
            ColorEdit::Rgb(channel, value) => {
                let value = value.clamp(0, 255) as u8;
                let mut rgb = self.rgb();
                match channel {
                    RgbChannel::R => rgb.r = value,
                    RgbChannel::G => rgb.g = value,
                    RgbChannel::B => rgb.b = value,
                }
                Self::new(Color::from_rgb(rgb))
            }
            ColorEdit::Hsl(channel, value) => {
                let value = value.clamp(0, channel.max());
                let mut hsl = self.hsl();
                match channel {
                    HslChannel::H => hsl.h = value as u16,
                    HslChannel::S => hsl.s = value as u8,
                    HslChannel::L => hsl.l = value as u8,
                }
                Self::new(Color::from_hsl(hsl))
            }
            ColorEdit::Pick(color) => Self::new(color),
        }
    }

    /// Apply edits in order
    #[must_use]
    pub fn apply_all<I>(self, edits: I) -> Self
    where
        I: IntoIterator<Item = ColorEdit>,
    {
        edits.into_iter().fold(self, Self::apply)
    }
}
