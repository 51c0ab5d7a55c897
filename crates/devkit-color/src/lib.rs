//! Color space conversion between HEX, RGB and HSL
//!
//! [`Color`] stores the canonical value (the three channels a hex string
//! encodes). RGB and HSL are always derived from it, and edits made through
//! [`ColorState`] land on the canonical value first.

mod convert;
mod error;
mod model;
mod state;

pub use convert::{
    hex_to_hsl, hex_to_rgb, hsl_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl, rgb_to_hsl_unit,
};
pub use error::{ColorError, ColorResult};
pub use model::{Color, Hsl, Rgb};
pub use state::{ColorEdit, ColorState, HslChannel, RgbChannel};
