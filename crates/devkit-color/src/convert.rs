//! Conversion formulas between the three encodings

use crate::error::{ColorError, ColorResult};
use crate::model::{Color, Hsl, Rgb};
use regex::Regex;
use std::sync::LazyLock;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("hex color pattern is valid")
});

/// Parse a 6-digit hex color. Returns `None` when the input does not match.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let captures = HEX_PATTERN.captures(hex)?;
    let channel = |i: usize| u8::from_str_radix(&captures[i], 16).ok();
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Strict form of [`hex_to_rgb`] for callers that want a diagnostic
pub fn parse_hex(hex: &str) -> ColorResult<Color> {
    Color::from_hex(hex).ok_or_else(|| ColorError::InvalidHex(hex.to_string()))
}

/// Parse a hex color straight to rounded HSL
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Lower-case `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Unrounded HSL: hue as a fraction of a turn in `[0, 1)`, saturation and
/// lightness in `[0, 1]`.
pub fn rgb_to_hsl_unit(rgb: Rgb) -> (f64, f64, f64) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // achromatic
    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// HSL rounded to whole degrees and percent
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (h, s, l) = rgb_to_hsl_unit(rgb);
    Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// Convert HSL with every component already scaled to `[0, 1]`
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(hex_to_rgb("00ff7f"), Some(Rgb::new(0, 255, 127)));
        assert_eq!(hex_to_rgb("#aAbBcC"), Some(Rgb::new(170, 187, 204)));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        for input in ["red", "#fff", "#ff00000", "##ff0000", "#gg0000", " #ff0000", ""] {
            assert_eq!(hex_to_rgb(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_hex_reports_input() {
        let err = parse_hex("red").unwrap_err();
        assert_eq!(err, ColorError::InvalidHex("red".to_string()));
        assert!(err.to_string().contains("red"));
    }

    #[test]
    fn test_hex_to_hsl_primary_colors() {
        assert_eq!(hex_to_hsl("#FF0000"), Some(Hsl::new(0, 100, 50)));
        assert_eq!(hex_to_hsl("#00FF00"), Some(Hsl::new(120, 100, 50)));
        assert_eq!(hex_to_hsl("#0000FF"), Some(Hsl::new(240, 100, 50)));
    }

    #[test]
    fn test_hex_to_hsl_achromatic() {
        assert_eq!(hex_to_hsl("#808080"), Some(Hsl::new(0, 0, 50)));
        assert_eq!(hex_to_hsl("#ffffff"), Some(Hsl::new(0, 0, 100)));
        assert_eq!(hex_to_hsl("#000000"), Some(Hsl::new(0, 0, 0)));
    }

    #[test]
    fn test_hex_to_hsl_light_and_dark_saturation_branches() {
        // l > 0.5 uses d / (2 - max - min)
        assert_eq!(hex_to_hsl("#ff8080"), Some(Hsl::new(0, 100, 75)));
        // l <= 0.5 uses d / (max + min)
        assert_eq!(hex_to_hsl("#800000"), Some(Hsl::new(0, 100, 25)));
    }

    #[test]
    fn test_hue_wraps_when_blue_exceeds_green() {
        // red is max and g < b, so the +6 sector applies: magenta-ish red
        assert_eq!(hex_to_hsl("#ff0080"), Some(Hsl::new(330, 100, 50)));
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0 / 360.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0 / 360.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(1.0, 1.0, 0.5), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hsl_to_rgb_achromatic() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_rgb_to_hex_pads() {
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 255)), "#0102ff");
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(digits in "[0-9a-fA-F]{6}", hash in any::<bool>()) {
            let input = if hash { format!("#{}", digits) } else { digits.clone() };
            let rgb = hex_to_rgb(&input).unwrap();
            let expected = format!("#{}", digits);
            prop_assert!(rgb_to_hex(rgb).eq_ignore_ascii_case(&expected));
        }

        #[test]
        fn prop_hsl_round_trip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let (h, s, l) = rgb_to_hsl_unit(Rgb::new(r, g, b));
            let back = hsl_to_rgb(h, s, l);
            prop_assert!((i16::from(back.r) - i16::from(r)).abs() <= 1);
            prop_assert!((i16::from(back.g) - i16::from(g)).abs() <= 1);
            prop_assert!((i16::from(back.b) - i16::from(b)).abs() <= 1);
        }
    }
}
