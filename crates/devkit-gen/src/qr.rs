use crate::error::{GenError, GenResult};
use devkit_core::QrConfig;
use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};
use std::str::FromStr;
use tracing::debug;

pub const MIN_QR_SIZE: u32 = 128;
pub const MAX_QR_SIZE: u32 = 512;

/// Error correction level, from about 7% (L) to 30% (H) recoverable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QrLevel {
    #[default]
    L,
    M,
    Q,
    H,
}

impl QrLevel {
    fn ec_level(self) -> EcLevel {
        match self {
            QrLevel::L => EcLevel::L,
            QrLevel::M => EcLevel::M,
            QrLevel::Q => EcLevel::Q,
            QrLevel::H => EcLevel::H,
        }
    }
}

impl FromStr for QrLevel {
    type Err = GenError;

    fn from_str(s: &str) -> GenResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(QrLevel::L),
            "M" => Ok(QrLevel::M),
            "Q" => Ok(QrLevel::Q),
            "H" => Ok(QrLevel::H),
            _ => Err(GenError::UnknownQrLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QrFormat {
    #[default]
    Svg,
    /// Unicode half blocks, light on dark
    Terminal,
}

impl FromStr for QrFormat {
    type Err = GenError;

    fn from_str(s: &str) -> GenResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(QrFormat::Svg),
            "terminal" | "text" => Ok(QrFormat::Terminal),
            _ => Err(GenError::UnknownQrFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    /// Target edge length of the SVG in pixels
    pub size: u32,
    pub level: QrLevel,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 256,
            level: QrLevel::L,
        }
    }
}

impl QrOptions {
    pub fn from_config(config: &QrConfig) -> GenResult<Self> {
        Ok(Self {
            size: config.size,
            level: config.error_correction.parse()?,
        })
    }

    /// Requested size clamped to the supported range
    pub fn effective_size(&self) -> u32 {
        self.size.clamp(MIN_QR_SIZE, MAX_QR_SIZE)
    }
}

fn encode(text: &str, level: QrLevel) -> GenResult<QrCode> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), level.ec_level())
        .map_err(|e| GenError::Qr(e.to_string()))?;
    debug!(bytes = text.len(), modules = code.width(), ?level, "encoded qr code");
    Ok(code)
}

pub fn render_qr_svg(text: &str, options: &QrOptions) -> GenResult<String> {
    let size = options.effective_size();
    let code = encode(text, options.level)?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .max_dimensions(size, size)
        .build())
}

/// Render for a terminal. Size is ignored; each module is one character wide.
pub fn render_qr_terminal(text: &str, options: &QrOptions) -> GenResult<String> {
    let code = encode(text, options.level)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

pub fn render_qr(text: &str, format: QrFormat, options: &QrOptions) -> GenResult<String> {
    match format {
        QrFormat::Svg => render_qr_svg(text, options),
        QrFormat::Terminal => render_qr_terminal(text, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_and_format() {
        assert_eq!("h".parse::<QrLevel>().unwrap(), QrLevel::H);
        assert_eq!(" Q ".parse::<QrLevel>().unwrap(), QrLevel::Q);
        assert!(matches!(
            "X".parse::<QrLevel>(),
            Err(GenError::UnknownQrLevel(level)) if level == "X"
        ));

        assert_eq!("SVG".parse::<QrFormat>().unwrap(), QrFormat::Svg);
        assert_eq!("text".parse::<QrFormat>().unwrap(), QrFormat::Terminal);
        assert!("png".parse::<QrFormat>().is_err());
    }

    #[test]
    fn test_size_is_clamped() {
        let small = QrOptions {
            size: 10,
            ..QrOptions::default()
        };
        assert_eq!(small.effective_size(), MIN_QR_SIZE);

        let large = QrOptions {
            size: 4096,
            ..QrOptions::default()
        };
        assert_eq!(large.effective_size(), MAX_QR_SIZE);
        assert_eq!(QrOptions::default().effective_size(), 256);
    }

    #[test]
    fn test_options_from_config() {
        let config = QrConfig {
            size: 300,
            error_correction: "m".to_string(),
        };
        let options = QrOptions::from_config(&config).unwrap();
        assert_eq!(options.size, 300);
        assert_eq!(options.level, QrLevel::M);

        let bad = QrConfig {
            error_correction: "Z".to_string(),
            ..QrConfig::default()
        };
        assert!(QrOptions::from_config(&bad).is_err());
    }

    #[test]
    fn test_svg_output() {
        let svg = render_qr_svg("https://example.com", &QrOptions::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(
            svg,
            render_qr_svg("https://example.com", &QrOptions::default()).unwrap()
        );
    }

    #[test]
    fn test_level_changes_output() {
        let low = render_qr_svg("devkit", &QrOptions::default()).unwrap();
        let high = QrOptions {
            level: QrLevel::H,
            ..QrOptions::default()
        };
        assert_ne!(low, render_qr_svg("devkit", &high).unwrap());
    }

    #[test]
    fn test_terminal_output() {
        let text = render_qr(
            "devkit",
            QrFormat::Terminal,
            &QrOptions::default(),
        )
        .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() > 10);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
        assert!(text.contains('█'));
    }

    #[test]
    fn test_data_too_long() {
        let text = "x".repeat(5000);
        let options = QrOptions {
            level: QrLevel::H,
            ..QrOptions::default()
        };
        assert!(matches!(
            render_qr_svg(&text, &options),
            Err(GenError::Qr(_))
        ));
    }
}
