//! Canvas colours and polarity.

use image::Rgb;

use crate::error::{ConvertError, Result};

/// Default pairing of glyph and background colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Black glyphs on a white canvas
    #[default]
    DarkOnLight,
    /// White glyphs on a black canvas
    LightOnDark,
}

impl Polarity {
    pub fn name(&self) -> &'static str {
        match self {
            Polarity::DarkOnLight => "dark-on-light",
            Polarity::LightOnDark => "light-on-dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark-on-light" | "light" => Some(Polarity::DarkOnLight),
            "light-on-dark" | "dark" => Some(Polarity::LightOnDark),
            _ => None,
        }
    }

    pub fn colors(&self) -> Colors {
        match self {
            Polarity::DarkOnLight => Colors {
                background: WHITE,
                text: BLACK,
            },
            Polarity::LightOnDark => Colors {
                background: BLACK,
                text: WHITE,
            },
        }
    }
}

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Background fill and glyph stroke colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub background: Rgb<u8>,
    pub text: Rgb<u8>,
}

impl Colors {
    /// Start from a polarity and override either colour.
    pub fn resolve(polarity: Polarity, background: Option<Rgb<u8>>, text: Option<Rgb<u8>>) -> Self {
        let base = polarity.colors();
        Colors {
            background: background.unwrap_or(base.background),
            text: text.unwrap_or(base.text),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Polarity::default().colors()
    }
}

/// Parse `#rrggbb`, `#rgb` or a colour name.
pub fn parse_color(s: &str) -> Result<Rgb<u8>> {
    let trimmed = s.trim();
    let named = match trimmed.to_ascii_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "gray" | "grey" => Some(Rgb([128, 128, 128])),
        "red" => Some(Rgb([255, 0, 0])),
        "green" => Some(Rgb([0, 128, 0])),
        "blue" => Some(Rgb([0, 0, 255])),
        _ => None,
    };
    if let Some(color) = named {
        return Ok(color);
    }

    let invalid = || ConvertError::InvalidColor(s.to_string());
    let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        3 => {
            // #abc expands to #aabbcc
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Ok(Rgb([expand(0)?, expand(1)?, expand(2)?]))
        }
        _ => Err(invalid()),
    }
}

/// Format a colour as `#rrggbb`.
pub fn format_color(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Mix `from` toward `to` by `coverage` (0.0 - 1.0).
pub(crate) fn blend(from: Rgb<u8>, to: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let t = coverage.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgb([
        mix(from.0[0], to.0[0]),
        mix(from.0[1], to.0[1]),
        mix(from.0[2], to.0[2]),
    ])
}
