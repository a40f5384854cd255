//! Font loading and glyph cell metrics.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};

use super::builtin_font::BuiltinFont;
use super::color::blend;
use crate::error::ConvertError;

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: f32 = 512.0;

/// Pixel size of one monospaced character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u32,
    pub height: u32,
}

/// Where the glyphs of a conversion actually came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSource::Builtin => write!(f, "built-in 5x7"),
            FontSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A TrueType/OpenType font read from disk.
pub struct TrueTypeFont {
    font: FontVec,
    scale: PxScale,
    ascent: f32,
    metrics: CellMetrics,
    path: PathBuf,
}

impl TrueTypeFont {
    /// Read and parse a font file.
    pub fn open(path: &Path, size: f32) -> Result<Self, ConvertError> {
        let load_error = |reason: String| ConvertError::FontLoad {
            path: path.to_path_buf(),
            reason,
        };

        let data = std::fs::read(path).map_err(|e| load_error(e.to_string()))?;
        let font = FontVec::try_from_vec(data).map_err(|e| load_error(e.to_string()))?;

        let scale = PxScale::from(size);
        let scaled = font.as_scaled(scale);
        // Monospaced fonts share one advance; measure it on 'M'.
        let advance = scaled.h_advance(font.glyph_id('M'));
        let line_height = scaled.ascent() - scaled.descent() + scaled.line_gap();
        if !(advance.is_finite() && line_height.is_finite()) || advance <= 0.0 {
            return Err(load_error("font has no usable glyph metrics".to_string()));
        }

        let metrics = CellMetrics {
            width: (advance.ceil() as u32).max(1),
            height: (line_height.ceil() as u32).max(1),
        };
        let ascent = scaled.ascent();

        Ok(Self {
            font,
            scale,
            ascent,
            metrics,
            path: path.to_path_buf(),
        })
    }

    fn draw_char(&self, canvas: &mut RgbImage, x0: u32, y0: u32, ch: char, color: Rgb<u8>) {
        let glyph = self
            .font
            .glyph_id(ch)
            .with_scale_and_position(self.scale, point(x0 as f32, y0 as f32 + self.ascent));

        let Some(outlined) = self.font.outline_glyph(glyph) else {
            return;
        };

        let bounds = outlined.px_bounds();
        let (width, height) = canvas.dimensions();
        outlined.draw(|x, y, coverage| {
            let px = bounds.min.x as i64 + x as i64;
            let py = bounds.min.y as i64 + y as i64;
            if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                return;
            }
            let pixel = canvas.get_pixel_mut(px as u32, py as u32);
            *pixel = blend(*pixel, color, coverage);
        });
    }
}

impl std::fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("path", &self.path)
            .field("scale", &self.scale.y)
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Font used to rasterize ASCII art.
#[derive(Debug)]
pub enum GlyphFont {
    Builtin(BuiltinFont),
    TrueType(TrueTypeFont),
}

impl GlyphFont {
    /// Resolve the font for a conversion.
    ///
    /// A font file that cannot be read or parsed is not an error: a warning
    /// is logged and the built-in font is used instead.
    pub fn load(path: Option<&Path>, size: f32) -> Self {
        let Some(path) = path else {
            return GlyphFont::builtin(size);
        };

        match TrueTypeFont::open(path, size) {
            Ok(font) => {
                log::info!(
                    "Loaded font {} ({}x{} cells)",
                    path.display(),
                    font.metrics.width,
                    font.metrics.height
                );
                GlyphFont::TrueType(font)
            }
            Err(e) => {
                log::warn!("{}; falling back to built-in font", e);
                GlyphFont::builtin(size)
            }
        }
    }

    pub fn builtin(size: f32) -> Self {
        GlyphFont::Builtin(BuiltinFont::new(size))
    }

    pub fn metrics(&self) -> CellMetrics {
        match self {
            GlyphFont::Builtin(font) => font.metrics(),
            GlyphFont::TrueType(font) => font.metrics,
        }
    }

    pub fn source(&self) -> FontSource {
        match self {
            GlyphFont::Builtin(_) => FontSource::Builtin,
            GlyphFont::TrueType(font) => FontSource::File(font.path.clone()),
        }
    }

    /// Draw one character with its cell's top-left corner at (`x0`, `y0`).
    pub fn draw_char(&self, canvas: &mut RgbImage, x0: u32, y0: u32, ch: char, color: Rgb<u8>) {
        if ch.is_whitespace() {
            return;
        }
        match self {
            GlyphFont::Builtin(font) => font.draw_char(canvas, x0, y0, ch, color),
            GlyphFont::TrueType(font) => font.draw_char(canvas, x0, y0, ch, color),
        }
    }
}
