//! Laying out ASCII text onto a bitmap.

use image::RgbImage;

use super::color::Colors;
use super::font::{CellMetrics, GlyphFont};
use crate::ascii::TextBlock;
use crate::error::{ConvertError, Result};

/// Canvas size needed to hold `text` in cells of `metrics`.
///
/// `width = cell width * longest line (in chars)`,
/// `height = cell height * line count`.
pub fn canvas_size(text: &TextBlock, metrics: CellMetrics) -> Result<(u32, u32)> {
    let columns = text.max_line_len();
    let rows = text.line_count();
    if columns == 0 || rows == 0 {
        return Err(ConvertError::dimension("text block has no characters to draw"));
    }

    let overflow = || ConvertError::dimension(format!("{}x{} cells is too large", columns, rows));
    let columns = u32::try_from(columns).map_err(|_| overflow())?;
    let rows = u32::try_from(rows).map_err(|_| overflow())?;
    let width = metrics.width.checked_mul(columns).ok_or_else(overflow)?;
    let height = metrics.height.checked_mul(rows).ok_or_else(overflow)?;

    Ok((width, height))
}

/// Draw every line of `text` left-aligned, one row of cells per line.
pub fn rasterize(text: &TextBlock, font: &GlyphFont, colors: Colors) -> Result<RgbImage> {
    let metrics = font.metrics();
    let (width, height) = canvas_size(text, metrics)?;
    log::debug!(
        "Rasterizing {} lines onto {}x{} canvas",
        text.line_count(),
        width,
        height
    );

    let mut canvas = RgbImage::from_pixel(width, height, colors.background);
    for (row, line) in text.lines().iter().enumerate() {
        let y = row as u32 * metrics.height;
        for (col, ch) in line.chars().enumerate() {
            font.draw_char(&mut canvas, col as u32 * metrics.width, y, ch, colors.text);
        }
    }

    Ok(canvas)
}
