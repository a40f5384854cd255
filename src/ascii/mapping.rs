//! Brightness to character mapping.

use super::charset::Palette;
use super::grid::{GlyphGrid, IntensityGrid};

/// Map an intensity sample to a palette index.
///
/// Samples are split into buckets of `256 / levels` values (at least one).
/// The bucket index is clamped to `levels - 1`, which folds the remainder of
/// the range into the lightest glyph so it is always reachable.
///
/// # Example
/// ```
/// use img2ascii::ascii::quantize;
/// assert_eq!(quantize(0, 10), 0);
/// assert_eq!(quantize(255, 10), 9);
/// assert_eq!(quantize(200, 1), 0);
/// ```
#[inline]
pub fn quantize(value: u8, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    let span = (256 / levels).max(1);
    (value as usize / span).min(levels - 1)
}

/// Map every sample of a grid to a palette character.
///
/// Dark samples take the first (densest) palette entries and light samples
/// the last. With `invert` set, samples are flipped (`255 - v`) first.
pub fn map_to_glyphs(grid: &IntensityGrid, palette: &Palette, invert: bool) -> GlyphGrid {
    let levels = palette.len();
    let cells = grid
        .samples()
        .iter()
        .map(|&v| {
            let v = if invert { 255 - v } else { v };
            palette.glyph(quantize(v, levels))
        })
        .collect();

    GlyphGrid::from_cells(grid.width(), grid.height(), cells)
}
