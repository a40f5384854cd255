//! Dimension calculation for aspect-ratio-correct ASCII rendering.

use crate::error::{ConvertError, Result};

/// Default glyph correction factor.
/// Rendered glyphs are roughly twice as tall as they are wide, so the
/// character grid needs about half as many rows as a square pixel grid.
pub const DEFAULT_CORRECTION_FACTOR: f64 = 0.55;

/// Calculate the character grid size for a source image.
///
/// The output keeps `out_width` columns and picks the row count that
/// preserves the source aspect ratio once glyph proportions are accounted
/// for:
///
/// `rows = round(src_height / src_width * out_width * correction)`
///
/// Rounding is half away from zero and the result is at least 1.
///
/// # Example
/// ```
/// use img2ascii::ascii::target_dimensions;
/// // 200x100 source at 100 columns with the default factor
/// assert_eq!(target_dimensions(200, 100, 100, 0.55).unwrap(), (100, 28));
/// ```
pub fn target_dimensions(
    src_width: u32,
    src_height: u32,
    out_width: u32,
    correction: f64,
) -> Result<(u32, u32)> {
    if src_width == 0 || src_height == 0 {
        return Err(ConvertError::dimension(format!(
            "source image is {}x{}",
            src_width, src_height
        )));
    }
    if out_width == 0 {
        return Err(ConvertError::dimension("output width must be at least 1"));
    }
    validate_correction(correction)?;

    let aspect_ratio = src_height as f64 / src_width as f64;
    let rows = (aspect_ratio * out_width as f64 * correction).round();
    // Clamp before the cast; extreme ratios would otherwise saturate silently.
    let rows = rows.clamp(1.0, u32::MAX as f64) as u32;

    Ok((out_width, rows))
}

pub(crate) fn validate_correction(correction: f64) -> Result<()> {
    if !correction.is_finite() || correction <= 0.0 {
        return Err(ConvertError::InvalidCorrection(correction));
    }
    Ok(())
}
