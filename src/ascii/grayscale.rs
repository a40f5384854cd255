//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use image::DynamicImage;

use super::grid::IntensityGrid;
use crate::error::Result;

/// Luminance of one RGB pixel.
///
/// Y = 0.299*R + 0.587*G + 0.114*B, with coefficients scaled by 1000 so the
/// whole computation stays in integers.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}

/// Convert a decoded image to an intensity grid.
///
/// Alpha is ignored; transparent pixels keep their colour channels.
pub fn to_grayscale(image: &DynamicImage) -> Result<IntensityGrid> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut gray = Vec::with_capacity(width as usize * height as usize);
    for px in rgb.pixels() {
        let [r, g, b] = px.0;
        gray.push(luminance(r, g, b));
    }

    IntensityGrid::new(width, height, gray)
}
