//! Image to ASCII conversion.
//!
//! The pipeline turns a decoded image into lines of text:
//!
//! 1. **Grayscale conversion** - RGB to luminance using BT.601
//! 2. **Intensity filter** - Optional edge enhancement ([`IntensityFilter`])
//! 3. **Resampling** - Shrink to the character grid ([`target_dimensions`])
//! 4. **Character mapping** - Quantize brightness onto a [`Palette`]
//!
//! # Character Sets
//!
//! Built-in palettes are available via [`CharSet`]. All of them run from the
//! densest glyph (dark) to a space (light):
//! - `Standard` - 10-level ASCII density ramp
//! - `Detailed` - 70-level ramp
//! - `Blocks` - Unicode shade blocks
//! - `Minimal` - 4-level clean look

mod charset;
mod dimensions;
mod downsample;
mod edges;
mod grayscale;
mod grid;
mod mapping;

pub use charset::{
    CharSet, Palette, BLOCKS_CHARSET, DETAILED_CHARSET, MINIMAL_CHARSET, STANDARD_CHARSET,
};
pub(crate) use dimensions::validate_correction;
pub use dimensions::{target_dimensions, DEFAULT_CORRECTION_FACTOR};
pub use downsample::{resample, ResampleFilter};
pub use edges::{
    sobel, EdgeDetector, EdgeEnhancer, IntensityFilter, DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW,
    DEFAULT_EDGE_WEIGHT,
};
pub use grayscale::{luminance, to_grayscale};
pub use grid::{GlyphGrid, IntensityGrid, TextBlock};
pub use mapping::{map_to_glyphs, quantize};
