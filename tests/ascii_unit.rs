//! Unit tests for the ASCII conversion stage.
//!
//! These tests verify the core conversion algorithms:
//! - Quantization bounds and ordering
//! - Target dimension calculation
//! - Glyph grid and text block shape
//! - Edge enhancement as a pluggable filter

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use img2ascii::ascii::*;
use img2ascii::{ConvertError, ConvertOptions, Converter};

fn gradient_grid(width: u32, height: u32) -> IntensityGrid {
    let mut samples = Vec::with_capacity((width * height) as usize);
    for _ in 0..height {
        for x in 0..width {
            samples.push(((x * 255) / (width - 1).max(1)) as u8);
        }
    }
    IntensityGrid::new(width, height, samples).unwrap()
}

// ==================== Quantizer Tests ====================

#[test]
fn test_quantize_always_in_range() {
    for levels in 1..=300usize {
        for v in 0..=255u8 {
            let idx = quantize(v, levels);
            assert!(idx < levels, "quantize({v}, {levels}) = {idx}");
        }
    }
}

#[test]
fn test_quantize_monotonic() {
    for levels in 1..=300usize {
        let mut previous = 0;
        for v in 0..=255u8 {
            let idx = quantize(v, levels);
            assert!(idx >= previous, "not monotonic at v={v}, levels={levels}");
            previous = idx;
        }
    }
}

#[test]
fn test_quantize_extremes_hit_palette_ends() {
    for charset in CharSet::ALL {
        let levels = charset.palette().len();
        assert_eq!(quantize(0, levels), 0, "{}", charset.name());
        assert_eq!(quantize(255, levels), levels - 1, "{}", charset.name());
    }
}

#[test]
fn test_standard_palette_every_glyph_reachable() {
    let palette = CharSet::Standard.palette();
    let grid = IntensityGrid::new(256, 1, (0..=255u8).collect()).unwrap();
    let glyphs = map_to_glyphs(&grid, &palette, false);
    for c in palette.chars() {
        assert!(glyphs.cells().contains(c), "glyph {c:?} never produced");
    }
}

#[test]
fn test_darker_never_lighter_glyph() {
    let palette = CharSet::Detailed.palette();
    let grid = gradient_grid(64, 1);
    let glyphs = map_to_glyphs(&grid, &palette, false);
    let position = |c: char| palette.chars().iter().position(|&p| p == c).unwrap();
    let indices: Vec<usize> = glyphs.cells().iter().map(|&c| position(c)).collect();
    assert!(indices.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_single_char_palette() {
    let palette = Palette::new("#").unwrap();
    let glyphs = map_to_glyphs(&gradient_grid(10, 3), &palette, false);
    assert!(glyphs.cells().iter().all(|&c| c == '#'));
}

// ==================== Resizer Tests ====================

#[test]
fn test_target_dimensions_documented_example() {
    assert_eq!(target_dimensions(200, 100, 100, 0.55).unwrap(), (100, 28));
}

#[test]
fn test_target_dimensions_rounds_half_up() {
    // 1/4 * 10 * 1.0 = 2.5 -> 3
    assert_eq!(target_dimensions(40, 10, 10, 1.0).unwrap(), (10, 3));
    // 1/4 * 10 * 0.9 = 2.25 -> 2
    assert_eq!(target_dimensions(40, 10, 10, 0.9).unwrap(), (10, 2));
}

#[test]
fn test_target_dimensions_preserves_aspect() {
    let (w, h) = target_dimensions(640, 480, 120, 1.0).unwrap();
    assert_eq!((w, h), (120, 90));
    let (w, h) = target_dimensions(640, 480, 120, 0.5).unwrap();
    assert_eq!((w, h), (120, 45));
}

#[test]
fn test_zero_source_is_invalid_dimension() {
    assert!(matches!(
        target_dimensions(0, 0, 100, 0.55),
        Err(ConvertError::InvalidDimension(_))
    ));
}

// ==================== Text Shape Tests ====================

#[test]
fn test_text_block_shape_matches_grid() {
    let grid = gradient_grid(17, 5);
    let text = map_to_glyphs(&grid, &CharSet::Standard.palette(), false).to_text();
    assert_eq!(text.line_count(), 5);
    for line in text.lines() {
        assert_eq!(line.chars().count(), 17);
    }
}

#[test]
fn test_text_block_shape_with_multibyte_glyphs() {
    let grid = gradient_grid(9, 4);
    let text = map_to_glyphs(&grid, &CharSet::Blocks.palette(), false).to_text();
    assert_eq!(text.line_count(), 4);
    assert!(text.lines().iter().all(|l| l.chars().count() == 9));
}

#[test]
fn test_flat_chars_keep_short_final_line() {
    let chars: Vec<char> = std::iter::repeat('@').take(10).collect();
    let text = TextBlock::from_chars(&chars, 4).unwrap();
    let lengths: Vec<usize> = text.lines().iter().map(|l| l.len()).collect();
    assert_eq!(lengths, vec![4, 4, 2]);
}

#[test]
fn test_flat_chars_exact_multiple() {
    let chars: Vec<char> = "abcdef".chars().collect();
    let text = TextBlock::from_chars(&chars, 3).unwrap();
    assert_eq!(text.lines(), &["abc", "def"]);
}

// ==================== End-to-End Glyph Tests ====================

#[test]
fn test_black_2x2_with_two_level_palette() {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([0, 0, 0])));
    let options = ConvertOptions::builder()
        .width(2)
        .correction(1.0)
        .palette(Palette::new("@ ").unwrap())
        .build()
        .unwrap();
    let converter = Converter::new(options);

    let glyphs = converter.render_glyphs(&image).unwrap();
    assert_eq!(glyphs.to_rows(), vec![vec!['@', '@'], vec!['@', '@']]);

    let text = converter.render_text(&image).unwrap();
    assert_eq!(text.lines(), &["@@", "@@"]);
}

#[test]
fn test_black_2x2_with_default_correction() {
    // 1.0 * 2 * 0.55 = 1.1 -> 1 row
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([0, 0, 0])));
    let options = ConvertOptions::builder()
        .width(2)
        .palette(Palette::new("@ ").unwrap())
        .build()
        .unwrap();
    let text = Converter::new(options).render_text(&image).unwrap();
    assert_eq!(text.lines(), &["@@"]);
}

#[test]
fn test_invert_flips_output() {
    let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([255])));
    let options = ConvertOptions::builder()
        .width(4)
        .correction(1.0)
        .palette(Palette::new("@ ").unwrap())
        .invert(true)
        .build()
        .unwrap();
    let text = Converter::new(options).render_text(&image).unwrap();
    assert!(text.lines().iter().all(|l| l == "@@@@"));
}

// ==================== Edge Enhancement Tests ====================

#[test]
fn test_edge_filter_keeps_dimensions_and_range() {
    let grid = gradient_grid(32, 16);
    for detector in [EdgeDetector::default(), EdgeDetector::Sobel] {
        let enhancer = EdgeEnhancer::new(detector, 0.7, 0.3).unwrap();
        let out = enhancer.apply(&grid);
        assert_eq!((out.width(), out.height()), (32, 16));
        assert_eq!(out.samples().len(), 32 * 16);
    }
}

#[test]
fn test_edge_filter_outlines_a_square() {
    // White square on a black background, enhancer with full edge weight
    let mut samples = vec![0u8; 20 * 20];
    for y in 5..15 {
        for x in 5..15 {
            samples[y * 20 + x] = 255;
        }
    }
    let grid = IntensityGrid::new(20, 20, samples).unwrap();
    let enhancer = EdgeEnhancer::new(EdgeDetector::Sobel, 0.0, 1.0).unwrap();
    let out = enhancer.apply(&grid);

    // Edge pixels become dark, flat regions become white
    assert_eq!(out.get(5, 10), Some(0));
    assert_eq!(out.get(10, 10), Some(255));
    assert_eq!(out.get(1, 1), Some(255));
}
