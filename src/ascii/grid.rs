//! Grid types flowing through the conversion pipeline.

use image::GrayImage;

use crate::error::{ConvertError, Result};

/// Row-major matrix of intensity samples (0 = black, 255 = white).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl IntensityGrid {
    /// Wrap a sample buffer.
    ///
    /// Fails if either dimension is zero or the buffer length does not match.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConvertError::dimension(format!(
                "intensity grid must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(ConvertError::dimension(format!(
                "expected {} samples for {}x{}, got {}",
                expected,
                width,
                height,
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Grid where every sample has the same value.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    pub fn from_gray_image(image: GrayImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.samples[(y * self.width + x) as usize])
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(self.width as usize)
    }

    pub fn to_gray_image(&self) -> GrayImage {
        // Length is validated at construction.
        GrayImage::from_raw(self.width, self.height, self.samples.clone())
            .unwrap_or_else(|| GrayImage::new(self.width, self.height))
    }
}

/// Row-major matrix of characters, one per intensity sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl GlyphGrid {
    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn get(&self, x: u32, y: u32) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y * self.width + x) as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Rows as owned vectors, mostly handy in tests.
    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub fn to_text(&self) -> TextBlock {
        TextBlock {
            lines: self.rows().map(|r| r.iter().collect()).collect(),
        }
    }
}

/// Ordered lines of ASCII art.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBlock {
    lines: Vec<String>,
}

impl TextBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split a flat character sequence into lines of `line_width` chars.
    ///
    /// A trailing partial chunk becomes a shorter final line; it is neither
    /// padded nor dropped.
    pub fn from_chars(chars: &[char], line_width: usize) -> Result<Self> {
        if line_width == 0 {
            return Err(ConvertError::dimension("line width must be at least 1"));
        }
        Ok(Self {
            lines: chars
                .chunks(line_width)
                .map(|chunk| chunk.iter().collect())
                .collect(),
        })
    }

    /// Parse newline-separated text.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest line in chars.
    pub fn max_line_len(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for TextBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
