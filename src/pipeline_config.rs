//! Conversion options and their builder.
//!
//! Every knob of the conversion lives here so one pipeline covers palette,
//! aspect correction, colour polarity and edge enhancement.

use std::path::{Path, PathBuf};

use crate::ascii::{
    validate_correction, CharSet, EdgeDetector, EdgeEnhancer, Palette, ResampleFilter,
    DEFAULT_CORRECTION_FACTOR, DEFAULT_EDGE_WEIGHT,
};
use crate::error::{ConvertError, Result};
use crate::render::{Colors, DEFAULT_FONT_SIZE, MAX_FONT_SIZE};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 100;

/// Validated conversion settings.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    width: u32,
    palette: Palette,
    invert: bool,
    correction: f64,
    filter: ResampleFilter,
    font_path: Option<PathBuf>,
    font_size: f32,
    colors: Colors,
    edges: Option<EdgeEnhancer>,
}

impl ConvertOptions {
    pub fn builder() -> ConvertOptionsBuilder {
        ConvertOptionsBuilder::default()
    }

    /// Output width in characters.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn correction(&self) -> f64 {
        self.correction
    }

    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn colors(&self) -> Colors {
        self.colors
    }

    pub fn edges(&self) -> Option<&EdgeEnhancer> {
        self.edges.as_ref()
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            palette: Palette::default(),
            invert: false,
            correction: DEFAULT_CORRECTION_FACTOR,
            filter: ResampleFilter::default(),
            font_path: None,
            font_size: DEFAULT_FONT_SIZE,
            colors: Colors::default(),
            edges: None,
        }
    }
}

/// Edge enhancement settings before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSettings {
    pub detector: EdgeDetector,
    pub edge_weight: f32,
}

impl Default for EdgeSettings {
    fn default() -> Self {
        Self {
            detector: EdgeDetector::default(),
            edge_weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

/// Builder for [`ConvertOptions`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ConvertOptionsBuilder {
    width: Option<u32>,
    palette: Option<Palette>,
    invert: bool,
    correction: Option<f64>,
    filter: Option<ResampleFilter>,
    font_path: Option<PathBuf>,
    font_size: Option<f32>,
    colors: Option<Colors>,
    edges: Option<EdgeSettings>,
}

impl ConvertOptionsBuilder {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn charset(self, charset: CharSet) -> Self {
        self.palette(charset.palette())
    }

    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn correction(mut self, correction: f64) -> Self {
        self.correction = Some(correction);
        self
    }

    pub fn filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn edges(mut self, edges: EdgeSettings) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn build(self) -> Result<ConvertOptions> {
        let defaults = ConvertOptions::default();

        let width = self.width.unwrap_or(defaults.width);
        if width == 0 {
            return Err(ConvertError::dimension("output width must be at least 1"));
        }

        let correction = self.correction.unwrap_or(defaults.correction);
        validate_correction(correction)?;

        let font_size = self.font_size.unwrap_or(defaults.font_size);
        if !font_size.is_finite() || font_size <= 0.0 || font_size > MAX_FONT_SIZE {
            return Err(ConvertError::dimension(format!(
                "font size must be in (0, {}], got {}",
                MAX_FONT_SIZE, font_size
            )));
        }

        let edges = match self.edges {
            Some(settings) => {
                if let EdgeDetector::Canny { low, high } = settings.detector {
                    EdgeDetector::canny(low, high)?;
                }
                Some(EdgeEnhancer::with_edge_weight(
                    settings.detector,
                    settings.edge_weight,
                )?)
            }
            None => None,
        };

        Ok(ConvertOptions {
            width,
            palette: self.palette.unwrap_or(defaults.palette),
            invert: self.invert,
            correction,
            filter: self.filter.unwrap_or(defaults.filter),
            font_path: self.font_path,
            font_size,
            colors: self.colors.unwrap_or(defaults.colors),
            edges,
        })
    }
}
