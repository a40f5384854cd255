//! Edge enhancement applied to the grayscale image before quantization.
//!
//! Outlines get lost when a photo is reduced to a handful of glyph levels.
//! Blending an inverted edge map into the grayscale image darkens the edges
//! so they survive as dense glyphs.

use imageproc::edges::canny;

use super::grid::IntensityGrid;
use crate::error::{ConvertError, Result};

/// Default Canny hysteresis thresholds.
pub const DEFAULT_CANNY_LOW: f32 = 100.0;
pub const DEFAULT_CANNY_HIGH: f32 = 200.0;

/// Default blend: 70% original, 30% inverted edges.
pub const DEFAULT_EDGE_WEIGHT: f32 = 0.3;

const WEIGHT_TOLERANCE: f32 = 1e-3;

/// A transform from one intensity grid to another of the same size.
///
/// The conversion pipeline runs an optional filter between grayscale
/// conversion and resampling without knowing what it does.
pub trait IntensityFilter {
    fn apply(&self, grid: &IntensityGrid) -> IntensityGrid;

    /// Short name for logging.
    fn name(&self) -> &str;
}

/// Edge detection algorithm producing a 0-255 edge magnitude map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeDetector {
    /// Canny detector with hysteresis thresholds
    Canny { low: f32, high: f32 },
    /// 3x3 Sobel gradient magnitude
    Sobel,
}

impl EdgeDetector {
    pub fn canny(low: f32, high: f32) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low < 0.0 || low > high {
            return Err(ConvertError::InvalidThresholds { low, high });
        }
        Ok(EdgeDetector::Canny { low, high })
    }

    pub fn name(&self) -> &'static str {
        match self {
            EdgeDetector::Canny { .. } => "canny",
            EdgeDetector::Sobel => "sobel",
        }
    }

    /// Compute the edge map of a grid.
    pub fn detect(&self, grid: &IntensityGrid) -> Vec<u8> {
        match *self {
            EdgeDetector::Canny { low, high } => {
                canny(&grid.to_gray_image(), low, high).into_raw()
            }
            EdgeDetector::Sobel => sobel(grid.samples(), grid.width(), grid.height()),
        }
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        EdgeDetector::Canny {
            low: DEFAULT_CANNY_LOW,
            high: DEFAULT_CANNY_HIGH,
        }
    }
}

/// Apply the Sobel operator to a grayscale image.
///
/// The kernels used are:
/// ```text
/// Gx:          Gy:
/// [-1  0  1]   [-1 -2 -1]
/// [-2  0  2]   [ 0  0  0]
/// [-1  0  1]   [ 1  2  1]
/// ```
///
/// Magnitude is approximated as `|gx| + |gy|`, clamped to 255. Border pixels
/// are 0 since the kernel can't be applied there; images smaller than 3x3
/// have no interior and come back all zero.
pub fn sobel(gray: &[u8], width: u32, height: u32) -> Vec<u8> {
    let mut edges = vec![0u8; gray.len()];
    if width < 3 || height < 3 {
        return edges;
    }

    const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
    const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

    let w = width as usize;
    for y in 1..height as usize - 1 {
        for x in 1..w - 1 {
            let mut gx: i32 = 0;
            let mut gy: i32 = 0;

            for (ky, (row_x, row_y)) in SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate() {
                let base = (y + ky - 1) * w;
                for kx in 0..3 {
                    let val = gray[base + x + kx - 1] as i32;
                    gx += val * row_x[kx];
                    gy += val * row_y[kx];
                }
            }

            edges[y * w + x] = (gx.abs() + gy.abs()).min(255) as u8;
        }
    }

    edges
}

/// Blend an inverted edge map into the original intensities.
///
/// `out = original_weight * v + edge_weight * (255 - edge)`
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeEnhancer {
    detector: EdgeDetector,
    original_weight: f32,
    edge_weight: f32,
}

impl EdgeEnhancer {
    /// Create an enhancer.
    ///
    /// Weights must be non-negative and sum to 1.0.
    pub fn new(detector: EdgeDetector, original_weight: f32, edge_weight: f32) -> Result<Self> {
        let valid = original_weight.is_finite()
            && edge_weight.is_finite()
            && original_weight >= 0.0
            && edge_weight >= 0.0
            && ((original_weight + edge_weight) - 1.0).abs() <= WEIGHT_TOLERANCE;
        if !valid {
            return Err(ConvertError::InvalidBlendWeights {
                original: original_weight,
                edge: edge_weight,
            });
        }
        Ok(Self {
            detector,
            original_weight,
            edge_weight,
        })
    }

    /// Enhancer with the given edge share; the original gets the rest.
    pub fn with_edge_weight(detector: EdgeDetector, edge_weight: f32) -> Result<Self> {
        Self::new(detector, 1.0 - edge_weight, edge_weight)
    }

    pub fn detector(&self) -> EdgeDetector {
        self.detector
    }

    pub fn weights(&self) -> (f32, f32) {
        (self.original_weight, self.edge_weight)
    }
}

impl IntensityFilter for EdgeEnhancer {
    fn apply(&self, grid: &IntensityGrid) -> IntensityGrid {
        let edges = self.detector.detect(grid);
        let blended: Vec<u8> = grid
            .samples()
            .iter()
            .zip(edges.iter())
            .map(|(&v, &e)| {
                let mixed =
                    self.original_weight * v as f32 + self.edge_weight * (255 - e) as f32;
                mixed.round().clamp(0.0, 255.0) as u8
            })
            .collect();

        IntensityGrid::new(grid.width(), grid.height(), blended)
            .unwrap_or_else(|_| grid.clone())
    }

    fn name(&self) -> &str {
        self.detector.name()
    }
}
