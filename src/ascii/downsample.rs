//! Resampling intensity grids down to the character grid.

use image::imageops::{self, FilterType};

use super::grid::IntensityGrid;
use crate::error::{ConvertError, Result};

/// Interpolation used when shrinking the image to the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
    /// Average of every source pixel covered by a cell
    Area,
}

impl ResampleFilter {
    pub const ALL: [ResampleFilter; 6] = [
        ResampleFilter::Nearest,
        ResampleFilter::Triangle,
        ResampleFilter::CatmullRom,
        ResampleFilter::Gaussian,
        ResampleFilter::Lanczos3,
        ResampleFilter::Area,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Triangle => "triangle",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Gaussian => "gaussian",
            ResampleFilter::Lanczos3 => "lanczos3",
            ResampleFilter::Area => "area",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }

    fn filter_type(&self) -> Option<FilterType> {
        match self {
            ResampleFilter::Nearest => Some(FilterType::Nearest),
            ResampleFilter::Triangle => Some(FilterType::Triangle),
            ResampleFilter::CatmullRom => Some(FilterType::CatmullRom),
            ResampleFilter::Gaussian => Some(FilterType::Gaussian),
            ResampleFilter::Lanczos3 => Some(FilterType::Lanczos3),
            ResampleFilter::Area => None,
        }
    }
}

/// Resize a grid to `width` x `height` samples.
pub fn resample(
    grid: &IntensityGrid,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<IntensityGrid> {
    if width == 0 || height == 0 {
        return Err(ConvertError::dimension(format!(
            "resample target is {}x{}",
            width, height
        )));
    }
    if (width, height) == (grid.width(), grid.height()) {
        return Ok(grid.clone());
    }

    match filter.filter_type() {
        Some(filter_type) => {
            let resized = imageops::resize(&grid.to_gray_image(), width, height, filter_type);
            IntensityGrid::from_gray_image(resized)
        }
        None => IntensityGrid::new(width, height, area_average(grid, width, height)),
    }
}

/// Box-average downsample.
///
/// Each output cell covers a `src / dst` sized block of source pixels and
/// takes their mean. When upscaling, a cell may cover no pixel start, so the
/// block always spans at least one pixel.
fn area_average(grid: &IntensityGrid, width: u32, height: u32) -> Vec<u8> {
    let img_width = grid.width();
    let img_height = grid.height();
    let samples = grid.samples();

    let cell_w = img_width as f32 / width as f32;
    let cell_h = img_height as f32 / height as f32;

    let mut result = Vec::with_capacity(width as usize * height as usize);

    for cy in 0..height {
        let start_y = ((cy as f32 * cell_h) as u32).min(img_height - 1);
        let end_y = (((cy + 1) as f32 * cell_h) as u32).clamp(start_y + 1, img_height);

        for cx in 0..width {
            let start_x = ((cx as f32 * cell_w) as u32).min(img_width - 1);
            let end_x = (((cx + 1) as f32 * cell_w) as u32).clamp(start_x + 1, img_width);

            let mut sum = 0u64;
            let mut count = 0u64;
            for py in start_y..end_y {
                let row = (py * img_width) as usize;
                for px in start_x..end_x {
                    sum += samples[row + px as usize] as u64;
                    count += 1;
                }
            }

            result.push((sum / count.max(1)) as u8);
        }
    }

    result
}
