//! The image -> ASCII -> image conversion pipeline.

use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbImage};
use tempfile::NamedTempFile;

use crate::ascii::{
    map_to_glyphs, resample, target_dimensions, to_grayscale, GlyphGrid, IntensityFilter,
    TextBlock,
};
use crate::error::{ConvertError, Result};
use crate::pipeline_config::ConvertOptions;
use crate::render::{rasterize, FontSource, GlyphFont};

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Character grid size (columns, rows)
    pub grid: (u32, u32),
    /// Output image size in pixels
    pub canvas: (u32, u32),
    /// Font the glyphs were drawn with
    pub font: FontSource,
    /// The ASCII art itself
    pub text: TextBlock,
}

/// Runs conversions for one set of options.
pub struct Converter {
    options: ConvertOptions,
    filter: Option<Box<dyn IntensityFilter>>,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        let filter = options
            .edges()
            .cloned()
            .map(|enhancer| Box::new(enhancer) as Box<dyn IntensityFilter>);
        Self { options, filter }
    }

    /// Replace the intensity filter applied before resampling.
    pub fn with_filter(mut self, filter: Box<dyn IntensityFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Remove any intensity filter.
    pub fn without_filter(mut self) -> Self {
        self.filter = None;
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a decoded image to a glyph grid.
    pub fn render_glyphs(&self, image: &DynamicImage) -> Result<GlyphGrid> {
        let (columns, rows) = target_dimensions(
            image.width(),
            image.height(),
            self.options.width(),
            self.options.correction(),
        )?;

        let mut gray = to_grayscale(image)?;
        if let Some(filter) = &self.filter {
            log::debug!("Applying {} filter", filter.name());
            gray = filter.apply(&gray);
        }

        let cells = resample(&gray, columns, rows, self.options.filter())?;
        log::debug!(
            "Resampled {}x{} -> {}x{} with {}",
            image.width(),
            image.height(),
            columns,
            rows,
            self.options.filter().name()
        );

        Ok(map_to_glyphs(
            &cells,
            self.options.palette(),
            self.options.invert(),
        ))
    }

    /// Convert a decoded image to lines of ASCII art.
    pub fn render_text(&self, image: &DynamicImage) -> Result<TextBlock> {
        Ok(self.render_glyphs(image)?.to_text())
    }

    /// Convert a decoded image to ASCII art drawn onto a new image.
    pub fn render_image(&self, image: &DynamicImage) -> Result<(RgbImage, ConversionReport)> {
        let glyphs = self.render_glyphs(image)?;
        let text = glyphs.to_text();

        let font = GlyphFont::load(self.options.font_path(), self.options.font_size());
        let canvas = rasterize(&text, &font, self.options.colors())?;

        let report = ConversionReport {
            grid: (glyphs.width(), glyphs.height()),
            canvas: canvas.dimensions(),
            font: font.source(),
            text,
        };
        Ok((canvas, report))
    }

    /// Read `input`, convert it, and write the result to `output` as PNG.
    ///
    /// Either a complete PNG is written or nothing is.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConversionReport> {
        self.convert_file_with_text(input, output, None)
    }

    /// Like [`convert_file`](Self::convert_file), optionally also writing the
    /// ASCII art as plain text to `text_out`.
    ///
    /// Both outputs are staged before either replaces its destination, so a
    /// failure to write one leaves neither behind.
    pub fn convert_file_with_text(
        &self,
        input: &Path,
        output: &Path,
        text_out: Option<&Path>,
    ) -> Result<ConversionReport> {
        let image = image::open(input).map_err(|source| ConvertError::ImageDecode {
            path: input.to_path_buf(),
            source,
        })?;
        log::info!(
            "Loaded {} ({}x{})",
            input.display(),
            image.width(),
            image.height()
        );

        let (canvas, report) = self.render_image(&image)?;

        let png = stage_png(&canvas, output)?;
        let text = match text_out {
            Some(path) => Some((stage_text(&report.text, path)?, path)),
            None => None,
        };

        if let Some((staged, path)) = text {
            staged.commit().map_err(|e| text_error(path, e))?;
            log::info!("ASCII text saved to {}", path.display());
        }
        png.commit().map_err(|e| encode_error(output, e))?;
        log::info!(
            "ASCII art saved to {} ({}x{} chars, {}x{} px)",
            output.display(),
            report.grid.0,
            report.grid.1,
            report.canvas.0,
            report.canvas.1
        );

        Ok(report)
    }
}

/// Output bytes in a temporary file beside their destination.
///
/// Dropping an uncommitted file deletes it; the destination is untouched
/// until [`commit`](Self::commit) renames the file over it.
struct StagedFile {
    file: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    fn write(target: &Path, contents: &[u8]) -> io::Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents)?;
        file.as_file().sync_all()?;
        // Temp files are created owner-only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))?;
        }

        Ok(Self {
            file,
            target: target.to_path_buf(),
        })
    }

    fn commit(self) -> io::Result<()> {
        self.file.persist(&self.target).map_err(|e| e.error)?;
        Ok(())
    }
}

fn encode_error(path: &Path, e: io::Error) -> ConvertError {
    ConvertError::ImageEncode {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    }
}

fn text_error(path: &Path, source: io::Error) -> ConvertError {
    ConvertError::TextWrite {
        path: path.to_path_buf(),
        source,
    }
}

fn stage_png(image: &RgbImage, path: &Path) -> Result<StagedFile> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|source| ConvertError::ImageEncode {
            path: path.to_path_buf(),
            source,
        })?;
    StagedFile::write(path, &buffer).map_err(|e| encode_error(path, e))
}

fn stage_text(text: &TextBlock, path: &Path) -> Result<StagedFile> {
    let mut contents = text.to_string();
    contents.push('\n');
    StagedFile::write(path, contents.as_bytes()).map_err(|e| text_error(path, e))
}

/// Encode `image` as PNG and write it to `path`.
///
/// The PNG is encoded in memory and written to a temporary file in the same
/// directory, which is then renamed over `path`. On failure `path` keeps
/// whatever it held before.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    stage_png(image, path)?
        .commit()
        .map_err(|e| encode_error(path, e))
}

/// Write ASCII art as plain text, one line per row.
pub fn save_text(text: &TextBlock, path: &Path) -> Result<()> {
    stage_text(text, path)?
        .commit()
        .map_err(|e| text_error(path, e))
}
