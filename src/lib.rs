//! img2ascii library crate.
//!
//! Converts raster images to ASCII art and renders the art back into a PNG.
//!
//! ```no_run
//! use img2ascii::{ConvertOptions, Converter};
//! use std::path::Path;
//!
//! let options = ConvertOptions::builder().width(120).build()?;
//! let report = Converter::new(options)
//!     .convert_file(Path::new("input.jpg"), Path::new("ascii_output.png"))?;
//! println!("{}", report.text);
//! # Ok::<(), img2ascii::ConvertError>(())
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod pipeline_config;
pub mod render;

pub use error::{ConvertError, Result};
pub use pipeline::{ConversionReport, Converter};
pub use pipeline_config::{ConvertOptions, ConvertOptionsBuilder, EdgeSettings};
