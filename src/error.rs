//! Error types for the conversion pipeline.

use std::path::PathBuf;

/// Errors that can occur while converting an image to ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Source image missing, unreadable, or not a decodable format
    #[error("Failed to open image '{}': {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A computed or supplied dimension is zero
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Requested font could not be loaded.
    ///
    /// Font loading recovers from this by falling back to the built-in font,
    /// so conversions never return it.
    #[error("Failed to load font '{}': {reason}", path.display())]
    FontLoad { path: PathBuf, reason: String },

    /// Output image could not be encoded or written
    #[error("Failed to save image '{}': {source}", path.display())]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Text dump could not be written
    #[error("Failed to write text file '{}': {source}", path.display())]
    TextWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Palette must contain at least one character")]
    EmptyPalette,

    #[error("Blend weights must be non-negative and sum to 1.0, got {original} + {edge}")]
    InvalidBlendWeights { original: f32, edge: f32 },

    #[error("Edge thresholds must satisfy 0 <= low <= high, got low={low} high={high}")]
    InvalidThresholds { low: f32, high: f32 },

    #[error("Correction factor must be a positive number, got {0}")]
    InvalidCorrection(f64),

    #[error("Invalid color '{0}'. Use #rrggbb, #rgb, or a name like black/white")]
    InvalidColor(String),

    /// Unrecognized value for a named setting (config file or CLI)
    #[error("Unknown {key} '{value}'. Expected one of: {expected}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        expected: String,
    },
}

impl ConvertError {
    pub(crate) fn dimension(msg: impl Into<String>) -> Self {
        ConvertError::InvalidDimension(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let err = ConvertError::dimension("source width is zero");
        assert_eq!(err.to_string(), "Invalid dimension: source width is zero");
    }

    #[test]
    fn test_font_load_message_includes_path() {
        let err = ConvertError::FontLoad {
            path: PathBuf::from("/no/such/cour.ttf"),
            reason: "not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/cour.ttf"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_decode_error_has_source() {
        use std::error::Error;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ConvertError::ImageDecode {
            path: PathBuf::from("input.jpg"),
            source: image::ImageError::IoError(io),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("input.jpg"));
    }
}
