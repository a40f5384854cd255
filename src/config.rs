//! Configuration file handling for img2ascii.
//!
//! Loads configuration from `~/.config/img2ascii/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file structure for img2ascii.
/// Loaded from ~/.config/img2ascii/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub edges: EdgesConfig,
}

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct AsciiConfig {
    /// Output width in characters
    pub width: Option<u32>,
    /// Built-in charset name
    pub charset: Option<String>,
    /// Custom palette, darkest first; overrides `charset`
    pub chars: Option<String>,
    #[serde(default)]
    pub invert: bool,
    /// Vertical correction for glyph aspect
    pub correction: Option<f64>,
    /// Resampling filter name
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct RenderConfig {
    pub font: Option<PathBuf>,
    pub font_size: Option<f32>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub polarity: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct EdgesConfig {
    /// "none", "canny" or "sobel"
    pub detector: Option<String>,
    pub canny_low: Option<f32>,
    pub canny_high: Option<f32>,
    pub edge_weight: Option<f32>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("img2ascii").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".config/img2ascii/config.toml"))
}

/// Template written by `img2ascii config init`.
pub const DEFAULT_CONFIG: &str = r##"# img2ascii configuration

[ascii]
# Output width in characters
width = 100
# Character set: standard, detailed, blocks, minimal
charset = "standard"
# Custom palette, darkest first (overrides charset)
# chars = "@%#*+=-:. "
# Map bright pixels to dense glyphs instead
invert = false
# Vertical compression to compensate for tall glyphs
correction = 0.55
# Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3, area
filter = "lanczos3"

[render]
# Monospaced TrueType/OpenType font; the built-in font is used if unset or unreadable
# font = "/usr/share/fonts/TTF/DejaVuSansMono.ttf"
font_size = 10.0
# Polarity: dark-on-light, light-on-dark
polarity = "dark-on-light"
# Explicit colours override the polarity (#rrggbb, #rgb, or a name)
# bg_color = "#ffffff"
# text_color = "#000000"

[edges]
# Edge enhancement: none, canny, sobel
detector = "none"
canny_low = 100.0
canny_high = 200.0
# Share of the inverted edge map in the blend
edge_weight = 0.3
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.ascii.width, Some(100));
        assert_eq!(config.ascii.charset.as_deref(), Some("standard"));
        assert_eq!(config.ascii.correction, Some(0.55));
        assert_eq!(config.render.font, None);
        assert_eq!(config.render.polarity.as_deref(), Some("dark-on-light"));
        assert_eq!(config.edges.detector.as_deref(), Some("none"));
        assert_eq!(config.edges.edge_weight, Some(0.3));
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nfont_size = 14.0\ntext_color = \"#00ff00\"").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.render.font_size, Some(14.0));
        assert_eq!(config.render.text_color.as_deref(), Some("#00ff00"));
        assert_eq!(config.ascii, AsciiConfig::default());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ascii]\nwidth = \"wide\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("img2ascii/config.toml"));
    }
}
