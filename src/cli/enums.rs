//! CLI enum types for charset, filter, polarity and edge options.

use clap::ValueEnum;

use crate::ascii::{self, ResampleFilter};
use crate::render::Polarity;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Detailed,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Detailed => ascii::CharSet::Detailed,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
    Area,
}

impl From<Filter> for ResampleFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => ResampleFilter::Nearest,
            Filter::Triangle => ResampleFilter::Triangle,
            Filter::CatmullRom => ResampleFilter::CatmullRom,
            Filter::Gaussian => ResampleFilter::Gaussian,
            Filter::Lanczos3 => ResampleFilter::Lanczos3,
            Filter::Area => ResampleFilter::Area,
        }
    }
}

/// Default colour pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolarityArg {
    #[default]
    DarkOnLight,
    LightOnDark,
}

impl From<PolarityArg> for Polarity {
    fn from(p: PolarityArg) -> Self {
        match p {
            PolarityArg::DarkOnLight => Polarity::DarkOnLight,
            PolarityArg::LightOnDark => Polarity::LightOnDark,
        }
    }
}

/// Edge enhancement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EdgeMode {
    #[default]
    #[value(name = "none")]
    Off,
    Canny,
    Sobel,
}

impl EdgeMode {
    pub fn from_name(name: &str) -> Option<Self> {
        EdgeMode::from_str(name.trim(), true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_to_ascii_charset() {
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Standard),
            ascii::CharSet::Standard
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Detailed),
            ascii::CharSet::Detailed
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Blocks),
            ascii::CharSet::Blocks
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Minimal),
            ascii::CharSet::Minimal
        );
    }

    #[test]
    fn test_filter_value_names_match_library_names() {
        for filter in Filter::value_variants() {
            let name = filter.to_possible_value().unwrap();
            assert_eq!(name.get_name(), ResampleFilter::from(*filter).name());
        }
    }

    #[test]
    fn test_polarity_conversion() {
        assert_eq!(Polarity::from(PolarityArg::LightOnDark), Polarity::LightOnDark);
        assert_eq!(Polarity::from(PolarityArg::default()), Polarity::DarkOnLight);
    }

    #[test]
    fn test_edge_mode_names() {
        assert_eq!(EdgeMode::from_name("none"), Some(EdgeMode::Off));
        assert_eq!(EdgeMode::from_name("Canny"), Some(EdgeMode::Canny));
        assert_eq!(EdgeMode::from_name("sobel"), Some(EdgeMode::Sobel));
        assert_eq!(EdgeMode::from_name("prewitt"), None);
    }
}
