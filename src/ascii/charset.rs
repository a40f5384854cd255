//! Palette definitions for ASCII rendering.

use crate::error::{ConvertError, Result};

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (@) to lightest (space).
pub const STANDARD_CHARSET: &str = "@%#*+=-:. ";

/// Detailed density ramp (70 levels), darkest first.
pub const DETAILED_CHARSET: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Block character set (5 levels).
/// Uses Unicode shade blocks, full block first.
pub const BLOCKS_CHARSET: &str = "█▓▒░ ";

/// Minimal character set (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_CHARSET: &str = "#:. ";

/// Ordered characters used for quantization, darkest first.
///
/// Never empty. Duplicate characters are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    /// Build a palette from a string, darkest character first.
    pub fn new(chars: &str) -> Result<Self> {
        Self::from_chars(chars.chars().collect())
    }

    pub fn from_chars(chars: Vec<char>) -> Result<Self> {
        if chars.is_empty() {
            return Err(ConvertError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at a quantized index.
    ///
    /// Out-of-range indices clamp to the lightest character.
    pub fn glyph(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    /// Same palette with the order flipped.
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        CharSet::Standard.palette()
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Named built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Standard ASCII density ramp (10 levels)
    #[default]
    Standard,
    /// Fine-grained 70-level ramp
    Detailed,
    /// Unicode shade blocks (5 levels)
    Blocks,
    /// Minimal 4-level set
    Minimal,
}

impl CharSet {
    pub const ALL: [CharSet; 4] = [
        CharSet::Standard,
        CharSet::Detailed,
        CharSet::Blocks,
        CharSet::Minimal,
    ];

    /// The raw character ramp for this charset.
    pub fn ramp(&self) -> &'static str {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Detailed => DETAILED_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette {
            chars: self.ramp().chars().collect(),
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Detailed => "detailed",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Look up a charset by its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}
