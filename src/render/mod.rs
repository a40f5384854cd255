//! Rendering ASCII text back into an image.

mod builtin_font;
mod canvas;
mod color;
mod font;

pub use builtin_font::{BuiltinFont, BASE_CELL_HEIGHT, BASE_CELL_WIDTH};
pub use canvas::{canvas_size, rasterize};
pub use color::{format_color, parse_color, Colors, Polarity, BLACK, WHITE};
pub use font::{
    CellMetrics, FontSource, GlyphFont, TrueTypeFont, DEFAULT_FONT_SIZE, MAX_FONT_SIZE,
};
