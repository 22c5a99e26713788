//! 颜色处理模块

pub mod contrast;
pub mod palette;
pub mod palette_data;
pub mod swatch;
pub mod text;

pub use contrast::{
    LUMINANCE_THRESHOLD, foreground_for, foreground_for_luminance, luminance,
    select_foreground_color, select_foreground_color_from_text,
};
pub use palette::{
    Color, HARDWARE_PALETTE_SIZE, HardwarePalette, INDEX_MASK, PaletteIndex, Rgb8, palette_to_color,
};
pub use palette_data::DEFAULT_PALETTE;
pub use swatch::{HardwareColorList, Swatch};
pub use text::{format_index_text, parse_index_text, text_to_color};
