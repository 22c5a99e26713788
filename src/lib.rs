//! hwpal - 硬件调色板颜色工具
//!
//! 将 64 色硬件调色板 (如 NES PPU) 的索引转换为可显示的颜色,
//! 并根据背景亮度选择黑色或白色前景文字。
//!
//! ```
//! use hwpal::{Color, DEFAULT_PALETTE, select_foreground_color_from_text};
//!
//! let fg = select_foreground_color_from_text("0F", &DEFAULT_PALETTE)?;
//! assert_eq!(fg, Color::WHITE);
//! # Ok::<(), hwpal::PaletteError>(())
//! ```

#![warn(missing_docs)]

pub mod color;
pub mod error;

pub use color::*;
pub use error::{PaletteError, Result};
