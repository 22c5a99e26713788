//! 根据背景亮度选择可读的前景文字颜色

use crate::color::palette::{Color, HardwarePalette, Rgb8, palette_to_color};
use crate::color::text::parse_index_text;
use crate::error::Result;

/// 亮度阈值, 低于此值使用白色文字
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// 8 位刻度下的亮度阈值
pub const LUMINANCE_THRESHOLD_8BIT: f64 = 128.0;

/// 计算相对亮度 (BT.709 权重, 不做 gamma 校正)
#[inline]
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// 按亮度选择前景色: 小于 0.5 为白色, 否则为黑色 (等于 0.5 时为黑色)
pub fn foreground_for_luminance(l: f64) -> Color {
    if l < LUMINANCE_THRESHOLD {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// 为给定背景色选择前景文字颜色
pub fn foreground_for(background: Color) -> Color {
    foreground_for_luminance(background.luminance())
}

/// 为调色板索引对应的背景选择前景文字颜色
pub fn select_foreground_color(index: i64, palette: &HardwarePalette) -> Color {
    let background = palette_to_color(index, palette);
    let foreground = foreground_for(background);
    tracing::trace!(
        "索引 {:#04X}: 背景 {} 亮度 {:.4} -> 前景 {}",
        index & 0x3F,
        background,
        background.luminance(),
        foreground
    );
    foreground
}

/// 解析十六进制索引文本后选择前景文字颜色
pub fn select_foreground_color_from_text(text: &str, palette: &HardwarePalette) -> Result<Color> {
    let index = parse_index_text(text)?;
    Ok(select_foreground_color(index, palette))
}

impl Color {
    /// 相对亮度
    pub fn luminance(self) -> f64 {
        luminance(self.r, self.g, self.b)
    }
}

impl Rgb8 {
    /// 8 位亮度 (0.0 ~ 255.0)
    pub fn luminance(self) -> f64 {
        luminance(self.r as f64, self.g as f64, self.b as f64)
    }

    /// 前景文字颜色 (8 位版本, 阈值 128)
    pub fn foreground_text_color(self) -> Rgb8 {
        if self.luminance() < LUMINANCE_THRESHOLD_8BIT {
            Rgb8::white()
        } else {
            Rgb8::black()
        }
    }
}
