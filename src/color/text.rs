//! 调色板索引的十六进制文本解析与格式化

use crate::color::palette::{Color, HardwarePalette, PaletteIndex, palette_to_color};
use crate::error::{PaletteError, Result};
use std::num::IntErrorKind;

/// 将十六进制文本解析为调色板索引
///
/// 不区分大小写, 不需要前缀。首尾空白会被忽略, 允许可选的 `+`/`-` 符号
/// 和 `0x` 前缀。返回的整数不做范围检查, 查表时才做 6 位掩码。
///
/// 非法文本返回 [`PaletteError::InvalidHexText`], 不会默认为 0。
pub fn parse_index_text(text: &str) -> Result<i64> {
    let trimmed = text.trim();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);

    // from_str_radix 自己也接受符号, 这里已经处理过了
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidHexText(text.to_string()));
    }

    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };

    i64::from_str_radix(&signed, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            PaletteError::HexTextOverflow(text.to_string())
        }
        _ => PaletteError::InvalidHexText(text.to_string()),
    })
}

/// 解析十六进制文本并查找对应颜色
pub fn text_to_color(text: &str, palette: &HardwarePalette) -> Result<Color> {
    let index = parse_index_text(text)?;
    Ok(palette_to_color(index, palette))
}

/// 将索引格式化为两位大写十六进制 (如 10 -> "0A")
pub fn format_index_text(index: impl Into<PaletteIndex>) -> String {
    format!("{:02X}", index.into().value())
}
