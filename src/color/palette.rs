//! 硬件调色板定义和颜色查找

use crate::color::palette_data::DEFAULT_PALETTE;
use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};

/// 硬件调色板颜色数量
pub const HARDWARE_PALETTE_SIZE: usize = 64;

/// 调色板索引掩码 (只有低 6 位有效)
pub const INDEX_MASK: i64 = 0x3F;

/// 8 位 RGB 颜色 (硬件调色板中的一项)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// 红
    pub r: u8,
    /// 绿
    pub g: u8,
    /// 蓝
    pub b: u8,
}

impl Rgb8 {
    /// 从各分量创建颜色
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 创建黑色
    pub const fn black() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }

    /// 创建白色
    pub const fn white() -> Self {
        Self { r: 255, g: 255, b: 255 }
    }

    /// 归一化为不透明的 [`Color`]
    pub fn to_color(self) -> Color {
        Color::rgb(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// 格式化为十六进制颜色字符串 (如 "#FF0000")
    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        [c.r, c.g, c.b]
    }
}

impl std::fmt::UpperHex for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// 归一化 RGBA 颜色, 各分量范围 [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// 红
    pub r: f64,
    /// 绿
    pub g: f64,
    /// 蓝
    pub b: f64,
    /// 透明度
    pub a: f64,
}

impl Color {
    /// 不透明白色
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// 不透明黑色
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// 创建不透明颜色 (alpha = 1.0)
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// 检查颜色是否不透明
    pub fn is_opaque(self) -> bool {
        self.a == 1.0
    }

    /// 转换回 8 位 RGB (超出范围的分量会被截断)
    pub fn to_rgb8(self) -> Rgb8 {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb8::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rgb = self.to_rgb8();
        if self.is_opaque() {
            write!(f, "Color(#{:X})", rgb)
        } else {
            let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            write!(f, "Color(#{:X}{:02X})", rgb, alpha)
        }
    }
}

/// 调色板索引 (已按 6 位掩码处理, 范围 0..=63)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PaletteIndex(u8);

impl PaletteIndex {
    /// 从任意整数创建索引
    ///
    /// 按补码语义与 0x3F 相与, 负数同样回绕 (如 -1 -> 63), 永不失败。
    pub const fn new(raw: i64) -> Self {
        Self((raw & INDEX_MASK) as u8)
    }

    /// 索引值
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<i64> for PaletteIndex {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl From<u8> for PaletteIndex {
    fn from(raw: u8) -> Self {
        Self::new(raw as i64)
    }
}

/// 硬件调色板 (固定 64 项)
///
/// 序列化为 64 个 `[r, g, b]` 三元组组成的数组, 反序列化时长度不符会报错。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb8>", into = "Vec<Rgb8>")]
pub struct HardwarePalette {
    entries: [Rgb8; HARDWARE_PALETTE_SIZE],
}

impl HardwarePalette {
    /// 从 64 项数组创建
    pub const fn new(entries: [Rgb8; HARDWARE_PALETTE_SIZE]) -> Self {
        Self { entries }
    }

    /// 从颜色切片创建, 长度必须为 64
    pub fn from_entries(entries: &[Rgb8]) -> Result<Self> {
        let entries: [Rgb8; HARDWARE_PALETTE_SIZE] = entries
            .try_into()
            .map_err(|_| PaletteError::InvalidPaletteSize(entries.len()))?;
        Ok(Self { entries })
    }

    /// 从连续的 `r g b` 字节创建, 长度必须为 192
    pub fn from_rgb_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != HARDWARE_PALETTE_SIZE * 3 {
            return Err(PaletteError::InvalidPaletteSize(bytes.len() / 3));
        }

        let mut entries = [Rgb8::black(); HARDWARE_PALETTE_SIZE];
        for (entry, rgb) in entries.iter_mut().zip(bytes.chunks_exact(3)) {
            *entry = Rgb8::new(rgb[0], rgb[1], rgb[2]);
        }
        Ok(Self { entries })
    }

    /// 获取指定索引的颜色
    #[inline]
    pub fn get(&self, index: PaletteIndex) -> Rgb8 {
        self.entries[index.value() as usize]
    }

    /// 获取任意整数索引的颜色 (先做 6 位掩码)
    #[inline]
    pub fn entry(&self, index: i64) -> Rgb8 {
        self.get(PaletteIndex::new(index))
    }

    /// 全部颜色
    pub fn entries(&self) -> &[Rgb8; HARDWARE_PALETTE_SIZE] {
        &self.entries
    }

    /// 调色板迭代器
    pub fn iter(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for HardwarePalette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

impl TryFrom<Vec<Rgb8>> for HardwarePalette {
    type Error = PaletteError;

    fn try_from(entries: Vec<Rgb8>) -> Result<Self> {
        Self::from_entries(&entries)
    }
}

impl From<HardwarePalette> for Vec<Rgb8> {
    fn from(palette: HardwarePalette) -> Self {
        palette.entries.to_vec()
    }
}

/// 将调色板索引转换为归一化颜色
///
/// 索引先与 0x3F 相与, 任何整数都能映射到 0..=63; 结果 alpha 恒为 1.0。
pub fn palette_to_color(index: i64, palette: &HardwarePalette) -> Color {
    palette.entry(index).to_color()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_palette() -> HardwarePalette {
        let mut entries = [Rgb8::black(); HARDWARE_PALETTE_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            let v = (i * 4) as u8;
            *entry = Rgb8::new(v, 255 - v, v / 2);
        }
        HardwarePalette::new(entries)
    }

    #[test]
    fn test_masking_idempotent() {
        let palette = gradient_palette();
        for i in -300i64..300 {
            assert_eq!(
                palette_to_color(i, &palette),
                palette_to_color(i & 0x3F, &palette),
                "index {}",
                i
            );
        }
    }

    #[test]
    fn test_index_wraparound() {
        let palette = gradient_palette();
        assert_eq!(palette_to_color(64, &palette), palette_to_color(0, &palette));
        assert_eq!(palette_to_color(0x1FF, &palette), palette_to_color(0x3F, &palette));
        assert_eq!(palette_to_color(i64::MAX, &palette), palette_to_color(63, &palette));
    }

    #[test]
    fn test_negative_index_twos_complement() {
        assert_eq!(PaletteIndex::new(-1).value(), 63);
        assert_eq!(PaletteIndex::new(-64).value(), 0);
        assert_eq!(PaletteIndex::new(-65).value(), 63);
        assert_eq!(PaletteIndex::new(i64::MIN).value(), 0);
    }

    #[test]
    fn test_color_normalized_and_opaque() {
        let palette = gradient_palette();
        for i in 0..64 {
            let color = palette_to_color(i, &palette);
            assert_eq!(color.a, 1.0);
            for channel in [color.r, color.g, color.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_byte_normalization() {
        let color = Rgb8::new(255, 0, 51).to_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-12);
        assert_eq!(color.to_rgb8(), Rgb8::new(255, 0, 51));
    }

    #[test]
    fn test_from_rgb_bytes() {
        let mut bytes = vec![0u8; 192];
        bytes[3..6].copy_from_slice(&[10, 20, 30]);
        let palette = HardwarePalette::from_rgb_bytes(&bytes).unwrap();
        assert_eq!(palette.entry(1), Rgb8::new(10, 20, 30));
        assert_eq!(palette.entry(65), Rgb8::new(10, 20, 30));

        let err = HardwarePalette::from_rgb_bytes(&bytes[..189]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidPaletteSize(63)));
    }

    #[test]
    fn test_from_entries_wrong_size() {
        let entries = vec![Rgb8::white(); 63];
        assert!(matches!(
            HardwarePalette::from_entries(&entries),
            Err(PaletteError::InvalidPaletteSize(63))
        ));
    }

    #[test]
    fn test_serde_triples() {
        let palette = gradient_palette();
        let json = serde_json::to_string(&palette).unwrap();
        assert!(json.starts_with("[[0,255,0],[4,251,2]"));

        let decoded: HardwarePalette = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, palette);

        let short = serde_json::from_str::<HardwarePalette>("[[1,2,3]]");
        assert!(short.is_err());
    }

    #[test]
    fn test_color_serde() {
        let color = Rgb8::new(255, 0, 51).to_color();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, r#"{"r":1.0,"g":0.0,"b":0.2,"a":1.0}"#);

        let decoded: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, color);
    }

    #[test]
    fn test_format_hex() {
        let color = Rgb8::new(255, 8, 0);
        assert_eq!(color.to_hex_string(), "#FF0800");
        assert_eq!(format!("{:X}", color), "FF0800");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::WHITE), "Color(#FFFFFF)");
        let translucent = Color { a: 0.5, ..Color::BLACK };
        assert_eq!(format!("{}", translucent), "Color(#00000080)");
    }

    #[test]
    fn test_default_palette() {
        assert_eq!(HardwarePalette::default(), DEFAULT_PALETTE);
        assert_eq!(HardwarePalette::default().iter().count(), HARDWARE_PALETTE_SIZE);
    }
}
