//! 硬件颜色色块列表
//!
//! 为界面列表提供每个硬件颜色的标签、背景色和前景文字色。

use crate::color::palette::{HardwarePalette, PaletteIndex, Rgb8};
use crate::color::text::format_index_text;
use std::collections::BTreeSet;

/// 单个色块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// 硬件颜色索引
    pub index: PaletteIndex,
    /// 显示文本 (两位大写十六进制)
    pub label: String,
    /// 背景色
    pub background: Rgb8,
    /// 前景文字色
    pub foreground: Rgb8,
}

impl Swatch {
    fn new(index: PaletteIndex, palette: &HardwarePalette) -> Self {
        let background = palette.get(index);
        Self {
            index,
            label: format_index_text(index),
            background,
            foreground: background.foreground_text_color(),
        }
    }

    /// 超出范围的行使用的占位色块
    pub fn placeholder() -> Self {
        Self {
            index: PaletteIndex::new(0x3F),
            label: "3F".to_string(),
            background: Rgb8::black(),
            foreground: Rgb8::white(),
        }
    }
}

/// 硬件颜色列表
#[derive(Debug, Clone, Default)]
pub struct HardwareColorList {
    colors: Vec<PaletteIndex>,
    palette: HardwarePalette,
}

impl HardwareColorList {
    /// 使用指定调色板创建空列表
    pub fn new(palette: HardwarePalette) -> Self {
        Self {
            colors: Vec::new(),
            palette,
        }
    }

    /// 替换颜色列表, 保持给定顺序
    pub fn set_colors<I>(&mut self, colors: I)
    where
        I: IntoIterator<Item = u8>,
    {
        self.colors = colors.into_iter().map(PaletteIndex::from).collect();
        tracing::debug!("色块列表更新: {} 项", self.colors.len());
    }

    /// 用颜色集合替换列表 (升序)
    pub fn set_color_set(&mut self, colors: &BTreeSet<u8>) {
        self.set_colors(colors.iter().copied());
    }

    /// 更换硬件调色板
    pub fn set_palette(&mut self, palette: HardwarePalette) {
        self.palette = palette;
    }

    /// 当前硬件调色板
    pub fn palette(&self) -> &HardwarePalette {
        &self.palette
    }

    /// 列表中的颜色索引
    pub fn colors(&self) -> &[PaletteIndex] {
        &self.colors
    }

    /// 色块数量
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// 列表是否为空
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// 获取指定行的色块, 超出范围时返回占位色块
    pub fn entry(&self, row: usize) -> Swatch {
        match self.colors.get(row) {
            Some(&index) => Swatch::new(index, &self.palette),
            None => Swatch::placeholder(),
        }
    }

    /// 色块迭代器
    pub fn iter(&self) -> impl Iterator<Item = Swatch> + '_ {
        self.colors
            .iter()
            .map(move |&index| Swatch::new(index, &self.palette))
    }
}
