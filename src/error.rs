//! 错误类型定义

use thiserror::Error;

/// 调色板工具错误类型
#[derive(Error, Debug)]
pub enum PaletteError {
    /// 文本不是合法的十六进制数
    #[error("无效的十六进制索引文本: {0:?}")]
    InvalidHexText(String),

    /// 十六进制数超出 i64 范围
    #[error("十六进制索引超出范围: {0:?}")]
    HexTextOverflow(String),

    /// 调色板颜色数量不是 64
    #[error("调色板大小无效: 需要 64 个颜色, 实际为 {0}")]
    InvalidPaletteSize(usize),
}

/// 调色板工具结果类型
pub type Result<T> = std::result::Result<T, PaletteError>;
