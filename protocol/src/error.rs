//! 错误类型定义

use thiserror::Error;

/// 协议错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// 无法识别的颜色字符
    #[error("Invalid color character: {0:?}")]
    InvalidColor(char),

    /// 坐标超出棋盘
    #[error("Cell out of bounds: ({x}, {y}) on a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    /// 非法动作（格子已被占用等）
    #[error("Illegal action at ({x}, {y})")]
    IllegalAction { x: usize, y: usize },

    /// 无效的文本棋盘
    #[error("Invalid grid: {reason}")]
    InvalidGrid { reason: String },
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, ProtocolError>;
