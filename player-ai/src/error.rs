//! AI 错误类型

use protocol::Color;
use thiserror::Error;

/// AI 错误
#[derive(Error, Debug)]
pub enum AiError {
    /// 玩家颜色必须是先手或后手
    #[error("Invalid player color: {0:?}")]
    InvalidColor(Color),

    /// 配置不合法
    #[error("Invalid AI config: {reason}")]
    InvalidConfig { reason: String },

    /// 配置解析失败
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// AI 操作结果类型
pub type Result<T> = std::result::Result<T, AiError>;
