//! 棋类 AI 引擎
//!
//! 包含:
//! - 局面评估函数（子数差）
//! - 固定深度 Minimax + Alpha-Beta 搜索
//! - 截止时间与安全余量
//! - 作用域内执行/撤销走法的守卫
//! - 可挂载到宿主的 Alpha-Beta 玩家

mod config;
mod deadline;
mod error;
mod evaluate;
mod guard;
mod player;
mod search;
mod stats;

pub use config::AiConfig;
pub use deadline::Deadline;
pub use error::{AiError, Result};
pub use evaluate::Evaluator;
pub use guard::MoveGuard;
pub use player::{AlphaBetaPlayer, DEFAULT_PLAYER_NAME};
pub use search::AiEngine;
pub use stats::SearchStats;
