//! Alpha-Beta 玩家
//!
//! 把 `AiEngine` 包装成宿主可以直接挂载的 `Player`。

use std::time::Duration;

use protocol::{Board, Color, Move, Player};
use tracing::info;

use crate::config::AiConfig;
use crate::error::{AiError, Result};
use crate::search::AiEngine;

/// 默认玩家名称
pub const DEFAULT_PLAYER_NAME: &str = "AlphaBeta";

/// 使用 Alpha-Beta 搜索的玩家
pub struct AlphaBetaPlayer {
    name: String,
    color: Color,
    engine: AiEngine,
}

impl AlphaBetaPlayer {
    /// 创建玩家，`color` 必须是先手或后手
    pub fn new(name: impl Into<String>, color: Color, config: AiConfig) -> Result<Self> {
        if !color.is_player() {
            return Err(AiError::InvalidColor(color));
        }
        let engine = AiEngine::new(config)?;
        let name = name.into();
        info!(
            name = %name,
            color = %color,
            max_depth = engine.config().max_depth,
            "创建 AI 玩家"
        );
        Ok(Self {
            name,
            color,
            engine,
        })
    }

    /// 使用默认名称和配置创建
    pub fn with_defaults(color: Color) -> Result<Self> {
        Self::new(DEFAULT_PLAYER_NAME, color, AiConfig::default())
    }

    /// 获取引擎（读取搜索统计等）
    pub fn engine(&self) -> &AiEngine {
        &self.engine
    }
}

impl<B: Board> Player<B> for AlphaBetaPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn next_move(&mut self, board: &mut B, time_budget: Duration) -> Move<B::Action> {
        self.engine.choose_move(board, self.color, time_budget)
    }
}
