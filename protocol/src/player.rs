//! 玩家接口
//!
//! 宿主每回合调用一次 `next_move`，循环由宿主负责。

use std::time::Duration;

use crate::board::Board;
use crate::color::Color;
use crate::moves::Move;

/// 可插拔的玩家
pub trait Player<B: Board> {
    /// 玩家名称
    fn name(&self) -> &str;

    /// 玩家执子颜色
    fn color(&self) -> Color;

    /// 在给定的时间预算内选择走法
    ///
    /// 返回时棋盘必须与调用前完全一致。
    fn next_move(&mut self, board: &mut B, time_budget: Duration) -> Move<B::Action>;
}
