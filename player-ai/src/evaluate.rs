//! 局面评估函数

use protocol::{Board, Color};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估局面（`perspective` 视角，正值对其有利）
    ///
    /// 己方棋子数减去对方棋子数。
    pub fn evaluate<B: Board>(board: &B, perspective: Color) -> f64 {
        let mine = Self::count_stones(board, perspective);
        let theirs = Self::count_stones(board, perspective.opponent());
        mine as f64 - theirs as f64
    }

    /// 统计某种颜色的棋子数
    pub fn count_stones<B: Board>(board: &B, color: Color) -> usize {
        let size = board.size();
        (0..size)
            .flat_map(|x| (0..size).map(move |y| (x, y)))
            .filter(|&(x, y)| board.cell(x, y) == color)
            .count()
    }
}
