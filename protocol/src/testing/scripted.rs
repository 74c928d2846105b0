//! 脚本棋盘
//!
//! 走法列表、胜负结果和格子都由测试直接指定，
//! 并记录 `do_move` / `undo_move` 的调用，用于检查配对。

use std::time::Duration;

use crate::board::Board;
use crate::color::Color;

/// 可配置的测试棋盘，走法为编号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedBoard {
    size: usize,
    cells: Vec<Color>,
    moves: Vec<u32>,
    winner: Option<Color>,
    move_delay: Duration,
    applied: Vec<u32>,
    do_count: usize,
    undo_count: usize,
    max_line: usize,
}

impl ScriptedBoard {
    /// 创建棋盘：每个节点都提供同样的 `moves`
    pub fn new(size: usize, moves: Vec<u32>) -> Self {
        Self {
            size,
            cells: vec![Color::Empty; size * size],
            moves,
            winner: None,
            move_delay: Duration::ZERO,
            applied: Vec::new(),
            do_count: 0,
            undo_count: 0,
            max_line: 0,
        }
    }

    /// 所有节点都报告同一个胜负结果
    pub fn with_winner(mut self, winner: Color) -> Self {
        self.winner = Some(winner);
        self
    }

    /// 设置格子
    pub fn with_cell(mut self, x: usize, y: usize, color: Color) -> Self {
        self.cells[y * self.size + x] = color;
        self
    }

    /// 每次 `do_move` 额外耗时，用于测试截止时间
    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = delay;
        self
    }

    /// 当前未撤销的走法
    pub fn applied(&self) -> &[u32] {
        &self.applied
    }

    /// `do_move` 调用次数
    pub fn do_count(&self) -> usize {
        self.do_count
    }

    /// `undo_move` 调用次数
    pub fn undo_count(&self) -> usize {
        self.undo_count
    }

    /// 同时处于执行状态的最大走法数（即实际搜索深度）
    pub fn max_line(&self) -> usize {
        self.max_line
    }
}

impl Board for ScriptedBoard {
    type Action = u32;

    fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, x: usize, y: usize) -> Color {
        self.cells[y * self.size + x]
    }

    fn moves_for(&self, color: Color) -> Vec<u32> {
        if color.is_player() {
            self.moves.clone()
        } else {
            Vec::new()
        }
    }

    fn do_move(&mut self, action: &u32) {
        if !self.move_delay.is_zero() {
            std::thread::sleep(self.move_delay);
        }
        self.applied.push(*action);
        self.do_count += 1;
        self.max_line = self.max_line.max(self.applied.len());
    }

    fn undo_move(&mut self, action: &u32) {
        let last = self.applied.pop();
        assert_eq!(last, Some(*action), "undo_move does not match last do_move");
        self.undo_count += 1;
    }

    fn winner(&self, _color: Color) -> Option<Color> {
        self.winner
    }
}
