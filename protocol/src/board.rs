//! 棋盘接口
//!
//! 棋盘由宿主提供，AI 只通过这里的接口读取和修改它。

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// 宿主棋盘
///
/// 搜索在同一个棋盘实例上原地执行 `do_move` / `undo_move`，
/// 两者必须严格互逆：`undo_move(a)` 紧跟 `do_move(a)` 之后，
/// 棋盘的每个格子和合法走法集合都恢复原状。
pub trait Board {
    /// 宿主定义的走法
    type Action: Clone + PartialEq + std::fmt::Debug;

    /// 棋盘边长
    fn size(&self) -> usize;

    /// 读取格子状态
    fn cell(&self, x: usize, y: usize) -> Color;

    /// 指定颜色的所有合法走法（按宿主的生成顺序），为空表示无子可走
    fn moves_for(&self, color: Color) -> Vec<Self::Action>;

    /// 执行走法
    fn do_move(&mut self, action: &Self::Action);

    /// 撤销走法
    fn undo_move(&mut self, action: &Self::Action);

    /// 轮到 `color` 走时的胜负判定，`Some(Color::Empty)` 表示和棋，`None` 表示未分胜负
    fn winner(&self, color: Color) -> Option<Color>;
}

/// 棋盘格子坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// 列
    pub x: usize,
    /// 行
    pub y: usize,
}

impl Cell {
    /// 创建新坐标（检查边界）
    pub fn new(x: usize, y: usize, size: usize) -> Option<Self> {
        if x < size && y < size {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// 创建新坐标（不检查边界，内部使用）
    pub const fn new_unchecked(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// 获取偏移后的坐标
    pub fn offset(&self, dx: isize, dy: isize, size: usize) -> Option<Cell> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Cell::new(x, y, size)
    }

    /// 转换为数组索引
    pub fn to_index(&self, size: usize) -> usize {
        self.y * size + self.x
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
