//! 翻子棋
//!
//! 在空格子落子后，上下左右相邻的对方棋子全部翻成己方。
//! 棋盘下满时子多者胜，相等为和棋。

use crate::board::{Board, Cell};
use crate::color::Color;
use crate::constants::MAX_GRID_SIZE;
use crate::error::{ProtocolError, Result};

use super::{format_grid, parse_grid, Placement};

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// n x n 翻子棋
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipBoard {
    size: usize,
    cells: Vec<Color>,
    /// 每一步落子及其翻转的格子，用于撤销
    history: Vec<(Placement, Vec<Cell>)>,
}

impl FlipBoard {
    /// 创建空棋盘
    pub fn new(size: usize) -> Result<Self> {
        if !(2..=MAX_GRID_SIZE).contains(&size) {
            return Err(ProtocolError::InvalidGrid {
                reason: format!("Board size {} out of range 2..={}", size, MAX_GRID_SIZE),
            });
        }
        Ok(Self {
            size,
            cells: vec![Color::Empty; size * size],
            history: Vec::new(),
        })
    }

    /// 从文本棋盘创建
    pub fn from_grid(text: &str) -> Result<Self> {
        let (size, cells) = parse_grid(text)?;
        let mut board = Self::new(size)?;
        board.cells = cells;
        Ok(board)
    }

    /// 读取格子
    pub fn get(&self, cell: Cell) -> Color {
        self.cells[cell.to_index(self.size)]
    }

    /// 统计某种颜色的棋子数
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == color).count()
    }

    /// 已执行且未撤销的步数
    pub fn pending_moves(&self) -> usize {
        self.history.len()
    }

    /// 尝试落子（检查边界和占用），成功后与 `do_move` 效果相同
    pub fn play(&mut self, action: &Placement) -> Result<()> {
        let Placement { cell, .. } = *action;
        if Cell::new(cell.x, cell.y, self.size).is_none() {
            return Err(ProtocolError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                size: self.size,
            });
        }
        if self.get(cell) != Color::Empty || !action.color.is_player() {
            return Err(ProtocolError::IllegalAction { x: cell.x, y: cell.y });
        }
        self.do_move(action);
        Ok(())
    }
}

impl Board for FlipBoard {
    type Action = Placement;

    fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, x: usize, y: usize) -> Color {
        self.cells[y * self.size + x]
    }

    fn moves_for(&self, color: Color) -> Vec<Placement> {
        if !color.is_player() {
            return Vec::new();
        }
        (0..self.cells.len())
            .filter(|&index| self.cells[index] == Color::Empty)
            .map(|index| Placement {
                cell: Cell::new_unchecked(index % self.size, index / self.size),
                color,
            })
            .collect()
    }

    fn do_move(&mut self, action: &Placement) {
        let index = action.cell.to_index(self.size);
        assert_eq!(
            self.cells[index],
            Color::Empty,
            "do_move on occupied cell {}",
            action.cell
        );
        self.cells[index] = action.color;

        let opponent = action.color.opponent();
        let mut flipped = Vec::new();
        for (dx, dy) in DIRECTIONS {
            if let Some(neighbour) = action.cell.offset(dx, dy, self.size) {
                let neighbour_index = neighbour.to_index(self.size);
                if self.cells[neighbour_index] == opponent {
                    self.cells[neighbour_index] = action.color;
                    flipped.push(neighbour);
                }
            }
        }
        self.history.push((*action, flipped));
    }

    fn undo_move(&mut self, action: &Placement) {
        let (placed, flipped) = self
            .history
            .pop()
            .unwrap_or_else(|| panic!("undo_move {:?} without matching do_move", action));
        assert_eq!(placed, *action, "undo_move does not match last do_move");

        let opponent = action.color.opponent();
        for cell in flipped {
            let index = cell.to_index(self.size);
            self.cells[index] = opponent;
        }
        let index = action.cell.to_index(self.size);
        self.cells[index] = Color::Empty;
    }

    fn winner(&self, _color: Color) -> Option<Color> {
        if self.cells.contains(&Color::Empty) {
            return None;
        }
        let first = self.count(Color::First);
        let second = self.count(Color::Second);
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => Color::First,
            std::cmp::Ordering::Less => Color::Second,
            std::cmp::Ordering::Equal => Color::Empty,
        })
    }
}

impl std::fmt::Display for FlipBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_grid(&self.cells, self.size))
    }
}
