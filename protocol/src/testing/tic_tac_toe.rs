//! 井字棋

use crate::board::{Board, Cell};
use crate::color::Color;
use crate::error::{ProtocolError, Result};

use super::{format_grid, parse_grid, Placement};

const SIZE: usize = 3;

/// 八条连线（按格子索引）
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 井字棋，三子连线获胜，下满无连线为和棋
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Color; SIZE * SIZE],
}

impl TicTacToe {
    /// 创建空棋盘
    pub fn new() -> Self {
        Self {
            cells: [Color::Empty; SIZE * SIZE],
        }
    }

    /// 从文本棋盘创建
    pub fn from_grid(text: &str) -> Result<Self> {
        let (size, cells) = parse_grid(text)?;
        if size != SIZE {
            return Err(ProtocolError::InvalidGrid {
                reason: format!("Tic-tac-toe needs a 3x3 grid, got {}x{}", size, size),
            });
        }
        let mut board = Self::new();
        board.cells.copy_from_slice(&cells);
        Ok(board)
    }

    /// 读取格子
    pub fn get(&self, cell: Cell) -> Color {
        self.cells[cell.to_index(SIZE)]
    }

    /// 是否下满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Color::Empty)
    }

    /// 连线获胜方
    fn line_winner(&self) -> Option<Color> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]];
            let complete = first.is_player()
                && self.cells[line[1]] == first
                && self.cells[line[2]] == first;
            complete.then_some(first)
        })
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for TicTacToe {
    type Action = Placement;

    fn size(&self) -> usize {
        SIZE
    }

    fn cell(&self, x: usize, y: usize) -> Color {
        self.cells[y * SIZE + x]
    }

    fn moves_for(&self, color: Color) -> Vec<Placement> {
        if !color.is_player() || self.line_winner().is_some() {
            return Vec::new();
        }
        (0..SIZE * SIZE)
            .filter(|&index| self.cells[index] == Color::Empty)
            .map(|index| Placement {
                cell: Cell::new_unchecked(index % SIZE, index / SIZE),
                color,
            })
            .collect()
    }

    fn do_move(&mut self, action: &Placement) {
        let index = action.cell.to_index(SIZE);
        assert_eq!(
            self.cells[index],
            Color::Empty,
            "do_move on occupied cell {}",
            action.cell
        );
        self.cells[index] = action.color;
    }

    fn undo_move(&mut self, action: &Placement) {
        let index = action.cell.to_index(SIZE);
        assert_eq!(
            self.cells[index], action.color,
            "undo_move does not match cell {}",
            action.cell
        );
        self.cells[index] = Color::Empty;
    }

    fn winner(&self, _color: Color) -> Option<Color> {
        match self.line_winner() {
            Some(color) => Some(color),
            None if self.is_full() => Some(Color::Empty),
            None => None,
        }
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_grid(&self.cells, SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_moves() {
        let board = TicTacToe::new();
        let moves = board.moves_for(Color::First);
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Placement::new(0, 0, Color::First));
        assert_eq!(moves[1], Placement::new(1, 0, Color::First));
        assert!(board.moves_for(Color::Empty).is_empty());
        assert_eq!(board.winner(Color::First), None);
    }

    #[test]
    fn test_line_winner() {
        let board = TicTacToe::from_grid("XXX/OO./...").unwrap();
        assert_eq!(board.winner(Color::Second), Some(Color::First));
        assert!(board.moves_for(Color::Second).is_empty());
    }

    #[test]
    fn test_draw() {
        let board = TicTacToe::from_grid("XOX/XOO/OXX").unwrap();
        assert_eq!(board.winner(Color::First), Some(Color::Empty));
    }

    #[test]
    fn test_do_undo() {
        let mut board = TicTacToe::from_grid("X../.O./...").unwrap();
        let before = board.clone();
        let action = Placement::new(2, 2, Color::First);
        board.do_move(&action);
        assert_eq!(board.cell(2, 2), Color::First);
        board.undo_move(&action);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_do_move_on_occupied_cell() {
        let mut board = TicTacToe::from_grid("X../.../...").unwrap();
        board.do_move(&Placement::new(0, 0, Color::Second));
    }

    #[test]
    fn test_from_grid_wrong_size() {
        assert!(TicTacToe::from_grid("X./..").is_err());
    }
}
