//! 测试用参考棋盘
//!
//! 仅在 `test-util` 特性下编译，供 AI 的单元测试和集成测试使用。
//!
//! 文本棋盘格式：行之间用 `/` 分隔，`X` 为先手，`O` 为后手，`.` 为空。
//! 示例：`X.O/.X./..O`

mod flip;
mod scripted;
mod tic_tac_toe;

pub use flip::FlipBoard;
pub use scripted::ScriptedBoard;
pub use tic_tac_toe::TicTacToe;

use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::color::Color;
use crate::constants::{MAX_GRID_SIZE, ROW_SEPARATOR};
use crate::error::{ProtocolError, Result};

/// 落子走法：在空格子上放一枚指定颜色的棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub cell: Cell,
    pub color: Color,
}

impl Placement {
    pub fn new(x: usize, y: usize, color: Color) -> Self {
        Self {
            cell: Cell::new_unchecked(x, y),
            color,
        }
    }
}

/// 解析文本棋盘，返回 (边长, 按行存储的格子)
pub fn parse_grid(text: &str) -> Result<(usize, Vec<Color>)> {
    let rows: Vec<&str> = text.trim().split(ROW_SEPARATOR).collect();
    let size = rows.len();
    if size > MAX_GRID_SIZE {
        return Err(ProtocolError::InvalidGrid {
            reason: format!("Too many rows: {} (max: {})", size, MAX_GRID_SIZE),
        });
    }

    let mut cells = Vec::with_capacity(size * size);
    for (y, row) in rows.iter().enumerate() {
        let row_len = row.chars().count();
        if row_len != size {
            return Err(ProtocolError::InvalidGrid {
                reason: format!("Row {} has {} cells, expected {}", y, row_len, size),
            });
        }
        for c in row.chars() {
            cells.push(Color::try_from(c)?);
        }
    }

    Ok((size, cells))
}

/// 生成文本棋盘
pub fn format_grid(cells: &[Color], size: usize) -> String {
    cells
        .chunks(size)
        .map(|row| row.iter().map(Color::to_char).collect::<String>())
        .collect::<Vec<_>>()
        .join(&ROW_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        let (size, cells) = parse_grid("X.O/.X./..O").unwrap();
        assert_eq!(size, 3);
        assert_eq!(cells[0], Color::First);
        assert_eq!(cells[2], Color::Second);
        assert_eq!(cells[4], Color::First);
        assert_eq!(cells.iter().filter(|c| **c == Color::Empty).count(), 5);
    }

    #[test]
    fn test_parse_grid_errors() {
        assert!(matches!(
            parse_grid("X.O/.X"),
            Err(ProtocolError::InvalidGrid { .. })
        ));
        assert_eq!(parse_grid("X#/.."), Err(ProtocolError::InvalidColor('#')));
        assert!(parse_grid("").is_err());
    }

    #[test]
    fn test_format_grid() {
        let text = "X.O/.X./..O";
        let (size, cells) = parse_grid(text).unwrap();
        assert_eq!(format_grid(&cells, size), text);
    }
}
