//! 颜色定义
//!
//! 同一个枚举既表示格子状态，也表示走子方。

use serde::{Deserialize, Serialize};

use crate::constants::EMPTY_CHAR;
use crate::error::ProtocolError;

/// 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// 先手方
    First,
    /// 后手方
    Second,
    /// 空格子 / 和棋
    Empty,
}

impl Color {
    /// 获取对方颜色（`Empty` 保持不变）
    pub fn opponent(&self) -> Color {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
            Color::Empty => Color::Empty,
        }
    }

    /// 是否为玩家颜色
    pub fn is_player(&self) -> bool {
        !matches!(self, Color::Empty)
    }

    /// 获取文本棋盘字符
    pub fn to_char(&self) -> char {
        match self {
            Color::First => 'X',
            Color::Second => 'O',
            Color::Empty => EMPTY_CHAR,
        }
    }

    /// 从文本棋盘字符解析
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'X' | 'x' => Some(Color::First),
            'O' | 'o' => Some(Color::Second),
            EMPTY_CHAR => Some(Color::Empty),
            _ => None,
        }
    }
}

impl TryFrom<char> for Color {
    type Error = ProtocolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Color::from_char(c).ok_or(ProtocolError::InvalidColor(c))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
