//! 走法
//!
//! 宿主的走法对 AI 是不透明的；AI 对外返回的走法额外带一个“跳过”分支。

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// AI 返回给宿主的走法
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move<A> {
    /// 普通走法
    Play(A),
    /// 无合法走法时跳过，携带必须跳过的一方
    Skip(Color),
}

impl<A> Move<A> {
    /// 是否为跳过
    pub fn is_skip(&self) -> bool {
        matches!(self, Move::Skip(_))
    }

    /// 获取普通走法
    pub fn action(&self) -> Option<&A> {
        match self {
            Move::Play(action) => Some(action),
            Move::Skip(_) => None,
        }
    }

    /// 取出普通走法
    pub fn into_action(self) -> Option<A> {
        match self {
            Move::Play(action) => Some(action),
            Move::Skip(_) => None,
        }
    }

    /// 跳过的一方
    pub fn skip_color(&self) -> Option<Color> {
        match self {
            Move::Play(_) => None,
            Move::Skip(color) => Some(*color),
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Display for Move<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Play(action) => write!(f, "{:?}", action),
            Move::Skip(color) => write!(f, "skip({})", color),
        }
    }
}
