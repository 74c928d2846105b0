//! 棋类 AI 宿主协议
//!
//! 包含:
//! - 颜色（格子状态 / 走子方）
//! - 宿主棋盘接口 (Board trait)
//! - 走法（普通走法 / 跳过）
//! - 可插拔玩家接口 (Player trait)
//! - 测试用参考棋盘（`test-util` 特性）

mod board;
mod color;
mod constants;
mod error;
mod moves;
mod player;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use board::{Board, Cell};
pub use color::Color;
pub use constants::*;
pub use error::{ProtocolError, Result};
pub use moves::Move;
pub use player::Player;
