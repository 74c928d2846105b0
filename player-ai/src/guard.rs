//! 走法守卫
//!
//! 构造时 `do_move`，析构时 `undo_move`。剪枝 `break`、提前 `return`
//! 和 panic 展开都只会撤销一次。

use std::ops::{Deref, DerefMut};

use protocol::Board;

/// 在作用域内执行一步走法
pub struct MoveGuard<'a, B: Board> {
    board: &'a mut B,
    action: &'a B::Action,
}

impl<'a, B: Board> MoveGuard<'a, B> {
    pub fn new(board: &'a mut B, action: &'a B::Action) -> Self {
        board.do_move(action);
        Self { board, action }
    }
}

impl<B: Board> Deref for MoveGuard<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        &*self.board
    }
}

impl<B: Board> DerefMut for MoveGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut *self.board
    }
}

impl<B: Board> Drop for MoveGuard<'_, B> {
    fn drop(&mut self) {
        self.board.undo_move(self.action);
    }
}
