//! 搜索统计

use serde::{Deserialize, Serialize};

/// 单次决策的搜索统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// 访问的节点数（不含根节点）
    pub nodes: u64,
    /// 静态评估次数
    pub leaf_evaluations: u64,
    /// 因超时直接评估的节点数
    pub deadline_cutoffs: u64,
    /// 已分胜负的节点数
    pub terminal_nodes: u64,
    /// Alpha-Beta 剪枝次数
    pub prunes: u64,
}

impl SearchStats {
    /// 是否发生过超时截断
    pub fn timed_out(&self) -> bool {
        self.deadline_cutoffs > 0
    }
}
