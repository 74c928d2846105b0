//! 搜索引擎
//!
//! 实现固定深度的 Minimax + Alpha-Beta 剪枝，带截止时间。
//! 所有走法都在宿主的同一个棋盘上原地执行，由 `MoveGuard` 保证撤销。

use std::time::{Duration, Instant};

use protocol::{Board, Color, Move};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

use crate::config::AiConfig;
use crate::deadline::Deadline;
use crate::error::Result;
use crate::evaluate::Evaluator;
use crate::guard::MoveGuard;
use crate::stats::SearchStats;

/// 一次决策内不变的搜索参数
#[derive(Debug, Clone, Copy)]
struct SearchContext<'d> {
    /// 己方颜色（始终是最大化一方）
    me: Color,
    deadline: &'d Deadline,
}

impl SearchContext<'_> {
    /// 当前节点的走子方
    fn side_to_move(&self, maximizing: bool) -> Color {
        if maximizing {
            self.me
        } else {
            self.me.opponent()
        }
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    stats: SearchStats,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            stats: SearchStats::default(),
        })
    }

    /// 当前配置
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 最近一次搜索的统计
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// 为 `me` 选择走法
    ///
    /// 无合法走法时返回 `Move::Skip(me)`。返回时棋盘与调用前一致。
    ///
    /// # Panics
    ///
    /// `me` 不是玩家颜色时 panic。
    pub fn choose_move<B: Board>(
        &mut self,
        board: &mut B,
        me: Color,
        time_budget: Duration,
    ) -> Move<B::Action> {
        assert!(me.is_player(), "choose_move needs a player color, got {:?}", me);

        let started = Instant::now();
        self.stats = SearchStats::default();
        let deadline = Deadline::new(time_budget, self.config.safety_margin());
        let ctx = SearchContext {
            me,
            deadline: &deadline,
        };

        let mut moves = board.moves_for(me);
        if moves.is_empty() {
            debug!(color = %me, "无合法走法，跳过");
            return Move::Skip(me);
        }

        let depth = i32::from(self.config.max_depth) - 1;
        let mut best_index = None;
        let mut best_score = f64::NEG_INFINITY;

        for (index, action) in moves.iter().enumerate() {
            let score = {
                let mut child = MoveGuard::new(board, action);
                self.alpha_beta(
                    &mut *child,
                    &ctx,
                    depth,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    false,
                )
            };

            // 严格大于：同分保留最先生成的走法
            if score > best_score {
                best_score = score;
                best_index = Some(index);
            }
        }

        let chosen = match best_index {
            Some(index) => index,
            None => {
                // 所有走法都是必败（-∞）或评估失败（NaN）
                let index = self.rng.gen_range(0..moves.len());
                warn!(moves = moves.len(), index, "没有选出走法，随机选择");
                index
            }
        };

        debug!(
            color = %me,
            moves = moves.len(),
            chosen,
            score = best_score,
            nodes = self.stats.nodes,
            prunes = self.stats.prunes,
            deadline_cutoffs = self.stats.deadline_cutoffs,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "搜索完成"
        );

        Move::Play(moves.swap_remove(chosen))
    }

    /// 从 `me` 的视角给当前局面打分
    ///
    /// `depth` 为剩余搜索层数，`maximizing` 表示当前是否轮到 `me`。
    pub fn score_position<B: Board>(
        &mut self,
        board: &mut B,
        me: Color,
        depth: u8,
        maximizing: bool,
        deadline: &Deadline,
    ) -> f64 {
        let ctx = SearchContext { me, deadline };
        self.alpha_beta(
            board,
            &ctx,
            i32::from(depth),
            f64::NEG_INFINITY,
            f64::INFINITY,
            maximizing,
        )
    }

    /// Alpha-Beta 搜索
    fn alpha_beta<B: Board>(
        &mut self,
        board: &mut B,
        ctx: &SearchContext<'_>,
        depth: i32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.stats.nodes += 1;

        // 超时优先：不再展开，直接返回静态评估
        if ctx.deadline.is_expired() {
            self.stats.deadline_cutoffs += 1;
            trace!(depth, "超时截断");
            return self.evaluate(board, ctx.me);
        }

        let side = ctx.side_to_move(maximizing);

        // 已分胜负的结果是精确值
        if let Some(winner) = board.winner(side) {
            self.stats.terminal_nodes += 1;
            return if winner == ctx.me {
                f64::INFINITY
            } else if winner == Color::Empty {
                0.0
            } else {
                f64::NEG_INFINITY
            };
        }

        if depth <= 0 {
            return self.evaluate(board, ctx.me);
        }

        // 无子可走但未分胜负
        let moves = board.moves_for(side);
        if moves.is_empty() {
            return self.evaluate(board, ctx.me);
        }

        if maximizing {
            let mut value = f64::NEG_INFINITY;
            for action in &moves {
                let score = {
                    let mut child = MoveGuard::new(board, action);
                    self.alpha_beta(&mut *child, ctx, depth - 1, alpha, beta, false)
                };

                if score > value {
                    value = score;
                }
                if value > alpha {
                    alpha = value;
                }
                if alpha >= beta {
                    self.stats.prunes += 1;
                    break; // Beta 剪枝
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for action in &moves {
                let score = {
                    let mut child = MoveGuard::new(board, action);
                    self.alpha_beta(&mut *child, ctx, depth - 1, alpha, beta, true)
                };

                if score < value {
                    value = score;
                }
                if value < beta {
                    beta = value;
                }
                if beta <= alpha {
                    self.stats.prunes += 1;
                    break; // Alpha 剪枝
                }
            }
            value
        }
    }

    /// 评估当前局面
    fn evaluate<B: Board>(&mut self, board: &B, me: Color) -> f64 {
        self.stats.leaf_evaluations += 1;
        Evaluator::evaluate(board, me)
    }
}
