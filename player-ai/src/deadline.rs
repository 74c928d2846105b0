//! 截止时间
//!
//! 每次决策计算一次绝对时刻，搜索的每一层都只读地检查它。

use std::time::{Duration, Instant};

/// 搜索截止时间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    /// `None` 表示不限时
    at: Option<Instant>,
}

impl Deadline {
    /// `now + time_budget - safety_margin`，预算不足余量时立即到期
    pub fn new(time_budget: Duration, safety_margin: Duration) -> Self {
        let usable = time_budget.saturating_sub(safety_margin);
        Self {
            at: Instant::now().checked_add(usable),
        }
    }

    /// 不限时
    pub fn unbounded() -> Self {
        Self { at: None }
    }

    /// 是否已到期
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_below_margin_expires_immediately() {
        let deadline = Deadline::new(Duration::from_millis(10), Duration::from_millis(50));
        assert!(deadline.is_expired());
    }

    #[test]
    fn test_ample_budget() {
        let deadline = Deadline::new(Duration::from_secs(60), Duration::from_millis(50));
        assert!(!deadline.is_expired());
    }

    #[test]
    fn test_unbounded() {
        let deadline = Deadline::unbounded();
        assert!(!deadline.is_expired());
        assert_eq!(deadline, Deadline::unbounded());
    }

    #[test]
    fn test_margin_equal_to_budget_expires_immediately() {
        let deadline = Deadline::new(Duration::from_millis(50), Duration::from_millis(50));
        assert!(deadline.is_expired());
    }

    #[test]
    fn test_huge_budget_does_not_overflow() {
        let deadline = Deadline::new(Duration::MAX, Duration::ZERO);
        assert!(!deadline.is_expired());
    }
}
