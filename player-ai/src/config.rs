//! AI 配置

use std::time::Duration;

use protocol::{DEFAULT_MAX_DEPTH, DEFAULT_SAFETY_MARGIN_MS};
use serde::{Deserialize, Serialize};

use crate::error::{AiError, Result};

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 搜索深度（包含根节点这一层）
    pub max_depth: u8,
    /// 从时间预算中扣除的安全余量（毫秒）
    pub safety_margin_ms: u64,
    /// 随机兜底走法使用的种子，`None` 时从系统熵初始化
    pub rng_seed: Option<u64>,
}

impl AiConfig {
    /// 从 JSON 读取配置，缺省字段使用默认值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 检查配置
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(AiError::InvalidConfig {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// 设置搜索深度
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 设置随机种子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn safety_margin(&self) -> Duration {
        Duration::from_millis(self.safety_margin_ms)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            safety_margin_ms: DEFAULT_SAFETY_MARGIN_MS,
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AiConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.safety_margin(), Duration::from_millis(50));
        assert_eq!(config.rng_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = AiConfig::from_json(r#"{"max_depth": 5}"#).unwrap();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.safety_margin_ms, 50);
    }

    #[test]
    fn test_from_json_rejects_zero_depth() {
        let err = AiConfig::from_json(r#"{"max_depth": 0}"#).unwrap_err();
        assert!(matches!(err, AiError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = AiConfig::from_json("{max_depth: }").unwrap_err();
        assert!(matches!(err, AiError::Config(_)));
    }

    #[test]
    fn test_builders() {
        let config = AiConfig::default().with_max_depth(2).with_seed(7);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.rng_seed, Some(7));
    }
}
