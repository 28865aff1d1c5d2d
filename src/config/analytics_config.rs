// ==========================================
// 销售预测与产能规划分析系统 - 运行配置
// ==========================================
// 职责: 抖动模式/种子、模拟延迟等运行参数
// 存储: JSON 文件（字段全部可缺省）
// ==========================================

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// 模拟延迟上限（毫秒）
pub const MAX_DELAY_MS: u64 = 5_000;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置项无效 ({field}): {message}")]
    InvalidValue { field: String, message: String },
}

// ==========================================
// JitterMode - 历史数据抖动来源
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JitterMode {
    /// 运行时环境随机源（不可复现）
    #[default]
    Ambient,
    /// 固定种子（可复现）
    Seeded,
    /// 关闭抖动（乘数固定为 1.0）
    Disabled,
}

// ==========================================
// AnalyticsConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub jitter: JitterMode,

    /// jitter=seeded 时使用的种子
    #[serde(default)]
    pub seed: Option<u64>,

    /// 筛选变更后的模拟处理延迟
    #[serde(default = "default_filter_delay_ms")]
    pub filter_delay_ms: u64,

    /// 生成预测的模拟延迟
    #[serde(default = "default_forecast_delay_ms")]
    pub forecast_delay_ms: u64,

    /// 助手回复的模拟延迟
    #[serde(default = "default_chat_delay_ms")]
    pub chat_delay_ms: u64,
}

fn default_filter_delay_ms() -> u64 {
    500
}

fn default_forecast_delay_ms() -> u64 {
    1_500
}

fn default_chat_delay_ms() -> u64 {
    1_000
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            jitter: JitterMode::default(),
            seed: None,
            filter_delay_ms: default_filter_delay_ms(),
            forecast_delay_ms: default_forecast_delay_ms(),
            chat_delay_ms: default_chat_delay_ms(),
        }
    }
}

impl AnalyticsConfig {
    /// 从 JSON 文本解析并校验
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AnalyticsConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    ///
    /// 规则:
    /// 1) 各项延迟不超过 MAX_DELAY_MS
    /// 2) jitter=seeded 时必须提供 seed
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("filter_delay_ms", self.filter_delay_ms),
            ("forecast_delay_ms", self.forecast_delay_ms),
            ("chat_delay_ms", self.chat_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("{}ms 超过上限 {}ms", value, MAX_DELAY_MS),
                });
            }
        }

        if self.jitter == JitterMode::Seeded && self.seed.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "seed".to_string(),
                message: "jitter=seeded 时必须提供 seed".to_string(),
            });
        }

        Ok(())
    }

    /// 固定种子（便捷构造）
    pub fn seeded(seed: u64) -> Self {
        Self {
            jitter: JitterMode::Seeded,
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn filter_delay(&self) -> Duration {
        Duration::from_millis(self.filter_delay_ms)
    }

    pub fn forecast_delay(&self) -> Duration {
        Duration::from_millis(self.forecast_delay_ms)
    }

    pub fn chat_delay(&self) -> Duration {
        Duration::from_millis(self.chat_delay_ms)
    }
}
