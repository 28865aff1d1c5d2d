// ==========================================
// 销售预测与产能规划分析系统 - 配置管理器
// ==========================================
// 职责: 配置文件定位、加载、环境变量覆写
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::analytics_config::{AnalyticsConfig, ConfigError, JitterMode};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 环境变量键
pub mod config_keys {
    /// 显式指定配置文件路径
    pub const CONFIG_PATH_ENV: &str = "SALES_ANALYTICS_CONFIG";
    /// 强制固定种子抖动
    pub const SEED_ENV: &str = "SALES_ANALYTICS_SEED";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    path: Option<PathBuf>,
    config: AnalyticsConfig,
}

impl ConfigManager {
    /// 从指定文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径（必须存在）
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = AnalyticsConfig::from_json(&raw)?;
        debug!(path = %path.display(), "配置文件加载完成");

        Ok(Self {
            path: Some(path.to_path_buf()),
            config,
        })
    }

    /// 使用内存配置（测试/嵌入场景）
    pub fn from_config(config: AnalyticsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { path: None, config })
    }

    /// 按默认规则加载
    ///
    /// 说明：
    /// - 默认路径文件不存在时使用默认配置
    /// - 显式指定（环境变量）的文件不存在则报错
    /// - 最后应用 SALES_ANALYTICS_SEED 覆写
    pub fn load_default() -> Result<Self, ConfigError> {
        let mut manager = match std::env::var(config_keys::CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_path(path.trim())?,
            _ => {
                let path = get_default_config_path();
                if path.exists() {
                    Self::from_path(&path)?
                } else {
                    debug!(path = %path.display(), "未找到配置文件，使用默认配置");
                    Self {
                        path: None,
                        config: AnalyticsConfig::default(),
                    }
                }
            }
        };

        if let Ok(raw) = std::env::var(config_keys::SEED_ENV) {
            manager.apply_seed_override(&raw)?;
        }

        info!(
            jitter = ?manager.config.jitter,
            seed = ?manager.config.seed,
            "配置加载完成"
        );
        Ok(manager)
    }

    /// 应用种子覆写（SALES_ANALYTICS_SEED）
    pub fn apply_seed_override(&mut self, raw: &str) -> Result<(), ConfigError> {
        let seed = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
            field: config_keys::SEED_ENV.to_string(),
            message: format!("无法解析为 u64: {}", raw),
        })?;
        if self.config.jitter == JitterMode::Disabled {
            warn!("抖动已关闭，忽略种子覆写");
            return Ok(());
        }
        self.config.jitter = JitterMode::Seeded;
        self.config.seed = Some(seed);
        Ok(())
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn into_config(self) -> AnalyticsConfig {
        self.config
    }

    /// 配置来源文件（内存/默认配置为 None）
    pub fn source_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// 默认配置文件路径
///
/// 用户配置目录下的 sales-capacity-analytics/config.json；
/// 无法获取配置目录时回退到当前目录
pub fn get_default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("sales-capacity-analytics").join("config.json"),
        None => PathBuf::from("./sales-capacity-analytics.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_override() {
        let mut manager = ConfigManager::from_config(AnalyticsConfig::default()).unwrap();
        manager.apply_seed_override(" 42 ").unwrap();
        assert_eq!(manager.config().jitter, JitterMode::Seeded);
        assert_eq!(manager.config().seed, Some(42));
        assert!(manager.apply_seed_override("abc").is_err());
    }

    #[test]
    fn test_seed_override_ignored_when_disabled() {
        let config = AnalyticsConfig {
            jitter: JitterMode::Disabled,
            ..AnalyticsConfig::default()
        };
        let mut manager = ConfigManager::from_config(config).unwrap();
        manager.apply_seed_override("1").unwrap();
        assert_eq!(manager.config().jitter, JitterMode::Disabled);
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(get_default_config_path().ends_with("config.json")
            || get_default_config_path().ends_with("sales-capacity-analytics.json"));
    }
}
