// ==========================================
// 销售预测与产能规划分析系统 - 配置层
// ==========================================
// 职责: 运行配置定义、加载与覆写
// 存储: JSON 文件 + 环境变量
// ==========================================

pub mod analytics_config;
pub mod config_manager;

// 重导出核心配置类型
pub use analytics_config::{AnalyticsConfig, ConfigError, JitterMode, MAX_DELAY_MS};
pub use config_manager::{config_keys, get_default_config_path, ConfigManager};
