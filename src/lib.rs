// ==========================================
// 销售预测与产能规划分析系统 - 核心库
// ==========================================
// 技术栈: Rust + tokio + serde
// 系统定位: 销售分析演示（合成数据、筛选聚合、脚本化助手、产能规划）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 静态目录 - 产品/工厂/区域、夹具、固定回复
pub mod catalog;

// 引擎层 - 生成、聚合、指标、助手
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态快照与会话
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Category, FiscalYear, View};

// 领域实体
pub use domain::{
    AssistantResponse, CapacityInsight, ChatMessage, ConfidenceInterval, PlantCapacity,
    ProductData, RegionData, SalesDataPoint,
};

// 引擎
pub use engine::{
    CapacityAnalyzer, FilterAggregator, FilterSelection, FixtureGenerator, JitterSource,
    ScriptedAssistant,
};

// API
pub use api::{ApiError, ApiResult, CapacityApi, ChatApi, DashboardApi, ExportApi};

// 应用
pub use app::{AppState, ChatSession, DashboardSession};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Sales & Capacity Analytics";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
