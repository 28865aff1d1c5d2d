// ==========================================
// 销售预测与产能规划分析系统 - 引擎层
// ==========================================
// 职责: 合成数据生成、筛选聚合、指标计算、产能分析、脚本化助手
// 红线: 引擎均为无状态纯计算，不持有 UI 状态
// ==========================================

pub mod aggregator;
pub mod assistant;
pub mod capacity_analyzer;
pub mod events;
pub mod fixture_generator;
pub mod metrics;

// 重导出核心引擎
pub use aggregator::{filter_options, AggregatedView, FilterAggregator, FilterOptions, FilterSelection, ALL};
pub use assistant::{ResponseRule, ScriptedAssistant, DEFAULT_RULE};
pub use capacity_analyzer::{CapacityAnalyzer, RankedRegion, RecommendationTier, RegionalDemandRow};
pub use events::{
    NoOpEventPublisher, OptionalEventPublisher, RecordingEventPublisher, SessionEvent,
    SessionEventPublisher, SessionEventType,
};
pub use fixture_generator::{FixtureGenerator, JitterSource};
pub use metrics::{growth_pct, DashboardMetrics, ForecastRow, ForecastTable, PlantSales, YearlySales};
