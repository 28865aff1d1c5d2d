// ==========================================
// 销售预测与产能规划分析系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、值对象
// 红线: 不含生成/聚合逻辑，实体生成后只读
// ==========================================

pub mod capacity;
pub mod chat;
pub mod insight;
pub mod sales;
pub mod types;

// 重导出核心类型
pub use capacity::{
    CapacityInsight, CapacityMetrics, Coordinates, PlantCapacity, RegionData, SupplyBalance,
};
pub use chat::{AssistantResponse, ChartPayload, ChartRow, ChatMessage, ChatRole, PromptTemplate};
pub use insight::ProductInsight;
pub use sales::{Area, ConfidenceInterval, Plant, Product, ProductData, SalesDataPoint};
pub use types::{
    CapacityInsightType, Category, ChartKind, CompetitionLevel, FiscalYear, InsightType, Level,
    View,
};
