// ==========================================
// 销售预测与产能规划分析系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口，供 CLI 与视图会话调用
// ==========================================

pub mod capacity_api;
pub mod chat_api;
pub mod dashboard_api;
pub mod error;
pub mod export_api;

// 重导出核心类型
pub use capacity_api::{CapacityApi, CapacityOverview};
pub use chat_api::ChatApi;
pub use dashboard_api::{DashboardApi, ProductView};
pub use error::{validate_product_name, validate_selection, ApiError, ApiResult};
pub use export_api::{ExportApi, FORECAST_CSV_HEADER};
