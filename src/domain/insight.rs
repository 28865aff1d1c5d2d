// ==========================================
// 销售预测与产能规划分析系统 - 产品洞察
// ==========================================

use crate::domain::types::{FiscalYear, InsightType, Level};
use serde::{Deserialize, Serialize};

/// 产品洞察卡片（静态文案）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    pub impact: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<FiscalYear>,
}
