// ==========================================
// 销售预测与产能规划分析系统 - 销售领域模型
// ==========================================
// 职责: 产品/工厂/区域目录项、销售序列点、ProductData
// 红线: 生成后只读，不做原地更新
// ==========================================

use crate::domain::types::{Category, FiscalYear};
use serde::{Deserialize, Serialize};

// ==========================================
// 目录项
// ==========================================

/// 产品（静态目录，不可变）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub base_value: f64,  // 基准销售额 (USD)
    pub growth_rate: f64, // 年增长率 (0.15 = 15%)
}

/// 工厂
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub multiplier: f64, // 工厂乘数
}

/// 销售区域
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub multiplier: f64, // 区域乘数
}

// ==========================================
// ConfidenceInterval - 置信区间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: i64,
    pub upper: i64,
}

impl ConfidenceInterval {
    /// 区间宽度
    pub fn width(&self) -> i64 {
        self.upper - self.lower
    }

    /// 是否包含给定值
    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

// ==========================================
// SalesDataPoint - 销售序列点
// ==========================================
// 历史点: forecast=false, confidence=None
// 预测点: forecast=true, confidence=Some
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDataPoint {
    pub fiscal_year: FiscalYear,
    pub sales: i64,
    pub forecast: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<ConfidenceInterval>,
}

impl SalesDataPoint {
    /// 历史点
    pub fn historical(fiscal_year: FiscalYear, sales: i64) -> Self {
        Self {
            fiscal_year,
            sales,
            forecast: false,
            confidence: None,
        }
    }

    /// 预测点
    pub fn forecast(fiscal_year: FiscalYear, sales: i64, confidence: ConfidenceInterval) -> Self {
        Self {
            fiscal_year,
            sales,
            forecast: true,
            confidence: Some(confidence),
        }
    }
}

// ==========================================
// ProductData - 产品 × 工厂 × 区域 的销售序列
// ==========================================
// 主键: "{product_id}-{plant_id}-{area_id}"
// 聚合结果中 plant/area 为筛选值（可能为 "all"）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub category: Category,
    pub plant: String,
    pub area: String,
    pub data: Vec<SalesDataPoint>,
}

impl ProductData {
    /// 组合主键
    pub fn row_key(product_id: &str, plant_id: &str, area_id: &str) -> String {
        format!("{}-{}-{}", product_id, plant_id, area_id)
    }

    /// 历史点（按财年顺序）
    pub fn historical(&self) -> impl Iterator<Item = &SalesDataPoint> {
        self.data.iter().filter(|p| !p.forecast)
    }

    /// 预测点（按财年顺序）
    pub fn forecasts(&self) -> impl Iterator<Item = &SalesDataPoint> {
        self.data.iter().filter(|p| p.forecast)
    }

    /// 指定财年的点
    pub fn point(&self, fiscal_year: FiscalYear) -> Option<&SalesDataPoint> {
        self.data.iter().find(|p| p.fiscal_year == fiscal_year)
    }

    /// 校验序列不变量
    ///
    /// # 返回
    /// - Ok(()): 财年严格递增且连续、置信区间规则成立
    /// - Err(String): 第一个违反项的说明
    pub fn check_invariants(&self) -> Result<(), String> {
        for pair in self.data.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.fiscal_year.year() != prev.fiscal_year.year() + 1 {
                return Err(format!(
                    "{}: 财年不连续 {} -> {}",
                    self.id, prev.fiscal_year, next.fiscal_year
                ));
            }
        }

        for point in &self.data {
            match (point.forecast, point.confidence) {
                (true, Some(ci)) if !ci.contains(point.sales) => {
                    return Err(format!(
                        "{}: {} 销售额 {} 不在置信区间 [{}, {}] 内",
                        self.id, point.fiscal_year, point.sales, ci.lower, ci.upper
                    ));
                }
                (true, None) => {
                    return Err(format!("{}: {} 预测点缺少置信区间", self.id, point.fiscal_year));
                }
                (false, Some(_)) => {
                    return Err(format!("{}: {} 历史点不应携带置信区间", self.id, point.fiscal_year));
                }
                _ => {}
            }
        }

        Ok(())
    }
}
