// ==========================================
// 销售预测与产能规划分析系统 - 筛选聚合引擎
// ==========================================
// 职责: 按 产品/工厂/区域/类别 筛选生成行，并按财年求和
// 输入: Vec<ProductData> + FilterSelection
// 输出: AggregatedView（零匹配时返回首行作为兜底哨兵）
// ==========================================

use crate::catalog::Catalog;
use crate::domain::{Category, ConfidenceInterval, FiscalYear, ProductData, SalesDataPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// 不限定筛选值
pub const ALL: &str = "all";

// ==========================================
// FilterSelection - 筛选条件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// 产品名称（精确匹配，必填）
    pub product: String,
    /// 工厂 ID 或 "all"
    pub plant: String,
    /// 区域 ID 或 "all"
    pub area: String,
    /// 类别显示名称或 "all"
    pub category: String,
}

impl FilterSelection {
    /// 仅限定产品，其余维度为 "all"
    pub fn for_product(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            plant: ALL.to_string(),
            area: ALL.to_string(),
            category: ALL.to_string(),
        }
    }

    pub fn with_plant(mut self, plant: impl Into<String>) -> Self {
        self.plant = plant.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// 行是否满足筛选条件
    pub fn matches(&self, row: &ProductData) -> bool {
        row.name == self.product
            && dimension_matches(&self.plant, &row.plant)
            && dimension_matches(&self.area, &row.area)
            && dimension_matches(&self.category, row.category.label())
    }
}

fn dimension_matches(selected: &str, actual: &str) -> bool {
    selected == ALL || selected == actual
}

// ==========================================
// AggregatedView - 聚合结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedView {
    pub data: ProductData,
    /// 参与聚合的行数
    pub matched_rows: usize,
    /// true 表示零匹配兜底（data 为首个目录行，不是真实聚合结果）
    pub fallback: bool,
}

impl AggregatedView {
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

/// 筛选器可选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// 去重后的产品名称（目录顺序）
    pub products: Vec<String>,
    pub plants: Vec<FilterOption>,
    pub areas: Vec<FilterOption>,
    pub categories: Vec<FilterOption>,
}

/// 构造筛选器可选项（工厂/区域/类别均以 "all" 开头）
pub fn filter_options(catalog: &Catalog) -> FilterOptions {
    let mut products: Vec<String> = Vec::new();
    for product in &catalog.products {
        if !products.contains(&product.name) {
            products.push(product.name.clone());
        }
    }

    let all = |label: &str| FilterOption {
        value: ALL.to_string(),
        label: label.to_string(),
    };

    let mut plants = vec![all("All Plants")];
    plants.extend(catalog.plants.iter().map(|p| FilterOption {
        value: p.id.clone(),
        label: p.name.clone(),
    }));

    let mut areas = vec![all("All Areas")];
    areas.extend(catalog.areas.iter().map(|a| FilterOption {
        value: a.id.clone(),
        label: a.name.clone(),
    }));

    let mut categories = vec![all("All Categories")];
    categories.extend(Category::ALL.iter().map(|c| FilterOption {
        value: c.label().to_string(),
        label: c.label().to_string(),
    }));

    FilterOptions {
        products,
        plants,
        areas,
        categories,
    }
}

// ==========================================
// FilterAggregator - 筛选聚合引擎
// ==========================================
#[derive(Debug, Default)]
pub struct FilterAggregator {
    // 无状态引擎
}

#[derive(Default)]
struct YearAccumulator {
    sales: i64,
    forecast: bool,
    lower: Option<i64>,
    upper: Option<i64>,
}

impl FilterAggregator {
    pub fn new() -> Self {
        Self {}
    }

    /// 筛选并按财年聚合
    ///
    /// 规则:
    /// 1) 产品名称精确匹配；工厂/区域/类别为 "all" 或精确匹配
    /// 2) 同财年 sales 求和；confidence.lower / upper 分别求和
    /// 3) 无任何成员携带置信区间的财年，聚合结果也不携带
    /// 4) 结果按财年升序
    /// 5) 零匹配时返回首行作为兜底（fallback=true）
    #[instrument(skip(self, rows), fields(rows = rows.len(), product = %filters.product))]
    pub fn aggregate(&self, rows: &[ProductData], filters: &FilterSelection) -> AggregatedView {
        let matched: Vec<&ProductData> = rows.iter().filter(|row| filters.matches(row)).collect();

        let Some(first) = matched.first() else {
            warn!(
                plant = %filters.plant,
                area = %filters.area,
                category = %filters.category,
                "筛选条件零匹配，返回兜底数据"
            );
            return self.fallback(rows, filters);
        };

        let mut by_year: BTreeMap<FiscalYear, YearAccumulator> = BTreeMap::new();
        for row in &matched {
            for point in &row.data {
                let is_new = !by_year.contains_key(&point.fiscal_year);
                let acc = by_year.entry(point.fiscal_year).or_default();
                if is_new {
                    acc.forecast = point.forecast;
                }
                acc.sales += point.sales;
                if let Some(ci) = point.confidence {
                    acc.lower = Some(acc.lower.unwrap_or(0) + ci.lower);
                    acc.upper = Some(acc.upper.unwrap_or(0) + ci.upper);
                }
            }
        }

        let data = by_year
            .into_iter()
            .map(|(fiscal_year, acc)| SalesDataPoint {
                fiscal_year,
                sales: acc.sales,
                forecast: acc.forecast,
                confidence: match (acc.lower, acc.upper) {
                    (Some(lower), Some(upper)) => Some(ConfidenceInterval { lower, upper }),
                    _ => None,
                },
            })
            .collect();

        debug!(matched = matched.len(), "筛选聚合完成");

        AggregatedView {
            data: ProductData {
                id: first.id.clone(),
                product_id: first.product_id.clone(),
                name: filters.product.clone(),
                category: first.category,
                plant: filters.plant.clone(),
                area: filters.area.clone(),
                data,
            },
            matched_rows: matched.len(),
            fallback: false,
        }
    }

    fn fallback(&self, rows: &[ProductData], filters: &FilterSelection) -> AggregatedView {
        let data = match rows.first() {
            Some(first) => first.clone(),
            None => ProductData {
                id: String::new(),
                product_id: String::new(),
                name: filters.product.clone(),
                category: Category::Electrification,
                plant: filters.plant.clone(),
                area: filters.area.clone(),
                data: Vec::new(),
            },
        };

        AggregatedView {
            data,
            matched_rows: 0,
            fallback: true,
        }
    }
}
