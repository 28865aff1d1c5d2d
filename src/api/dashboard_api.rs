// ==========================================
// 销售预测与产能规划分析系统 - 驾驶舱 API
// ==========================================
// 职责: 持有一次生成的合成数据，提供筛选项、产品视图、对比与分布查询
// 架构: API 层 → Engine 层（FixtureGenerator / FilterAggregator / metrics）
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::api::error::{validate_product_name, validate_selection, ApiError, ApiResult};
use crate::catalog::insights::product_insights;
use crate::catalog::Catalog;
use crate::config::AnalyticsConfig;
use crate::domain::{ProductData, ProductInsight};
use crate::engine::metrics::{plant_distribution, yearly_comparison};
use crate::engine::{
    filter_options, AggregatedView, DashboardMetrics, FilterAggregator, FilterOptions,
    FilterSelection, FixtureGenerator, ForecastTable, JitterSource, PlantSales, YearlySales,
};

/// 产品视图（驾驶舱单页所需全部数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub selection: FilterSelection,
    pub series: AggregatedView,
    pub metrics: DashboardMetrics,
    pub forecast_table: ForecastTable,
    pub insights: Vec<ProductInsight>,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 数据在构造时生成一次，之后只读；可在多个会话间共享
pub struct DashboardApi {
    catalog: Catalog,
    rows: Arc<Vec<ProductData>>,
    options: FilterOptions,
    aggregator: FilterAggregator,
}

impl DashboardApi {
    /// 按配置的抖动模式生成数据
    pub fn new(catalog: Catalog, config: &AnalyticsConfig) -> Self {
        let mut jitter = JitterSource::from_config(config);
        let rows = FixtureGenerator::new().generate(&catalog, &mut jitter);
        info!(rows = rows.len(), jitter = ?config.jitter, "驾驶舱数据已生成");
        Self::from_rows(catalog, rows)
    }

    /// 使用现成的数据行
    pub fn from_rows(catalog: Catalog, rows: Vec<ProductData>) -> Self {
        let options = filter_options(&catalog);
        Self {
            catalog,
            rows: Arc::new(rows),
            options,
            aggregator: FilterAggregator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rows(&self) -> &[ProductData] {
        &self.rows
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    /// 首个产品名称（驾驶舱初始选择）
    pub fn default_product(&self) -> Option<&str> {
        self.options.products.first().map(String::as_str)
    }

    /// 查询产品视图
    ///
    /// # 返回
    /// - Ok(ProductView): 聚合序列 + 指标卡 + 预测明细 + 产品洞察
    /// - Err(ApiError): 筛选值不在可选项中
    #[instrument(skip(self), fields(product = %selection.product))]
    pub fn product_view(&self, selection: &FilterSelection) -> ApiResult<ProductView> {
        validate_selection(&self.options, selection)?;

        let series = self.aggregator.aggregate(&self.rows, selection);
        let metrics = DashboardMetrics::from_series(&series.data);
        let forecast_table = ForecastTable::from_series(&series.data);
        // 洞察跟随实际展示的序列（兜底时为首行产品）
        let insights = product_insights(&series.data.product_id);

        Ok(ProductView {
            selection: selection.clone(),
            series,
            metrics,
            forecast_table,
            insights,
        })
    }

    /// 近三个历史财年对比
    pub fn yearly_comparison(&self, product: &str) -> ApiResult<Vec<YearlySales>> {
        self.ensure_product(product)?;
        Ok(yearly_comparison(&self.rows, product))
    }

    /// 当期工厂分布
    pub fn plant_distribution(&self, product: &str) -> ApiResult<Vec<PlantSales>> {
        self.ensure_product(product)?;
        Ok(plant_distribution(&self.rows, product))
    }

    fn ensure_product(&self, product: &str) -> ApiResult<()> {
        validate_product_name(product)?;
        if self.catalog.product_by_name(product).is_none() {
            return Err(ApiError::NotFound(format!("产品{}不存在", product)));
        }
        Ok(())
    }
}
