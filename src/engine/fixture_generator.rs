// ==========================================
// 销售预测与产能规划分析系统 - 合成数据生成引擎
// ==========================================
// 职责: 产品 × 工厂 × 区域 交叉生成 FY19-FY35 销售序列
// 输入: Catalog + 抖动来源
// 输出: Vec<ProductData>（每行 17 点：7 历史 + 10 预测）
// 红线: 预测点不消耗随机数，仅历史点带抖动
// ==========================================

use crate::catalog::Catalog;
use crate::config::{AnalyticsConfig, JitterMode};
use crate::domain::{ConfidenceInterval, FiscalYear, ProductData, SalesDataPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use tracing::{debug, instrument};

// ==========================================
// JitterSource - 历史点抖动来源
// ==========================================
// 抖动乘数范围: [0.95, 1.05)
pub enum JitterSource {
    /// 运行时环境随机源（每次运行结果不同）
    Ambient,
    /// 固定种子
    Seeded(StdRng),
    /// 关闭抖动，乘数恒为 1.0
    Disabled,
}

impl JitterSource {
    pub fn seeded(seed: u64) -> Self {
        JitterSource::Seeded(StdRng::seed_from_u64(seed))
    }

    /// 按配置构造
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        match (config.jitter, config.seed) {
            (JitterMode::Disabled, _) => JitterSource::Disabled,
            (JitterMode::Seeded, Some(seed)) => JitterSource::seeded(seed),
            // 未提供种子的 seeded 已在配置校验阶段拒绝，这里按环境随机处理
            _ => JitterSource::Ambient,
        }
    }

    /// 下一个抖动乘数
    pub fn next_factor(&mut self) -> f64 {
        match self {
            JitterSource::Ambient => jitter_factor(&mut rand::thread_rng()),
            JitterSource::Seeded(rng) => jitter_factor(rng),
            JitterSource::Disabled => 1.0,
        }
    }
}

fn jitter_factor<R: Rng>(rng: &mut R) -> f64 {
    0.95 + rng.gen_range(0.0..0.1)
}

// ==========================================
// 公式组件
// ==========================================

/// 市场事件乘数（FY20 / FY21 冲击）
pub fn market_event(fiscal_year: FiscalYear) -> f64 {
    match fiscal_year.year() {
        20 => 0.85,
        21 => 0.92,
        _ => 1.0,
    }
}

/// 成熟期乘数（远期增长放缓）
pub fn maturation_factor(fiscal_year: FiscalYear) -> f64 {
    match fiscal_year.year() {
        y if y > 32 => 0.93,
        y if y > 30 => 0.96,
        _ => 1.0,
    }
}

/// 增长 + 季节调制（不含事件/成熟期/抖动）
pub fn trend_value(base: f64, growth_rate: f64, offset: i32) -> f64 {
    let i = offset as f64;
    base * (1.0 + growth_rate).powi(offset)
        * (1.0 + 0.08 * (i * PI / 3.0).sin())
        * (1.0 + 0.05 * (i * PI / 4.0).cos())
}

/// 预测置信区间：随预测年限增加而变宽
pub fn confidence_bounds(sales: i64, fiscal_year: FiscalYear) -> ConfidenceInterval {
    let horizon = (fiscal_year.year() as f64) - (FiscalYear::FIRST_FORECAST.year() as f64);
    let s = sales as f64;
    ConfidenceInterval {
        lower: (s * (0.85 - 0.01 * horizon)).round() as i64,
        upper: (s * (1.15 + 0.01 * horizon)).round() as i64,
    }
}

// ==========================================
// FixtureGenerator - 合成数据生成引擎
// ==========================================
#[derive(Debug, Default)]
pub struct FixtureGenerator {
    // 无状态引擎
}

impl FixtureGenerator {
    pub fn new() -> Self {
        Self {}
    }

    /// 生成全部组合的销售序列
    ///
    /// # 参数
    /// - `catalog`: 生成目录
    /// - `jitter`: 历史点抖动来源
    ///
    /// # 返回
    /// 按 产品 → 工厂 → 区域 顺序排列的 ProductData
    #[instrument(skip_all, fields(rows = catalog.row_count()))]
    pub fn generate(&self, catalog: &Catalog, jitter: &mut JitterSource) -> Vec<ProductData> {
        self.generate_with(catalog, || jitter.next_factor())
    }

    /// 使用任意随机源生成（便于测试注入）
    pub fn generate_with_rng<R: Rng>(&self, catalog: &Catalog, rng: &mut R) -> Vec<ProductData> {
        self.generate_with(catalog, || jitter_factor(&mut *rng))
    }

    fn generate_with<F>(&self, catalog: &Catalog, mut next_jitter: F) -> Vec<ProductData>
    where
        F: FnMut() -> f64,
    {
        let mut rows = Vec::with_capacity(catalog.row_count());

        for product in &catalog.products {
            let category_variation = catalog.category_variation(product.category);
            for plant in &catalog.plants {
                for area in &catalog.areas {
                    let base = product.base_value
                        * plant.multiplier
                        * area.multiplier
                        * category_variation;

                    let mut data = Vec::with_capacity(17);

                    // 1. 历史点 FY19-FY25
                    for fy in FiscalYear::historical_range() {
                        let value = trend_value(base, product.growth_rate, fy.offset())
                            * market_event(fy)
                            * next_jitter();
                        data.push(SalesDataPoint::historical(fy, value.round() as i64));
                    }

                    // 2. 预测点 FY26-FY35（无抖动）
                    for fy in FiscalYear::forecast_range() {
                        let value = trend_value(base, product.growth_rate, fy.offset())
                            * maturation_factor(fy);
                        let sales = value.round() as i64;
                        data.push(SalesDataPoint::forecast(fy, sales, confidence_bounds(sales, fy)));
                    }

                    rows.push(ProductData {
                        id: ProductData::row_key(&product.id, &plant.id, &area.id),
                        product_id: product.id.clone(),
                        name: product.name.clone(),
                        category: product.category,
                        plant: plant.id.clone(),
                        area: area.id.clone(),
                        data,
                    });
                }
            }
        }

        debug!(count = rows.len(), "合成销售序列生成完成");
        rows
    }
}
