// ==========================================
// 销售预测与产能规划分析系统 - 产能规划 API
// ==========================================
// 职责: 产能规划页数据（指标、区域推荐、工厂、洞察、图表行）
// 数据: 静态夹具，构造时载入，之后只读
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::catalog::capacity::{capacity_insights, plant_capacity, region_data};
use crate::domain::{CapacityInsight, CapacityMetrics, PlantCapacity, RegionData};
use crate::engine::{CapacityAnalyzer, RankedRegion, RegionalDemandRow};

/// 产能规划页总览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityOverview {
    pub metrics: CapacityMetrics,
    pub top_recommendation: Option<RegionData>,
    pub total_expansion_potential: f64,
    pub recommendations: Vec<RankedRegion>,
    pub plants: Vec<PlantCapacity>,
    pub insights: Vec<CapacityInsight>,
    pub regional_demand: Vec<RegionalDemandRow>,
}

pub struct CapacityApi {
    regions: Vec<RegionData>,
    plants: Vec<PlantCapacity>,
    insights: Vec<CapacityInsight>,
    analyzer: CapacityAnalyzer,
}

impl CapacityApi {
    /// 载入内置夹具
    pub fn new() -> Self {
        Self::with_fixtures(region_data(), plant_capacity(), capacity_insights())
    }

    pub fn with_fixtures(
        regions: Vec<RegionData>,
        plants: Vec<PlantCapacity>,
        insights: Vec<CapacityInsight>,
    ) -> Self {
        Self {
            regions,
            plants,
            insights,
            analyzer: CapacityAnalyzer::new(),
        }
    }

    pub fn metrics(&self) -> CapacityMetrics {
        self.analyzer.metrics(&self.regions, &self.plants)
    }

    pub fn recommendations(&self) -> Vec<RankedRegion> {
        self.analyzer.rank_regions(&self.regions)
    }

    pub fn plants(&self) -> &[PlantCapacity] {
        &self.plants
    }

    pub fn insights(&self) -> &[CapacityInsight] {
        &self.insights
    }

    pub fn regional_demand(&self) -> Vec<RegionalDemandRow> {
        self.analyzer.regional_demand_rows(&self.regions)
    }

    /// 按区域 ID 查询
    pub fn region(&self, region_id: &str) -> ApiResult<&RegionData> {
        self.regions
            .iter()
            .find(|r| r.id == region_id)
            .ok_or_else(|| ApiError::NotFound(format!("区域{}不存在", region_id)))
    }

    /// 区域相关洞察（按区域名称匹配）
    pub fn region_insights(&self, region_id: &str) -> ApiResult<Vec<CapacityInsight>> {
        let region = self.region(region_id)?;
        Ok(self
            .analyzer
            .insights_for_region(&self.insights, &region.name)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn overview(&self) -> CapacityOverview {
        CapacityOverview {
            metrics: self.metrics(),
            top_recommendation: self.analyzer.top_recommendation(&self.regions).cloned(),
            total_expansion_potential: self.analyzer.total_expansion_potential(&self.plants),
            recommendations: self.recommendations(),
            plants: self.plants.clone(),
            insights: self.insights.clone(),
            regional_demand: self.regional_demand(),
        }
    }
}

impl Default for CapacityApi {
    fn default() -> Self {
        Self::new()
    }
}
