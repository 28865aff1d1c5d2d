// ==========================================
// 销售预测与产能规划分析系统 - 产能规划分析引擎
// ==========================================
// 职责: 汇总供需指标、区域推荐排名、扩产潜力、图表行
// 输入: RegionData / PlantCapacity / CapacityInsight 夹具
// ==========================================

use crate::domain::{CapacityInsight, CapacityMetrics, PlantCapacity, RegionData, SupplyBalance};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// 推荐等级
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationTier {
    Strong,   // >= 85
    Moderate, // >= 70
    Weak,
}

impl RecommendationTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 85 => RecommendationTier::Strong,
            s if s >= 70 => RecommendationTier::Moderate,
            _ => RecommendationTier::Weak,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRegion {
    pub rank: usize,
    pub tier: RecommendationTier,
    pub demand_supply_gap: f64,
    pub region: RegionData,
}

/// 区域供需图表行（单位: 百万）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalDemandRow {
    pub name: String,
    pub demand: f64,
    pub supply: f64,
    pub forecasted: f64,
}

// ==========================================
// CapacityAnalyzer
// ==========================================
#[derive(Debug, Default)]
pub struct CapacityAnalyzer {
    // 无状态引擎
}

impl CapacityAnalyzer {
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总供需指标
    ///
    /// 分母为 0 时 avg_utilization / supply_gap_percentage 返回 0
    #[instrument(skip_all, fields(regions = regions.len(), plants = plants.len()))]
    pub fn metrics(&self, regions: &[RegionData], plants: &[PlantCapacity]) -> CapacityMetrics {
        let total_current_demand: f64 = regions.iter().map(|r| r.current_demand).sum();
        let total_forecasted_demand: f64 = regions.iter().map(|r| r.forecasted_demand).sum();
        let total_current_supply: f64 = regions.iter().map(|r| r.current_supply).sum();
        let total_plant_capacity: f64 = plants.iter().map(|p| p.current_capacity).sum();
        let avg_utilization = if plants.is_empty() {
            0.0
        } else {
            plants.iter().map(|p| p.utilization_rate).sum::<f64>() / plants.len() as f64
        };
        let demand_supply_gap = total_current_demand - total_current_supply;
        let forecasted_gap = total_forecasted_demand - total_current_supply;
        let supply_gap_percentage = if total_current_demand == 0.0 {
            0.0
        } else {
            demand_supply_gap / total_current_demand * 100.0
        };

        CapacityMetrics {
            total_current_demand,
            total_forecasted_demand,
            total_current_supply,
            total_plant_capacity,
            avg_utilization,
            demand_supply_gap,
            forecasted_gap,
            supply_gap_percentage,
        }
    }

    /// 区域推荐排名（分数降序，同分保持原顺序）
    pub fn rank_regions(&self, regions: &[RegionData]) -> Vec<RankedRegion> {
        let mut sorted: Vec<&RegionData> = regions.iter().collect();
        sorted.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));

        sorted
            .into_iter()
            .enumerate()
            .map(|(index, region)| RankedRegion {
                rank: index + 1,
                tier: RecommendationTier::from_score(region.recommendation_score),
                demand_supply_gap: region.demand_supply_gap(),
                region: region.clone(),
            })
            .collect()
    }

    /// 最高推荐区域
    pub fn top_recommendation<'a>(&self, regions: &'a [RegionData]) -> Option<&'a RegionData> {
        regions
            .iter()
            .fold(None, |best: Option<&RegionData>, r| match best {
                Some(b) if b.recommendation_score >= r.recommendation_score => Some(b),
                _ => Some(r),
            })
    }

    /// 全部工厂可追加产能
    pub fn total_expansion_potential(&self, plants: &[PlantCapacity]) -> f64 {
        plants.iter().map(|p| p.expansion_potential).sum()
    }

    /// 区域供需图表行
    pub fn regional_demand_rows(&self, regions: &[RegionData]) -> Vec<RegionalDemandRow> {
        regions
            .iter()
            .map(|r| RegionalDemandRow {
                name: r.name.clone(),
                demand: r.current_demand / 1_000_000.0,
                supply: r.current_supply / 1_000_000.0,
                forecasted: r.forecasted_demand / 1_000_000.0,
            })
            .collect()
    }

    /// 按区域名称查找洞察（仅展示用匹配）
    pub fn insights_for_region<'a>(
        &self,
        insights: &'a [CapacityInsight],
        region_name: &str,
    ) -> Vec<&'a CapacityInsight> {
        insights
            .iter()
            .filter(|i| i.region.as_deref() == Some(region_name))
            .collect()
    }
}
