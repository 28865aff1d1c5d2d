// ==========================================
// 销售预测与产能规划分析系统 - 产能规划领域模型
// ==========================================
// 职责: 区域需求、工厂产能、产能洞察、汇总指标
// 说明: 各记录自包含，仅 CapacityInsight.region 以区域名称做展示匹配
// ==========================================

use crate::domain::types::{CapacityInsightType, CompetitionLevel, Level};
use serde::{Deserialize, Serialize};

// ==========================================
// RegionData - 区域需求与供给
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionData {
    pub id: String,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub current_demand: f64,    // 年需求 (units)
    pub forecasted_demand: f64, // 五年后需求 (units)
    pub current_supply: f64,    // 当前供给能力 (units)
    pub growth_rate: f64,       // CAGR (%)
    pub logistics_cost: f64,    // 单位物流成本 (USD)
    pub population_density: f64,
    pub market_penetration: f64, // (%)
    pub competition_level: CompetitionLevel,
    pub recommendation_score: u8, // 0-100
}

// ==========================================
// PlantCapacity - 工厂产能
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantCapacity {
    pub plant_id: String,
    pub plant_name: String,
    pub current_capacity: f64,    // units/年
    pub utilization_rate: f64,    // (%)
    pub expansion_potential: f64, // 可追加产能 (units)
    pub operating_cost: f64,      // 单位运营成本 (USD)
}

// ==========================================
// CapacityInsight - 产能洞察
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub insight_type: CapacityInsightType,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "expectedROI")]
    pub expected_roi: f64,          // (%)
    pub investment_required: f64,   // USD
    pub time_to_market: String,     // 例如 "18-24 months"
    pub priority: Level,
    pub reasoning: String,
}

// ==========================================
// CapacityMetrics - 产能汇总指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityMetrics {
    pub total_current_demand: f64,
    pub total_forecasted_demand: f64,
    pub total_current_supply: f64,
    pub total_plant_capacity: f64,
    pub avg_utilization: f64,
    pub demand_supply_gap: f64,
    pub forecasted_gap: f64,
    pub supply_gap_percentage: f64,
}

// ==========================================
// Trait: SupplyBalance
// ==========================================
// 用途: 区域供需缺口判断
pub trait SupplyBalance {
    /// 当前供需缺口（需求 - 供给，可为负）
    fn demand_supply_gap(&self) -> f64;

    /// 预测供需缺口（预测需求 - 当前供给）
    fn forecasted_gap(&self) -> f64;

    /// 是否供给不足
    fn is_undersupplied(&self) -> bool {
        self.demand_supply_gap() > 0.0
    }
}

impl SupplyBalance for RegionData {
    fn demand_supply_gap(&self) -> f64 {
        self.current_demand - self.current_supply
    }

    fn forecasted_gap(&self) -> f64 {
        self.forecasted_demand - self.current_supply
    }
}

impl PlantCapacity {
    /// 已使用产能 (units)
    pub fn used_capacity(&self) -> f64 {
        self.current_capacity * self.utilization_rate / 100.0
    }

    /// 剩余产能 (units)，不小于 0
    pub fn headroom(&self) -> f64 {
        (self.current_capacity - self.used_capacity()).max(0.0)
    }

    /// 利用率是否接近上限（>= 85%）
    pub fn is_near_limit(&self) -> bool {
        self.utilization_rate >= 85.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(demand: f64, supply: f64) -> RegionData {
        RegionData {
            id: "reg-x".to_string(),
            name: "Test".to_string(),
            country: "Nowhere".to_string(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            current_demand: demand,
            forecasted_demand: demand * 1.5,
            current_supply: supply,
            growth_rate: 5.0,
            logistics_cost: 40.0,
            population_density: 100.0,
            market_penetration: 30.0,
            competition_level: CompetitionLevel::Low,
            recommendation_score: 80,
        }
    }

    #[test]
    fn test_supply_balance() {
        let r = region(100.0, 70.0);
        assert_eq!(r.demand_supply_gap(), 30.0);
        assert_eq!(r.forecasted_gap(), 80.0);
        assert!(r.is_undersupplied());
        assert!(!region(50.0, 70.0).is_undersupplied());
    }

    #[test]
    fn test_plant_headroom() {
        let p = PlantCapacity {
            plant_id: "plant-1".to_string(),
            plant_name: "North Plant".to_string(),
            current_capacity: 1000.0,
            utilization_rate: 87.0,
            expansion_potential: 200.0,
            operating_cost: 30.0,
        };
        assert!((p.used_capacity() - 870.0).abs() < 1e-9);
        assert!((p.headroom() - 130.0).abs() < 1e-9);
        assert!(p.is_near_limit());
    }

    #[test]
    fn test_insight_serializes_type_and_roi() {
        let insight = CapacityInsight {
            id: "cap-ins-x".to_string(),
            insight_type: CapacityInsightType::NewRegion,
            title: "t".to_string(),
            description: "d".to_string(),
            region: None,
            expected_roi: 10.0,
            investment_required: 1.0,
            time_to_market: "N/A".to_string(),
            priority: Level::Low,
            reasoning: "r".to_string(),
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["type"], "new-region");
        assert_eq!(json["expectedROI"], 10.0);
        assert!(json.get("region").is_none());
    }
}
