// ==========================================
// 产能规划夹具
// ==========================================
// 区域需求 / 工厂产能 / 产能洞察 —— 静态数据，每次视图加载重新构造
// ==========================================

use crate::domain::{
    CapacityInsight, CapacityInsightType, CompetitionLevel, Coordinates, Level, PlantCapacity,
    RegionData,
};

/// 区域需求与供给数据
pub fn region_data() -> Vec<RegionData> {
    vec![
        region(
            "reg-1", "Southeast Asia", "Vietnam/Thailand", (13.7563, 100.5018),
            [25_000_000.0, 35_000_000.0, 18_000_000.0],
            12.5, 45.0, 289.0, 35.0, CompetitionLevel::Medium, 92,
        ),
        region(
            "reg-2", "Eastern Europe", "Poland", (52.2297, 21.0122),
            [18_000_000.0, 23_000_000.0, 19_000_000.0],
            7.8, 52.0, 124.0, 58.0, CompetitionLevel::High, 73,
        ),
        region(
            "reg-3", "West Africa", "Nigeria", (9.0820, 8.6753),
            [12_000_000.0, 19_000_000.0, 7_000_000.0],
            15.2, 68.0, 226.0, 22.0, CompetitionLevel::Low, 85,
        ),
        region(
            "reg-4", "South America", "Brazil", (-23.5505, -46.6333),
            [22_000_000.0, 28_000_000.0, 21_000_000.0],
            8.3, 58.0, 25.0, 48.0, CompetitionLevel::Medium, 68,
        ),
        region(
            "reg-5", "Middle East", "UAE", (25.2048, 55.2708),
            [15_000_000.0, 21_000_000.0, 12_000_000.0],
            10.5, 62.0, 118.0, 42.0, CompetitionLevel::Medium, 79,
        ),
        region(
            "reg-6", "Central Asia", "India", (28.6139, 77.2090),
            [35_000_000.0, 48_000_000.0, 32_000_000.0],
            11.2, 38.0, 464.0, 52.0, CompetitionLevel::High, 88,
        ),
    ]
}

/// 工厂产能数据
pub fn plant_capacity() -> Vec<PlantCapacity> {
    vec![
        plant("plant-1", "North Plant", 45_000_000.0, 87.0, 15_000_000.0, 32.0),
        plant("plant-2", "South Plant", 32_000_000.0, 72.0, 8_000_000.0, 38.0),
        plant("plant-3", "East Plant", 38_000_000.0, 91.0, 12_000_000.0, 35.0),
        plant("plant-4", "West Plant", 28_000_000.0, 65.0, 10_000_000.0, 41.0),
    ]
}

/// 产能洞察
pub fn capacity_insights() -> Vec<CapacityInsight> {
    vec![
        CapacityInsight {
            id: "cap-ins-1".to_string(),
            insight_type: CapacityInsightType::NewRegion,
            title: "Recommended: Southeast Asia Expansion".to_string(),
            description: "Establish new manufacturing facility in Vietnam or Thailand to capitalize on high growth market with 12.5% CAGR.".to_string(),
            region: Some("Southeast Asia".to_string()),
            expected_roi: 24.5,
            investment_required: 45_000_000.0,
            time_to_market: "18-24 months".to_string(),
            priority: Level::High,
            reasoning: "Strong demand-supply gap of 7M units annually. Low logistics costs ($45/unit) and proximity to raw material suppliers make this region highly attractive. Growing middle class and favorable trade agreements further enhance market potential.".to_string(),
        },
        CapacityInsight {
            id: "cap-ins-2".to_string(),
            insight_type: CapacityInsightType::Expansion,
            title: "Expand East Plant Capacity".to_string(),
            description: "East Plant operating at 91% capacity. Expand by 12M units to meet increasing regional demand.".to_string(),
            region: None,
            expected_roi: 18.3,
            investment_required: 22_000_000.0,
            time_to_market: "12-15 months".to_string(),
            priority: Level::High,
            reasoning: "Current utilization rate of 91% indicates near-maximum capacity. Expansion will prevent production bottlenecks and enable capture of growing market share in Asia Pacific region. Lower operating costs ($35/unit) ensure strong margins.".to_string(),
        },
        CapacityInsight {
            id: "cap-ins-3".to_string(),
            insight_type: CapacityInsightType::NewRegion,
            title: "Evaluate West Africa Market Entry".to_string(),
            description: "Consider establishing operations in Nigeria to serve rapidly growing West African market (15.2% CAGR).".to_string(),
            region: Some("West Africa".to_string()),
            expected_roi: 22.8,
            investment_required: 38_000_000.0,
            time_to_market: "24-30 months".to_string(),
            priority: Level::Medium,
            reasoning: "Highest growth rate at 15.2% CAGR with massive demand-supply gap of 5M units. Low competition and untapped market (22% penetration) present first-mover advantage. Higher logistics costs offset by market potential.".to_string(),
        },
        CapacityInsight {
            id: "cap-ins-4".to_string(),
            insight_type: CapacityInsightType::Optimization,
            title: "Optimize West Plant Utilization".to_string(),
            description: "West Plant operating at only 65% capacity. Optimize production scheduling and reduce operating costs.".to_string(),
            region: None,
            expected_roi: 12.5,
            investment_required: 3_000_000.0,
            time_to_market: "6-9 months".to_string(),
            priority: Level::Medium,
            reasoning: "Low utilization indicates operational inefficiency. Process optimization and demand reallocation can improve capacity usage to 80%+, reducing per-unit costs from $41 to $35 and improving overall profitability.".to_string(),
        },
        CapacityInsight {
            id: "cap-ins-5".to_string(),
            insight_type: CapacityInsightType::NewRegion,
            title: "Strategic Entry: Central Asia (India)".to_string(),
            description: "Establish presence in India to serve large, growing market with 11.2% CAGR and lowest logistics costs.".to_string(),
            region: Some("Central Asia".to_string()),
            expected_roi: 21.2,
            investment_required: 52_000_000.0,
            time_to_market: "20-26 months".to_string(),
            priority: Level::High,
            reasoning: "Largest total demand (35M units currently, 48M forecasted) with competitive logistics costs at $38/unit. High population density and growing middle class create sustained demand. Despite high competition, market size justifies entry.".to_string(),
        },
        CapacityInsight {
            id: "cap-ins-6".to_string(),
            insight_type: CapacityInsightType::Risk,
            title: "Monitor South America Capacity Surplus".to_string(),
            description: "Current supply exceeds demand in Brazil market. Monitor closely to avoid overproduction.".to_string(),
            region: Some("South America".to_string()),
            expected_roi: 0.0,
            investment_required: 0.0,
            time_to_market: "N/A".to_string(),
            priority: Level::Low,
            reasoning: "Supply-demand balance is healthy (21M supply vs 22M demand), but modest 8.3% growth rate and medium competition suggest cautious approach. Focus on market penetration improvement rather than capacity expansion.".to_string(),
        },
    ]
}

// [current_demand, forecasted_demand, current_supply]
#[allow(clippy::too_many_arguments)]
fn region(
    id: &str,
    name: &str,
    country: &str,
    (lat, lng): (f64, f64),
    [current_demand, forecasted_demand, current_supply]: [f64; 3],
    growth_rate: f64,
    logistics_cost: f64,
    population_density: f64,
    market_penetration: f64,
    competition_level: CompetitionLevel,
    recommendation_score: u8,
) -> RegionData {
    RegionData {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        coordinates: Coordinates { lat, lng },
        current_demand,
        forecasted_demand,
        current_supply,
        growth_rate,
        logistics_cost,
        population_density,
        market_penetration,
        competition_level,
        recommendation_score,
    }
}

fn plant(
    plant_id: &str,
    plant_name: &str,
    current_capacity: f64,
    utilization_rate: f64,
    expansion_potential: f64,
    operating_cost: f64,
) -> PlantCapacity {
    PlantCapacity {
        plant_id: plant_id.to_string(),
        plant_name: plant_name.to_string(),
        current_capacity,
        utilization_rate,
        expansion_potential,
        operating_cost,
    }
}
