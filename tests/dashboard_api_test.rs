// ==========================================
// DashboardApi / CapacityApi 集成测试
// ==========================================
// 测试范围:
// 1. 筛选项: 产品去重、"all" 前缀
// 2. 产品视图: 聚合、指标卡、预测明细、洞察
// 3. 输入校验: 未知产品/筛选值
// 4. 对比与分布
// 5. 产能规划总览
// ==========================================


use sales_capacity_analytics::api::{ApiError, CapacityApi, DashboardApi};
use sales_capacity_analytics::catalog::Catalog;
use sales_capacity_analytics::domain::FiscalYear;
use sales_capacity_analytics::engine::{growth_pct, FilterSelection, RecommendationTier, ALL};
use test_helpers::{ecu_scenario_catalog, fast_config};

fn api() -> DashboardApi {
    DashboardApi::new(Catalog::default(), &fast_config())
}

#[test]
fn test_filter_options() {
    let api = api();
    let options = api.filter_options();
    assert_eq!(options.products.len(), 8);
    assert_eq!(api.default_product(), Some("ECU"));
    assert_eq!(options.plants[0].value, ALL);
    assert_eq!(options.areas[0].value, ALL);
    assert_eq!(options.categories[0].value, ALL);
    assert!(options.categories.iter().any(|c| c.value == "Power train"));
}

#[test]
fn test_product_view_metrics_match_series() {
    let view = api()
        .product_view(&FilterSelection::for_product("ECU").with_plant("plant-1"))
        .expect("product view failed");
    assert_eq!(view.series.matched_rows, 4);

    let series = &view.series.data;
    let fy25 = series.point(FiscalYear::LAST_HISTORICAL).unwrap().sales;
    let fy24 = series.point(FiscalYear::new(24).unwrap()).unwrap().sales;
    assert_eq!(view.metrics.current_sales, fy25);
    assert_eq!(view.metrics.current_year, Some(FiscalYear::LAST_HISTORICAL));
    assert!((view.metrics.yoy_growth - growth_pct(fy25, fy24)).abs() < 1e-9);
    assert_eq!(
        view.metrics.latest_forecast,
        series.point(FiscalYear::LAST_FORECAST).unwrap().sales
    );

    let table = &view.forecast_table;
    assert_eq!(table.rows.len(), 10);
    assert_eq!(table.rows[0].fiscal_year, FiscalYear::FIRST_FORECAST);
    assert!((table.rows[0].growth - growth_pct(table.rows[0].sales, fy25)).abs() < 1e-9);
    assert_eq!(
        table.total_forecast_sales,
        table.rows.iter().map(|r| r.sales).sum::<i64>()
    );
    assert!(view.insights.iter().all(|i| !i.title.is_empty()));
}

#[test]
fn test_ecu_scenario_through_api() {
    let api = DashboardApi::new(ecu_scenario_catalog(), &fast_config());
    let view = api
        .product_view(&FilterSelection::for_product("ECU"))
        .expect("product view failed");
    assert_eq!(view.series.matched_rows, 4);
    let expected: i64 = api
        .rows()
        .iter()
        .filter(|r| r.name == "ECU")
        .map(|r| r.point(FiscalYear::LAST_HISTORICAL).unwrap().sales)
        .sum();
    assert_eq!(view.metrics.current_sales, expected);
}

#[test]
fn test_fallback_view_insights_follow_displayed_series() {
    let api = api();
    let view = api
        .product_view(&FilterSelection::for_product("Motor").with_category("Thermal"))
        .expect("product view failed");
    assert!(view.series.is_fallback());
    assert_eq!(view.series.data.product_id, "ecu");
    assert_eq!(view.series.data.name, "ECU");

    // 兜底序列是 ECU，洞察卡片也应是 ECU 的
    let ecu = api
        .product_view(&FilterSelection::for_product("ECU"))
        .expect("product view failed");
    assert!(!ecu.insights.is_empty());
    assert_eq!(view.insights, ecu.insights);

    let motor = api
        .product_view(&FilterSelection::for_product("Motor"))
        .expect("product view failed");
    assert_ne!(view.insights, motor.insights);
}

#[test]
fn test_invalid_selection_rejected() {
    let api = api();
    assert!(matches!(
        api.product_view(&FilterSelection::for_product("Widget")),
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        api.product_view(&FilterSelection::for_product("ECU").with_plant("plant-9")),
        Err(ApiError::UnknownFilterValue { .. })
    ));
}

#[test]
fn test_yearly_comparison_last_three_years() {
    let api = api();
    let yearly = api.yearly_comparison("Motor").expect("comparison failed");
    let labels: Vec<String> = yearly.iter().map(|y| y.fiscal_year.label()).collect();
    assert_eq!(labels, vec!["FY23", "FY24", "FY25"]);

    let fy25_total: i64 = api
        .rows()
        .iter()
        .filter(|r| r.name == "Motor")
        .map(|r| r.point(FiscalYear::LAST_HISTORICAL).unwrap().sales)
        .sum();
    assert_eq!(yearly[2].sales, fy25_total);

    let plants = api.plant_distribution("Motor").expect("distribution failed");
    assert_eq!(plants.iter().map(|p| p.sales).sum::<i64>(), fy25_total);
}

#[test]
fn test_capacity_overview() {
    let overview = CapacityApi::new().overview();
    assert_eq!(overview.metrics.total_current_demand, 127_000_000.0);
    assert_eq!(overview.recommendations[0].tier, RecommendationTier::Strong);
    let scores: Vec<u8> = overview
        .recommendations
        .iter()
        .map(|r| r.region.recommendation_score)
        .collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
    assert!(overview.plants.iter().any(|p| p.is_near_limit()));
}
