// ==========================================
// 销售预测与产能规划分析系统 - 驾驶舱指标计算
// ==========================================
// 职责: 当期销售/同比增长/远期预测/历史总额/平均增长、
//       预测明细表、近三年对比、工厂分布
// 红线: 增长率分母为 0 时返回 0，不产生 NaN/Infinity
// ==========================================

use crate::domain::{ConfidenceInterval, FiscalYear, ProductData, SalesDataPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 百分比增长率；previous 为 0 时返回 0.0
pub fn growth_pct(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    (current - previous) as f64 / previous as f64 * 100.0
}

/// 相邻点增长率的算术平均；不足两点返回 None
fn average_step_growth(points: &[&SalesDataPoint]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let total: f64 = points
        .windows(2)
        .map(|pair| growth_pct(pair[1].sales, pair[0].sales))
        .sum();
    Some(total / (points.len() - 1) as f64)
}

// ==========================================
// DashboardMetrics - 指标卡
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// 最新历史财年销售额（FY25）
    pub current_sales: i64,
    pub current_year: Option<FiscalYear>,
    /// 同比增长 (%)
    pub yoy_growth: f64,
    /// 最远预测财年销售额（FY35）
    pub latest_forecast: i64,
    pub latest_forecast_year: Option<FiscalYear>,
    /// 历史合计
    pub total_historical_sales: i64,
    /// 历史平均增长 (%)
    pub average_growth_rate: f64,
}

impl DashboardMetrics {
    pub fn from_series(series: &ProductData) -> Self {
        let historical: Vec<&SalesDataPoint> = series.historical().collect();
        let latest_historical = historical.last();
        let previous_year = historical.len().checked_sub(2).map(|i| historical[i]);
        let latest = series.data.last();

        let yoy_growth = match (latest_historical, previous_year) {
            (Some(current), Some(previous)) => growth_pct(current.sales, previous.sales),
            _ => 0.0,
        };

        Self {
            current_sales: latest_historical.map(|p| p.sales).unwrap_or(0),
            current_year: latest_historical.map(|p| p.fiscal_year),
            yoy_growth,
            latest_forecast: latest.map(|p| p.sales).unwrap_or(0),
            latest_forecast_year: latest.map(|p| p.fiscal_year),
            total_historical_sales: historical.iter().map(|p| p.sales).sum(),
            average_growth_rate: average_step_growth(&historical).unwrap_or(0.0),
        }
    }
}

// ==========================================
// ForecastTable - 预测明细表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRow {
    pub fiscal_year: FiscalYear,
    pub sales: i64,
    /// 相对上一行（首行相对最后历史年）的增长 (%)
    pub growth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ConfidenceInterval>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastTable {
    pub rows: Vec<ForecastRow>,
    /// 预测期平均增长；不足两行为 None
    pub average_growth: Option<f64>,
    pub total_forecast_sales: i64,
}

impl ForecastTable {
    pub fn from_series(series: &ProductData) -> Self {
        let forecasts: Vec<&SalesDataPoint> = series.forecasts().collect();
        let last_historical = series.historical().last();

        let rows = forecasts
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let previous = if index == 0 {
                    last_historical.map(|p| p.sales)
                } else {
                    Some(forecasts[index - 1].sales)
                };
                ForecastRow {
                    fiscal_year: point.fiscal_year,
                    sales: point.sales,
                    growth: previous.map(|prev| growth_pct(point.sales, prev)).unwrap_or(0.0),
                    range: point.confidence,
                }
            })
            .collect();

        Self {
            rows,
            average_growth: average_step_growth(&forecasts),
            total_forecast_sales: forecasts.iter().map(|p| p.sales).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// 对比 / 分布
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySales {
    pub fiscal_year: FiscalYear,
    pub sales: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSales {
    pub plant: String,
    pub sales: i64,
}

/// 指定产品近三个历史财年的销售合计（跨全部工厂/区域）
pub fn yearly_comparison(rows: &[ProductData], product_name: &str) -> Vec<YearlySales> {
    let last = FiscalYear::LAST_HISTORICAL.year();
    (last - 2..=last)
        .filter_map(FiscalYear::new)
        .map(|fiscal_year| YearlySales {
            fiscal_year,
            sales: rows
                .iter()
                .filter(|row| row.name == product_name)
                .filter_map(|row| row.point(fiscal_year))
                .filter(|p| !p.forecast)
                .map(|p| p.sales)
                .sum(),
        })
        .collect()
}

/// 指定产品当期（FY25）历史销售按工厂汇总，按首次出现顺序
pub fn plant_distribution(rows: &[ProductData], product_name: &str) -> Vec<PlantSales> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();

    for row in rows.iter().filter(|row| row.name == product_name) {
        let Some(point) = row
            .point(FiscalYear::LAST_HISTORICAL)
            .filter(|p| !p.forecast)
        else {
            continue;
        };
        if !totals.contains_key(&row.plant) {
            order.push(row.plant.clone());
        }
        *totals.entry(row.plant.clone()).or_insert(0) += point.sales;
    }

    order
        .into_iter()
        .map(|plant| {
            let sales = totals.get(&plant).copied().unwrap_or(0);
            PlantSales { plant, sales }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn fy(y: u8) -> FiscalYear {
        FiscalYear::new(y).unwrap()
    }

    fn series(historical: &[(u8, i64)], forecast: &[(u8, i64)]) -> ProductData {
        let mut data: Vec<SalesDataPoint> = historical
            .iter()
            .map(|(y, s)| SalesDataPoint::historical(fy(*y), *s))
            .collect();
        data.extend(forecast.iter().map(|(y, s)| {
            SalesDataPoint::forecast(fy(*y), *s, ConfidenceInterval { lower: s - 1, upper: s + 1 })
        }));
        ProductData {
            id: "ecu-plant-1-area-1".to_string(),
            product_id: "ecu".to_string(),
            name: "ECU".to_string(),
            category: Category::Electrification,
            plant: "plant-1".to_string(),
            area: "area-1".to_string(),
            data,
        }
    }

    #[test]
    fn test_growth_pct_guards_zero() {
        assert_eq!(growth_pct(100, 0), 0.0);
        assert_eq!(growth_pct(110, 100), 10.0);
        assert_eq!(growth_pct(90, 100), -10.0);
    }

    #[test]
    fn test_dashboard_metrics() {
        let s = series(&[(23, 100), (24, 100), (25, 125)], &[(26, 150), (35, 300)]);
        let m = DashboardMetrics::from_series(&s);
        assert_eq!(m.current_sales, 125);
        assert_eq!(m.current_year, Some(fy(25)));
        assert_eq!(m.yoy_growth, 25.0);
        assert_eq!(m.latest_forecast, 300);
        assert_eq!(m.total_historical_sales, 325);
        assert_eq!(m.average_growth_rate, 12.5);
    }

    #[test]
    fn test_dashboard_metrics_with_zero_previous_year() {
        let s = series(&[(24, 0), (25, 50)], &[]);
        let m = DashboardMetrics::from_series(&s);
        assert_eq!(m.yoy_growth, 0.0);
        assert!(m.average_growth_rate.is_finite());
    }

    #[test]
    fn test_dashboard_metrics_empty_series() {
        let s = series(&[], &[]);
        let m = DashboardMetrics::from_series(&s);
        assert_eq!(m.current_sales, 0);
        assert_eq!(m.current_year, None);
        assert_eq!(m.yoy_growth, 0.0);
        assert_eq!(m.average_growth_rate, 0.0);
    }

    #[test]
    fn test_forecast_table() {
        let s = series(&[(25, 100)], &[(26, 110), (27, 121)]);
        let table = ForecastTable::from_series(&s);
        assert_eq!(table.rows.len(), 2);
        assert!((table.rows[0].growth - 10.0).abs() < 1e-9);
        assert!((table.rows[1].growth - 10.0).abs() < 1e-9);
        assert_eq!(table.rows[0].range, Some(ConfidenceInterval { lower: 109, upper: 111 }));
        assert_eq!(table.total_forecast_sales, 231);
        assert!((table.average_growth.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_table_single_row_has_no_average() {
        let s = series(&[], &[(26, 110)]);
        let table = ForecastTable::from_series(&s);
        assert_eq!(table.rows[0].growth, 0.0);
        assert_eq!(table.average_growth, None);
    }

    #[test]
    fn test_yearly_comparison_and_plant_distribution() {
        let mut a = series(&[(23, 1), (24, 2), (25, 3)], &[]);
        let mut b = series(&[(23, 10), (24, 20), (25, 30)], &[]);
        let c = series(&[(23, 100), (24, 200), (25, 300)], &[]);
        a.plant = "plant-2".to_string();
        b.plant = "plant-1".to_string();
        let mut other = c.clone();
        other.name = "Motor".to_string();

        let rows = vec![a, b, c, other];
        let yearly = yearly_comparison(&rows, "ECU");
        assert_eq!(yearly.len(), 3);
        assert_eq!(yearly[0], YearlySales { fiscal_year: fy(23), sales: 111 });
        assert_eq!(yearly[2].sales, 333);

        let plants = plant_distribution(&rows, "ECU");
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0], PlantSales { plant: "plant-2".to_string(), sales: 3 });
        assert_eq!(plants[1], PlantSales { plant: "plant-1".to_string(), sales: 330 });
    }
}
