// ==========================================
// FixtureGenerator 性质测试
// ==========================================
// 测试范围:
// 1. 财年覆盖: 每行 17 个点，FY19..FY35 严格递增、无重复、无缺口
// 2. 置信区间: lower <= sales <= upper，区间宽度随预测期不减
// 3. 确定性: 预测部分与抖动无关；关闭抖动时全序列可复现
// 4. 种子: 相同种子结果一致
// ==========================================


use sales_capacity_analytics::catalog::Catalog;
use sales_capacity_analytics::domain::FiscalYear;
use sales_capacity_analytics::engine::{FixtureGenerator, JitterSource};
use test_helpers::{no_jitter_rows, seeded_rows};

#[test]
fn test_every_row_covers_fy19_to_fy35() {
    let rows = seeded_rows(&Catalog::default(), 42);
    assert_eq!(rows.len(), 128);

    let expected: Vec<String> = FiscalYear::full_range().map(|fy| fy.label()).collect();
    assert_eq!(expected.len(), 17);

    for row in &rows {
        let labels: Vec<String> = row.data.iter().map(|p| p.fiscal_year.label()).collect();
        assert_eq!(labels, expected, "{} 财年覆盖不完整", row.id);
        assert!(row.check_invariants().is_ok(), "{:?}", row.check_invariants());
        assert_eq!(row.historical().count(), 7);
        assert_eq!(row.forecasts().count(), 10);
    }
}

#[test]
fn test_confidence_contains_sales() {
    let rows = seeded_rows(&Catalog::default(), 7);
    for row in &rows {
        for point in row.forecasts() {
            let ci = point.confidence.expect("预测点必须携带置信区间");
            assert!(
                ci.lower <= point.sales && point.sales <= ci.upper,
                "{} {}: {} 不在 [{}, {}]",
                row.id,
                point.fiscal_year,
                point.sales,
                ci.lower,
                ci.upper
            );
        }
        for point in row.historical() {
            assert!(point.confidence.is_none());
        }
    }
}

#[test]
fn test_confidence_width_non_decreasing() {
    let rows = no_jitter_rows(&Catalog::default());
    for row in &rows {
        let widths: Vec<i64> = row
            .forecasts()
            .filter_map(|p| p.confidence.map(|ci| ci.width()))
            .collect();
        for pair in widths.windows(2) {
            assert!(pair[1] >= pair[0], "{} 区间宽度变窄: {:?}", row.id, widths);
        }
    }
}

#[test]
fn test_forecast_is_independent_of_jitter() {
    let catalog = Catalog::default();
    let disabled = no_jitter_rows(&catalog);
    let seeded = seeded_rows(&catalog, 99);
    let ambient = FixtureGenerator::new().generate(&catalog, &mut JitterSource::Ambient);

    for ((a, b), c) in disabled.iter().zip(&seeded).zip(&ambient) {
        let fa: Vec<_> = a.forecasts().cloned().collect();
        let fb: Vec<_> = b.forecasts().cloned().collect();
        let fc: Vec<_> = c.forecasts().cloned().collect();
        assert_eq!(fa, fb, "{} 预测部分受抖动影响", a.id);
        assert_eq!(fa, fc, "{} 预测部分受抖动影响", a.id);
    }
}

#[test]
fn test_disabled_jitter_is_reproducible() {
    let catalog = Catalog::default();
    assert_eq!(no_jitter_rows(&catalog), no_jitter_rows(&catalog));
}

#[test]
fn test_same_seed_same_output() {
    let catalog = Catalog::default();
    assert_eq!(seeded_rows(&catalog, 2024), seeded_rows(&catalog, 2024));
    assert_ne!(seeded_rows(&catalog, 1), seeded_rows(&catalog, 2));
}

#[test]
fn test_historical_jitter_band() {
    // 抖动乘数在 [0.95, 1.05) 内
    let catalog = Catalog::default();
    let plain = no_jitter_rows(&catalog);
    let jittered = seeded_rows(&catalog, 5);
    for (a, b) in plain.iter().zip(&jittered) {
        for (p, q) in a.historical().zip(b.historical()) {
            let ratio = q.sales as f64 / p.sales as f64;
            assert!((0.94..1.06).contains(&ratio), "{} {} ratio={}", a.id, p.fiscal_year, ratio);
        }
    }
}

#[test]
fn test_row_order_and_keys() {
    let rows = no_jitter_rows(&Catalog::default());
    assert_eq!(rows[0].id, "ecu-plant-1-area-1");
    assert_eq!(rows[1].id, "ecu-plant-1-area-2");
    assert_eq!(rows[4].id, "ecu-plant-2-area-1");
    assert_eq!(rows[16].product_id, "inverter");
}
