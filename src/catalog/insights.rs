// ==========================================
// 产品洞察文案（按产品 ID）
// ==========================================

use crate::domain::{FiscalYear, InsightType, Level, ProductInsight};

/// 查询产品洞察；未知产品返回空列表
pub fn product_insights(product_id: &str) -> Vec<ProductInsight> {
    match product_id {
        "ecu" => vec![
            insight("ins-1", InsightType::Trend, "Electrification Leadership",
                "ECU shows the strongest growth in the portfolio at 15% YoY, driven by the global shift towards electric vehicles.",
                Level::High, None),
            insight("ins-2", InsightType::Alert, "Capacity Pressure by FY30",
                "Forecast volume doubles before FY30. Plant capacity must be expanded ahead of demand to avoid lost sales.",
                Level::Medium, Some(30)),
        ],
        "inverter" => vec![
            insight("ins-3", InsightType::Opportunity, "Next-Gen Inverter Demand",
                "Inverter demand tracks EV adoption with 14% YoY growth. Early investment in next-gen technology secures share.",
                Level::High, None),
        ],
        "uc-injector" => vec![
            insight("ins-4", InsightType::Trend, "Steady Power Train Growth",
                "UC Injector maintains steady 11% YoY growth with stable margins across all regions.",
                Level::Medium, None),
            insight("ins-5", InsightType::Alert, "Market Saturation Risk",
                "Forecast indicates potential market saturation in FY32-FY33. Consider diversification or market expansion strategies.",
                Level::Medium, Some(32)),
        ],
        "acg" => vec![
            insight("ins-6", InsightType::Trend, "Consistent Replacement Demand",
                "ACG/ACG-S shows 11% YoY growth supported by aftermarket replacement cycles.",
                Level::Medium, None),
        ],
        "motor" => vec![
            insight("ins-7", InsightType::Opportunity, "Supply Chain Optimization",
                "Predictable demand patterns present opportunity for just-in-time inventory systems, potentially reducing carrying costs by 15%.",
                Level::High, None),
        ],
        "alternator" => vec![
            insight("ins-8", InsightType::Trend, "Stable Mature Product",
                "Alternator holds a stable 10% growth rate. Focus on cost efficiency rather than capacity expansion.",
                Level::Low, None),
        ],
        "thermal" => vec![
            insight("ins-9", InsightType::Alert, "Below-Average Growth",
                "Thermal Module shows 7.5% YoY growth, below category average. Consider product refresh or market repositioning.",
                Level::Medium, None),
        ],
        "ecu-2w" => vec![
            insight("ins-10", InsightType::Opportunity, "Export Market Potential",
                "Forecast models suggest untapped export markets could add 20% additional revenue by FY30 with targeted expansion.",
                Level::High, Some(30)),
        ],
        _ => Vec::new(),
    }
}

fn insight(
    id: &str,
    insight_type: InsightType,
    title: &str,
    description: &str,
    impact: Level,
    fiscal_year: Option<u8>,
) -> ProductInsight {
    ProductInsight {
        id: id.to_string(),
        insight_type,
        title: title.to_string(),
        description: description.to_string(),
        impact,
        fiscal_year: fiscal_year.and_then(FiscalYear::new),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_every_catalog_product_has_insights() {
        for product in Catalog::default().products {
            assert!(!product_insights(&product.id).is_empty(), "{} 缺少洞察", product.id);
        }
    }

    #[test]
    fn test_unknown_product_has_no_insights() {
        assert!(product_insights("prod-z").is_empty());
    }
}
