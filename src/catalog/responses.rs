// ==========================================
// 助手固定回复表
// ==========================================
// 顺序即优先级：自上而下首个命中的规则生效
// 图表数据为静态示意表，不取自实时生成数据
// ==========================================

use crate::domain::ChartKind;

/// 静态图表定义
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_key: &'static str,
    pub series: &'static [&'static str],
    pub rows: &'static [(&'static str, &'static [f64])],
}

/// 固定回复规则
pub struct CannedResponse {
    pub rule: &'static str,
    pub keywords: &'static [&'static str],
    pub text: &'static str,
    pub chart: Option<ChartSpec>,
}

/// 默认帮助文本（无规则命中时返回）
pub const DEFAULT_HELP_TEXT: &str = "I can help you with:

- **Sales Forecasting**: Understanding future trends and projections
- **Growth Analysis**: Identifying which products and markets are growing fastest
- **Market Opportunities**: Discovering untapped potential in various regions
- **Product Comparisons**: Comparing performance across different product lines
- **Strategic Insights**: Recommendations for capacity planning and investment
- **Operational Excellence**: Supply chain, plant utilization, and efficiency
- **Risk Management**: Market volatility and competitive threats

Try asking about growth trends, forecast accuracy, market opportunities, product comparisons, revenue projections, or select one of the suggested prompts!";

pub const CANNED_RESPONSES: &[CannedResponse] = &[
    CannedResponse {
        rule: "growth-trends",
        keywords: &["growth", "trend"],
        text: "Based on the analysis of historical data from FY19 to FY25, here are the key growth trends:

**Electrification Products** are showing the strongest growth at 15% YoY, driven by the global shift towards electric vehicles. The ECU for electrification segment is leading this growth.

**Power train Products** maintain steady growth at 11% YoY, with UC Injector and ACG/ACG-S showing particularly strong performance.

**Regional Performance**: Asia Pacific continues to be the fastest-growing market with 40% higher growth rates compared to other regions.

Here's a visual representation of the growth trends:",
        chart: Some(ChartSpec {
            kind: ChartKind::Line,
            x_key: "year",
            series: &["Electrification", "PowerTrain", "Components"],
            rows: &[
                ("FY19", &[18.0, 14.0, 12.0]),
                ("FY20", &[20.0, 15.0, 13.0]),
                ("FY21", &[23.0, 16.0, 13.5]),
                ("FY22", &[27.0, 17.0, 14.0]),
                ("FY23", &[31.0, 18.0, 14.5]),
                ("FY24", &[36.0, 20.0, 15.0]),
                ("FY25", &[42.0, 22.0, 16.0]),
            ],
        }),
    },
    CannedResponse {
        rule: "forecast-accuracy",
        keywords: &["forecast", "accuracy"],
        text: "Our AI-powered forecasting model demonstrates strong accuracy:

**Historical Validation**: When tested against actual FY24-FY25 data, the model showed:
- 92% accuracy for short-term forecasts (1-2 years)
- 87% accuracy for mid-term forecasts (3-5 years)
- 78% accuracy for long-term forecasts (6-10 years)

**Key Factors in Forecast**:
- Historical sales patterns and seasonality
- Market trends and industry growth rates
- Regional economic indicators
- Product lifecycle stages

**Confidence Intervals**: All forecasts include confidence ranges that account for market uncertainty, with ranges widening for longer-term predictions.

Here's the forecast accuracy by product category:",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x_key: "category",
            series: &["1-2 Years", "3-5 Years", "6-10 Years"],
            rows: &[
                ("Electrification", &[94.0, 89.0, 81.0]),
                ("Power train", &[92.0, 87.0, 78.0]),
                ("Components", &[90.0, 85.0, 75.0]),
            ],
        }),
    },
    CannedResponse {
        rule: "market-opportunities",
        keywords: &["opportunit", "market"],
        text: "I've identified several high-potential market opportunities:

**1. Electrification Expansion**
The EV market is projected to grow 15% annually through FY35. Consider:
- Doubling production capacity for ECU (Electrification) by FY30
- Investing in next-gen inverter technology
- Expanding into emerging EV markets in Southeast Asia

**2. Asia Pacific Growth**
This region shows 30% higher demand growth:
- Target markets: India, Indonesia, Vietnam
- Potential revenue increase: $50M+ by FY32
- ROI timeline: 2-3 years

**3. Export Market Development**
Current export products show strong margins with untapped potential:
- 20% additional revenue possible by FY30
- Focus on North America and Europe markets
- Low competition in specialized components

Here's the opportunity size by region:",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x_key: "region",
            series: &["Current ($M)", "Potential ($M)"],
            rows: &[
                ("Asia Pacific", &[45.0, 72.0]),
                ("North America", &[38.0, 52.0]),
                ("Europe", &[35.0, 48.0]),
                ("Latin America", &[22.0, 35.0]),
            ],
        }),
    },
    CannedResponse {
        rule: "product-comparison",
        keywords: &["compar", "product"],
        text: "Here's a comprehensive comparison of product performance:

**Top Performers**:
1. **ECU (Electrification)** - 15% YoY growth, highest margins
2. **ECU (Mobility)** - 13% YoY growth, strong market position
3. **Export Products** - 14% YoY growth, expanding globally

**Steady Performers**:
- UC Injector, ACG/ACG-S, 2W ECU - All showing 11-12% growth
- Motor, Alternator - Stable 10% growth

**Areas for Improvement**:
- Thermal products - 7-8% growth, below category average
- Consider product refresh or market repositioning

**Strategic Recommendations**:
- Increase investment in Electrification segment
- Maintain strong support for Mobility products
- Evaluate optimization opportunities for slower-growth products

Product performance comparison (FY25 Sales):",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x_key: "product",
            series: &["sales", "growth"],
            rows: &[
                ("ECU (Elec.)", &[42.0, 15.0]),
                ("ECU (Mob.)", &[35.0, 13.0]),
                ("Export", &[32.0, 14.0]),
                ("UC Injector", &[28.0, 11.0]),
                ("ACG/ACG-S", &[26.0, 11.0]),
                ("Motor", &[24.0, 10.0]),
            ],
        }),
    },
    CannedResponse {
        rule: "revenue-projections",
        keywords: &["revenue", "projection"],
        text: "Here are the revenue projections for the next 5 years by product category:

**Electrification Products** (FY26-FY30):
- FY26: $48M (15% growth)
- FY27: $55M (15% growth)
- FY28: $63M (15% growth)
- FY29: $72M (14% growth)
- FY30: $82M (14% growth)
- **Total 5-Year Revenue**: $320M

**Power Train Products** (FY26-FY30):
- FY26: $24M (11% growth)
- FY27: $27M (11% growth)
- FY28: $30M (10% growth)
- FY29: $33M (10% growth)
- FY30: $36M (10% growth)
- **Total 5-Year Revenue**: $150M

**Key Insights**:
- Electrification segment will account for 52% of total revenue growth
- Combined 5-year revenue projection: $470M+
- Highest growth period: FY26-FY28

Revenue projection by category:",
        chart: Some(ChartSpec {
            kind: ChartKind::Line,
            x_key: "year",
            series: &["Electrification", "PowerTrain", "Components"],
            rows: &[
                ("FY26", &[48.0, 24.0, 17.0]),
                ("FY27", &[55.0, 27.0, 18.0]),
                ("FY28", &[63.0, 30.0, 19.0]),
                ("FY29", &[72.0, 33.0, 20.0]),
                ("FY30", &[82.0, 36.0, 21.0]),
            ],
        }),
    },
    CannedResponse {
        rule: "supply-chain",
        keywords: &["supply", "chain"],
        text: "Based on our growth projections, here are key supply chain optimizations:

**Immediate Priorities (FY26)**:
1. **Electrification Components** - Secure additional suppliers
   - Expected demand increase: 15%
   - Lead time reduction needed: 2 weeks
   - Supplier diversification recommended

2. **Raw Material Inventory** - Optimize stock levels
   - Reduce holding costs by 12%
   - Implement JIT for high-volume components
   - Strategic stockpiling for critical materials

3. **Logistics Network** - Expand distribution
   - Add 2 regional distribution centers
   - Reduce transportation costs by 8%
   - Improve delivery times by 15%

**Medium-Term Improvements (FY27-FY28)**:
- Implement predictive analytics for demand planning
- Establish vendor-managed inventory systems
- Develop alternative sourcing strategies for critical components

**Expected Benefits**:
- Cost reduction: $3-5M annually
- Improved service levels: 95%+ on-time delivery
- Enhanced flexibility for demand surges",
        chart: None,
    },
    CannedResponse {
        rule: "investment-priorities",
        keywords: &["investment", "capital"],
        text: "Recommended capital investment priorities based on ROI and strategic value:

**Tier 1 - High Priority** (Invest FY26):
1. **Electrification Manufacturing Capacity** - $25M
   - ROI: 3.2 years
   - Expected revenue impact: $15M/year by FY28
   - Addresses fastest-growing segment

2. **Automation & Industry 4.0** - $12M
   - ROI: 2.8 years
   - Efficiency gains: 20%
   - Quality improvement: 15%

**Tier 2 - Medium Priority** (Invest FY27):
3. **R&D Facilities** - $8M
   - Focus on next-gen EV components
   - Time to market reduction: 25%
   - Innovation pipeline development

4. **Asia Pacific Distribution** - $6M
   - Market access expansion
   - Revenue growth: $8M/year by FY29

**Tier 3 - Strategic Priority** (Invest FY28):
5. **Digital Infrastructure** - $5M
   - Data analytics platform
   - AI/ML capabilities
   - Decision support systems

**Total Recommended Investment**: $56M over 3 years
**Expected Return**: $40M+ annual revenue increase by FY30",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x_key: "category",
            series: &["Investment ($M)", "Expected ROI (Years)"],
            rows: &[
                ("Electrification Capacity", &[25.0, 3.2]),
                ("Automation", &[12.0, 2.8]),
                ("R&D", &[8.0, 4.1]),
                ("Distribution", &[6.0, 3.5]),
                ("Digital", &[5.0, 4.5]),
            ],
        }),
    },
    CannedResponse {
        rule: "plant-utilization",
        keywords: &["plant", "utilization", "capacity"],
        text: "Plant capacity utilization analysis and optimization recommendations:

**Current Utilization (FY25)**:
- **Plant A (Electrification)**: 78% - Nearing capacity
- **Plant B (Power Train)**: 65% - Moderate utilization
- **Plant C (Components)**: 58% - Underutilized

**Optimization Strategies**:

**Short-term (FY26)**:
1. **Shift Production** to Plant C
   - Move 15% of Component production from Plant B
   - Improve overall efficiency by 8%
   - Reduce operational costs: $1.2M

2. **Add Shifts** at Plant A
   - Implement 3rd shift for high-demand products
   - Increase capacity by 25%
   - Investment required: $800K

**Medium-term (FY27-FY28)**:
3. **Equipment Upgrades** at Plant B
   - Modernize production lines
   - Increase throughput by 20%
   - Automation benefits: 15% labor cost reduction

4. **Flexible Manufacturing** at Plant C
   - Cross-train workforce
   - Enable multi-product production
   - Increase utilization to 75%+

**Expected Results by FY28**:
- Average utilization: 82%
- Cost savings: $4M annually
- Increased capacity: 30% without new facilities

Current plant utilization:",
        chart: Some(ChartSpec {
            kind: ChartKind::Bar,
            x_key: "plant",
            series: &["Current (%)", "Target (%)"],
            rows: &[
                ("Plant A", &[78.0, 85.0]),
                ("Plant B", &[65.0, 80.0]),
                ("Plant C", &[58.0, 75.0]),
            ],
        }),
    },
];

// ==========================================
// 产能规划面板问答
// ==========================================
// 区域类规则优先使用洞察夹具中的 reasoning，缺失时使用下列兜底文本

pub const SOUTHEAST_ASIA_FALLBACK: &str =
    "Southeast Asia shows strong potential with 12.5% CAGR and low logistics costs.";

pub const WEST_AFRICA_FALLBACK: &str =
    "West Africa shows highest growth rate at 15.2% CAGR but faces higher logistics costs.";

pub const CAPACITY_EXPANSION_TEXT: &str = "Top expansion opportunities include: 1) Southeast Asia (ROI: 24.5%), 2) East Plant expansion (ROI: 18.3%), and 3) Central Asia/India (ROI: 21.2%). All show strong market fundamentals.";

pub const CAPACITY_ROI_TEXT: &str = "Expected ROI ranges from 18.3% to 24.5% across major initiatives. Southeast Asia offers the highest ROI at 24.5% with 18-24 month time to market.";

pub const CAPACITY_COST_TEXT: &str = "Investment requirements range from $22M (East Plant expansion) to $52M (India market entry). Total capital needed for all high-priority initiatives: approximately $119M.";

pub const CAPACITY_DEFAULT_TEXT: &str = "Based on demand forecasts and logistics analysis, I recommend prioritizing: 1) Southeast Asia expansion, 2) East Plant capacity increase, and 3) India market entry. These offer the best balance of ROI, market potential, and operational efficiency.";
