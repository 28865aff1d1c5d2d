// ==========================================
// 提示词库 / 欢迎语
// ==========================================

use crate::domain::PromptTemplate;

/// 对话开场欢迎语
pub const WELCOME_MESSAGE: &str = "Hello! I'm your **AI Sales Analytics Assistant**. I can help you understand:\n\n- Sales trends and growth patterns\n- Forecast accuracy and predictions\n- Market opportunities and expansion strategies\n- Product performance comparisons\n\nSelect a prompt below or ask me anything!";

const PROMPTS: &[(&str, &str, &str, &str)] = &[
    ("growth-trends", "Growth Trends Analysis", "What are the key growth trends for our products?", "Analytics"),
    ("forecast-accuracy", "Forecast Accuracy", "How accurate are the sales forecasts?", "Analytics"),
    ("market-opportunities", "Market Opportunities", "What market opportunities should we focus on?", "Strategy"),
    ("product-comparison", "Product Comparison", "Compare performance across different products", "Analytics"),
    ("regional-analysis", "Regional Performance", "Which regions are performing best and why?", "Analytics"),
    ("capacity-planning", "Capacity Planning", "What are the capacity planning recommendations for FY26-FY30?", "Strategy"),
    ("risk-assessment", "Risk Assessment", "What are the key risks in our sales forecasts?", "Risk"),
    ("electrification-trend", "Electrification Trends", "How is the electrification segment performing and what's the outlook?", "Analytics"),
    ("export-strategy", "Export Strategy", "What export markets should we prioritize?", "Strategy"),
    ("seasonal-patterns", "Seasonal Patterns", "What seasonal patterns exist in our sales data?", "Analytics"),
    ("revenue-projections", "Revenue Projections", "What are the projected revenues for the next 5 years by product category?", "Analytics"),
    ("market-share", "Market Share Analysis", "How does our market share compare across different regions?", "Analytics"),
    ("supply-chain", "Supply Chain Insights", "What supply chain optimizations can support our growth?", "Operations"),
    ("cost-efficiency", "Cost Efficiency", "How can we improve operational efficiency and reduce costs?", "Operations"),
    ("investment-priority", "Investment Priorities", "What areas should we prioritize for capital investment?", "Strategy"),
    ("product-lifecycle", "Product Lifecycle", "Which products are in growth vs. maturity phases?", "Analytics"),
    ("demand-forecasting", "Demand Forecasting", "What demand patterns should we prepare for in FY26?", "Analytics"),
    ("competitor-landscape", "Competitive Landscape", "What competitive threats should we be aware of?", "Risk"),
    ("customer-segments", "Customer Segmentation", "Which customer segments show the highest potential?", "Strategy"),
    ("production-planning", "Production Planning", "How should we align production with forecasted demand?", "Operations"),
    ("margin-analysis", "Margin Analysis", "Which products offer the best profit margins?", "Analytics"),
    ("market-volatility", "Market Volatility", "How should we manage market volatility risks?", "Risk"),
    ("technology-trends", "Technology Trends", "What emerging technology trends will impact our products?", "Strategy"),
    ("plant-utilization", "Plant Utilization", "How can we optimize plant capacity utilization?", "Operations"),
    ("new-market-entry", "New Market Entry", "What new markets should we consider entering?", "Strategy"),
];

/// 提示词库（25 条，按分类）
pub fn prompt_library() -> Vec<PromptTemplate> {
    PROMPTS
        .iter()
        .map(|(id, label, prompt, category)| PromptTemplate {
            id: id.to_string(),
            label: label.to_string(),
            prompt: prompt.to_string(),
            category: category.to_string(),
        })
        .collect()
}
