// ==========================================
// 销售预测与产能规划分析系统 - 脚本化助手
// ==========================================
// 职责: 输入文本 → 固定回复（文本 + 可选图表）
// 规则: 有序规则表，自上而下首个命中生效；无命中返回默认帮助
// 红线: 纯函数，不读取历史对话，不失败
// ==========================================

use crate::catalog::responses::{
    ChartSpec, CANNED_RESPONSES, CAPACITY_COST_TEXT, CAPACITY_DEFAULT_TEXT,
    CAPACITY_EXPANSION_TEXT, CAPACITY_ROI_TEXT, DEFAULT_HELP_TEXT, SOUTHEAST_ASIA_FALLBACK,
    WEST_AFRICA_FALLBACK,
};
use crate::domain::{AssistantResponse, CapacityInsight, ChartPayload, ChartRow};
use tracing::debug;

/// 默认规则名称
pub const DEFAULT_RULE: &str = "default";

// ==========================================
// ResponseRule - 单条规则
// ==========================================
#[derive(Debug, Clone)]
pub struct ResponseRule {
    pub name: String,
    /// 小写关键字；输入（转小写后）包含任一即命中
    pub keywords: Vec<String>,
    pub response: AssistantResponse,
}

impl ResponseRule {
    pub fn new(name: &str, keywords: &[&str], text: &str, chart: Option<ChartPayload>) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            response: AssistantResponse {
                rule: name.to_string(),
                text: text.to_string(),
                chart,
            },
        }
    }

    /// 是否命中（input 已转小写）
    pub fn matches(&self, folded_input: &str) -> bool {
        self.keywords.iter().any(|k| folded_input.contains(k.as_str()))
    }
}

// ==========================================
// ScriptedAssistant
// ==========================================
#[derive(Debug, Clone)]
pub struct ScriptedAssistant {
    rules: Vec<ResponseRule>,
    default_response: AssistantResponse,
}

impl ScriptedAssistant {
    /// 自定义规则表
    pub fn with_rules(rules: Vec<ResponseRule>, default_text: &str) -> Self {
        Self {
            rules,
            default_response: AssistantResponse {
                rule: DEFAULT_RULE.to_string(),
                text: default_text.to_string(),
                chart: None,
            },
        }
    }

    /// 产能规划面板问答（纯文本，区域规则引用洞察 reasoning）
    pub fn capacity_advisor(insights: &[CapacityInsight]) -> Self {
        let reasoning_for = |region: &str, fallback: &str| -> String {
            insights
                .iter()
                .find(|i| i.region.as_deref() == Some(region))
                .map(|i| i.reasoning.clone())
                .unwrap_or_else(|| fallback.to_string())
        };

        let rules = vec![
            ResponseRule::new(
                "southeast-asia",
                &["southeast asia", "vietnam", "thailand"],
                &reasoning_for("Southeast Asia", SOUTHEAST_ASIA_FALLBACK),
                None,
            ),
            ResponseRule::new(
                "expansion",
                &["expansion", "opportunities"],
                CAPACITY_EXPANSION_TEXT,
                None,
            ),
            ResponseRule::new("roi", &["roi", "return"], CAPACITY_ROI_TEXT, None),
            ResponseRule::new("cost", &["cost", "investment"], CAPACITY_COST_TEXT, None),
            ResponseRule::new(
                "west-africa",
                &["africa", "nigeria"],
                &reasoning_for("West Africa", WEST_AFRICA_FALLBACK),
                None,
            ),
        ];
        Self::with_rules(rules, CAPACITY_DEFAULT_TEXT)
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    /// 首个命中的规则
    pub fn matched_rule(&self, input: &str) -> Option<&ResponseRule> {
        let folded = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&folded))
    }

    /// 生成回复（全函数，任何输入均有结果）
    pub fn respond(&self, input: &str) -> AssistantResponse {
        match self.matched_rule(input) {
            Some(rule) => {
                debug!(rule = %rule.name, "助手规则命中");
                rule.response.clone()
            }
            None => {
                debug!("助手无规则命中，返回默认帮助");
                self.default_response.clone()
            }
        }
    }
}

impl Default for ScriptedAssistant {
    /// 内置规则表
    fn default() -> Self {
        let rules = CANNED_RESPONSES
            .iter()
            .map(|canned| {
                ResponseRule::new(
                    canned.rule,
                    canned.keywords,
                    canned.text,
                    canned.chart.as_ref().map(chart_from_spec),
                )
            })
            .collect();
        Self::with_rules(rules, DEFAULT_HELP_TEXT)
    }
}

/// 静态图表定义 → 图表载荷
pub fn chart_from_spec(spec: &ChartSpec) -> ChartPayload {
    ChartPayload {
        kind: spec.kind,
        x_key: spec.x_key.to_string(),
        rows: spec
            .rows
            .iter()
            .map(|(label, values)| ChartRow {
                label: label.to_string(),
                values: spec
                    .series
                    .iter()
                    .zip(values.iter())
                    .map(|(series, value)| (series.to_string(), *value))
                    .collect(),
            })
            .collect(),
    }
}
