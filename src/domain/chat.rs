// ==========================================
// 销售预测与产能规划分析系统 - 对话领域模型
// ==========================================
// 职责: 对话消息、图表载荷、提示词库条目
// 红线: 对话记录只追加，不回改
// ==========================================

use crate::domain::types::ChartKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

// ==========================================
// ChartPayload - 图表载荷（静态示意数据，≤7 行）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub label: String,
    pub values: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// X 轴字段名（year / category / region / product / plant）
    pub x_key: String,
    pub rows: Vec<ChartRow>,
}

impl ChartPayload {
    /// 系列名称（取首行顺序）
    pub fn series(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.values.iter().map(|(k, _)| k.as_str()).collect())
            .unwrap_or_default()
    }
}

/// 助手回复（文本 + 可选图表）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantResponse {
    /// 命中的规则名称（默认规则为 "default"）
    pub rule: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartPayload>,
}

// ==========================================
// ChatMessage - 对话记录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartPayload>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// 用户消息
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: format!("user-{}", Uuid::new_v4()),
            role: ChatRole::User,
            content: content.into(),
            chart: None,
            created_at: Utc::now(),
        }
    }

    /// 助手消息
    pub fn assistant(response: AssistantResponse) -> Self {
        Self {
            id: format!("assistant-{}", Uuid::new_v4()),
            role: ChatRole::Assistant,
            content: response.text,
            chart: response.chart,
            created_at: Utc::now(),
        }
    }
}

/// 提示词库条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: String,
    pub label: String,
    pub prompt: String,
    pub category: String,
}
