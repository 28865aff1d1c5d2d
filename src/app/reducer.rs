// ==========================================
// 销售预测与产能规划分析系统 - 视图状态与 Reducer
// ==========================================
// 职责: 驾驶舱筛选状态、对话记录、视图导航的不可变快照
// 规则: reduce(旧状态, 动作) -> 新状态，纯函数，不修改输入
// 红线: 每次筛选变更/预测请求递增 generation，
//       只有令牌等于当前 generation 的 Commit 才会生效
// ==========================================

use crate::catalog::prompts::WELCOME_MESSAGE;
use crate::domain::{AssistantResponse, ChatMessage, ChatRole, View};
use crate::engine::FilterSelection;
use serde::{Deserialize, Serialize};

// ==========================================
// 驾驶舱
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// 用户最新选择（尚未提交）
    pub pending: FilterSelection,
    /// 当前展示所依据的筛选条件
    pub committed: FilterSelection,
    pub loading: bool,
    /// 是否有未完成的预测请求
    pub forecast_requested: bool,
    pub show_forecast: bool,
    /// 请求令牌
    pub generation: u64,
}

impl DashboardState {
    /// 初始状态：给定产品，其余维度为 "all"，已提交
    pub fn new(product: impl Into<String>) -> Self {
        let selection = FilterSelection::for_product(product);
        Self {
            pending: selection.clone(),
            committed: selection,
            loading: false,
            forecast_requested: false,
            show_forecast: false,
            generation: 0,
        }
    }

    /// 令牌是否仍是最新请求
    pub fn accepts(&self, token: u64) -> bool {
        token == self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardAction {
    SelectProduct(String),
    SelectPlant(String),
    SelectArea(String),
    SelectCategory(String),
    RequestForecast,
    /// 定时器到期，携带发起时的令牌
    Commit { token: u64 },
}

impl DashboardAction {
    pub fn is_commit(&self) -> bool {
        matches!(self, DashboardAction::Commit { .. })
    }
}

/// 驾驶舱 reducer
pub fn reduce_dashboard(state: &DashboardState, action: DashboardAction) -> DashboardState {
    let mut next = state.clone();
    match action {
        DashboardAction::SelectProduct(product) => {
            next.pending.product = product;
            begin_request(&mut next);
        }
        DashboardAction::SelectPlant(plant) => {
            next.pending.plant = plant;
            begin_request(&mut next);
        }
        DashboardAction::SelectArea(area) => {
            next.pending.area = area;
            begin_request(&mut next);
        }
        DashboardAction::SelectCategory(category) => {
            next.pending.category = category;
            begin_request(&mut next);
        }
        DashboardAction::RequestForecast => {
            next.forecast_requested = true;
            begin_request(&mut next);
        }
        DashboardAction::Commit { token } => {
            if !state.accepts(token) {
                // 过期令牌: 状态保持不变
                return next;
            }
            next.committed = next.pending.clone();
            next.loading = false;
            if next.forecast_requested {
                next.show_forecast = true;
                next.forecast_requested = false;
            }
        }
    }
    next
}

fn begin_request(state: &mut DashboardState) {
    state.generation += 1;
    state.loading = true;
}

// ==========================================
// 对话
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatState {
    /// 只追加的对话记录
    pub transcript: Vec<ChatMessage>,
    /// 已提交但尚未回复的问题数
    pub pending: usize,
}

impl ChatState {
    /// 以欢迎语开场
    pub fn new() -> Self {
        let welcome = ChatMessage::assistant(AssistantResponse {
            rule: "welcome".to_string(),
            text: WELCOME_MESSAGE.to_string(),
            chart: None,
        });
        Self {
            transcript: vec![welcome],
            pending: 0,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.transcript.last()
    }

    pub fn user_turns(&self) -> usize {
        self.transcript
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .count()
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatAction {
    Submit(String),
    Respond { response: AssistantResponse },
}

/// 对话 reducer；空白输入被忽略
pub fn reduce_chat(state: &ChatState, action: ChatAction) -> ChatState {
    let mut next = state.clone();
    match action {
        ChatAction::Submit(text) => {
            if text.trim().is_empty() {
                return next;
            }
            next.transcript.push(ChatMessage::user(text));
            next.pending += 1;
        }
        ChatAction::Respond { response } => {
            next.transcript.push(ChatMessage::assistant(response));
            next.pending = next.pending.saturating_sub(1);
        }
    }
    next
}

// ==========================================
// 导航
// ==========================================

/// 路由跳转；未知路由保持当前视图
pub fn navigate(current: View, route: &str) -> View {
    match View::from_route(route) {
        Some(view) => view,
        None => {
            tracing::debug!(route, current = %current, "未知路由，保持当前视图");
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_bumps_generation_and_sets_loading() {
        let state = DashboardState::new("ECU");
        let next = reduce_dashboard(&state, DashboardAction::SelectPlant("plant-1".to_string()));
        assert_eq!(next.generation, 1);
        assert!(next.loading);
        assert_eq!(next.pending.plant, "plant-1");
        assert_eq!(next.committed.plant, "all");
        // 输入快照不变
        assert_eq!(state.generation, 0);
        assert!(!state.loading);
    }

    #[test]
    fn test_commit_with_current_token_applies() {
        let state = DashboardState::new("ECU");
        let state = reduce_dashboard(&state, DashboardAction::SelectArea("area-2".to_string()));
        let state = reduce_dashboard(&state, DashboardAction::Commit { token: state.generation });
        assert_eq!(state.committed.area, "area-2");
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_commit_is_ignored() {
        let state = DashboardState::new("ECU");
        let first = reduce_dashboard(&state, DashboardAction::SelectProduct("Motor".to_string()));
        let stale_token = first.generation;
        let second = reduce_dashboard(&first, DashboardAction::SelectProduct("Inverter".to_string()));

        let after_stale = reduce_dashboard(&second, DashboardAction::Commit { token: stale_token });
        assert_eq!(after_stale, second);
        assert_eq!(after_stale.committed.product, "ECU");

        let after_latest =
            reduce_dashboard(&after_stale, DashboardAction::Commit { token: second.generation });
        assert_eq!(after_latest.committed.product, "Inverter");
    }

    #[test]
    fn test_forecast_request_reveals_on_commit() {
        let state = DashboardState::new("ECU");
        let state = reduce_dashboard(&state, DashboardAction::RequestForecast);
        assert!(state.forecast_requested);
        assert!(!state.show_forecast);
        let state = reduce_dashboard(&state, DashboardAction::Commit { token: state.generation });
        assert!(state.show_forecast);
        assert!(!state.forecast_requested);
    }

    #[test]
    fn test_forecast_survives_later_selection() {
        // 预测请求后又改筛选：最新一次提交同时揭示预测
        let state = DashboardState::new("ECU");
        let state = reduce_dashboard(&state, DashboardAction::RequestForecast);
        let forecast_token = state.generation;
        let state = reduce_dashboard(&state, DashboardAction::SelectCategory("Thermal".to_string()));
        let state = reduce_dashboard(&state, DashboardAction::Commit { token: forecast_token });
        assert!(!state.show_forecast);
        let state = reduce_dashboard(&state, DashboardAction::Commit { token: state.generation });
        assert!(state.show_forecast);
        assert_eq!(state.committed.category, "Thermal");
    }

    #[test]
    fn test_chat_seeded_with_welcome() {
        let chat = ChatState::new();
        assert_eq!(chat.transcript.len(), 1);
        assert_eq!(chat.transcript[0].role, ChatRole::Assistant);
        assert_eq!(chat.transcript[0].content, WELCOME_MESSAGE);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_chat_ignores_whitespace() {
        let chat = ChatState::new();
        let next = reduce_chat(&chat, ChatAction::Submit("   \n\t".to_string()));
        assert_eq!(next, chat);
    }

    #[test]
    fn test_chat_submit_then_respond() {
        let chat = ChatState::new();
        let chat = reduce_chat(&chat, ChatAction::Submit("growth?".to_string()));
        assert!(chat.is_typing());
        assert_eq!(chat.user_turns(), 1);
        let chat = reduce_chat(
            &chat,
            ChatAction::Respond {
                response: AssistantResponse {
                    rule: "growth-trends".to_string(),
                    text: "up".to_string(),
                    chart: None,
                },
            },
        );
        assert!(!chat.is_typing());
        assert_eq!(chat.transcript.len(), 3);
        assert_eq!(chat.last_message().map(|m| m.content.as_str()), Some("up"));
    }

    #[test]
    fn test_navigate() {
        assert_eq!(navigate(View::Landing, "/dashboard"), View::Dashboard);
        assert_eq!(navigate(View::Dashboard, "/ai-chat/"), View::AiChat);
        assert_eq!(navigate(View::CapacityPlanning, "/nowhere"), View::CapacityPlanning);
    }
}
