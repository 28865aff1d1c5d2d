// ==========================================
// 销售预测与产能规划分析系统 - 对话 API
// ==========================================
// 职责: 脚本化助手问答、产能面板问答、提示词库、同步对话记录
// 说明: 同步接口直接追加回复；带延迟的版本见 app::session::ChatSession
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::app::reducer::{reduce_chat, ChatAction, ChatState};
use crate::catalog::capacity::capacity_insights;
use crate::catalog::prompts::prompt_library;
use crate::domain::{AssistantResponse, PromptTemplate};
use crate::engine::ScriptedAssistant;

pub struct ChatApi {
    assistant: ScriptedAssistant,
    capacity_advisor: ScriptedAssistant,
    prompts: Vec<PromptTemplate>,
}

impl ChatApi {
    pub fn new() -> Self {
        Self {
            assistant: ScriptedAssistant::default(),
            capacity_advisor: ScriptedAssistant::capacity_advisor(&capacity_insights()),
            prompts: prompt_library(),
        }
    }

    pub fn assistant(&self) -> &ScriptedAssistant {
        &self.assistant
    }

    pub fn capacity_advisor(&self) -> &ScriptedAssistant {
        &self.capacity_advisor
    }

    /// AI 对话页回复（任何输入都有结果）
    pub fn respond(&self, text: &str) -> AssistantResponse {
        self.assistant.respond(text)
    }

    /// 产能规划面板回复
    pub fn ask_capacity(&self, text: &str) -> AssistantResponse {
        self.capacity_advisor.respond(text)
    }

    pub fn prompt_library(&self) -> &[PromptTemplate] {
        &self.prompts
    }

    /// 按 ID 取提示词
    pub fn prompt(&self, prompt_id: &str) -> ApiResult<&PromptTemplate> {
        self.prompts
            .iter()
            .find(|p| p.id == prompt_id)
            .ok_or_else(|| ApiError::NotFound(format!("提示词{}不存在", prompt_id)))
    }

    /// 新对话（欢迎语开场）
    pub fn new_transcript(&self) -> ChatState {
        ChatState::new()
    }

    /// 同步问答：追加用户消息与助手回复；空白输入原样返回
    pub fn exchange(&self, state: &ChatState, text: &str) -> ChatState {
        if text.trim().is_empty() {
            return state.clone();
        }
        let submitted = reduce_chat(state, ChatAction::Submit(text.to_string()));
        reduce_chat(
            &submitted,
            ChatAction::Respond {
                response: self.respond(text),
            },
        )
    }
}

impl Default for ChatApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChatRole;

    #[test]
    fn test_prompt_library_and_lookup() {
        let api = ChatApi::new();
        assert_eq!(api.prompt_library().len(), 25);
        let prompt = api.prompt("growth-trends").unwrap();
        assert_eq!(api.respond(&prompt.prompt).rule, "growth-trends");
        assert!(matches!(api.prompt("nope"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_exchange_appends_two_messages() {
        let api = ChatApi::new();
        let state = api.new_transcript();
        let state = api.exchange(&state, "zzz");
        assert_eq!(state.transcript.len(), 3);
        assert_eq!(state.transcript[1].role, ChatRole::User);
        assert_eq!(state.transcript[2].role, ChatRole::Assistant);
        assert!(!state.is_typing());

        let unchanged = api.exchange(&state, " ");
        assert_eq!(unchanged, state);
    }

    #[test]
    fn test_ask_capacity() {
        assert_eq!(ChatApi::new().ask_capacity("Any expansion ideas?").rule, "expansion");
    }
}
