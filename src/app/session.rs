// ==========================================
// 销售预测与产能规划分析系统 - 视图会话
// ==========================================
// 职责: 将用户动作交给 reducer，并在模拟处理延迟后派发 Commit / Respond
// 并发: 状态放在 Arc<tokio::sync::Mutex> 中；定时器为独立 tokio 任务
// 红线: 驾驶舱只有最新令牌的定时器能提交结果，过期定时器到期后被丢弃
//       对话回复按提交顺序追加（每个回复等待前一个回复完成）
// ==========================================

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::app::reducer::{
    reduce_chat, reduce_dashboard, ChatAction, ChatState, DashboardAction, DashboardState,
};
use crate::config::AnalyticsConfig;
use crate::domain::View;
use crate::engine::{OptionalEventPublisher, ScriptedAssistant, SessionEvent, SessionEventType};

/// 定时提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied { token: u64 },
    Discarded { token: u64, current: u64 },
}

impl CommitOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommitOutcome::Applied { .. })
    }
}

// ==========================================
// DashboardSession
// ==========================================
pub struct DashboardSession {
    state: Arc<Mutex<DashboardState>>,
    filter_delay: Duration,
    forecast_delay: Duration,
    events: OptionalEventPublisher,
}

impl DashboardSession {
    pub fn new(initial: DashboardState, config: &AnalyticsConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial)),
            filter_delay: config.filter_delay(),
            forecast_delay: config.forecast_delay(),
            events: OptionalEventPublisher::none(),
        }
    }

    pub fn with_events(mut self, events: OptionalEventPublisher) -> Self {
        self.events = events;
        self
    }

    /// 当前状态快照
    pub async fn snapshot(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    /// 派发用户动作
    ///
    /// 立即应用动作（递增令牌、进入 loading），随后启动定时器；
    /// 定时器到期时以发起时的令牌派发 Commit。
    /// Commit 动作本身不经过定时器，直接应用。
    pub async fn dispatch(&self, action: DashboardAction) -> JoinHandle<CommitOutcome> {
        let delay = match &action {
            DashboardAction::RequestForecast => self.forecast_delay,
            DashboardAction::Commit { .. } => Duration::ZERO,
            _ => self.filter_delay,
        };

        let token = {
            let mut guard = self.state.lock().await;
            match action {
                DashboardAction::Commit { token } => token,
                other => {
                    *guard = reduce_dashboard(&guard, other);
                    guard.generation
                }
            }
        };
        debug!(token, delay_ms = delay.as_millis() as u64, "驾驶舱请求已登记");

        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            commit(&state, &events, token).await
        })
    }
}

async fn commit(
    state: &Mutex<DashboardState>,
    events: &OptionalEventPublisher,
    token: u64,
) -> CommitOutcome {
    let mut guard = state.lock().await;
    let current = guard.generation;
    if !guard.accepts(token) {
        debug!(token, current, "过期请求已丢弃");
        events.publish(SessionEvent::new(
            View::Dashboard,
            SessionEventType::StaleRequestDiscarded,
            token,
        ));
        return CommitOutcome::Discarded { token, current };
    }

    let was_showing = guard.show_forecast;
    *guard = reduce_dashboard(&guard, DashboardAction::Commit { token });
    info!(
        token,
        product = %guard.committed.product,
        plant = %guard.committed.plant,
        area = %guard.committed.area,
        "筛选条件已提交"
    );
    events.publish(SessionEvent::new(
        View::Dashboard,
        SessionEventType::SelectionCommitted,
        token,
    ));
    if guard.show_forecast && !was_showing {
        events.publish(SessionEvent::new(
            View::Dashboard,
            SessionEventType::ForecastGenerated,
            token,
        ));
    }
    CommitOutcome::Applied { token }
}

// ==========================================
// ChatSession
// ==========================================
pub struct ChatSession {
    state: Arc<Mutex<ChatState>>,
    /// 上一个回复的完成信号
    tail: Mutex<Option<oneshot::Receiver<()>>>,
    assistant: Arc<ScriptedAssistant>,
    view: View,
    delay: Duration,
    events: OptionalEventPublisher,
}

impl ChatSession {
    /// AI 对话页会话（延迟取 chat_delay）
    pub fn new(assistant: ScriptedAssistant, config: &AnalyticsConfig) -> Self {
        Self::with_delay(assistant, View::AiChat, config.chat_delay())
    }

    /// 产能规划面板问答（延迟取 filter_delay）
    pub fn capacity_panel(assistant: ScriptedAssistant, config: &AnalyticsConfig) -> Self {
        Self::with_delay(assistant, View::CapacityPlanning, config.filter_delay())
    }

    fn with_delay(assistant: ScriptedAssistant, view: View, delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChatState::new())),
            tail: Mutex::new(None),
            assistant: Arc::new(assistant),
            view,
            delay,
            events: OptionalEventPublisher::none(),
        }
    }

    pub fn with_events(mut self, events: OptionalEventPublisher) -> Self {
        self.events = events;
        self
    }

    pub async fn snapshot(&self) -> ChatState {
        self.state.lock().await.clone()
    }

    /// 提交问题；空白输入返回 None
    ///
    /// 回复在提交时即按当前输入计算，延迟后追加到对话记录。
    /// 多线程运行时下定时器可能乱序到期，回复仍按提交顺序追加。
    pub async fn submit(&self, text: &str) -> Option<JoinHandle<()>> {
        if text.trim().is_empty() {
            return None;
        }

        // 持有 tail 锁期间登记问题，保证回复链顺序与问题顺序一致
        let (done_tx, done_rx) = oneshot::channel();
        let previous = {
            let mut tail = self.tail.lock().await;
            let mut guard = self.state.lock().await;
            *guard = reduce_chat(&guard, ChatAction::Submit(text.to_string()));
            drop(guard);
            tail.replace(done_rx)
        };

        let response = self.assistant.respond(text);
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let view = self.view;
        let delay = self.delay;

        Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if let Some(previous) = previous {
                // 发送端被丢弃（前一任务中止）时同样放行
                let _ = previous.await;
            }
            let rule = response.rule.clone();
            let mut guard = state.lock().await;
            *guard = reduce_chat(&guard, ChatAction::Respond { response });
            let turn = guard.transcript.len() as u64;
            drop(guard);
            debug!(rule = %rule, "助手回复已追加");
            events.publish(
                SessionEvent::new(view, SessionEventType::ChatResponded, turn).with_detail(rule),
            );
            let _ = done_tx.send(());
        }))
    }
}
