// ==========================================
// 销售预测与产能规划分析系统 - 会话事件发布
// ==========================================
// 职责: 定义会话事件发布 trait，实现依赖倒置
// 说明: App 层会话在提交/丢弃结果时发布事件，下游按需订阅
// ==========================================

use crate::domain::View;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// 会话事件类型
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEventType {
    /// 筛选条件已提交
    SelectionCommitted,
    /// 预测已生成
    ForecastGenerated,
    /// 过期请求被丢弃
    StaleRequestDiscarded,
    /// 助手回复已追加
    ChatResponded,
}

impl SessionEventType {
    pub fn as_str(&self) -> &str {
        match self {
            SessionEventType::SelectionCommitted => "SelectionCommitted",
            SessionEventType::ForecastGenerated => "ForecastGenerated",
            SessionEventType::StaleRequestDiscarded => "StaleRequestDiscarded",
            SessionEventType::ChatResponded => "ChatResponded",
        }
    }
}

/// 会话事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub view: View,
    pub event_type: SessionEventType,
    /// 请求令牌（代数）
    pub generation: u64,
    /// 附加说明（例如命中的助手规则）
    pub detail: Option<String>,
}

impl SessionEvent {
    pub fn new(view: View, event_type: SessionEventType, generation: u64) -> Self {
        Self {
            view,
            event_type,
            generation,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

// ==========================================
// 事件发布 Trait
// ==========================================

/// 会话事件发布者
pub trait SessionEventPublisher: Send + Sync {
    /// 发布事件
    fn publish(&self, event: SessionEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 空操作事件发布者
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

impl SessionEventPublisher for NoOpEventPublisher {
    fn publish(&self, event: SessionEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            "NoOpEventPublisher: 跳过事件发布 - view={}, event_type={}",
            event.view,
            event.event_type.as_str()
        );
        Ok(())
    }
}

/// 记录型事件发布者（内存保存全部事件）
#[derive(Debug, Default)]
pub struct RecordingEventPublisher {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录事件的快照
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn count_of(&self, event_type: SessionEventType) -> usize {
        self.events()
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }
}

impl SessionEventPublisher for RecordingEventPublisher {
    fn publish(&self, event: SessionEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut guard = self
            .events
            .lock()
            .map_err(|e| format!("事件记录锁获取失败: {}", e))?;
        guard.push(event);
        Ok(())
    }
}

/// 可选的事件发布者包装
///
/// 简化 Option<Arc<dyn SessionEventPublisher>> 的使用；发布失败只记日志
#[derive(Clone)]
pub struct OptionalEventPublisher {
    inner: Option<Arc<dyn SessionEventPublisher>>,
}

impl OptionalEventPublisher {
    pub fn with_publisher(publisher: Arc<dyn SessionEventPublisher>) -> Self {
        Self {
            inner: Some(publisher),
        }
    }

    pub fn none() -> Self {
        Self { inner: None }
    }

    pub fn publish(&self, event: SessionEvent) {
        let Some(publisher) = &self.inner else {
            tracing::debug!(
                "OptionalEventPublisher: 未配置发布者，跳过事件 - view={}, event_type={}",
                event.view,
                event.event_type.as_str()
            );
            return;
        };
        if let Err(e) = publisher.publish(event) {
            tracing::warn!(error = %e, "会话事件发布失败");
        }
    }

    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for OptionalEventPublisher {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = SessionEvent::new(View::AiChat, SessionEventType::ChatResponded, 3)
            .with_detail("growth-trends");
        assert_eq!(event.generation, 3);
        assert_eq!(event.detail.as_deref(), Some("growth-trends"));
    }

    #[test]
    fn test_noop_publisher() {
        let event = SessionEvent::new(View::Dashboard, SessionEventType::SelectionCommitted, 1);
        assert!(NoOpEventPublisher.publish(event).is_ok());
    }

    #[test]
    fn test_optional_publisher_none() {
        let publisher = OptionalEventPublisher::none();
        assert!(!publisher.is_configured());
        publisher.publish(SessionEvent::new(
            View::Dashboard,
            SessionEventType::SelectionCommitted,
            1,
        ));
    }

    #[test]
    fn test_optional_publisher_records() {
        let recorder = Arc::new(RecordingEventPublisher::new());
        let publisher = OptionalEventPublisher::with_publisher(recorder.clone());
        assert!(publisher.is_configured());
        publisher.publish(SessionEvent::new(
            View::Dashboard,
            SessionEventType::StaleRequestDiscarded,
            2,
        ));
        assert_eq!(recorder.count_of(SessionEventType::StaleRequestDiscarded), 1);
    }
}
