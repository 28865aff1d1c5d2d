// ==========================================
// 销售预测与产能规划分析系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享 API 实例，并为各视图创建会话
// 说明: 数据在启动时生成一次；会话之间只共享只读数据
// ==========================================

use std::sync::Arc;

use crate::api::{ApiResult, CapacityApi, ChatApi, DashboardApi, ExportApi};
use crate::app::reducer::DashboardState;
use crate::app::session::{ChatSession, DashboardSession};
use crate::catalog::capacity::capacity_insights;
use crate::catalog::Catalog;
use crate::config::{AnalyticsConfig, ConfigManager};
use crate::engine::{OptionalEventPublisher, ScriptedAssistant, SessionEventPublisher};

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    pub config: AnalyticsConfig,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,

    /// 产能规划API
    pub capacity_api: Arc<CapacityApi>,

    /// 对话API
    pub chat_api: Arc<ChatApi>,

    /// 导出API
    pub export_api: Arc<ExportApi>,

    /// 会话事件发布器（未配置时为空操作）
    pub event_publisher: OptionalEventPublisher,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config: 已校验的运行配置
    /// - catalog: 生成目录
    pub fn new(config: AnalyticsConfig, catalog: Catalog) -> ApiResult<Self> {
        config.validate()?;
        tracing::info!(jitter = ?config.jitter, "初始化AppState");

        Ok(Self {
            dashboard_api: Arc::new(DashboardApi::new(catalog, &config)),
            capacity_api: Arc::new(CapacityApi::new()),
            chat_api: Arc::new(ChatApi::new()),
            export_api: Arc::new(ExportApi::new()),
            event_publisher: OptionalEventPublisher::none(),
            config,
        })
    }

    /// 读取默认配置（环境变量 / 用户配置目录）并使用内置目录
    pub fn from_default_config() -> ApiResult<Self> {
        let manager = ConfigManager::load_default()?;
        if let Some(path) = manager.source_path() {
            tracing::info!("使用配置文件: {}", path.display());
        }
        Self::new(manager.into_config(), Catalog::default())
    }

    pub fn with_event_publisher(mut self, publisher: Arc<dyn SessionEventPublisher>) -> Self {
        self.event_publisher = OptionalEventPublisher::with_publisher(publisher);
        self
    }

    /// 驾驶舱会话（初始选择为首个产品）
    pub fn dashboard_session(&self) -> DashboardSession {
        let product = self.dashboard_api.default_product().unwrap_or_default();
        DashboardSession::new(DashboardState::new(product), &self.config)
            .with_events(self.event_publisher.clone())
    }

    /// AI 对话页会话
    pub fn chat_session(&self) -> ChatSession {
        ChatSession::new(self.chat_api.assistant().clone(), &self.config)
            .with_events(self.event_publisher.clone())
    }

    /// 产能规划面板问答会话
    pub fn capacity_chat_session(&self) -> ChatSession {
        let advisor = ScriptedAssistant::capacity_advisor(&capacity_insights());
        ChatSession::capacity_panel(advisor, &self.config)
            .with_events(self.event_publisher.clone())
    }
}
