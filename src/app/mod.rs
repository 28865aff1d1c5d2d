// ==========================================
// 销售预测与产能规划分析系统 - 应用层
// ==========================================
// 职责: 视图状态快照、reducer、带模拟延迟的会话、共享应用状态
// ==========================================

pub mod reducer;
pub mod session;
pub mod state;

// 重导出
pub use reducer::{
    navigate, reduce_chat, reduce_dashboard, ChatAction, ChatState, DashboardAction,
    DashboardState,
};
pub use session::{ChatSession, CommitOutcome, DashboardSession};
pub use state::AppState;
