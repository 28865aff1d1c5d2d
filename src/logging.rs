// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 日志统一输出到 stderr，stdout 留给 CLI 的 JSON / CSV 输出
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认日志级别
pub const DEFAULT_LOG_FILTER: &str = "warn,sales_capacity_analytics=info";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: DEFAULT_LOG_FILTER）
///   例如: RUST_LOG=sales_capacity_analytics=debug
///
/// # 示例
/// ```no_run
/// use sales_capacity_analytics::logging;
/// logging::init();
/// ```
pub fn init() {
    init_with_default(DEFAULT_LOG_FILTER);
}

/// 指定缺省过滤器初始化；重复初始化时静默忽略
pub fn init_with_default(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// 初始化测试环境的日志系统
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
