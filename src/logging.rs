// ==========================================
// 设备预防性维护排程系统 - 日志初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 核心库只提供初始化入口, 日志落盘由宿主应用决定
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=maintenance_core=trace
pub fn init() {
    init_with("info");
}

/// 以指定默认级别初始化日志系统
///
/// RUST_LOG 存在时优先于 `default_level`
pub fn init_with(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 重复调用安全, 输出重定向到测试捕获器
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
