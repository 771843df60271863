// ==========================================
// 设备预防性维护排程系统 - 核心库
// ==========================================
// 系统定位: 嵌入式合规追踪引擎 (上层应用持有最终控制权)
// 技术栈: Rust + tokio (存储/界面由宿主应用提供)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问契约
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 缓存层 - 设备快照缓存
pub mod cache;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ComplianceStatus, ExecutionStatus, IsoWeek, MaintenanceFrequency};

// 领域实体
pub use domain::{Asset, ExecutionRecord, MaintenancePlan, ScheduleVector};

// 引擎
pub use engine::{
    AssetEvent, AssetEventBus, BackfillSummary, Clock, ComplianceClassifier, EngineError,
    FixedClock, MaintenanceRepositories, ScheduleStore, SkippedWeek, SystemClock,
    TraceabilityBackfiller, WeekCompliance,
};

// 缓存
pub use cache::AssetCache;

// 配置
pub use config::MaintenanceConfig;

// API
pub use api::{ApiError, AssetApi, BoardEntry, ComplianceApi, TraceabilityApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备预防性维护排程系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
