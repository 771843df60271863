// ==========================================
// 设备预防性维护排程系统 - 数据仓储层
// ==========================================
// 职责: 仓储契约定义 + 内存参考实现
// 红线: 持久化方案归宿主应用, 核心库只面向 trait 编程
// ==========================================

pub mod asset_repo;
pub mod error;
pub mod execution_log_repo;
pub mod memory;
pub mod plan_repo;

// 重导出仓储契约
pub use asset_repo::AssetRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use execution_log_repo::ExecutionLogRepository;
pub use plan_repo::PlanRepository;

// 重导出内存参考实现
pub use memory::{MemoryAssetRepository, MemoryExecutionLogRepository, MemoryPlanRepository};
