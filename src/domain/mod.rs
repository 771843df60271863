// ==========================================
// 设备预防性维护排程系统 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含业务规则与 I/O
// ==========================================

pub mod asset;
pub mod plan;
pub mod record;
pub mod types;

// 重导出领域实体
pub use asset::Asset;
pub use plan::{MaintenancePlan, ScheduleVector};
pub use record::ExecutionRecord;
pub use types::{ComplianceStatus, ExecutionStatus, IsoWeek, MaintenanceFrequency};
