// ==========================================
// 设备预防性维护排程系统 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎, 不拼 SQL
// 红线: 周历与分类为纯函数; 仓储 I/O 只经 trait 契约
// ==========================================

pub mod backfill;
pub mod calendar;
pub mod clock;
pub mod compliance;
pub mod error;
pub mod events;
pub mod repositories;
pub mod schedule;

// 重导出核心引擎
pub use backfill::{BackfillSummary, SkippedWeek, TraceabilityBackfiller};
pub use clock::{Clock, FixedClock, SystemClock};
pub use compliance::{ComplianceClassifier, WeekCompliance};
pub use error::{EngineError, EngineResult};
pub use events::{AssetEvent, AssetEventBus};
pub use repositories::MaintenanceRepositories;
pub use schedule::ScheduleStore;
