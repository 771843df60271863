// ==========================================
// 设备预防性维护排程系统 - API 层
// ==========================================
// 职责: 面向上层调用方的业务接口聚合
// ==========================================

pub mod asset_api;
pub mod compliance_api;
pub mod error;
pub mod traceability_api;

// 重导出 API
pub use asset_api::AssetApi;
pub use compliance_api::{BoardEntry, ComplianceApi};
pub use error::{ApiError, ApiResult};
pub use traceability_api::TraceabilityApi;
