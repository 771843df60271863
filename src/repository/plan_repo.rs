// ==========================================
// 设备预防性维护排程系统 - 维护计划仓储契约
// ==========================================
// 职责: 定义维护计划读取接口 (不包含实现)
// 实现者: 宿主应用的存储适配层
// ==========================================

use async_trait::async_trait;

use crate::domain::MaintenancePlan;
use crate::repository::error::RepositoryResult;

// ==========================================
// PlanRepository Trait
// ==========================================
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// 读取全部激活状态的维护计划
    ///
    /// 回填器以此为遍历宇宙, 非激活计划不参与
    async fn fetch_active_plans(&self) -> RepositoryResult<Vec<MaintenancePlan>>;

    /// 按设备编码读取该设备的全部计划 (含非激活)
    async fn fetch_by_code(&self, asset_code: &str) -> RepositoryResult<Vec<MaintenancePlan>>;
}
