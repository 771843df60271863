// ==========================================
// 设备预防性维护排程系统 - 引擎层仓储聚合
// ==========================================
// 职责: 聚合引擎所需的仓储契约, 简化依赖注入
// 说明: 将 3 个 trait 对象合并为 1 个结构体参数,
//       便于测试时整体替换为内存实现
// ==========================================

use std::sync::Arc;

use crate::repository::{AssetRepository, ExecutionLogRepository, PlanRepository};

/// 维护引擎仓储集合
#[derive(Clone)]
pub struct MaintenanceRepositories {
    /// 设备仓储
    pub asset_repo: Arc<dyn AssetRepository>,
    /// 维护计划仓储
    pub plan_repo: Arc<dyn PlanRepository>,
    /// 执行日志仓储
    pub execution_repo: Arc<dyn ExecutionLogRepository>,
}

impl MaintenanceRepositories {
    /// 创建新的仓储集合
    pub fn new(
        asset_repo: Arc<dyn AssetRepository>,
        plan_repo: Arc<dyn PlanRepository>,
        execution_repo: Arc<dyn ExecutionLogRepository>,
    ) -> Self {
        Self {
            asset_repo,
            plan_repo,
            execution_repo,
        }
    }
}
