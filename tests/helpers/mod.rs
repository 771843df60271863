// ==========================================
// 集成测试辅助 - 领域对象构造器与仓储装配
// ==========================================
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use maintenance_core::domain::{Asset, ExecutionRecord, MaintenancePlan};
use maintenance_core::repository::{
    MemoryAssetRepository, MemoryExecutionLogRepository, MemoryPlanRepository,
};
use maintenance_core::{ExecutionStatus, IsoWeek, MaintenanceFrequency, MaintenanceRepositories};

/// 日期构造捷径
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 创建测试用的设备
pub fn create_test_asset(
    asset_code: &str,
    frequency: Option<MaintenanceFrequency>,
    registered_on: NaiveDate,
) -> Asset {
    Asset {
        asset_code: asset_code.to_string(),
        name: format!("测试设备 {asset_code}"),
        brand: Some("ACME".to_string()),
        site: Some("一号车间".to_string()),
        frequency,
        registered_on,
    }
}

/// 创建测试用的激活维护计划
pub fn create_test_plan(
    asset_code: &str,
    created_on: NaiveDate,
    frequency: MaintenanceFrequency,
) -> MaintenancePlan {
    MaintenancePlan::new(asset_code, created_on, frequency)
}

/// 创建测试用的已执行记录
pub fn create_performed_record(
    asset_code: &str,
    slot: IsoWeek,
    performed_on: NaiveDate,
) -> ExecutionRecord {
    ExecutionRecord::performed(asset_code, slot, performed_on, Some("张工".to_string()))
}

/// 创建测试用的纠正性维修记录
pub fn create_corrective_record(
    asset_code: &str,
    slot: IsoWeek,
    performed_on: NaiveDate,
) -> ExecutionRecord {
    let mut record = ExecutionRecord::performed(asset_code, slot, performed_on, None);
    record.status = ExecutionStatus::Corrective;
    record
}

/// 测试仓储装配: 三个内存仓储 + 聚合结构
pub struct TestRepos {
    pub asset_repo: Arc<MemoryAssetRepository>,
    pub plan_repo: Arc<MemoryPlanRepository>,
    pub execution_repo: Arc<MemoryExecutionLogRepository>,
    pub repos: MaintenanceRepositories,
}

/// 装配一套内存仓储
pub fn setup_repos(
    assets: Vec<Asset>,
    plans: Vec<MaintenancePlan>,
    records: Vec<ExecutionRecord>,
) -> TestRepos {
    let asset_repo = Arc::new(MemoryAssetRepository::with_assets(assets));
    let plan_repo = Arc::new(MemoryPlanRepository::with_plans(plans));
    let execution_repo = Arc::new(MemoryExecutionLogRepository::with_records(records));
    let repos = MaintenanceRepositories::new(
        asset_repo.clone(),
        plan_repo.clone(),
        execution_repo.clone(),
    );
    TestRepos {
        asset_repo,
        plan_repo,
        execution_repo,
        repos,
    }
}
