// ==========================================
// 设备预防性维护排程系统 - 合规查询 API
// ==========================================
// 职责: 单设备单周合规状态 + 周看板
// 红线: 同一次查询只使用一个执行记录快照,
//       不得跨快照混拼结果
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::types::{ComplianceStatus, IsoWeek, MaintenanceFrequency};
use crate::domain::{Asset, ExecutionRecord};
use crate::engine::calendar;
use crate::engine::clock::Clock;
use crate::engine::compliance::ComplianceClassifier;
use crate::engine::repositories::MaintenanceRepositories;
use crate::engine::schedule::ScheduleStore;
use crate::api::error::{ApiError, ApiResult};

// ==========================================
// BoardEntry - 周看板条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub asset: Asset,             // 设备
    pub status: ComplianceStatus, // 该周合规状态
}

// ==========================================
// ComplianceApi - 合规查询 API
// ==========================================
pub struct ComplianceApi {
    repos: MaintenanceRepositories,
    clock: Arc<dyn Clock>,
}

impl ComplianceApi {
    /// 构造合规查询 API
    pub fn new(repos: MaintenanceRepositories, clock: Arc<dyn Clock>) -> Self {
        Self { repos, clock }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 查询单设备单周的合规状态
    ///
    /// # 错误
    /// - AssetNotFound: 设备编码不存在
    /// - NotScheduled: 该周不在设备的预期周宇宙内
    #[instrument(skip(self))]
    pub async fn get_compliance_status(
        &self,
        asset_code: &str,
        iso_year: i32,
        iso_week: u32,
    ) -> ApiResult<ComplianceStatus> {
        let asset = self
            .repos
            .asset_repo
            .fetch_by_code(asset_code)
            .await?
            .ok_or_else(|| ApiError::AssetNotFound {
                asset_code: asset_code.to_string(),
            })?;

        let (anchor, frequency) = self.schedule_source(&asset).await?;
        let vector = ScheduleStore::vector_for(asset_code, iso_year, anchor, frequency);

        // 单快照: 一次取全当年记录
        let records = self
            .repos
            .execution_repo
            .fetch_by_asset_and_year_range(asset_code, iso_year, iso_year)
            .await?;
        let record = records
            .iter()
            .find(|r| r.iso_year == iso_year && r.iso_week == iso_week);

        let classifier = ComplianceClassifier::new(self.clock.today());
        classifier
            .classify_week(&vector, iso_week, record)?
            .ok_or_else(|| ApiError::NotScheduled {
                asset_code: asset_code.to_string(),
                iso_year,
                iso_week,
            })
    }

    /// 查询周看板: 全部设备在指定周的合规状态
    ///
    /// 该周无排程且无纠正性记录的设备不出现在看板上。
    /// 每台设备各取一次记录快照, 设备内部结果一致。
    #[instrument(skip(self))]
    pub async fn get_weekly_board(
        &self,
        iso_year: i32,
        iso_week: u32,
    ) -> ApiResult<Vec<BoardEntry>> {
        let assets = self.repos.asset_repo.fetch_all().await?;
        let classifier = ComplianceClassifier::new(self.clock.today());

        let mut board = Vec::new();
        for asset in assets {
            let (anchor, frequency) = self.schedule_source(&asset).await?;
            let vector = ScheduleStore::vector_for(&asset.asset_code, iso_year, anchor, frequency);

            let records: Vec<ExecutionRecord> = self
                .repos
                .execution_repo
                .fetch_by_asset_and_year_range(&asset.asset_code, iso_year, iso_year)
                .await?;
            let record = records
                .iter()
                .find(|r| r.iso_year == iso_year && r.iso_week == iso_week);

            if let Some(status) = classifier.classify_week(&vector, iso_week, record)? {
                board.push(BoardEntry { asset, status });
            }
        }
        Ok(board)
    }

    // ==========================================
    // 排程来源判定
    // ==========================================

    /// 设备的排程锚定周与频率
    ///
    /// 优先取激活计划 (创建日 + 计划频率); 同设备存在多条激活计划时
    /// 取创建最早者, 与仓储返回顺序无关 (同日再按 plan_id 定序)。
    /// 无激活计划时退回设备主数据 (登记日 + 设备频率)
    async fn schedule_source(
        &self,
        asset: &Asset,
    ) -> ApiResult<(IsoWeek, Option<MaintenanceFrequency>)> {
        let plans = self.repos.plan_repo.fetch_by_code(&asset.asset_code).await?;
        if let Some(plan) = plans
            .iter()
            .filter(|p| p.active)
            .min_by_key(|p| (p.created_on, p.plan_id))
        {
            return Ok((calendar::week_of(plan.created_on), Some(plan.frequency)));
        }
        Ok((calendar::week_of(asset.registered_on), asset.frequency))
    }
}
