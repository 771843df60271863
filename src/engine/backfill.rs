// ==========================================
// 设备预防性维护排程系统 - 追溯回填引擎
// ==========================================
// 职责: 对每个激活计划, 补齐预期周宇宙中缺失的执行记录
// 红线: 幂等 - 重复运行不改变记录总数;
//       单条失败只记日志不升级, 单计划失败不阻断其他计划;
//       取消只停止后续写入, 不回滚已提交插入
// ==========================================

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::config::MaintenanceConfig;
use crate::domain::plan::MaintenancePlan;
use crate::domain::record::ExecutionRecord;
use crate::domain::types::IsoWeek;
use crate::engine::calendar;
use crate::engine::clock::Clock;
use crate::engine::repositories::MaintenanceRepositories;
use crate::engine::schedule::ScheduleStore;
use crate::repository::RepositoryResult;

// ==========================================
// 回填结果
// ==========================================

/// 单个槽位的跳过/失败原因
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedWeek {
    pub asset_code: String, // 设备编码
    pub slot: IsoWeek,      // 槽位
    pub reason: String,     // 原因描述
}

/// 回填批次汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackfillSummary {
    pub created: usize,             // 补登记录数
    pub skipped: Vec<SkippedWeek>,  // 跳过/失败明细
}

impl BackfillSummary {
    fn merge(&mut self, other: BackfillSummary) {
        self.created += other.created;
        self.skipped.extend(other.skipped);
    }
}

// ==========================================
// TraceabilityBackfiller - 追溯回填引擎
// ==========================================
pub struct TraceabilityBackfiller {
    repos: MaintenanceRepositories,
    clock: Arc<dyn Clock>,
    config: MaintenanceConfig,
}

impl TraceabilityBackfiller {
    /// 构造回填引擎
    pub fn new(
        repos: MaintenanceRepositories,
        clock: Arc<dyn Clock>,
        config: MaintenanceConfig,
    ) -> Self {
        Self {
            repos,
            clock,
            config,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 回填至当前年 (含配置的未来预生成年数)
    ///
    /// 地平线年 = 今天所在 ISO 年 + backfill_future_years (默认 0)
    pub async fn backfill_current(
        &self,
        cancel: &CancellationToken,
    ) -> RepositoryResult<BackfillSummary> {
        let horizon_year = calendar::week_of(self.clock.today()).iso_year
            + self.config.backfill_future_years as i32;
        self.backfill_through(horizon_year, cancel).await
    }

    /// 回填至指定地平线年的最后一个 ISO 周
    ///
    /// 遍历全部激活计划; 计划读取失败直接返回错误 (批次尚未开始)。
    /// 单个计划内部的失败按部分成功策略处理, 不向上抛出。
    #[instrument(skip(self, cancel))]
    pub async fn backfill_through(
        &self,
        horizon_year: i32,
        cancel: &CancellationToken,
    ) -> RepositoryResult<BackfillSummary> {
        let plans = self.repos.plan_repo.fetch_active_plans().await?;
        let mut summary = BackfillSummary::default();

        for plan in &plans {
            if cancel.is_cancelled() {
                info!("回填批次被取消, 已处理 {} 条", summary.created);
                break;
            }
            if !plan.generates_expected_weeks() {
                continue;
            }
            match self.backfill_plan(plan, horizon_year, cancel).await {
                Ok(plan_summary) => summary.merge(plan_summary),
                // 部分成功策略: 单计划失败不阻断其他设备的回填
                Err(e) => {
                    warn!(
                        asset_code = %plan.asset_code,
                        error = %e,
                        "计划回填失败, 继续处理后续计划"
                    );
                    summary.skipped.push(SkippedWeek {
                        asset_code: plan.asset_code.clone(),
                        slot: calendar::week_of(plan.created_on),
                        reason: format!("计划级失败: {e}"),
                    });
                }
            }
        }

        info!(
            created = summary.created,
            skipped = summary.skipped.len(),
            "回填批次完成"
        );
        Ok(summary)
    }

    // ==========================================
    // 单计划回填
    // ==========================================

    /// 回填单个计划: [创建周, 地平线年末周] 闭区间
    async fn backfill_plan(
        &self,
        plan: &MaintenancePlan,
        horizon_year: i32,
        cancel: &CancellationToken,
    ) -> RepositoryResult<BackfillSummary> {
        let anchor = calendar::week_of(plan.created_on);
        if horizon_year < anchor.iso_year {
            return Ok(BackfillSummary::default());
        }

        // 一次性拉取区间内已有记录, 作为本计划的基准快照
        let existing = self
            .repos
            .execution_repo
            .fetch_by_asset_and_year_range(&plan.asset_code, anchor.iso_year, horizon_year)
            .await?;
        let existing_slots: HashSet<IsoWeek> = existing.iter().map(|r| r.slot()).collect();

        let mut summary = BackfillSummary::default();
        for year in anchor.iso_year..=horizon_year {
            let vector = ScheduleStore::vector_for(
                &plan.asset_code,
                year,
                anchor,
                Some(plan.frequency),
            );
            for week in vector.expected_weeks() {
                let slot = IsoWeek::new(year, week);
                if existing_slots.contains(&slot) {
                    continue;
                }
                if cancel.is_cancelled() {
                    // 停止发起新写入; 已提交插入保持原样
                    return Ok(summary);
                }
                self.synthesize_one(plan, slot, &mut summary).await;
            }
        }

        debug!(
            asset_code = %plan.asset_code,
            created = summary.created,
            "计划回填完成"
        );
        Ok(summary)
    }

    /// 补登单个槽位, 插入前复查存在性
    ///
    /// check-then-insert 不具原子性: 复查通过后插入仍可能
    /// 撞上并发写入的唯一约束, 此时静默跳过
    async fn synthesize_one(
        &self,
        plan: &MaintenancePlan,
        slot: IsoWeek,
        summary: &mut BackfillSummary,
    ) {
        match self
            .repos
            .execution_repo
            .exists(&plan.asset_code, slot.iso_year, slot.week)
            .await
        {
            Ok(true) => {
                debug!(asset_code = %plan.asset_code, slot = %slot, "复查命中已有记录, 跳过");
                return;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(asset_code = %plan.asset_code, slot = %slot, error = %e, "存在性复查失败");
                summary.skipped.push(SkippedWeek {
                    asset_code: plan.asset_code.clone(),
                    slot,
                    reason: format!("存在性复查失败: {e}"),
                });
                return;
            }
        }

        let record = ExecutionRecord::synthesized(&plan.asset_code, slot);
        match self.repos.execution_repo.insert(record).await {
            Ok(()) => summary.created += 1,
            Err(e) if e.is_duplicate() => {
                debug!(asset_code = %plan.asset_code, slot = %slot, "并发竞争致重复, 跳过");
            }
            Err(e) => {
                warn!(asset_code = %plan.asset_code, slot = %slot, error = %e, "补登插入失败");
                summary.skipped.push(SkippedWeek {
                    asset_code: plan.asset_code.clone(),
                    slot,
                    reason: format!("插入失败: {e}"),
                });
            }
        }
    }
}
