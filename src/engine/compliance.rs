// ==========================================
// 设备预防性维护排程系统 - 合规状态分类引擎
// ==========================================
// 职责: 按 (排程向量, 执行记录, 今天) 派生每周合规状态
// 红线: 注入式 "今天", 同一输入必得同一输出;
//       向量长度非法属程序性错误, 快速失败
// ==========================================

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::plan::ScheduleVector;
use crate::domain::record::ExecutionRecord;
use crate::domain::types::{ComplianceStatus, ExecutionStatus, IsoWeek};
use crate::engine::calendar;
use crate::engine::error::{EngineError, EngineResult};

// ==========================================
// WeekCompliance - 单周合规结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekCompliance {
    pub slot: IsoWeek,                // 槽位
    pub status: ComplianceStatus,     // 派生状态
    pub record_id: Option<Uuid>,      // 命中的执行记录 (无记录时为 None)
}

// ==========================================
// ComplianceClassifier - 合规状态分类引擎
// ==========================================
pub struct ComplianceClassifier {
    today: NaiveDate,
}

impl ComplianceClassifier {
    /// 以注入的业务日期构造
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分类整年: 每个被评估槽位恰好产生一个状态
    ///
    /// - 槽位为 false 且无纠正性记录 → 不评估 (不出现在结果中)
    /// - 槽位为 false 但存在纠正性记录 → 无条件计 Corrective
    ///   (反应性维修不占用预防性槽位, 但须出现在看板上)
    ///
    /// # 错误
    /// - MalformedScheduleVector: 向量长度 ≠ 当年周数
    pub fn classify_year(
        &self,
        vector: &ScheduleVector,
        records: &[ExecutionRecord],
    ) -> EngineResult<Vec<WeekCompliance>> {
        self.validate_vector(vector)?;

        let mut results = Vec::new();
        for (idx, expected) in vector.slots.iter().enumerate() {
            let slot = IsoWeek::new(vector.iso_year, (idx + 1) as u32);
            let record = records
                .iter()
                .find(|r| r.iso_year == slot.iso_year && r.iso_week == slot.week);

            if let Some(status) = self.classify_slot(slot, *expected, record)? {
                results.push(WeekCompliance {
                    slot,
                    status,
                    record_id: record.map(|r| r.record_id),
                });
            }
        }
        Ok(results)
    }

    /// 分类单周
    ///
    /// # 返回
    /// - Ok(None): 该周不评估 (槽位 false 且无纠正性记录)
    pub fn classify_week(
        &self,
        vector: &ScheduleVector,
        week: u32,
        record: Option<&ExecutionRecord>,
    ) -> EngineResult<Option<ComplianceStatus>> {
        self.validate_vector(vector)?;
        let expected = vector.slot(week).ok_or_else(|| {
            EngineError::CalendarArithmetic(format!(
                "周序号越界: {}-W{:02}",
                vector.iso_year, week
            ))
        })?;
        self.classify_slot(IsoWeek::new(vector.iso_year, week), expected, record)
    }

    // ==========================================
    // 状态判定 (真值表)
    // ==========================================

    /// 单槽位状态判定
    ///
    /// 真值槽位的判定顺序 (命中即返回):
    /// 1) 纠正性记录 → Corrective
    /// 2) 未执行记录 (回填持久化) → NotPerformed
    /// 3) 有执行日期: 落在目标周 [周一, 周日] → OnTimeCompleted, 否则 LateCompleted
    /// 4) 无记录 (或记录无执行日期): 目标周周一 ≥ 今天所在周周一 → Pending, 否则 Overdue
    fn classify_slot(
        &self,
        slot: IsoWeek,
        expected: bool,
        record: Option<&ExecutionRecord>,
    ) -> EngineResult<Option<ComplianceStatus>> {
        // 纠正性维修无条件分类, 与槽位无关
        if let Some(r) = record {
            if r.is_corrective() {
                return Ok(Some(ComplianceStatus::Corrective));
            }
        }
        if !expected {
            return Ok(None);
        }

        match record {
            Some(r) if r.status == ExecutionStatus::NotPerformed => {
                Ok(Some(ComplianceStatus::NotPerformed))
            }
            Some(r) => match r.performed_on {
                Some(performed) => {
                    let monday = calendar::monday_of(slot)?;
                    let sunday = monday + Duration::days(calendar::DAYS_PER_WEEK - 1);
                    if performed >= monday && performed <= sunday {
                        Ok(Some(ComplianceStatus::OnTimeCompleted))
                    } else {
                        Ok(Some(ComplianceStatus::LateCompleted))
                    }
                }
                // 已执行但缺执行日期: 按无记录规则兜底
                None => self.pending_or_overdue(slot).map(Some),
            },
            None => self.pending_or_overdue(slot).map(Some),
        }
    }

    /// 无记录槽位: 按目标周相对今天的位置判定
    fn pending_or_overdue(&self, slot: IsoWeek) -> EngineResult<ComplianceStatus> {
        let slot_monday = calendar::monday_of(slot)?;
        let today_monday = calendar::monday_of(calendar::week_of(self.today))?;
        if slot_monday >= today_monday {
            Ok(ComplianceStatus::Pending)
        } else {
            Ok(ComplianceStatus::Overdue)
        }
    }

    // ==========================================
    // 不变量校验
    // ==========================================

    fn validate_vector(&self, vector: &ScheduleVector) -> EngineResult<()> {
        let expected = calendar::weeks_in_year(vector.iso_year);
        if vector.slots.len() != expected as usize {
            return Err(EngineError::MalformedScheduleVector {
                iso_year: vector.iso_year,
                expected,
                actual: vector.slots.len(),
            });
        }
        Ok(())
    }
}
