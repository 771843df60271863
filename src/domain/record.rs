// ==========================================
// 设备预防性维护排程系统 - 执行记录领域模型
// ==========================================
// 红线: ExecutionRecord 是唯一可变事实表;
//       预防性计划下同一 (设备, ISO年, ISO周) 至多一条记录
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{ExecutionStatus, IsoWeek};

// ==========================================
// ExecutionRecord - 维护执行记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub record_id: Uuid,                  // 记录ID
    pub asset_code: String,               // 设备编码
    pub iso_year: i32,                    // ISO 年
    pub iso_week: u32,                    // ISO 周 1..=52/53
    pub performed_on: Option<NaiveDate>,  // 实际执行日期 (回填记录为 None)
    pub status: ExecutionStatus,          // 执行状态
    pub responsible: Option<String>,      // 责任人
    pub notes: Option<String>,            // 备注
}

impl ExecutionRecord {
    /// 创建已执行记录
    pub fn performed(
        asset_code: &str,
        slot: IsoWeek,
        performed_on: NaiveDate,
        responsible: Option<String>,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            asset_code: asset_code.to_string(),
            iso_year: slot.iso_year,
            iso_week: slot.week,
            performed_on: Some(performed_on),
            status: ExecutionStatus::Performed,
            responsible,
            notes: None,
        }
    }

    /// 创建回填器补登的未执行记录
    ///
    /// performed_on 恒为 None, 备注标记系统来源以便审计区分
    pub fn synthesized(asset_code: &str, slot: IsoWeek) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            asset_code: asset_code.to_string(),
            iso_year: slot.iso_year,
            iso_week: slot.week,
            performed_on: None,
            status: ExecutionStatus::NotPerformed,
            responsible: None,
            notes: Some("AUTO_BACKFILL".to_string()),
        }
    }

    /// 记录所属的 ISO 周
    pub fn slot(&self) -> IsoWeek {
        IsoWeek::new(self.iso_year, self.iso_week)
    }

    /// 判断是否纠正性维修记录
    pub fn is_corrective(&self) -> bool {
        self.status == ExecutionStatus::Corrective
    }
}
