// ==========================================
// 设备预防性维护排程系统 - 维护计划领域模型
// ==========================================
// 红线: 计划与排程向量是派生数据, 按需重算,
//       不作为可变状态独立持久化
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::MaintenanceFrequency;

// ==========================================
// MaintenancePlan - 维护计划
// ==========================================
// 仅激活状态的计划产生新的预期周
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePlan {
    pub plan_id: Uuid,                    // 计划ID
    pub asset_code: String,               // 关联设备编码
    pub created_on: NaiveDate,            // 创建日期 (锚定预期周区间起点)
    pub frequency: MaintenanceFrequency,  // 维护频率
    pub active: bool,                     // 激活标志
}

impl MaintenancePlan {
    /// 创建新的维护计划
    pub fn new(asset_code: &str, created_on: NaiveDate, frequency: MaintenanceFrequency) -> Self {
        Self {
            plan_id: Uuid::new_v4(),
            asset_code: asset_code.to_string(),
            created_on,
            frequency,
            active: true,
        }
    }

    /// 判断计划是否参与回填
    ///
    /// 仅激活且周期型的计划有预期周宇宙
    pub fn generates_expected_weeks(&self) -> bool {
        self.active && !self.frequency.is_event_driven()
    }
}

// ==========================================
// ScheduleVector - 排程向量
// ==========================================
// 不变量: slots.len() == weeksInYear(iso_year)
// 下标 i (0 起) ↔ ISO 周 i+1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleVector {
    pub asset_code: String, // 设备编码
    pub iso_year: i32,      // ISO 年
    pub slots: Vec<bool>,   // 预期周标志, 长度 52 或 53
}

impl ScheduleVector {
    /// 读取指定 ISO 周的槽位 (1 起)
    ///
    /// 周序号越界返回 None, 由调用方决定是否视为错误
    pub fn slot(&self, week: u32) -> Option<bool> {
        if week == 0 {
            return None;
        }
        self.slots.get((week - 1) as usize).copied()
    }

    /// 统计预期周数量
    pub fn expected_count(&self) -> usize {
        self.slots.iter().filter(|s| **s).count()
    }

    /// 迭代所有预期周的周序号 (1 起)
    pub fn expected_weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| **s)
            .map(|(i, _)| (i + 1) as u32)
    }
}
