// ==========================================
// 设备预防性维护排程系统 - 排程向量引擎
// ==========================================
// 职责: 由 (锚定周, 频率) 派生年度预期周向量
// 红线: 纯函数, 无副作用; 向量按需重算, 不持久化
// ==========================================

use crate::domain::plan::ScheduleVector;
use crate::domain::types::{IsoWeek, MaintenanceFrequency};
use crate::engine::calendar;

// ==========================================
// ScheduleStore - 排程向量引擎
// ==========================================
pub struct ScheduleStore;

impl ScheduleStore {
    /// 派生指定设备在指定 ISO 年的排程向量
    ///
    /// # 参数
    /// - `anchor`: 锚定周 (计划创建日或设备登记日所在的 ISO 周)
    /// - `frequency`: None 或事件驱动型频率 → 全 false 向量 (非错误)
    ///
    /// # 规则
    /// - 目标年早于锚定年 → 全 false
    /// - 锚定年当年: 自锚定周起, 每隔 interval 周置 true
    /// - 其后年份: 节奏跨年延续, 以距锚定周的整周跨度取模保持相位
    pub fn vector_for(
        asset_code: &str,
        iso_year: i32,
        anchor: IsoWeek,
        frequency: Option<MaintenanceFrequency>,
    ) -> ScheduleVector {
        let len = calendar::weeks_in_year(iso_year) as usize;
        let mut slots = vec![false; len];

        if let Some(interval) = frequency.and_then(|f| f.week_interval()) {
            if iso_year >= anchor.iso_year {
                for (idx, slot) in slots.iter_mut().enumerate() {
                    let current = IsoWeek::new(iso_year, (idx + 1) as u32);
                    if current < anchor {
                        continue;
                    }
                    let elapsed = calendar::weeks_between(anchor, current);
                    if elapsed % interval as i64 == 0 {
                        *slot = true;
                    }
                }
            }
        }

        ScheduleVector {
            asset_code: asset_code.to_string(),
            iso_year,
            slots,
        }
    }
}
