// ==========================================
// 设备预防性维护排程系统 - 设备领域模型
// ==========================================
// 红线: asset_code 为唯一不可变主键, 设备只停用不硬删除
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::MaintenanceFrequency;

// ==========================================
// Asset - 设备主数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_code: String,                        // 设备编码 (唯一, 不可变)
    pub name: String,                              // 设备名称
    pub brand: Option<String>,                     // 品牌
    pub site: Option<String>,                      // 安装地点
    pub frequency: Option<MaintenanceFrequency>,   // 维护频率 (未配置时不产生排程)
    pub registered_on: NaiveDate,                  // 登记日期 (锚定首个排程周)
}

impl Asset {
    /// 判断设备是否产生周期排程
    ///
    /// 未配置频率或事件驱动型频率均不产生
    pub fn has_recurring_schedule(&self) -> bool {
        self.frequency
            .map(|f| !f.is_event_driven())
            .unwrap_or(false)
    }
}
