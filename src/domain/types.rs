// ==========================================
// 设备预防性维护排程系统 - 领域类型定义
// ==========================================
// 红线: 合规状态是标签式枚举, 展示元数据(颜色/文案)归 UI 层
// 序列化格式: SCREAMING_SNAKE_CASE (与存储层一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 维护频率 (Maintenance Frequency)
// ==========================================
// 周期型频率映射为固定 ISO 周间隔 (见 week_interval)
// Corrective/Predictive 为事件驱动型, 不产生周期排程
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceFrequency {
    Weekly,     // 每周
    Biweekly,   // 双周
    Monthly,    // 每月
    Bimonthly,  // 双月
    Quarterly,  // 季度
    Semiannual, // 半年
    Annual,     // 年度
    Corrective, // 纠正性 (事件驱动)
    Predictive, // 预测性 (事件驱动)
}

impl MaintenanceFrequency {
    /// 周期型频率对应的 ISO 周间隔
    ///
    /// 间隔表为固定近似值 (如 "每月" 取 4 周, 不做真实日历月换算):
    /// Weekly=1, Biweekly=2, Monthly=4, Bimonthly=8,
    /// Quarterly=13, Semiannual=26, Annual=52
    ///
    /// 事件驱动型频率返回 None, 对应全 false 排程向量
    pub fn week_interval(&self) -> Option<u32> {
        match self {
            MaintenanceFrequency::Weekly => Some(1),
            MaintenanceFrequency::Biweekly => Some(2),
            MaintenanceFrequency::Monthly => Some(4),
            MaintenanceFrequency::Bimonthly => Some(8),
            MaintenanceFrequency::Quarterly => Some(13),
            MaintenanceFrequency::Semiannual => Some(26),
            MaintenanceFrequency::Annual => Some(52),
            MaintenanceFrequency::Corrective | MaintenanceFrequency::Predictive => None,
        }
    }

    /// 判断是否为事件驱动型频率
    pub fn is_event_driven(&self) -> bool {
        self.week_interval().is_none()
    }
}

impl fmt::Display for MaintenanceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceFrequency::Weekly => write!(f, "WEEKLY"),
            MaintenanceFrequency::Biweekly => write!(f, "BIWEEKLY"),
            MaintenanceFrequency::Monthly => write!(f, "MONTHLY"),
            MaintenanceFrequency::Bimonthly => write!(f, "BIMONTHLY"),
            MaintenanceFrequency::Quarterly => write!(f, "QUARTERLY"),
            MaintenanceFrequency::Semiannual => write!(f, "SEMIANNUAL"),
            MaintenanceFrequency::Annual => write!(f, "ANNUAL"),
            MaintenanceFrequency::Corrective => write!(f, "CORRECTIVE"),
            MaintenanceFrequency::Predictive => write!(f, "PREDICTIVE"),
        }
    }
}

// ==========================================
// 执行状态 (Execution Status)
// ==========================================
// 执行记录上的持久化状态, 区别于派生的合规状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Performed,    // 已执行
    NotPerformed, // 未执行 (回填器补登)
    Corrective,   // 纠正性维修
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStatus::Performed => write!(f, "PERFORMED"),
            ExecutionStatus::NotPerformed => write!(f, "NOT_PERFORMED"),
            ExecutionStatus::Corrective => write!(f, "CORRECTIVE"),
        }
    }
}

// ==========================================
// 合规状态 (Compliance Status)
// ==========================================
// 每个被评估的 (设备, ISO年, ISO周) 槽位恰好派生一个状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Pending,         // 待执行 (目标周尚未到期)
    OnTimeCompleted, // 按期完成
    LateCompleted,   // 延期完成
    Overdue,         // 逾期未执行 (瞬态)
    NotPerformed,    // 未执行 (回填后的持久形态)
    Corrective,      // 纠正性维修
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Pending => write!(f, "PENDING"),
            ComplianceStatus::OnTimeCompleted => write!(f, "ON_TIME_COMPLETED"),
            ComplianceStatus::LateCompleted => write!(f, "LATE_COMPLETED"),
            ComplianceStatus::Overdue => write!(f, "OVERDUE"),
            ComplianceStatus::NotPerformed => write!(f, "NOT_PERFORMED"),
            ComplianceStatus::Corrective => write!(f, "CORRECTIVE"),
        }
    }
}

// ==========================================
// ISO 周 (IsoWeek)
// ==========================================
// 有序对 (iso_year, week), 派生 Ord 即按年再按周比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoWeek {
    pub iso_year: i32, // ISO 周编号年 (可与日历年不同)
    pub week: u32,     // 周序号 1..=52/53
}

impl IsoWeek {
    /// 构造 ISO 周
    pub fn new(iso_year: i32, week: u32) -> Self {
        Self { iso_year, week }
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.iso_year, self.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_interval_table() {
        assert_eq!(MaintenanceFrequency::Weekly.week_interval(), Some(1));
        assert_eq!(MaintenanceFrequency::Monthly.week_interval(), Some(4));
        assert_eq!(MaintenanceFrequency::Annual.week_interval(), Some(52));
        assert_eq!(MaintenanceFrequency::Corrective.week_interval(), None);
        assert_eq!(MaintenanceFrequency::Predictive.week_interval(), None);
    }

    #[test]
    fn test_iso_week_ordering() {
        assert!(IsoWeek::new(2024, 52) < IsoWeek::new(2025, 1));
        assert!(IsoWeek::new(2025, 3) < IsoWeek::new(2025, 10));
        assert_eq!(IsoWeek::new(2025, 3).to_string(), "2025-W03");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ComplianceStatus::OnTimeCompleted).unwrap();
        assert_eq!(json, "\"ON_TIME_COMPLETED\"");
        let back: ComplianceStatus = serde_json::from_str("\"OVERDUE\"").unwrap();
        assert_eq!(back, ComplianceStatus::Overdue);
    }
}
