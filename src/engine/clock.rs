// ==========================================
// 设备预防性维护排程系统 - 业务时钟
// ==========================================
// 职责: 注入式 "今天", 保证分类与回填结果可复现
// 红线: 引擎内部禁止直接取系统时间
// ==========================================

use chrono::{NaiveDate, Utc};

// ==========================================
// Clock Trait
// ==========================================
pub trait Clock: Send + Sync {
    /// 当前业务日期
    fn today(&self) -> NaiveDate;
}

/// 系统时钟 (UTC 日期)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// 固定时钟 (测试与报表重放)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(FixedClock(d).today(), d);
    }
}
