// ==========================================
// 设备预防性维护排程系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 引擎错误属程序性错误, 快速失败, 不得静默吸收
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("排程输入无效: {0}")]
    InvalidScheduleInput(String),

    #[error("ISO 周历计算越界: {0}")]
    CalendarArithmetic(String),

    #[error("排程向量长度非法: 年份={iso_year}, 期望={expected}, 实际={actual}")]
    MalformedScheduleVector {
        iso_year: i32,
        expected: u32,
        actual: usize,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
