// ==========================================
// 设备预防性维护排程系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 存储实现由宿主应用提供, 此处只定义错误契约
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 可用性错误 =====
    #[error("存储不可用: {0}")]
    Unavailable(String),

    // ===== 数据错误 =====
    #[error("记录未找到: {entity} with key={key}")]
    NotFound { entity: String, key: String },

    #[error("唯一约束违反: {0}")]
    UniqueConstraintViolation(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepositoryError {
    /// 判断是否为唯一约束冲突
    ///
    /// 回填器用于识别 check-then-insert 竞争窗口内的重复插入
    pub fn is_duplicate(&self) -> bool {
        matches!(self, RepositoryError::UniqueConstraintViolation(_))
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
