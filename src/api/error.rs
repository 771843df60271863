// ==========================================
// 设备预防性维护排程系统 - API 层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 对上层调用方 (排程界面/报表/导出作业) 的统一错误面
// ==========================================

use thiserror::Error;

use crate::engine::EngineError;
use crate::repository::RepositoryError;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("设备未找到: {asset_code}")]
    AssetNotFound { asset_code: String },

    #[error("该周无排程: {asset_code} {iso_year}-W{iso_week:02}")]
    NotScheduled {
        asset_code: String,
        iso_year: i32,
        iso_week: u32,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
