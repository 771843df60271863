// ==========================================
// 设备预防性维护排程系统 - 设备仓储契约
// ==========================================
// 职责: 定义设备主数据读取接口 (不包含实现)
// 实现者: 宿主应用的存储适配层
// 红线: 核心库不拼 SQL, 不依赖具体存储
// ==========================================

use async_trait::async_trait;

use crate::domain::Asset;
use crate::repository::error::RepositoryResult;

// ==========================================
// AssetRepository Trait
// ==========================================
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// 读取全部设备
    async fn fetch_all(&self) -> RepositoryResult<Vec<Asset>>;

    /// 按设备编码读取单台设备
    ///
    /// # 返回
    /// - Ok(None): 设备不存在 (非错误)
    async fn fetch_by_code(&self, asset_code: &str) -> RepositoryResult<Option<Asset>>;
}
