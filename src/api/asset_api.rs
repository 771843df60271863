// ==========================================
// 设备预防性维护排程系统 - 设备查询 API
// ==========================================
// 职责: 面向界面/报表的设备列表读取 (经缓存)
// ==========================================

use std::sync::Arc;

use tracing::instrument;

use crate::api::error::ApiResult;
use crate::cache::AssetCache;
use crate::domain::Asset;

// ==========================================
// AssetApi - 设备查询 API
// ==========================================
pub struct AssetApi {
    cache: Arc<AssetCache>,
}

impl AssetApi {
    /// 构造设备查询 API
    pub fn new(cache: Arc<AssetCache>) -> Self {
        Self { cache }
    }

    /// 读取设备列表
    ///
    /// # 参数
    /// - `force_reload`: true 绕过缓存强制全量重载
    #[instrument(skip(self))]
    pub async fn get_cached_assets(&self, force_reload: bool) -> ApiResult<Vec<Asset>> {
        let snapshot = self.cache.get_assets(force_reload).await?;
        Ok(snapshot.as_ref().clone())
    }
}
