// ==========================================
// 设备预防性维护排程系统 - 内存仓储参考实现
// ==========================================
// 职责: 提供无外部存储的参考实现
// 用途: 引擎/缓存的集成测试, 宿主应用接入前的本地开发
// 说明: 带调用计数与故障注入开关, 用于验证缓存协议
// ==========================================

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Asset, ExecutionRecord, MaintenancePlan};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{AssetRepository, ExecutionLogRepository, PlanRepository};

// ==========================================
// MemoryAssetRepository - 设备内存仓储
// ==========================================
#[derive(Default)]
pub struct MemoryAssetRepository {
    assets: RwLock<HashMap<String, Asset>>,
    fetch_all_calls: AtomicUsize,
    fetch_by_code_calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryAssetRepository {
    /// 以初始设备集合构造
    pub fn with_assets(assets: Vec<Asset>) -> Self {
        let map = assets
            .into_iter()
            .map(|a| (a.asset_code.clone(), a))
            .collect();
        Self {
            assets: RwLock::new(map),
            ..Default::default()
        }
    }

    /// 写入或覆盖一台设备 (模拟管理员修改)
    pub async fn upsert(&self, asset: Asset) {
        self.assets
            .write()
            .await
            .insert(asset.asset_code.clone(), asset);
    }

    /// 删除一台设备 (模拟下线/报废)
    pub async fn remove(&self, asset_code: &str) {
        self.assets.write().await.remove(asset_code);
    }

    /// 切换存储可用性 (故障注入)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// fetch_all 累计调用次数
    pub fn fetch_all_calls(&self) -> usize {
        self.fetch_all_calls.load(Ordering::SeqCst)
    }

    /// fetch_by_code 累计调用次数
    pub fn fetch_by_code_calls(&self) -> usize {
        self.fetch_by_code_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> RepositoryResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable(
                "内存仓储被标记为不可用".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AssetRepository for MemoryAssetRepository {
    async fn fetch_all(&self) -> RepositoryResult<Vec<Asset>> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let mut list: Vec<Asset> = self.assets.read().await.values().cloned().collect();
        list.sort_by(|a, b| a.asset_code.cmp(&b.asset_code));
        Ok(list)
    }

    async fn fetch_by_code(&self, asset_code: &str) -> RepositoryResult<Option<Asset>> {
        self.fetch_by_code_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.assets.read().await.get(asset_code).cloned())
    }
}

// ==========================================
// MemoryPlanRepository - 维护计划内存仓储
// ==========================================
#[derive(Default)]
pub struct MemoryPlanRepository {
    plans: RwLock<Vec<MaintenancePlan>>,
}

impl MemoryPlanRepository {
    /// 以初始计划集合构造
    pub fn with_plans(plans: Vec<MaintenancePlan>) -> Self {
        Self {
            plans: RwLock::new(plans),
        }
    }

    /// 追加一条计划
    pub async fn push(&self, plan: MaintenancePlan) {
        self.plans.write().await.push(plan);
    }
}

#[async_trait]
impl PlanRepository for MemoryPlanRepository {
    async fn fetch_active_plans(&self) -> RepositoryResult<Vec<MaintenancePlan>> {
        Ok(self
            .plans
            .read()
            .await
            .iter()
            .filter(|p| p.active)
            .cloned()
            .collect())
    }

    async fn fetch_by_code(&self, asset_code: &str) -> RepositoryResult<Vec<MaintenancePlan>> {
        Ok(self
            .plans
            .read()
            .await
            .iter()
            .filter(|p| p.asset_code == asset_code)
            .cloned()
            .collect())
    }
}

// ==========================================
// MemoryExecutionLogRepository - 执行日志内存仓储
// ==========================================
// 唯一约束: (asset_code, iso_year, iso_week)
#[derive(Default)]
pub struct MemoryExecutionLogRepository {
    records: RwLock<HashMap<(String, i32, u32), ExecutionRecord>>,
    insert_calls: AtomicUsize,
    // 故障注入: 指定设备的 insert 全部失败 (验证批次部分成功策略)
    fail_inserts_for: RwLock<Option<String>>,
    // 故障注入: 下一次范围查询返回空集 (模拟过期基准快照)
    stale_range_fetch_once: AtomicBool,
    // 故障注入: 指定槽位的下一次存在性查询报告不存在 (模拟并发竞争窗口)
    exists_blind_spot: RwLock<Option<(String, i32, u32)>>,
}

impl MemoryExecutionLogRepository {
    /// 以初始记录集合构造
    ///
    /// # Panics
    /// 初始集合违反槽位唯一约束时 panic (测试构造错误)
    pub fn with_records(records: Vec<ExecutionRecord>) -> Self {
        let mut map = HashMap::new();
        for r in records {
            let key = (r.asset_code.clone(), r.iso_year, r.iso_week);
            assert!(
                map.insert(key, r).is_none(),
                "初始执行记录集合违反槽位唯一约束"
            );
        }
        Self {
            records: RwLock::new(map),
            ..Default::default()
        }
    }

    /// 当前记录总数
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// insert 累计调用次数
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// 注入指定设备的插入故障 (None 关闭)
    pub async fn set_insert_failure_for(&self, asset_code: Option<String>) {
        *self.fail_inserts_for.write().await = asset_code;
    }

    /// 注入一次性过期快照: 下一次范围查询返回空集
    pub fn set_stale_range_fetch_once(&self) {
        self.stale_range_fetch_once.store(true, Ordering::SeqCst);
    }

    /// 注入存在性盲点: 该槽位的下一次 exists 查询报告不存在 (一次性)
    pub async fn set_exists_blind_spot(&self, slot: Option<(String, i32, u32)>) {
        *self.exists_blind_spot.write().await = slot;
    }
}

#[async_trait]
impl ExecutionLogRepository for MemoryExecutionLogRepository {
    async fn fetch_by_asset_and_year_range(
        &self,
        asset_code: &str,
        from_year: i32,
        to_year: i32,
    ) -> RepositoryResult<Vec<ExecutionRecord>> {
        if self.stale_range_fetch_once.swap(false, Ordering::SeqCst) {
            return Ok(Vec::new());
        }
        let mut list: Vec<ExecutionRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| {
                r.asset_code == asset_code && r.iso_year >= from_year && r.iso_year <= to_year
            })
            .cloned()
            .collect();
        list.sort_by_key(|r| (r.iso_year, r.iso_week));
        Ok(list)
    }

    async fn insert(&self, record: ExecutionRecord) -> RepositoryResult<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(code) = self.fail_inserts_for.read().await.as_deref() {
            if code == record.asset_code {
                return Err(RepositoryError::Unavailable(format!(
                    "注入的插入故障: asset_code={code}"
                )));
            }
        }

        let key = (record.asset_code.clone(), record.iso_year, record.iso_week);
        let mut map = self.records.write().await;
        if map.contains_key(&key) {
            return Err(RepositoryError::UniqueConstraintViolation(format!(
                "执行记录已存在: {}/{}-W{:02}",
                record.asset_code, record.iso_year, record.iso_week
            )));
        }
        map.insert(key, record);
        Ok(())
    }

    async fn exists(
        &self,
        asset_code: &str,
        iso_year: i32,
        iso_week: u32,
    ) -> RepositoryResult<bool> {
        let mut blind = self.exists_blind_spot.write().await;
        let hit = blind
            .as_ref()
            .is_some_and(|(code, y, w)| code == asset_code && *y == iso_year && *w == iso_week);
        if hit {
            *blind = None;
            return Ok(false);
        }
        drop(blind);

        Ok(self
            .records
            .read()
            .await
            .contains_key(&(asset_code.to_string(), iso_year, iso_week)))
    }
}
