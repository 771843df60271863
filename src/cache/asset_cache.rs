// ==========================================
// 设备预防性维护排程系统 - 设备缓存
// ==========================================
// 职责: 设备主数据的限时读穿缓存 + 事件驱动选择性失效
// 红线: 快照只整体替换 (Arc 原子换引用), 绝不原地修改,
//       并发读取方看不到半更新列表;
//       窄幅刷新失败必须整体失效, 不得静默保留可能过期的单条
// ==========================================

use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

use crate::domain::Asset;
use crate::engine::events::{AssetEvent, AssetEventBus};
use crate::repository::{AssetRepository, RepositoryResult};

// ==========================================
// 内部快照
// ==========================================

struct CacheSnapshot {
    assets: Arc<Vec<Asset>>, // 不可变快照, 读取方克隆 Arc
    loaded_at: Instant,      // 全量装载时刻 (窄幅刷新不重置)
}

struct CacheInner {
    repo: Arc<dyn AssetRepository>,
    ttl: Duration,
    snapshot: RwLock<Option<CacheSnapshot>>,
}

impl CacheInner {
    /// 全量重载: 成功则整体换快照, 失败则降级为空缓存
    async fn reload(&self) -> RepositoryResult<Arc<Vec<Asset>>> {
        match self.repo.fetch_all().await {
            Ok(list) => {
                let assets = Arc::new(list);
                *self.snapshot.write().await = Some(CacheSnapshot {
                    assets: Arc::clone(&assets),
                    loaded_at: Instant::now(),
                });
                debug!(count = assets.len(), "设备缓存全量装载完成");
                Ok(assets)
            }
            Err(e) => {
                // 降级: 清空缓存, 下次读取重新走仓储
                *self.snapshot.write().await = None;
                warn!(error = %e, "设备缓存装载失败, 已降级为空缓存");
                Err(e)
            }
        }
    }

    /// 整体失效
    async fn invalidate(&self) {
        *self.snapshot.write().await = None;
        debug!("设备缓存整体失效");
    }

    /// 窄幅刷新: 重取单台设备并补丁进快照副本
    ///
    /// - 有则替换, 无则追加, 仓储已无此设备则从快照剔除
    /// - 不重置 TTL 时钟 (快照新鲜度仍以全量装载时刻计)
    /// - 取数失败 → 整体失效, 绝不保留可疑单条
    async fn patch(&self, asset_code: &str) {
        let fetched = match self.repo.fetch_by_code(asset_code).await {
            Ok(f) => f,
            Err(e) => {
                warn!(asset_code, error = %e, "窄幅刷新失败, 降级为整体失效");
                self.invalidate().await;
                return;
            }
        };

        let mut guard = self.snapshot.write().await;
        let Some(snapshot) = guard.as_ref() else {
            // 无快照可补丁, 留待下次读取全量装载
            return;
        };

        // 保留原装载时刻: 窄幅刷新不重置 TTL
        let loaded_at = snapshot.loaded_at;
        let mut next: Vec<Asset> = snapshot.assets.as_ref().clone();
        match fetched {
            Some(asset) => {
                match next.iter_mut().find(|a| a.asset_code == asset.asset_code) {
                    Some(existing) => *existing = asset,
                    None => next.push(asset),
                }
            }
            None => next.retain(|a| a.asset_code != asset_code),
        }
        *guard = Some(CacheSnapshot {
            assets: Arc::new(next),
            loaded_at,
        });
        debug!(asset_code, "设备缓存窄幅刷新完成");
    }
}

// ==========================================
// AssetCache - 设备缓存组件
// ==========================================
// 生命周期: 构造即订阅, Drop 即退订 (监听任务只持弱引用,
// 缓存被释放后任务自行退出, 不泄漏到无关组件)
pub struct AssetCache {
    inner: Arc<CacheInner>,
    listener: tokio::task::JoinHandle<()>,
}

impl AssetCache {
    /// 构造缓存并订阅事件总线
    ///
    /// 必须在 tokio 运行时内调用 (内部 spawn 监听任务)
    pub fn new(repo: Arc<dyn AssetRepository>, ttl: Duration, bus: &AssetEventBus) -> Self {
        let inner = Arc::new(CacheInner {
            repo,
            ttl,
            snapshot: RwLock::new(None),
        });
        let rx = bus.subscribe();
        let listener = tokio::spawn(Self::listen(Arc::downgrade(&inner), rx));
        Self { inner, listener }
    }

    // ==========================================
    // 读取接口
    // ==========================================

    /// 读取设备列表 (读穿)
    ///
    /// # 参数
    /// - `force_reload`: true 强制全量重载, 等价于广义失效后读取
    ///
    /// # 行为
    /// 无快照或快照超过 TTL 时触发全量重载;
    /// 重载失败向本次调用方返回仓储错误, 缓存保持空
    pub async fn get_assets(&self, force_reload: bool) -> RepositoryResult<Arc<Vec<Asset>>> {
        if !force_reload {
            let guard = self.inner.snapshot.read().await;
            if let Some(snapshot) = guard.as_ref() {
                if snapshot.loaded_at.elapsed() < self.inner.ttl {
                    return Ok(Arc::clone(&snapshot.assets));
                }
            }
        }
        self.inner.reload().await
    }

    /// 当前是否持有快照 (诊断用)
    pub async fn has_snapshot(&self) -> bool {
        self.inner.snapshot.read().await.is_some()
    }

    // ==========================================
    // 事件监听
    // ==========================================

    async fn listen(weak: Weak<CacheInner>, mut rx: broadcast::Receiver<AssetEvent>) {
        loop {
            let event = match rx.recv().await {
                Ok(ev) => ev,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    // 掉队意味着可能错过窄幅事件, 按批量变更兜底
                    warn!(missed, "事件订阅掉队, 降级为整体失效");
                    AssetEvent::BulkChanged
                }
                Err(broadcast::error::RecvError::Closed) => break,
            };
            // 弱引用升级失败 → 缓存已释放, 监听任务随之退出
            let Some(inner) = weak.upgrade() else { break };
            match event {
                AssetEvent::BulkChanged => inner.invalidate().await,
                AssetEvent::StateChanged { asset_code } => inner.patch(&asset_code).await,
            }
        }
    }
}

impl Drop for AssetCache {
    fn drop(&mut self) {
        // 退订: 终止监听任务, 释放 broadcast 接收端
        self.listener.abort();
    }
}
