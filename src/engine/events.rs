// ==========================================
// 设备预防性维护排程系统 - 设备事件总线
// ==========================================
// 职责: 定义设备变更事件的类型化发布/订阅契约
// 说明: 基于 tokio broadcast, 订阅方掉队时按全量失效兜底
// 红线: 事件只携带标识, 不携带实体快照
// ==========================================

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ==========================================
// 设备事件类型
// ==========================================

/// 设备变更事件
///
/// 两种消息形态:
/// - BulkChanged: 批量变更, 无负载, 订阅方应整体失效
/// - StateChanged: 单台设备变更, 携带设备编码, 订阅方可窄幅刷新
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetEvent {
    /// 设备批量变更 (导入/批量维护)
    BulkChanged,
    /// 单台设备变更
    StateChanged { asset_code: String },
}

impl AssetEvent {
    /// 转换为字符串标识 (日志用)
    pub fn as_str(&self) -> &str {
        match self {
            AssetEvent::BulkChanged => "BulkChanged",
            AssetEvent::StateChanged { .. } => "StateChanged",
        }
    }
}

// ==========================================
// AssetEventBus - 事件总线
// ==========================================
pub struct AssetEventBus {
    tx: broadcast::Sender<AssetEvent>,
}

impl AssetEventBus {
    /// 以指定缓冲容量构造
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// 发布事件
    ///
    /// # 返回
    /// 当前收到该事件的订阅者数量 (无订阅者时为 0, 非错误)
    pub fn publish(&self, event: AssetEvent) -> usize {
        match self.tx.send(event) {
            Ok(receivers) => receivers,
            Err(broadcast::error::SendError(ev)) => {
                tracing::debug!("无订阅者, 事件丢弃: {}", ev.as_str());
                0
            }
        }
    }

    /// 订阅事件流
    ///
    /// 订阅自此刻生效, 不重放历史事件
    pub fn subscribe(&self) -> broadcast::Receiver<AssetEvent> {
        self.tx.subscribe()
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for AssetEventBus {
    fn default() -> Self {
        // 缓冲 64 条, 掉队订阅者收到 Lagged 后自行全量失效
        Self::new(64)
    }
}
