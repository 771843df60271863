// ==========================================
// 设备预防性维护排程系统 - 配置层
// ==========================================
// 职责: 核心库运行参数, 由宿主应用构造后注入
// 红线: 无环境单例, 配置随组件实例传递
// ==========================================

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ==========================================
// MaintenanceConfig - 核心配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// 设备缓存存活秒数 (默认 300)
    pub cache_ttl_secs: u64,

    /// 事件总线缓冲容量 (默认 64)
    pub event_bus_capacity: usize,

    /// 回填向未来扩展的年数 (默认 0, 即只到当前年;
    /// 置 1 可预生成下一年的待执行槽位)
    pub backfill_future_years: u32,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
            event_bus_capacity: 64,
            backfill_future_years: 0,
        }
    }
}

impl MaintenanceConfig {
    /// 缓存 TTL
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = MaintenanceConfig::default();
        assert_eq!(cfg.cache_ttl(), Duration::from_secs(300));
        assert_eq!(cfg.backfill_future_years, 0);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let cfg: MaintenanceConfig = serde_json::from_str(r#"{"cache_ttl_secs": 60}"#).unwrap();
        assert_eq!(cfg.cache_ttl_secs, 60);
        assert_eq!(cfg.event_bus_capacity, 64);
    }
}
