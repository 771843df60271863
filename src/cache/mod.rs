// ==========================================
// 设备预防性维护排程系统 - 缓存层
// ==========================================
// 职责: 进程级共享的设备快照缓存
// 红线: 只有缓存组件自身改写内部快照, 且总是原子换引用
// ==========================================

pub mod asset_cache;

pub use asset_cache::AssetCache;
