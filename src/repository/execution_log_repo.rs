// ==========================================
// 设备预防性维护排程系统 - 执行日志仓储契约
// ==========================================
// 职责: 定义执行记录读写接口 (不包含实现)
// 实现者: 宿主应用的存储适配层
// 红线: insert 必须在存储层强制 (设备, ISO年, ISO周) 唯一约束;
//       check-then-insert 不具原子性, 竞争由约束兜底
// ==========================================

use async_trait::async_trait;

use crate::domain::ExecutionRecord;
use crate::repository::error::RepositoryResult;

// ==========================================
// ExecutionLogRepository Trait
// ==========================================
#[async_trait]
pub trait ExecutionLogRepository: Send + Sync {
    /// 按设备与 ISO 年区间读取执行记录 (闭区间)
    ///
    /// 一次调用即一个一致快照, 调用方不得跨快照混用结果
    async fn fetch_by_asset_and_year_range(
        &self,
        asset_code: &str,
        from_year: i32,
        to_year: i32,
    ) -> RepositoryResult<Vec<ExecutionRecord>>;

    /// 插入单条执行记录
    ///
    /// # 错误
    /// - UniqueConstraintViolation: 同槽位记录已存在
    async fn insert(&self, record: ExecutionRecord) -> RepositoryResult<()>;

    /// 判断指定槽位是否已有记录
    async fn exists(
        &self,
        asset_code: &str,
        iso_year: i32,
        iso_week: u32,
    ) -> RepositoryResult<bool>;
}
