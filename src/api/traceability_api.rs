// ==========================================
// 设备预防性维护排程系统 - 追溯回填 API
// ==========================================
// 职责: 面向导出/审计作业的回填入口
// ==========================================

use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::api::error::ApiResult;
use crate::engine::backfill::{BackfillSummary, TraceabilityBackfiller};

// ==========================================
// TraceabilityApi - 追溯回填 API
// ==========================================
pub struct TraceabilityApi {
    backfiller: TraceabilityBackfiller,
}

impl TraceabilityApi {
    /// 构造追溯回填 API
    pub fn new(backfiller: TraceabilityBackfiller) -> Self {
        Self { backfiller }
    }

    /// 执行追溯回填
    ///
    /// # 参数
    /// - `horizon_year`: 回填地平线年; None 时取当前年
    ///   (加配置的未来预生成年数)
    /// - `cancel`: 取消信号, 触发后停止后续写入, 已提交插入不回滚
    ///
    /// # 返回
    /// 补登记录数 + (周, 原因) 跳过明细
    #[instrument(skip(self, cancel))]
    pub async fn backfill_traceability(
        &self,
        horizon_year: Option<i32>,
        cancel: &CancellationToken,
    ) -> ApiResult<BackfillSummary> {
        let summary = match horizon_year {
            Some(year) => self.backfiller.backfill_through(year, cancel).await?,
            None => self.backfiller.backfill_current(cancel).await?,
        };
        Ok(summary)
    }
}
