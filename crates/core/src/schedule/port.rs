use async_trait::async_trait;
use uuid::Uuid;

use super::entity::{ProcessingPeriod, ProcessingSchedule};
use crate::store::error::StoreError;

/// # Summary
/// 处理计划/周期存储接口。
///
/// # Invariants
/// - 计划编码唯一，违反返回 `StoreError::Conflict`。
/// - 周期行持有所属计划的外键，读取时连同计划一并水化。
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    // --- 计划 ---

    async fn save_schedule(&self, schedule: &ProcessingSchedule) -> Result<(), StoreError>;

    async fn find_schedule(&self, id: Uuid) -> Result<Option<ProcessingSchedule>, StoreError>;

    async fn find_all_schedules(&self) -> Result<Vec<ProcessingSchedule>, StoreError>;

    /// 删除计划，不存在返回 `StoreError::NotFound`。
    async fn delete_schedule(&self, id: Uuid) -> Result<(), StoreError>;

    // --- 周期 ---

    async fn save_period(&self, period: &ProcessingPeriod) -> Result<(), StoreError>;

    async fn find_period(&self, id: Uuid) -> Result<Option<ProcessingPeriod>, StoreError>;

    /// 列出指定计划下的全部周期，按起始日期排序。
    async fn find_periods_by_schedule(
        &self,
        schedule_id: Uuid,
    ) -> Result<Vec<ProcessingPeriod>, StoreError>;
}
