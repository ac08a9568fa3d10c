use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::IdealStockAmount;
use crate::common::{Page, PageRequest};
use crate::store::error::StoreError;

/// # Summary
/// 理想库存量检索条件。三个过滤字段均可选、相互独立，
/// 同时给出时按 AND 组合；全部缺省时返回全量（分页）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IsaSearchParams {
    pub facility_id: Option<Uuid>,
    /// 商品类型编号：经 品目 → 贸易品 → 分类指派 链路过滤
    pub commodity_type_id: Option<String>,
    pub processing_period_id: Option<Uuid>,
}

/// # Summary
/// 理想库存量存储接口。
///
/// # Invariants
/// - 读取时连同四个引用实体一并水化，调用方拿到完整对象图。
#[async_trait]
pub trait IdealStockAmountStore: Send + Sync {
    /// 保存或整体替换理想库存量记录。
    async fn save(&self, isa: &IdealStockAmount) -> Result<(), StoreError>;

    /// # Summary
    /// 按条件分页检索。
    ///
    /// # Arguments
    /// * `params`: 过滤条件，见 [`IsaSearchParams`]。
    /// * `page`: 分页参数，合法性由 API 边界保证。
    async fn search(
        &self,
        params: IsaSearchParams,
        page: PageRequest,
    ) -> Result<Page<IdealStockAmount>, StoreError>;
}
