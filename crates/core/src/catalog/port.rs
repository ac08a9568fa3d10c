use async_trait::async_trait;

use super::entity::TradeItem;
use crate::store::error::StoreError;

/// # Summary
/// 贸易品存储接口，负责贸易品及其品目/分类的持久化与检索。
///
/// # Invariants
/// - `save` 是整体替换语义：旧的品目与分类指派随贸易品一并覆盖。
#[async_trait]
pub trait TradeItemStore: Send + Sync {
    /// # Summary
    /// 保存或整体替换贸易品。
    ///
    /// # Logic
    /// 以贸易品 id 为键执行 Upsert，并重写其品目与分类子记录。
    async fn save(&self, item: &TradeItem) -> Result<(), StoreError>;

    /// 列出全部贸易品。
    async fn find_all(&self) -> Result<Vec<TradeItem>, StoreError>;

    /// # Summary
    /// 按外部分类编号精确匹配贸易品。
    ///
    /// # Arguments
    /// * `classification_id`: 分类编号（等值匹配）。
    async fn find_by_classification_id(
        &self,
        classification_id: &str,
    ) -> Result<Vec<TradeItem>, StoreError>;

    /// # Summary
    /// 按外部分类编号模糊匹配贸易品。
    ///
    /// # Logic
    /// 大小写不敏感的子串匹配（LIKE %id%）。
    async fn find_by_classification_id_like(
        &self,
        classification_id: &str,
    ) -> Result<Vec<TradeItem>, StoreError>;

    /// 贸易品总数。
    async fn count(&self) -> Result<u64, StoreError>;
}
