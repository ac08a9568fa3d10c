use std::sync::Arc;

use refdata_core::common::{Page, PageRequest};
use refdata_core::stock::entity::IdealStockAmount;
use refdata_core::stock::port::{IdealStockAmountStore, IsaSearchParams};
use refdata_core::store::error::StoreError;

/// # Summary
/// 理想库存量检索服务：把结构化过滤条件加分页参数翻译为一次存储查询，
/// 调用方无需任何存储侧的查询知识。
///
/// # Invariants
/// - 本服务不做参数校验；非法分页参数由 API 边界在进入前拒绝。
pub struct IdealStockAmountService {
    store: Arc<dyn IdealStockAmountStore>,
}

impl IdealStockAmountService {
    pub fn new(store: Arc<dyn IdealStockAmountStore>) -> Self {
        Self { store }
    }

    /// 按条件分页检索；条件全部缺省时等价于全量分页。
    pub async fn search(
        &self,
        params: IsaSearchParams,
        page: PageRequest,
    ) -> Result<Page<IdealStockAmount>, StoreError> {
        self.store.search(params, page).await
    }

    /// 全量读取（CSV 导出用）：逐页抽取直到取尽。
    pub async fn find_all(&self) -> Result<Vec<IdealStockAmount>, StoreError> {
        let mut all = Vec::new();
        let mut page = PageRequest::new(0, 500);
        loop {
            let chunk = self
                .store
                .search(IsaSearchParams::default(), page)
                .await?;
            let done = chunk.content.len() < usize::try_from(page.size).unwrap_or(usize::MAX);
            all.extend(chunk.content);
            if done {
                break;
            }
            page.page += 1;
        }
        Ok(all)
    }
}
