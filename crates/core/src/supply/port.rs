use async_trait::async_trait;
use uuid::Uuid;

use super::entity::{Facility, Program, SupervisoryNode, SupplyLine};
use crate::store::error::StoreError;

/// # Summary
/// 组织结构与供应线存储接口：设施、项目、监管节点属于慢变参考数据，
/// 供应线在其上建立引用。
#[async_trait]
pub trait SupplyStore: Send + Sync {
    // --- 组织结构 ---

    async fn save_facility(&self, facility: &Facility) -> Result<(), StoreError>;

    async fn find_facility(&self, id: Uuid) -> Result<Option<Facility>, StoreError>;

    async fn save_program(&self, program: &Program) -> Result<(), StoreError>;

    async fn find_program(&self, id: Uuid) -> Result<Option<Program>, StoreError>;

    async fn save_supervisory_node(&self, node: &SupervisoryNode) -> Result<(), StoreError>;

    // --- 供应线 ---

    /// 保存或整体替换供应线。
    async fn save_supply_line(&self, line: &SupplyLine) -> Result<(), StoreError>;

    /// # Summary
    /// 检索供应线。
    ///
    /// # Logic
    /// 两个过滤条件均可选、相互独立，同时给出时按 AND 组合；
    /// 全部缺省时返回全量。
    async fn search_supply_lines(
        &self,
        program_id: Option<Uuid>,
        supervisory_node_id: Option<Uuid>,
    ) -> Result<Vec<SupplyLine>, StoreError>;
}
