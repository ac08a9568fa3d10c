use async_trait::async_trait;
use uuid::Uuid;

use super::entity::{Right, Role};
use crate::store::error::StoreError;

/// # Summary
/// 权限目录存储接口。权限是系统预置的规范记录，角色只引用不创建。
#[async_trait]
pub trait RightStore: Send + Sync {
    /// 保存权限目录记录（Upsert，按名称唯一）。
    async fn save(&self, right: &Right) -> Result<(), StoreError>;

    /// 按名称精确查找规范权限记录。
    async fn find_by_name(&self, name: &str) -> Result<Option<Right>, StoreError>;

    /// 列出权限目录全部记录。
    async fn find_all(&self) -> Result<Vec<Right>, StoreError>;
}

/// # Summary
/// 角色存储接口。
///
/// # Invariants
/// - 角色名唯一，重复保存同名角色返回 `StoreError::Conflict`。
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// # Summary
    /// 保存角色及其权限关联。
    ///
    /// # Logic
    /// 按 id Upsert 角色行并整体重写角色-权限关联。
    async fn save(&self, role: &Role) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Role>, StoreError>;

    /// 删除角色，不存在返回 `StoreError::NotFound`。
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// 角色总数。
    async fn count(&self) -> Result<u64, StoreError>;
}
