use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use refdata_core::rights::entity::Role;
use refdata_core::rights::error::RightsError;
use refdata_core::rights::port::{RightStore, RoleStore};
use refdata_core::store::error::StoreError;

/// # Summary
/// 角色服务的统一错误类型。
#[derive(Error, Debug)]
pub enum RoleServiceError {
    #[error(transparent)]
    Rights(#[from] RightsError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// # Summary
/// 角色服务：完成"具名权限引用 → 权限目录规范记录"的两态转换后持久化。
///
/// # Invariants
/// - 解析是全有或全无的：任一权限名无法解析，整个角色被拒绝，存储不被触碰。
/// - 替换集整体构建完成后一次性赋回，不在遍历中修改原集合。
pub struct RoleService {
    role_store: Arc<dyn RoleStore>,
    right_store: Arc<dyn RightStore>,
}

impl RoleService {
    pub fn new(role_store: Arc<dyn RoleStore>, right_store: Arc<dyn RightStore>) -> Self {
        Self {
            role_store,
            right_store,
        }
    }

    /// # Summary
    /// 创建角色：解析权限后保存。
    ///
    /// # Returns
    /// 解析完成（权限换为规范记录）的角色。
    pub async fn create(&self, role: Role) -> Result<Role, RoleServiceError> {
        let resolved = self.resolve_rights(role).await?;
        self.role_store.save(&resolved).await?;
        info!("Saved new role with id: {}", resolved.id);
        Ok(resolved)
    }

    /// # Summary
    /// 更新角色：强制使用路径中的 id，角色不存在则创建。
    pub async fn update(&self, id: Uuid, mut role: Role) -> Result<Role, RoleServiceError> {
        role.id = id;
        let resolved = self.resolve_rights(role).await?;
        self.role_store.save(&resolved).await?;
        info!("Saved role with id: {}", resolved.id);
        Ok(resolved)
    }

    /// # Summary
    /// 把角色里的具名权限引用逐一解析为权限目录中的规范记录。
    ///
    /// # Logic
    /// 1. 对每个权限按名称精确查询目录。
    /// 2. 命中则收入全新的替换集合；未命中立即整体失败。
    /// 3. 全部解析成功后一次性替换原集合。
    async fn resolve_rights(&self, mut role: Role) -> Result<Role, RoleServiceError> {
        let mut resolved = Vec::with_capacity(role.rights.len());
        for right in &role.rights {
            debug!("Resolving right '{}'", right.name);
            match self.right_store.find_by_name(&right.name).await? {
                Some(canonical) => resolved.push(canonical),
                None => return Err(RightsError::RightNotFound(right.name.clone()).into()),
            }
        }
        role.rights = resolved;
        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use refdata_core::rights::entity::Right;
    use std::sync::Mutex;

    /// 内存权限目录
    #[derive(Default)]
    struct FakeRightStore {
        rights: Mutex<Vec<Right>>,
    }

    #[async_trait]
    impl RightStore for FakeRightStore {
        async fn save(&self, right: &Right) -> Result<(), StoreError> {
            self.rights.lock().unwrap().push(right.clone());
            Ok(())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Right>, StoreError> {
            Ok(self
                .rights
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.name == name)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Right>, StoreError> {
            Ok(self.rights.lock().unwrap().clone())
        }
    }

    /// 记录保存调用的内存角色存储
    #[derive(Default)]
    struct FakeRoleStore {
        roles: Mutex<Vec<Role>>,
    }

    #[async_trait]
    impl RoleStore for FakeRoleStore {
        async fn save(&self, role: &Role) -> Result<(), StoreError> {
            self.roles.lock().unwrap().push(role.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, StoreError> {
            Ok(self
                .roles
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Role>, StoreError> {
            Ok(self.roles.lock().unwrap().clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
            let mut roles = self.roles.lock().unwrap();
            let before = roles.len();
            roles.retain(|r| r.id != id);
            if roles.len() == before {
                return Err(StoreError::NotFound);
            }
            Ok(())
        }

        async fn count(&self) -> Result<u64, StoreError> {
            Ok(self.roles.lock().unwrap().len() as u64)
        }
    }

    fn named_right(name: &str) -> Right {
        Right {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    fn role_referring(names: &[&str]) -> Role {
        Role {
            id: Uuid::new_v4(),
            name: "clerk".to_string(),
            description: None,
            // 输入侧的权限只有名字有意义，id 是占位
            rights: names.iter().map(|n| named_right(n)).collect(),
        }
    }

    fn service(catalog: &[&str]) -> (RoleService, Arc<FakeRoleStore>) {
        let right_store = Arc::new(FakeRightStore::default());
        for name in catalog {
            right_store
                .rights
                .lock()
                .unwrap()
                .push(named_right(name));
        }
        let role_store = Arc::new(FakeRoleStore::default());
        (
            RoleService::new(role_store.clone(), right_store),
            role_store,
        )
    }

    #[tokio::test]
    async fn create_replaces_placeholders_with_canonical_rights() {
        let (svc, role_store) = service(&["A", "B"]);

        let created = svc.create(role_referring(&["A", "B"])).await.unwrap();

        assert_eq!(created.rights.len(), 2);
        // 解析后的权限 id 来自目录，而不是输入占位
        let saved = role_store.roles.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].rights, created.rights);
    }

    #[tokio::test]
    async fn create_fails_when_right_unknown_and_persists_nothing() {
        let (svc, role_store) = service(&["A"]);

        let err = svc.create(role_referring(&["A", "MISSING"])).await.unwrap_err();

        assert!(matches!(
            err,
            RoleServiceError::Rights(RightsError::RightNotFound(ref n)) if n == "MISSING"
        ));
        assert!(role_store.roles.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_forces_path_id() {
        let (svc, role_store) = service(&["A"]);
        let id = Uuid::new_v4();

        let updated = svc.update(id, role_referring(&["A"])).await.unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(role_store.roles.lock().unwrap()[0].id, id);
    }
}
