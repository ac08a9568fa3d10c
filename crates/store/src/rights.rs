use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use refdata_core::rights::entity::{Right, Role};
use refdata_core::rights::port::{RightStore, RoleStore};
use refdata_core::store::error::StoreError;

use crate::db::{map_db_err, open_pool, parse_uuid};

/// RightStore / RoleStore 的 SQLite 实现。
///
/// # Summary
/// 在 `refdata.db` 中管理权限目录、角色及角色-权限关联。
///
/// # Invariants
/// * 权限名、角色名各自唯一（UNIQUE 约束）。
/// * `save` 对角色-权限关联是整体重写语义。
pub struct SqliteRightsStore {
    pool: SqlitePool,
}

impl SqliteRightsStore {
    /// 创建存储实例并初始化权限相关表结构。
    pub async fn new() -> Result<Self, StoreError> {
        let pool = open_pool().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS rights (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS roles (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS role_rights (
                role_id TEXT NOT NULL,
                right_id TEXT NOT NULL,
                PRIMARY KEY (role_id, right_id)
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::InitError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// 水化单个角色的权限集。
    async fn hydrate_role(
        &self,
        id: Uuid,
        name: String,
        description: Option<String>,
    ) -> Result<Role, StoreError> {
        let rights = sqlx::query_as::<_, (String, String)>(
            "SELECT r.id, r.name FROM rights r \
             JOIN role_rights rr ON rr.right_id = r.id \
             WHERE rr.role_id = ? ORDER BY r.name",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|r| {
            Ok(Right {
                id: parse_uuid(&r.0)?,
                name: r.1,
            })
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Role {
            id,
            name,
            description,
            rights,
        })
    }
}

#[async_trait]
impl RightStore for SqliteRightsStore {
    /// 按名称唯一 Upsert 权限目录记录。
    async fn save(&self, right: &Right) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO rights (id, name) VALUES (?, ?)")
            .bind(right.id.to_string())
            .bind(&right.name)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Right>, StoreError> {
        sqlx::query_as::<_, (String, String)>("SELECT id, name FROM rights WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?
            .map(|r| {
                Ok(Right {
                    id: parse_uuid(&r.0)?,
                    name: r.1,
                })
            })
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Right>, StoreError> {
        sqlx::query_as::<_, (String, String)>("SELECT id, name FROM rights ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|r| {
                Ok(Right {
                    id: parse_uuid(&r.0)?,
                    name: r.1,
                })
            })
            .collect()
    }
}

#[async_trait]
impl RoleStore for SqliteRightsStore {
    /// # Summary
    /// 保存角色及其权限关联。
    ///
    /// # Logic
    /// 1. 插入角色行；同名角色触发 UNIQUE 冲突，映射为 `Conflict`。
    /// 2. 整体重写 role_rights 关联。
    /// 全程在一个事务内完成，失败即回滚，不留部分角色。
    async fn save(&self, role: &Role) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;
        let role_id = role.id.to_string();

        sqlx::query(
            "INSERT INTO roles (id, name, description) VALUES (?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, \
             description = excluded.description",
        )
        .bind(&role_id)
        .bind(&role.name)
        .bind(&role.description)
        .execute(&mut *tx)
        .await
        .map_err(map_db_err)?;

        sqlx::query("DELETE FROM role_rights WHERE role_id = ?")
            .bind(&role_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        for right in &role.rights {
            sqlx::query("INSERT INTO role_rights (role_id, right_id) VALUES (?, ?)")
                .bind(&role_id)
                .bind(right.id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(map_db_err)?;
        }

        tx.commit().await.map_err(map_db_err)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, StoreError> {
        let row = sqlx::query_as::<_, (String, String, Option<String>)>(
            "SELECT id, name, description FROM roles WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        match row {
            Some((_, name, description)) => {
                Ok(Some(self.hydrate_role(id, name, description).await?))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Role>, StoreError> {
        let rows = sqlx::query_as::<_, (String, String, Option<String>)>(
            "SELECT id, name, description FROM roles ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        let mut roles = Vec::with_capacity(rows.len());
        for (id, name, description) in rows {
            roles.push(self.hydrate_role(parse_uuid(&id)?, name, description).await?);
        }
        Ok(roles)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        let affected = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?
            .rows_affected();

        if affected == 0 {
            return Err(StoreError::NotFound);
        }

        sqlx::query("DELETE FROM role_rights WHERE role_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        tx.commit().await.map_err(map_db_err)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM roles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
