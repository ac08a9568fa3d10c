use async_trait::async_trait;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use uuid::Uuid;

use refdata_core::store::error::StoreError;
use refdata_core::supply::entity::{Facility, Program, SupervisoryNode, SupplyLine};
use refdata_core::supply::port::SupplyStore;

use crate::db::{map_db_err, open_pool, parse_uuid};

/// SupplyStore 的 SQLite 实现。
///
/// # Summary
/// 管理设施、项目、监管节点等组织结构参考数据及其上的供应线。
pub struct SqliteSupplyStore {
    pool: SqlitePool,
}

impl SqliteSupplyStore {
    pub async fn new() -> Result<Self, StoreError> {
        let pool = open_pool().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS facilities (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS programs (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS supervisory_nodes (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS supply_lines (
                id TEXT PRIMARY KEY,
                supervisory_node_id TEXT NOT NULL,
                program_id TEXT NOT NULL,
                supplying_facility_id TEXT NOT NULL,
                description TEXT
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::InitError(e.to_string()))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl SupplyStore for SqliteSupplyStore {
    async fn save_facility(&self, facility: &Facility) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO facilities (id, code, name) VALUES (?, ?, ?)")
            .bind(facility.id.to_string())
            .bind(&facility.code)
            .bind(&facility.name)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn find_facility(&self, id: Uuid) -> Result<Option<Facility>, StoreError> {
        sqlx::query_as::<_, (String, String, String)>(
            "SELECT id, code, name FROM facilities WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?
        .map(|r| {
            Ok(Facility {
                id: parse_uuid(&r.0)?,
                code: r.1,
                name: r.2,
            })
        })
        .transpose()
    }

    async fn save_program(&self, program: &Program) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO programs (id, code, name) VALUES (?, ?, ?)")
            .bind(program.id.to_string())
            .bind(&program.code)
            .bind(&program.name)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn find_program(&self, id: Uuid) -> Result<Option<Program>, StoreError> {
        sqlx::query_as::<_, (String, String, String)>(
            "SELECT id, code, name FROM programs WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?
        .map(|r| {
            Ok(Program {
                id: parse_uuid(&r.0)?,
                code: r.1,
                name: r.2,
            })
        })
        .transpose()
    }

    async fn save_supervisory_node(&self, node: &SupervisoryNode) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO supervisory_nodes (id, code, name) VALUES (?, ?, ?)")
            .bind(node.id.to_string())
            .bind(&node.code)
            .bind(&node.name)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    /// # Summary
    /// 保存供应线，并 Upsert 其引用的组织结构实体。
    ///
    /// # Logic
    /// PUT 整体替换语义：嵌套实体随供应线一并落库，保证读取时能完整水化。
    async fn save_supply_line(&self, line: &SupplyLine) -> Result<(), StoreError> {
        self.save_supervisory_node(&line.supervisory_node).await?;
        self.save_program(&line.program).await?;
        self.save_facility(&line.supplying_facility).await?;

        sqlx::query(
            "INSERT OR REPLACE INTO supply_lines \
             (id, supervisory_node_id, program_id, supplying_facility_id, description) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(line.id.to_string())
        .bind(line.supervisory_node.id.to_string())
        .bind(line.program.id.to_string())
        .bind(line.supplying_facility.id.to_string())
        .bind(&line.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(())
    }

    /// # Summary
    /// 检索供应线，可选过滤条件按 AND 组合。
    async fn search_supply_lines(
        &self,
        program_id: Option<Uuid>,
        supervisory_node_id: Option<Uuid>,
    ) -> Result<Vec<SupplyLine>, StoreError> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT sl.id, sl.description, \
             sn.id, sn.code, sn.name, \
             p.id, p.code, p.name, \
             f.id, f.code, f.name \
             FROM supply_lines sl \
             JOIN supervisory_nodes sn ON sn.id = sl.supervisory_node_id \
             JOIN programs p ON p.id = sl.program_id \
             JOIN facilities f ON f.id = sl.supplying_facility_id \
             WHERE 1 = 1",
        );

        if let Some(id) = program_id {
            builder.push(" AND sl.program_id = ").push_bind(id.to_string());
        }
        if let Some(id) = supervisory_node_id {
            builder
                .push(" AND sl.supervisory_node_id = ")
                .push_bind(id.to_string());
        }
        builder.push(" ORDER BY p.code, sn.code");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| {
                Ok(SupplyLine {
                    id: parse_uuid(row.try_get::<&str, _>(0).map_err(map_db_err)?)?,
                    description: row.try_get(1).map_err(map_db_err)?,
                    supervisory_node: SupervisoryNode {
                        id: parse_uuid(row.try_get::<&str, _>(2).map_err(map_db_err)?)?,
                        code: row.try_get(3).map_err(map_db_err)?,
                        name: row.try_get(4).map_err(map_db_err)?,
                    },
                    program: Program {
                        id: parse_uuid(row.try_get::<&str, _>(5).map_err(map_db_err)?)?,
                        code: row.try_get(6).map_err(map_db_err)?,
                        name: row.try_get(7).map_err(map_db_err)?,
                    },
                    supplying_facility: Facility {
                        id: parse_uuid(row.try_get::<&str, _>(8).map_err(map_db_err)?)?,
                        code: row.try_get(9).map_err(map_db_err)?,
                        name: row.try_get(10).map_err(map_db_err)?,
                    },
                })
            })
            .collect()
    }
}
