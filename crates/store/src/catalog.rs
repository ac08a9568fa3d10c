use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use refdata_core::catalog::entity::{Orderable, TradeItem, TradeItemClassification};
use refdata_core::catalog::port::TradeItemStore;
use refdata_core::store::error::StoreError;

use crate::db::{map_db_err, open_pool, parse_uuid};

/// TradeItemStore 的 SQLite 实现。
///
/// # Summary
/// 在 `refdata.db` 中管理贸易品、其关联品目与外部分类指派。
///
/// # Invariants
/// * 表结构在存储实例创建时初始化。
/// * `save` 在单个事务内整体替换贸易品的子记录。
pub struct SqliteTradeItemStore {
    pool: SqlitePool,
}

impl SqliteTradeItemStore {
    /// 创建存储实例并初始化目录相关表结构。
    pub async fn new() -> Result<Self, StoreError> {
        let pool = open_pool().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS trade_items (
                id TEXT PRIMARY KEY,
                manufacturer TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS orderables (
                id TEXT PRIMARY KEY,
                product_code TEXT NOT NULL UNIQUE,
                full_product_name TEXT NOT NULL,
                trade_item_id TEXT
            );

            CREATE TABLE IF NOT EXISTS trade_item_classifications (
                trade_item_id TEXT NOT NULL,
                classification_system TEXT NOT NULL,
                classification_id TEXT NOT NULL,
                PRIMARY KEY (trade_item_id, classification_system)
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::InitError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// 水化单个贸易品的品目与分类子记录。
    async fn hydrate(&self, id: Uuid, manufacturer: String) -> Result<TradeItem, StoreError> {
        let orderables = sqlx::query_as::<_, (String, String, String)>(
            "SELECT id, product_code, full_product_name FROM orderables \
             WHERE trade_item_id = ? ORDER BY product_code",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|r| {
            Ok(Orderable {
                id: parse_uuid(&r.0)?,
                product_code: r.1,
                full_product_name: r.2,
            })
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

        let classifications = sqlx::query_as::<_, (String, String)>(
            "SELECT classification_system, classification_id \
             FROM trade_item_classifications WHERE trade_item_id = ? \
             ORDER BY classification_system",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|r| TradeItemClassification {
            classification_system: r.0,
            classification_id: r.1,
        })
        .collect();

        Ok(TradeItem {
            id,
            manufacturer_of_trade_item: manufacturer,
            orderables,
            classifications,
        })
    }

    /// 按贸易品主行集合批量水化。
    async fn hydrate_all(
        &self,
        rows: Vec<(String, String)>,
    ) -> Result<Vec<TradeItem>, StoreError> {
        let mut items = Vec::with_capacity(rows.len());
        for (id, manufacturer) in rows {
            items.push(self.hydrate(parse_uuid(&id)?, manufacturer).await?);
        }
        Ok(items)
    }
}

#[async_trait]
impl TradeItemStore for SqliteTradeItemStore {
    /// # Summary
    /// 保存或整体替换贸易品。
    ///
    /// # Logic
    /// 1. Upsert 贸易品主行。
    /// 2. 解除此前挂在该贸易品下的品目，重新挂接当前品目集。
    /// 3. 重写分类指派。
    /// 全程在一个事务内完成。
    async fn save(&self, item: &TradeItem) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;
        let item_id = item.id.to_string();

        sqlx::query("INSERT OR REPLACE INTO trade_items (id, manufacturer) VALUES (?, ?)")
            .bind(&item_id)
            .bind(&item.manufacturer_of_trade_item)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        sqlx::query("UPDATE orderables SET trade_item_id = NULL WHERE trade_item_id = ?")
            .bind(&item_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        for orderable in &item.orderables {
            sqlx::query(
                "INSERT OR REPLACE INTO orderables \
                 (id, product_code, full_product_name, trade_item_id) VALUES (?, ?, ?, ?)",
            )
            .bind(orderable.id.to_string())
            .bind(&orderable.product_code)
            .bind(&orderable.full_product_name)
            .bind(&item_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;
        }

        sqlx::query("DELETE FROM trade_item_classifications WHERE trade_item_id = ?")
            .bind(&item_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        for classification in &item.classifications {
            sqlx::query(
                "INSERT INTO trade_item_classifications \
                 (trade_item_id, classification_system, classification_id) VALUES (?, ?, ?)",
            )
            .bind(&item_id)
            .bind(&classification.classification_system)
            .bind(&classification.classification_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;
        }

        tx.commit().await.map_err(map_db_err)
    }

    async fn find_all(&self) -> Result<Vec<TradeItem>, StoreError> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT id, manufacturer FROM trade_items ORDER BY manufacturer",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        self.hydrate_all(rows).await
    }

    /// # Summary
    /// 按分类编号精确匹配贸易品。
    async fn find_by_classification_id(
        &self,
        classification_id: &str,
    ) -> Result<Vec<TradeItem>, StoreError> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT DISTINCT t.id, t.manufacturer FROM trade_items t \
             JOIN trade_item_classifications c ON c.trade_item_id = t.id \
             WHERE c.classification_id = ? ORDER BY t.manufacturer",
        )
        .bind(classification_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        self.hydrate_all(rows).await
    }

    /// # Summary
    /// 按分类编号模糊匹配贸易品。
    ///
    /// # Logic
    /// 大小写不敏感的子串匹配：`LIKE '%…%' COLLATE NOCASE`。
    async fn find_by_classification_id_like(
        &self,
        classification_id: &str,
    ) -> Result<Vec<TradeItem>, StoreError> {
        let pattern = format!("%{classification_id}%");
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT DISTINCT t.id, t.manufacturer FROM trade_items t \
             JOIN trade_item_classifications c ON c.trade_item_id = t.id \
             WHERE c.classification_id LIKE ? COLLATE NOCASE ORDER BY t.manufacturer",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        self.hydrate_all(rows).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trade_items")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
