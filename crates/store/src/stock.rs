use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use refdata_core::catalog::entity::Orderable;
use refdata_core::common::{Page, PageRequest};
use refdata_core::schedule::entity::{ProcessingPeriod, ProcessingSchedule};
use refdata_core::stock::entity::IdealStockAmount;
use refdata_core::stock::port::{IdealStockAmountStore, IsaSearchParams};
use refdata_core::store::error::StoreError;
use refdata_core::supply::entity::{Facility, Program};

use crate::db::{map_db_err, open_pool, parse_uuid};

/// IdealStockAmountStore 的 SQLite 实现。
///
/// # Summary
/// 在 `refdata.db` 中管理理想库存量记录；检索时联查设施、项目、
/// 品目与处理周期表，向调用方返回完整对象图。
///
/// # Invariants
/// * (设施, 项目, 品目, 周期) 组合唯一，冲突映射为 `Conflict`。
pub struct SqliteIdealStockAmountStore {
    pool: SqlitePool,
}

impl SqliteIdealStockAmountStore {
    pub async fn new() -> Result<Self, StoreError> {
        let pool = open_pool().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ideal_stock_amounts (
                id TEXT PRIMARY KEY,
                facility_id TEXT NOT NULL,
                program_id TEXT NOT NULL,
                orderable_id TEXT NOT NULL,
                processing_period_id TEXT NOT NULL,
                amount INTEGER NOT NULL,
                UNIQUE (facility_id, program_id, orderable_id, processing_period_id)
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::InitError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// 把过滤条件追加到查询尾部。条件只引用 isa 列与子查询，
    /// 计数与取数两条语句共用。
    fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, params: &IsaSearchParams) {
        if let Some(id) = params.facility_id {
            builder.push(" AND isa.facility_id = ").push_bind(id.to_string());
        }
        if let Some(id) = params.processing_period_id {
            builder
                .push(" AND isa.processing_period_id = ")
                .push_bind(id.to_string());
        }
        // 商品类型经 品目 → 贸易品 → 分类指派 链路解析
        if let Some(ref commodity_type) = params.commodity_type_id {
            builder
                .push(
                    " AND isa.orderable_id IN (\
                     SELECT o2.id FROM orderables o2 \
                     JOIN trade_item_classifications tic \
                     ON tic.trade_item_id = o2.trade_item_id \
                     WHERE tic.classification_id = ",
                )
                .push_bind(commodity_type.clone())
                .push(")");
        }
    }

    fn decode_row(row: &SqliteRow) -> Result<IdealStockAmount, StoreError> {
        let get_text = |idx: usize| -> Result<String, StoreError> {
            row.try_get::<String, _>(idx).map_err(map_db_err)
        };

        Ok(IdealStockAmount {
            id: parse_uuid(&get_text(0)?)?,
            amount: row.try_get::<i32, _>(1).map_err(map_db_err)?,
            facility: Facility {
                id: parse_uuid(&get_text(2)?)?,
                code: get_text(3)?,
                name: get_text(4)?,
            },
            program: Program {
                id: parse_uuid(&get_text(5)?)?,
                code: get_text(6)?,
                name: get_text(7)?,
            },
            orderable: Orderable {
                id: parse_uuid(&get_text(8)?)?,
                product_code: get_text(9)?,
                full_product_name: get_text(10)?,
            },
            processing_period: ProcessingPeriod {
                id: parse_uuid(&get_text(11)?)?,
                name: get_text(12)?,
                start_date: row.try_get(13).map_err(map_db_err)?,
                end_date: row.try_get(14).map_err(map_db_err)?,
                processing_schedule: ProcessingSchedule {
                    id: parse_uuid(&get_text(15)?)?,
                    code: get_text(16)?,
                    name: get_text(17)?,
                    description: row.try_get(18).map_err(map_db_err)?,
                },
            },
        })
    }
}

#[async_trait]
impl IdealStockAmountStore for SqliteIdealStockAmountStore {
    /// 按 id Upsert 理想库存量记录。
    async fn save(&self, isa: &IdealStockAmount) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO ideal_stock_amounts \
             (id, facility_id, program_id, orderable_id, processing_period_id, amount) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             facility_id = excluded.facility_id, \
             program_id = excluded.program_id, \
             orderable_id = excluded.orderable_id, \
             processing_period_id = excluded.processing_period_id, \
             amount = excluded.amount",
        )
        .bind(isa.id.to_string())
        .bind(isa.facility.id.to_string())
        .bind(isa.program.id.to_string())
        .bind(isa.orderable.id.to_string())
        .bind(isa.processing_period.id.to_string())
        .bind(isa.amount)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(())
    }

    /// # Summary
    /// 按条件分页检索理想库存量。
    ///
    /// # Logic
    /// 1. 用同一组过滤条件先做 COUNT 得总数。
    /// 2. 联查四个引用表取当前页并水化对象图。
    async fn search(
        &self,
        params: IsaSearchParams,
        page: PageRequest,
    ) -> Result<Page<IdealStockAmount>, StoreError> {
        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(*) FROM ideal_stock_amounts isa WHERE 1 = 1");
        Self::push_filters(&mut count_builder, &params);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT isa.id, isa.amount, \
             f.id, f.code, f.name, \
             p.id, p.code, p.name, \
             o.id, o.product_code, o.full_product_name, \
             pp.id, pp.name, pp.start_date, pp.end_date, \
             ps.id, ps.code, ps.name, ps.description \
             FROM ideal_stock_amounts isa \
             JOIN facilities f ON f.id = isa.facility_id \
             JOIN programs p ON p.id = isa.program_id \
             JOIN orderables o ON o.id = isa.orderable_id \
             JOIN processing_periods pp ON pp.id = isa.processing_period_id \
             JOIN processing_schedules ps ON ps.id = pp.schedule_id \
             WHERE 1 = 1",
        );
        Self::push_filters(&mut builder, &params);
        builder
            .push(" ORDER BY f.code, p.code, o.product_code LIMIT ")
            .push_bind(i64::from(page.size))
            .push(" OFFSET ")
            .push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_err)?;

        let content = rows
            .iter()
            .map(Self::decode_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(content, page, u64::try_from(total).unwrap_or(0)))
    }
}
