use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

use refdata_core::schedule::entity::{ProcessingPeriod, ProcessingSchedule};
use refdata_core::schedule::port::ScheduleStore;
use refdata_core::store::error::StoreError;

use crate::db::{map_db_err, open_pool, parse_uuid};

/// 周期行与所属计划的联查行
type PeriodRow = (
    String,
    String,
    NaiveDate,
    NaiveDate,
    String,
    String,
    String,
    Option<String>,
);

/// ScheduleStore 的 SQLite 实现。
///
/// # Invariants
/// * 计划编码唯一（UNIQUE 约束），冲突映射为 `Conflict`。
/// * 周期读取时连同所属计划一并水化。
pub struct SqliteScheduleStore {
    pool: SqlitePool,
}

impl SqliteScheduleStore {
    pub async fn new() -> Result<Self, StoreError> {
        let pool = open_pool().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS processing_schedules (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                description TEXT
            );

            CREATE TABLE IF NOT EXISTS processing_periods (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                schedule_id TEXT NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::InitError(e.to_string()))?;

        Ok(Self { pool })
    }

    fn decode_period(row: PeriodRow) -> Result<ProcessingPeriod, StoreError> {
        Ok(ProcessingPeriod {
            id: parse_uuid(&row.0)?,
            name: row.1,
            start_date: row.2,
            end_date: row.3,
            processing_schedule: ProcessingSchedule {
                id: parse_uuid(&row.4)?,
                code: row.5,
                name: row.6,
                description: row.7,
            },
        })
    }
}

#[async_trait]
impl ScheduleStore for SqliteScheduleStore {
    async fn save_schedule(&self, schedule: &ProcessingSchedule) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO processing_schedules (id, code, name, description) \
             VALUES (?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET code = excluded.code, \
             name = excluded.name, description = excluded.description",
        )
        .bind(schedule.id.to_string())
        .bind(&schedule.code)
        .bind(&schedule.name)
        .bind(&schedule.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(())
    }

    async fn find_schedule(&self, id: Uuid) -> Result<Option<ProcessingSchedule>, StoreError> {
        sqlx::query_as::<_, (String, String, String, Option<String>)>(
            "SELECT id, code, name, description FROM processing_schedules WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?
        .map(|r| {
            Ok(ProcessingSchedule {
                id: parse_uuid(&r.0)?,
                code: r.1,
                name: r.2,
                description: r.3,
            })
        })
        .transpose()
    }

    async fn find_all_schedules(&self) -> Result<Vec<ProcessingSchedule>, StoreError> {
        sqlx::query_as::<_, (String, String, String, Option<String>)>(
            "SELECT id, code, name, description FROM processing_schedules ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(|r| {
            Ok(ProcessingSchedule {
                id: parse_uuid(&r.0)?,
                code: r.1,
                name: r.2,
                description: r.3,
            })
        })
        .collect()
    }

    /// 删除计划及其全部周期。
    async fn delete_schedule(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        let affected = sqlx::query("DELETE FROM processing_schedules WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?
            .rows_affected();

        if affected == 0 {
            return Err(StoreError::NotFound);
        }

        sqlx::query("DELETE FROM processing_periods WHERE schedule_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        tx.commit().await.map_err(map_db_err)
    }

    async fn save_period(&self, period: &ProcessingPeriod) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT OR REPLACE INTO processing_periods \
             (id, name, start_date, end_date, schedule_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(period.id.to_string())
        .bind(&period.name)
        .bind(period.start_date)
        .bind(period.end_date)
        .bind(period.processing_schedule.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(())
    }

    async fn find_period(&self, id: Uuid) -> Result<Option<ProcessingPeriod>, StoreError> {
        sqlx::query_as::<_, PeriodRow>(
            "SELECT pp.id, pp.name, pp.start_date, pp.end_date, \
             ps.id, ps.code, ps.name, ps.description \
             FROM processing_periods pp \
             JOIN processing_schedules ps ON ps.id = pp.schedule_id \
             WHERE pp.id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?
        .map(Self::decode_period)
        .transpose()
    }

    async fn find_periods_by_schedule(
        &self,
        schedule_id: Uuid,
    ) -> Result<Vec<ProcessingPeriod>, StoreError> {
        sqlx::query_as::<_, PeriodRow>(
            "SELECT pp.id, pp.name, pp.start_date, pp.end_date, \
             ps.id, ps.code, ps.name, ps.description \
             FROM processing_periods pp \
             JOIN processing_schedules ps ON ps.id = pp.schedule_id \
             WHERE pp.schedule_id = ? ORDER BY pp.start_date",
        )
        .bind(schedule_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .map(Self::decode_period)
        .collect()
    }
}
