//! 连接池与行解码的公共辅助。

use std::fs;

use refdata_core::store::error::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

/// 参考数据库文件名
const REFDATA_DB: &str = "refdata.db";

/// # Summary
/// 打开（必要时创建）数据根目录下的参考数据库。
///
/// # Logic
/// 1. 确保数据根目录存在。
/// 2. 以 `create_if_missing` 连接 `refdata.db`。
///
/// # Returns
/// * `Result<SqlitePool, StoreError>` - 共享连接池 or 初始化错误。
pub async fn open_pool() -> Result<SqlitePool, StoreError> {
    let root = crate::config::get_root_dir();
    fs::create_dir_all(&root).map_err(|e| StoreError::InitError(e.to_string()))?;

    let options = SqliteConnectOptions::new()
        .filename(root.join(REFDATA_DB))
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| StoreError::InitError(e.to_string()))
}

/// 将 sqlx 错误映射为存储层错误，唯一约束冲突单独归类。
pub(crate) fn map_db_err(err: sqlx::Error) -> StoreError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return StoreError::Conflict(db_err.message().to_string());
        }
    }
    StoreError::Database(err.to_string())
}

/// TEXT 列中的 UUID 解码
pub(crate) fn parse_uuid(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|e| StoreError::Database(format!("Invalid uuid '{raw}': {e}")))
}
