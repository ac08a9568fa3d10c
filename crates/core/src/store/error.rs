use thiserror::Error;

/// # Summary
/// 存储层错误枚举，处理数据库连接、读写失败与完整性冲突。
///
/// # Invariants
/// - `Conflict` 必须携带底层存储的诊断信息，供 API 层原样返回。
#[derive(Error, Debug)]
pub enum StoreError {
    /// 数据库操作失败
    #[error("Database error: {0}")]
    Database(String),
    /// 记录未找到
    #[error("Not found")]
    NotFound,
    /// 唯一约束等数据完整性冲突
    #[error("Data integrity violation: {0}")]
    Conflict(String),
    /// 初始化存储失败
    #[error("Initialization error: {0}")]
    InitError(String),
}
