use thiserror::Error;

/// # Summary
/// 权限/角色领域错误，覆盖角色结构校验与权限名解析两个阶段。
///
/// # Invariants
/// - 任一错误都意味着整个角色被拒绝，不产生部分持久化。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RightsError {
    /// 角色名缺失
    #[error("Role name is required")]
    MissingName,
    /// 角色必须至少持有一项权限
    #[error("Role must have at least one right")]
    NoRights,
    /// 输入中同一权限名出现多次
    #[error("Duplicate right '{0}' in role")]
    DuplicateRight(String),
    /// 权限名无法解析到权限目录中的既有记录
    #[error("Right '{0}' does not exist")]
    RightNotFound(String),
}
