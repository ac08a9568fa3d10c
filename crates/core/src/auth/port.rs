use async_trait::async_trait;
use uuid::Uuid;

use super::error::AuthError;

/// # Summary
/// API Key 签发端口：对外部鉴权服务的窄接口抽象。
///
/// # Invariants
/// - 实现方每次调用自行完成 client_credentials 令牌交换，无重试。
#[async_trait]
pub trait ApiKeyPort: Send + Sync {
    /// 在外部鉴权服务上创建 API Key，返回其标识。
    async fn issue_key(&self) -> Result<Uuid, AuthError>;

    /// 吊销外部鉴权服务上的 API Key。
    async fn revoke_key(&self, key: Uuid) -> Result<(), AuthError>;
}
