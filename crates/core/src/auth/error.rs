use thiserror::Error;

/// # Summary
/// 外部鉴权协作方错误。协作方失败必须显式上浮，绝不静默吞掉。
#[derive(Error, Debug)]
pub enum AuthError {
    /// 网络层失败（连接、超时）
    #[error("Network error: {0}")]
    Network(String),
    /// 协作方返回非 2xx 或响应缺少必要字段
    #[error("External API error: {0}")]
    ExternalApi(String),
}
