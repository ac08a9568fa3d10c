use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::{debug, info};
use uuid::Uuid;

use refdata_core::auth::error::AuthError;
use refdata_core::auth::port::ApiKeyPort;
use refdata_core::config::AuthServerConfig;

/// # Summary
/// 基于 HTTP 的 API Key 客户端：先以 client_credentials 换取访问令牌，
/// 再持令牌调用外部鉴权服务的 API Key 管理接口。
///
/// # Invariants
/// - 每次调用独立换取令牌，不缓存、不重试。
pub struct HttpApiKeyClient {
    config: AuthServerConfig,
    client: reqwest::Client,
}

impl HttpApiKeyClient {
    pub fn new(config: AuthServerConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// # Summary
    /// client_credentials 令牌交换。
    ///
    /// # Logic
    /// 以 Basic base64(client_id:client_secret) 请求授权端点，
    /// 从响应 JSON 中取出 access_token 字段。
    async fn obtain_access_token(&self) -> Result<String, AuthError> {
        let credentials = BASE64.encode(format!(
            "{}:{}",
            self.config.client_id, self.config.client_secret
        ));

        let response = self
            .client
            .post(&self.config.authorization_url)
            .query(&[("grant_type", "client_credentials")])
            .header("Authorization", format!("Basic {credentials}"))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::ExternalApi(format!(
                "Token endpoint returned status {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        body.get("access_token")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                AuthError::ExternalApi("Token response missing access_token".to_string())
            })
    }
}

#[async_trait]
impl ApiKeyPort for HttpApiKeyClient {
    async fn issue_key(&self) -> Result<Uuid, AuthError> {
        let token = self.obtain_access_token().await?;
        debug!("Obtained access token for API key creation");

        let response = self
            .client
            .post(format!("{}/api/apiKeys", self.config.auth_url))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::ExternalApi(format!(
                "API key creation returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let key = body
            .trim()
            .trim_matches('"')
            .parse::<Uuid>()
            .map_err(|_| AuthError::ExternalApi(format!("Unparseable API key: {body}")))?;

        info!("Issued new API key: {key}");
        Ok(key)
    }

    async fn revoke_key(&self, key: Uuid) -> Result<(), AuthError> {
        let token = self.obtain_access_token().await?;

        let response = self
            .client
            .delete(format!("{}/api/apiKeys/{key}", self.config.auth_url))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::ExternalApi(format!(
                "API key deletion returned status {}",
                response.status()
            )));
        }

        info!("Revoked API key: {key}");
        Ok(())
    }
}
