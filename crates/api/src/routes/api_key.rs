//! # API Key 路由控制器
//!
//! 实现 `/api/apiKeys` 的签发与吊销。实际的密钥生命周期由外部
//! OAuth2 鉴权服务管理，本服务仅代为发起调用。

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use refdata_core::rights::entity::right_name;

use crate::error::ApiError;
use crate::middleware::auth::{CurrentSubject, require_right};
use crate::server::AppState;

/// 签发结果 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiKeyDto {
    /// 外部鉴权服务返回的密钥标识
    pub token: Uuid,
}

/// 签发服务账户 API Key
#[utoipa::path(
    post,
    path = "/api/apiKeys",
    tag = "服务账户 (ApiKeys)",
    security(("bearer_jwt" = [])),
    responses(
        (status = 201, description = "签发成功", body = ApiKeyDto),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 SERVICE_ACCOUNTS_MANAGE 权限"),
        (status = 502, description = "外部鉴权服务异常")
    )
)]
pub async fn create_api_key(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
) -> Result<(StatusCode, Json<ApiKeyDto>), ApiError> {
    require_right(&claims, right_name::SERVICE_ACCOUNTS_MANAGE)?;

    let token = state.api_key_client.issue_key().await?;

    Ok((StatusCode::CREATED, Json(ApiKeyDto { token })))
}

/// 吊销服务账户 API Key
#[utoipa::path(
    delete,
    path = "/api/apiKeys/{id}",
    tag = "服务账户 (ApiKeys)",
    security(("bearer_jwt" = [])),
    params(("id" = Uuid, Path, description = "密钥标识")),
    responses(
        (status = 204, description = "吊销成功"),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 SERVICE_ACCOUNTS_MANAGE 权限"),
        (status = 502, description = "外部鉴权服务异常")
    )
)]
pub async fn delete_api_key(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_right(&claims, right_name::SERVICE_ACCOUNTS_MANAGE)?;

    state.api_key_client.revoke_key(id).await?;
    tracing::info!("Revoked API key {}", id);

    Ok(StatusCode::NO_CONTENT)
}
