//! # API 统一错误处理
//!
//! 将下层各 crate 的错误类型统一映射到 HTTP 状态码与 JSON 响应体。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use refdata_core::auth::error::AuthError;
use refdata_core::catalog::error::CatalogError;
use refdata_core::rights::error::RightsError;
use refdata_core::store::error::StoreError;
use refdata_service::csv_export::CsvFormatError;
use refdata_service::role::RoleServiceError;

use crate::types::ApiErrorResponse;

/// API 层统一错误枚举
#[derive(Error, Debug)]
pub enum ApiError {
    /// 认证失败 (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 权限不足 (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 资源未找到 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 请求参数错误 (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 唯一性冲突 (400, 携带存储诊断信息)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 外部鉴权服务异常 (502)
    #[error("External service error: {0}")]
    ExternalApi(String),

    /// 下层业务错误 (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 将 `ApiError` 转换为 axum 的 HTTP 响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::ExternalApi(msg) => {
                tracing::error!("External auth service error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "External authorization service unavailable".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                // 内部错误只记录日志，不向客户端透传细节
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ApiErrorResponse::from_msg(message));
        (status, body).into_response()
    }
}

/// 从 `StoreError` 转换
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            StoreError::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// 从 `RightsError` 转换：结构性校验失败与未知权限名都是客户端错误
impl From<RightsError> for ApiError {
    fn from(err: RightsError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// 从 `CatalogError` 转换
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// 从 `AuthError` 转换：外部协作方异常统一 502
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::ExternalApi(err.to_string())
    }
}

/// 从 `RoleServiceError` 转换
impl From<RoleServiceError> for ApiError {
    fn from(err: RoleServiceError) -> Self {
        match err {
            RoleServiceError::Rights(e) => e.into(),
            RoleServiceError::Store(e) => e.into(),
        }
    }
}

/// 从 `CsvFormatError` 转换：格式化失败是数据问题，写出失败是内部问题
impl From<CsvFormatError> for ApiError {
    fn from(err: CsvFormatError) -> Self {
        match err {
            CsvFormatError::IncompletePeriod(_) => ApiError::BadRequest(err.to_string()),
            CsvFormatError::Write(msg) => ApiError::Internal(msg),
        }
    }
}
