//! # 鉴权中间件
//!
//! 验证外部 OAuth2 服务签发的 Bearer JWT（共享密钥），并把解码后的
//! Claims 注入请求上下文。中间件只做验签与提取，细粒度的权限校验
//! 由各 Handler 通过 [`require_right`] 完成。

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::Claims;

/// 提取并验证 Authorization: Bearer <token>
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req.headers().get(axum::http::header::AUTHORIZATION);

    let token = match auth_header {
        Some(header_val) => {
            let s = header_val
                .to_str()
                .map_err(|_| ApiError::Unauthorized("Invalid auth header".into()))?;
            match s.strip_prefix("Bearer ") {
                Some(token) => token.to_string(),
                None => {
                    tracing::warn!("Invalid Bearer format");
                    return Err(ApiError::Unauthorized("Invalid Bearer format".into()));
                }
            }
        }
        None => {
            tracing::warn!("Missing Authorization header");
            return Err(ApiError::Unauthorized("Missing Authorization header".into()));
        }
    };

    let claims = match verify_jwt(&token, &state.config.server.jwt_secret) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("JWT verification failed: {:?}", e);
            return Err(e);
        }
    };

    // 将 Claims 注入 request extensions，
    // 以便 downstream handlers 用 `CurrentSubject` 提取
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// 验证 JWT 返回强类型 Claims
pub fn verify_jwt(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let mut validation = Validation::default();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
    .map_err(|_| ApiError::Unauthorized("Invalid or expired token".into()))?;

    Ok(token_data.claims)
}

/// # Summary
/// 校验当前主体是否持有指定权限，未持有返回 403。
///
/// 授权失败在进入领域逻辑之前短路，存储不会被触碰。
pub fn require_right(claims: &Claims, right: &str) -> Result<(), ApiError> {
    if claims.rights.iter().any(|r| r == right) {
        Ok(())
    } else {
        tracing::warn!("Subject '{}' lacks right '{}'", claims.sub, right);
        Err(ApiError::Forbidden(format!(
            "You do not have the following permission to perform this action: {right}"
        )))
    }
}

/// 在提取器中获取当前主体 Claims 的快捷方式
pub struct CurrentSubject(pub Claims);

impl<S> FromRequestParts<S> for CurrentSubject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Missing subject context".into()))?;
        Ok(CurrentSubject(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with(rights: &[&str]) -> Claims {
        Claims {
            sub: "service-client".to_string(),
            rights: rights.iter().map(|r| (*r).to_string()).collect(),
            exp: 4_000_000_000,
        }
    }

    #[test]
    fn require_right_passes_when_granted() {
        let claims = claims_with(&["ORDERABLES_MANAGE"]);
        assert!(require_right(&claims, "ORDERABLES_MANAGE").is_ok());
    }

    #[test]
    fn require_right_rejects_when_missing() {
        let claims = claims_with(&["ROLES_MANAGE"]);
        let err = require_right(&claims, "ORDERABLES_MANAGE").unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn verify_jwt_round_trip() {
        let claims = claims_with(&["ROLES_MANAGE"]);
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let decoded = verify_jwt(&token, "secret").unwrap();
        assert_eq!(decoded.sub, "service-client");
        assert_eq!(decoded.rights, vec!["ROLES_MANAGE".to_string()]);
    }

    #[test]
    fn verify_jwt_rejects_wrong_secret() {
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims_with(&[]),
            &jsonwebtoken::EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(verify_jwt(&token, "other").is_err());
    }
}
