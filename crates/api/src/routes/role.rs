//! # 角色路由控制器
//!
//! 实现 `/api/roles` 路径下的 REST 接口。入站角色先经实体工厂做
//! 结构校验，再由 `RoleService` 把具名权限引用解析为目录规范记录。

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use refdata_core::rights::entity::{Role, right_name};

use crate::error::ApiError;
use crate::middleware::auth::{CurrentSubject, require_right};
use crate::server::AppState;
use crate::types::RoleDto;

/// 列出全部角色
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "角色 (Roles)",
    security(("bearer_jwt" = [])),
    responses(
        (status = 200, description = "角色列表", body = Vec<RoleDto>),
        (status = 401, description = "未认证")
    )
)]
pub async fn list_roles(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
) -> Result<Json<Vec<RoleDto>>, ApiError> {
    let roles = state.role_store.find_all().await?;
    Ok(Json(roles.iter().map(RoleDto::from_entity).collect()))
}

/// 获取指定角色
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = "角色 (Roles)",
    security(("bearer_jwt" = [])),
    params(("id" = Uuid, Path, description = "角色 id")),
    responses(
        (status = 200, description = "角色详情", body = RoleDto),
        (status = 404, description = "角色不存在"),
        (status = 401, description = "未认证")
    )
)]
pub async fn get_role(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
    Path(id): Path<Uuid>,
) -> Result<Json<RoleDto>, ApiError> {
    let role = state
        .role_store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Role {id} not found")))?;
    Ok(Json(RoleDto::from_entity(&role)))
}

/// 创建角色
///
/// 权限集中的每个名称都必须解析到权限目录的既有记录，
/// 任一解析失败或重复即整体拒绝，不产生部分写入。
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = "角色 (Roles)",
    security(("bearer_jwt" = [])),
    request_body = RoleDto,
    responses(
        (status = 201, description = "创建成功", body = RoleDto),
        (status = 400, description = "角色名/权限集非法或权限名无法解析"),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 ROLES_MANAGE 权限")
    )
)]
pub async fn create_role(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Json(dto): Json<RoleDto>,
) -> Result<(StatusCode, Json<RoleDto>), ApiError> {
    require_right(&claims, right_name::ROLES_MANAGE)?;

    let role = Role::new_instance(&dto)?;
    let created = state.role_service.create(role).await?;

    Ok((StatusCode::CREATED, Json(RoleDto::from_entity(&created))))
}

/// 更新角色
///
/// 路径中的 id 覆盖请求体内的 id；角色不存在时按该 id 创建。
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = "角色 (Roles)",
    security(("bearer_jwt" = [])),
    params(("id" = Uuid, Path, description = "角色 id")),
    request_body = RoleDto,
    responses(
        (status = 200, description = "保存成功", body = RoleDto),
        (status = 400, description = "角色名/权限集非法或权限名无法解析"),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 ROLES_MANAGE 权限")
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Path(id): Path<Uuid>,
    Json(dto): Json<RoleDto>,
) -> Result<Json<RoleDto>, ApiError> {
    require_right(&claims, right_name::ROLES_MANAGE)?;

    let role = Role::new_instance(&dto)?;
    let saved = state.role_service.update(id, role).await?;

    Ok(Json(RoleDto::from_entity(&saved)))
}

/// 删除角色
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = "角色 (Roles)",
    security(("bearer_jwt" = [])),
    params(("id" = Uuid, Path, description = "角色 id")),
    responses(
        (status = 204, description = "删除成功"),
        (status = 404, description = "角色不存在"),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 ROLES_MANAGE 权限")
    )
)]
pub async fn delete_role(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_right(&claims, right_name::ROLES_MANAGE)?;

    state.role_store.delete(id).await?;
    tracing::info!("Deleted role {}", id);

    Ok(StatusCode::NO_CONTENT)
}
