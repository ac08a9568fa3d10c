//! # 供应线路由控制器
//!
//! 实现 `/api/supplyLines` 的检索与整体保存。

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use uuid::Uuid;

use refdata_core::rights::entity::right_name;
use refdata_core::supply::entity::SupplyLine;

use crate::error::ApiError;
use crate::middleware::auth::{CurrentSubject, require_right};
use crate::server::AppState;
use crate::types::SupplyLineDto;

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchSupplyLinesQuery {
    pub program_id: Option<Uuid>,
    pub supervisory_node_id: Option<Uuid>,
}

/// 检索供应线
///
/// 两个过滤条件均可选、相互独立，同时给出时按 AND 组合；
/// 全部缺省时返回全量。
#[utoipa::path(
    get,
    path = "/api/supplyLines",
    tag = "供应线 (SupplyLines)",
    security(("bearer_jwt" = [])),
    params(
        ("programId" = Option<Uuid>, Query, description = "按项目过滤"),
        ("supervisoryNodeId" = Option<Uuid>, Query, description = "按监管节点过滤")
    ),
    responses(
        (status = 200, description = "供应线列表", body = Vec<SupplyLineDto>),
        (status = 401, description = "未认证")
    )
)]
pub async fn search_supply_lines(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
    Query(query): Query<SearchSupplyLinesQuery>,
) -> Result<Json<Vec<SupplyLineDto>>, ApiError> {
    let lines = state
        .supply_store
        .search_supply_lines(query.program_id, query.supervisory_node_id)
        .await?;

    Ok(Json(lines.iter().map(SupplyLineDto::from_entity).collect()))
}

/// 创建或整体替换供应线
///
/// 嵌套的监管节点/项目/设施随供应线一并保存。
#[utoipa::path(
    put,
    path = "/api/supplyLines",
    tag = "供应线 (SupplyLines)",
    security(("bearer_jwt" = [])),
    request_body = SupplyLineDto,
    responses(
        (status = 200, description = "保存成功", body = SupplyLineDto),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 SUPPLY_LINES_MANAGE 权限")
    )
)]
pub async fn save_supply_line(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Json(dto): Json<SupplyLineDto>,
) -> Result<Json<SupplyLineDto>, ApiError> {
    require_right(&claims, right_name::SUPPLY_LINES_MANAGE)?;

    let line = SupplyLine::new_instance(&dto);
    state.supply_store.save_supply_line(&line).await?;
    tracing::info!("Saved supply line {}", line.id);

    Ok(Json(SupplyLineDto::from_entity(&line)))
}
