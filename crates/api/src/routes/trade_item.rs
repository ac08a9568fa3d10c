//! # 贸易品路由控制器
//!
//! 实现 `/api/tradeItems` 路径下的 REST 接口：整体保存与分类检索。

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use refdata_core::catalog::entity::TradeItem;
use refdata_core::rights::entity::right_name;

use crate::error::ApiError;
use crate::middleware::auth::{CurrentSubject, require_right};
use crate::server::AppState;
use crate::types::TradeItemDto;

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchTradeItemsQuery {
    pub classification_id: Option<String>,
    pub full_match: Option<bool>,
}

/// 创建或整体替换贸易品
///
/// 携带 id 的请求幂等更新同一条记录，不携带 id 则创建新记录。
/// 旧的品目关联与分类指派随贸易品一并覆盖。
#[utoipa::path(
    put,
    path = "/api/tradeItems",
    tag = "贸易品 (TradeItems)",
    security(("bearer_jwt" = [])),
    request_body = TradeItemDto,
    responses(
        (status = 200, description = "保存成功", body = TradeItemDto),
        (status = 400, description = "制造商缺失或品目集为空"),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 ORDERABLES_MANAGE 权限")
    )
)]
pub async fn save_trade_item(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Json(dto): Json<TradeItemDto>,
) -> Result<Json<TradeItemDto>, ApiError> {
    require_right(&claims, right_name::ORDERABLES_MANAGE)?;

    let item = TradeItem::new_instance(&dto)?;
    state.trade_item_store.save(&item).await?;
    tracing::info!("Saved trade item {}", item.id);

    Ok(Json(TradeItemDto::from_entity(&item)))
}

/// 检索贸易品
///
/// 无参数时返回全量；`classificationId` 按分类编号等值匹配；
/// 追加 `fullMatch=true` 切换为大小写不敏感的子串匹配。
#[utoipa::path(
    get,
    path = "/api/tradeItems",
    tag = "贸易品 (TradeItems)",
    security(("bearer_jwt" = [])),
    params(
        ("classificationId" = Option<String>, Query, description = "外部分类编号"),
        ("fullMatch" = Option<bool>, Query, description = "true 时切换为子串匹配")
    ),
    responses(
        (status = 200, description = "贸易品列表", body = Vec<TradeItemDto>),
        (status = 401, description = "未认证")
    )
)]
pub async fn search_trade_items(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
    Query(query): Query<SearchTradeItemsQuery>,
) -> Result<Json<Vec<TradeItemDto>>, ApiError> {
    let items = match query.classification_id {
        Some(ref classification_id) => {
            if query.full_match.unwrap_or(false) {
                state
                    .trade_item_store
                    .find_by_classification_id_like(classification_id)
                    .await?
            } else {
                state
                    .trade_item_store
                    .find_by_classification_id(classification_id)
                    .await?
            }
        }
        None => state.trade_item_store.find_all().await?,
    };

    Ok(Json(items.iter().map(TradeItemDto::from_entity).collect()))
}
