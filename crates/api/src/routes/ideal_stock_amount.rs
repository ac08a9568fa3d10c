//! # 理想库存量路由控制器
//!
//! 实现 `/api/idealStockAmounts` 的分页检索与 CSV 下载。

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use refdata_core::common::PageRequest;
use refdata_core::stock::port::IsaSearchParams;
use refdata_service::csv_export::write_isa_csv;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::CurrentSubject;
use crate::server::AppState;
use crate::types::{IdealStockAmountDto, PageDto};

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchIsaQuery {
    pub facility_id: Option<Uuid>,
    pub commodity_type_id: Option<String>,
    pub processing_period_id: Option<Uuid>,
    // 有符号接收，负值在边界处拒绝
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// 把可能为负的分页参数换算为合法的 `PageRequest`。
fn page_request(page: Option<i64>, size: Option<i64>) -> Result<PageRequest, ApiError> {
    let page = match page {
        Some(p) => {
            u32::try_from(p).map_err(|_| ApiError::BadRequest(format!("Invalid page: {p}")))?
        }
        None => 0,
    };
    let size = match size {
        Some(s) if s > 0 => {
            u32::try_from(s).map_err(|_| ApiError::BadRequest(format!("Invalid size: {s}")))?
        }
        Some(s) => return Err(ApiError::BadRequest(format!("Invalid size: {s}"))),
        None => PageRequest::DEFAULT_SIZE,
    };
    Ok(PageRequest::new(page, size))
}

/// 分页检索理想库存量
///
/// 三个过滤条件均可选、相互独立；同时给出时按 AND 组合，
/// 全部缺省时返回全量（分页）。
#[utoipa::path(
    get,
    path = "/api/idealStockAmounts",
    tag = "理想库存量 (IdealStockAmounts)",
    security(("bearer_jwt" = [])),
    params(
        ("facilityId" = Option<Uuid>, Query, description = "按设施过滤"),
        ("commodityTypeId" = Option<String>, Query, description = "按商品类型编号过滤"),
        ("processingPeriodId" = Option<Uuid>, Query, description = "按处理周期过滤"),
        ("page" = Option<i64>, Query, description = "页码，从 0 开始"),
        ("size" = Option<i64>, Query, description = "页大小，默认 50")
    ),
    responses(
        (status = 200, description = "分页结果", body = PageDto<IdealStockAmountDto>),
        (status = 400, description = "分页参数非法"),
        (status = 401, description = "未认证")
    )
)]
pub async fn search_ideal_stock_amounts(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
    Query(query): Query<SearchIsaQuery>,
) -> Result<Json<PageDto<IdealStockAmountDto>>, ApiError> {
    let page = page_request(query.page, query.size)?;
    let params = IsaSearchParams {
        facility_id: query.facility_id,
        commodity_type_id: query.commodity_type_id,
        processing_period_id: query.processing_period_id,
    };

    let result = state.isa_service.search(params, page).await?;

    Ok(Json(PageDto::from_page(
        &result,
        IdealStockAmountDto::from_entity,
    )))
}

/// 导出理想库存量 CSV
///
/// 处理周期列为 "计划编码{分隔符}周期名称"，分隔符可配置。
#[utoipa::path(
    get,
    path = "/api/idealStockAmounts/csv",
    tag = "理想库存量 (IdealStockAmounts)",
    security(("bearer_jwt" = [])),
    responses(
        (status = 200, description = "CSV 文件", body = String, content_type = "text/csv"),
        (status = 401, description = "未认证")
    )
)]
pub async fn export_ideal_stock_amounts_csv(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
) -> Result<impl IntoResponse, ApiError> {
    let amounts = state.isa_service.find_all().await?;
    let csv = write_isa_csv(&amounts, &state.config.export.csv_separator)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"ideal_stock_amounts.csv\"",
            ),
        ],
        csv,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_defaults() {
        let req = page_request(None, None).unwrap();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, PageRequest::DEFAULT_SIZE);
    }

    #[test]
    fn page_request_rejects_negative_page() {
        assert!(page_request(Some(-1), Some(10)).is_err());
    }

    #[test]
    fn page_request_rejects_non_positive_size() {
        assert!(page_request(Some(0), Some(0)).is_err());
        assert!(page_request(Some(0), Some(-5)).is_err());
    }
}
