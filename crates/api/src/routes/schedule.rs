//! # 处理计划路由控制器
//!
//! 实现 `/api/processingSchedules` 的 CRUD 与周期子资源查询。

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use refdata_core::rights::entity::right_name;
use refdata_core::schedule::entity::ProcessingSchedule;

use crate::error::ApiError;
use crate::middleware::auth::{CurrentSubject, require_right};
use crate::server::AppState;
use crate::types::{ProcessingPeriodDto, ProcessingScheduleDto};

/// 列出全部处理计划
#[utoipa::path(
    get,
    path = "/api/processingSchedules",
    tag = "处理计划 (ProcessingSchedules)",
    security(("bearer_jwt" = [])),
    responses(
        (status = 200, description = "计划列表", body = Vec<ProcessingScheduleDto>),
        (status = 401, description = "未认证")
    )
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
) -> Result<Json<Vec<ProcessingScheduleDto>>, ApiError> {
    let schedules = state.schedule_store.find_all_schedules().await?;
    Ok(Json(
        schedules
            .iter()
            .map(ProcessingScheduleDto::from_entity)
            .collect(),
    ))
}

/// 获取指定处理计划
#[utoipa::path(
    get,
    path = "/api/processingSchedules/{id}",
    tag = "处理计划 (ProcessingSchedules)",
    security(("bearer_jwt" = [])),
    params(("id" = Uuid, Path, description = "计划 id")),
    responses(
        (status = 200, description = "计划详情", body = ProcessingScheduleDto),
        (status = 404, description = "计划不存在"),
        (status = 401, description = "未认证")
    )
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
    Path(id): Path<Uuid>,
) -> Result<Json<ProcessingScheduleDto>, ApiError> {
    let schedule = state
        .schedule_store
        .find_schedule(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Processing schedule {id} not found")))?;
    Ok(Json(ProcessingScheduleDto::from_entity(&schedule)))
}

/// 创建处理计划
#[utoipa::path(
    post,
    path = "/api/processingSchedules",
    tag = "处理计划 (ProcessingSchedules)",
    security(("bearer_jwt" = [])),
    request_body = ProcessingScheduleDto,
    responses(
        (status = 201, description = "创建成功", body = ProcessingScheduleDto),
        (status = 400, description = "计划编码冲突"),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 PROCESSING_SCHEDULES_MANAGE 权限")
    )
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Json(dto): Json<ProcessingScheduleDto>,
) -> Result<(StatusCode, Json<ProcessingScheduleDto>), ApiError> {
    require_right(&claims, right_name::PROCESSING_SCHEDULES_MANAGE)?;

    let schedule = ProcessingSchedule::new_instance(&dto);
    state.schedule_store.save_schedule(&schedule).await?;
    tracing::info!("Saved processing schedule '{}'", schedule.code);

    Ok((
        StatusCode::CREATED,
        Json(ProcessingScheduleDto::from_entity(&schedule)),
    ))
}

/// 更新处理计划
///
/// 路径中的 id 覆盖请求体内的 id；计划不存在时按该 id 创建。
#[utoipa::path(
    put,
    path = "/api/processingSchedules/{id}",
    tag = "处理计划 (ProcessingSchedules)",
    security(("bearer_jwt" = [])),
    params(("id" = Uuid, Path, description = "计划 id")),
    request_body = ProcessingScheduleDto,
    responses(
        (status = 200, description = "保存成功", body = ProcessingScheduleDto),
        (status = 400, description = "计划编码冲突"),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 PROCESSING_SCHEDULES_MANAGE 权限")
    )
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Path(id): Path<Uuid>,
    Json(dto): Json<ProcessingScheduleDto>,
) -> Result<Json<ProcessingScheduleDto>, ApiError> {
    require_right(&claims, right_name::PROCESSING_SCHEDULES_MANAGE)?;

    let mut schedule = ProcessingSchedule::new_instance(&dto);
    schedule.id = id;
    state.schedule_store.save_schedule(&schedule).await?;

    Ok(Json(ProcessingScheduleDto::from_entity(&schedule)))
}

/// 删除处理计划（连同其下周期）
#[utoipa::path(
    delete,
    path = "/api/processingSchedules/{id}",
    tag = "处理计划 (ProcessingSchedules)",
    security(("bearer_jwt" = [])),
    params(("id" = Uuid, Path, description = "计划 id")),
    responses(
        (status = 204, description = "删除成功"),
        (status = 404, description = "计划不存在"),
        (status = 401, description = "未认证"),
        (status = 403, description = "缺少 PROCESSING_SCHEDULES_MANAGE 权限")
    )
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    CurrentSubject(claims): CurrentSubject,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_right(&claims, right_name::PROCESSING_SCHEDULES_MANAGE)?;

    state.schedule_store.delete_schedule(id).await?;
    tracing::info!("Deleted processing schedule {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// 列出指定计划下的处理周期
///
/// 周期按起始日期排序返回。
#[utoipa::path(
    get,
    path = "/api/processingSchedules/{id}/processingPeriods",
    tag = "处理计划 (ProcessingSchedules)",
    security(("bearer_jwt" = [])),
    params(("id" = Uuid, Path, description = "计划 id")),
    responses(
        (status = 200, description = "周期列表", body = Vec<ProcessingPeriodDto>),
        (status = 404, description = "计划不存在"),
        (status = 401, description = "未认证")
    )
)]
pub async fn list_schedule_periods(
    State(state): State<AppState>,
    CurrentSubject(_claims): CurrentSubject,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ProcessingPeriodDto>>, ApiError> {
    // 计划必须存在，空计划与未知计划是不同的答案
    state
        .schedule_store
        .find_schedule(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Processing schedule {id} not found")))?;

    let periods = state.schedule_store.find_periods_by_schedule(id).await?;
    Ok(Json(
        periods.iter().map(ProcessingPeriodDto::from_entity).collect(),
    ))
}
