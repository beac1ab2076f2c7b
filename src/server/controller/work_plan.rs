use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        work_plan::{UpsertWorkPlanDto, WorkPlanDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::work_plan::{WorkPlan, WorkPlanParams},
        service::work_plan::WorkPlanService,
        state::AppState,
    },
};

/// Tag for grouping work plan endpoints in OpenAPI documentation
pub static WORK_PLAN_TAG: &str = "work-plan";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct WorkPlanQuery {
    pub department_id: Option<i32>,
}

/// Create a work plan in DRAFT.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The created plan
/// - `400 Bad Request` - Blank title, unknown department or period ending before it starts
#[utoipa::path(
    post,
    path = "/api/work-plans",
    tag = WORK_PLAN_TAG,
    request_body = UpsertWorkPlanDto,
    responses(
        (status = 201, description = "Work plan created", body = WorkPlanDto),
        (status = 400, description = "Invalid work plan data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_work_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertWorkPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let plan = WorkPlanService::new(&state.db, &state.notifications)
        .create(&user, WorkPlanParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/work-plans",
    tag = WORK_PLAN_TAG,
    params(WorkPlanQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of work plans", body = PageDto<WorkPlanDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_work_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<WorkPlanQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let plans = WorkPlanService::new(&state.db, &state.notifications)
        .get_paginated(query.department_id, params.checked_page()?, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(plans.into_dto(WorkPlan::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/work-plans/{id}",
    tag = WORK_PLAN_TAG,
    params(("id" = i32, Path, description = "Work plan ID")),
    responses(
        (status = 200, description = "The work plan", body = WorkPlanDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Work plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_work_plan_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let plan = WorkPlanService::new(&state.db, &state.notifications)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Update a work plan that is still a draft.
///
/// # Access Control
/// - The author of the plan, or `Admin`
#[utoipa::path(
    put,
    path = "/api/work-plans/{id}",
    tag = WORK_PLAN_TAG,
    params(("id" = i32, Path, description = "Work plan ID")),
    request_body = UpsertWorkPlanDto,
    responses(
        (status = 200, description = "Work plan updated", body = WorkPlanDto),
        (status = 400, description = "Invalid work plan data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Work plan not found", body = ErrorDto),
        (status = 409, description = "Work plan is no longer a draft", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_work_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertWorkPlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let plan = WorkPlanService::new(&state.db, &state.notifications)
        .update(&user, id, WorkPlanParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Delete a work plan that is still a draft.
///
/// # Access Control
/// - The author of the plan, or `Admin`
#[utoipa::path(
    delete,
    path = "/api/work-plans/{id}",
    tag = WORK_PLAN_TAG,
    params(("id" = i32, Path, description = "Work plan ID")),
    responses(
        (status = 204, description = "Work plan deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Work plan not found", body = ErrorDto),
        (status = 409, description = "Work plan is no longer a draft", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_work_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    WorkPlanService::new(&state.db, &state.notifications)
        .delete(&user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Approve a draft work plan.
///
/// Records the approver and notifies the plan's author.
///
/// # Access Control
/// - `Commander`
#[utoipa::path(
    post,
    path = "/api/work-plans/{id}/approve",
    tag = WORK_PLAN_TAG,
    params(("id" = i32, Path, description = "Work plan ID")),
    responses(
        (status = 200, description = "Work plan approved", body = WorkPlanDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a commander", body = ErrorDto),
        (status = 404, description = "Work plan not found", body = ErrorDto),
        (status = 409, description = "Work plan is not a draft", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn approve_work_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Commander])
        .await?;

    let plan = WorkPlanService::new(&state.db, &state.notifications)
        .approve(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/work-plans/{id}/start",
    tag = WORK_PLAN_TAG,
    params(("id" = i32, Path, description = "Work plan ID")),
    responses(
        (status = 200, description = "Work plan started", body = WorkPlanDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Work plan not found", body = ErrorDto),
        (status = 409, description = "Work plan is not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn start_work_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let plan = WorkPlanService::new(&state.db, &state.notifications)
        .start(id)
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/work-plans/{id}/complete",
    tag = WORK_PLAN_TAG,
    params(("id" = i32, Path, description = "Work plan ID")),
    responses(
        (status = 200, description = "Work plan completed", body = WorkPlanDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Work plan not found", body = ErrorDto),
        (status = 409, description = "Work plan is not in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn complete_work_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let plan = WorkPlanService::new(&state.db, &state.notifications)
        .complete(id)
        .await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}
