use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        schedule::{ScheduleDto, UpsertScheduleDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::schedule::{Schedule, ScheduleFilter, ScheduleParams},
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// Query filters for the schedule listing. The time window is half-open.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ScheduleQuery {
    pub department_id: Option<i32>,
    /// Earliest start time, inclusive
    pub from: Option<DateTime<Utc>>,
    /// Latest start time, exclusive
    pub to: Option<DateTime<Utc>>,
}

/// Create a schedule entry.
///
/// Entries bound to a department notify that department's active members.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The created entry
/// - `400 Bad Request` - Blank title, unknown department or end not after start
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    request_body = UpsertScheduleDto,
    responses(
        (status = 201, description = "Schedule entry created", body = ScheduleDto),
        (status = 400, description = "Invalid schedule data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let schedule = ScheduleService::new(&state.db, &state.notifications)
        .create(&user, ScheduleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

/// List schedule entries ordered by start time.
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = SCHEDULE_TAG,
    params(ScheduleQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of schedule entries", body = PageDto<ScheduleDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ScheduleQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let filter = ScheduleFilter {
        department_id: query.department_id,
        from: query.from,
        to: query.to,
    };
    let schedules = ScheduleService::new(&state.db, &state.notifications)
        .get_paginated(&filter, params.checked_page()?, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(schedules.into_dto(Schedule::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 200, description = "The schedule entry", body = ScheduleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_schedule_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let schedule = ScheduleService::new(&state.db, &state.notifications)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Update a schedule entry.
///
/// # Access Control
/// - The creator of the entry, or `Admin`
#[utoipa::path(
    put,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    request_body = UpsertScheduleDto,
    responses(
        (status = 200, description = "Schedule entry updated", body = ScheduleDto),
        (status = 400, description = "Invalid schedule data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let schedule = ScheduleService::new(&state.db, &state.notifications)
        .update(&user, id, ScheduleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Delete a schedule entry.
///
/// # Access Control
/// - The creator of the entry, or `Admin`
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 204, description = "Schedule entry deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ScheduleService::new(&state.db, &state.notifications)
        .delete(&user, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
