use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
        document::DocumentDto,
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{department::DepartmentParams, document::Document},
        service::{department::DepartmentService, document::DocumentService},
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Create a department.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The created department
/// - `400 Bad Request` - Blank name or code, or unknown parent
/// - `409 Conflict` - Name or code already taken
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Department created", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Name or code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let department = DepartmentService::new(&state.db)
        .create(DepartmentParams::from_create_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// List departments ordered by name.
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of departments", body = PageDto<DepartmentDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_departments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let departments = DepartmentService::new(&state.db)
        .get_paginated(params.checked_page()?, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(departments.into_dto(|d| d.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "The department", body = DepartmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_department_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let department = DepartmentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Update a department.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Department updated", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Name or code already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let department = DepartmentService::new(&state.db)
        .update(id, DepartmentParams::from_update_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

/// Delete a department nothing references.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Department deleted
/// - `404 Not Found` - Department not found
/// - `409 Conflict` - Department is still referenced
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Department is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    DepartmentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the documents a department owns together with those assigned to it.
///
/// Newest first. Executors may only list their own department.
#[utoipa::path(
    get,
    path = "/api/departments/{id}/documents",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID"), PaginationParams),
    responses(
        (status = 200, description = "Merged page of documents", body = PageDto<DocumentDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Department outside the caller's scope", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_department_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let documents = DocumentService::new(&state.db)
        .list_for_department(&user, id, params.checked_page()?, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(documents.into_dto(Document::into_dto))))
}
