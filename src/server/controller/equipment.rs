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
        equipment::{
            EquipmentCategory, EquipmentCondition, EquipmentDto, TransferEquipmentDto,
            UpsertEquipmentDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::equipment::{Equipment, EquipmentFilter, EquipmentParams},
        service::equipment::EquipmentService,
        state::AppState,
    },
};

/// Tag for grouping equipment endpoints in OpenAPI documentation
pub static EQUIPMENT_TAG: &str = "equipment";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EquipmentQuery {
    pub category: Option<EquipmentCategory>,
    pub condition: Option<EquipmentCondition>,
    pub department_id: Option<i32>,
}

/// Add an item to the inventory.
///
/// # Access Control
/// - `Admin` or `Commander`
///
/// # Returns
/// - `201 Created` - The created item
/// - `400 Bad Request` - Blank fields, negative quantity or unknown department
/// - `409 Conflict` - Inventory number already in use
#[utoipa::path(
    post,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    request_body = UpsertEquipmentDto,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentDto),
        (status = 400, description = "Invalid equipment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or commander", body = ErrorDto),
        (status = 409, description = "Inventory number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Commander])
        .await?;

    let item = EquipmentService::new(&state.db)
        .create(EquipmentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// List inventory ordered by inventory number.
#[utoipa::path(
    get,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    params(EquipmentQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of equipment", body = PageDto<EquipmentDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EquipmentQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let filter = EquipmentFilter {
        category: query.category,
        condition: query.condition,
        department_id: query.department_id,
    };
    let items = EquipmentService::new(&state.db)
        .get_paginated(&filter, params.checked_page()?, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(items.into_dto(Equipment::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "The item", body = EquipmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_equipment_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let item = EquipmentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Update an item that has not been written off.
///
/// # Access Control
/// - `Admin` or `Commander`
#[utoipa::path(
    put,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpsertEquipmentDto,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDto),
        (status = 400, description = "Invalid equipment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or commander", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 409, description = "Written off, or inventory number in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Commander])
        .await?;

    let item = EquipmentService::new(&state.db)
        .update(id, EquipmentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or commander", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Commander])
        .await?;

    EquipmentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Transfer an item to another department.
///
/// # Access Control
/// - `Admin` or `Commander`
///
/// # Returns
/// - `200 OK` - The transferred item
/// - `400 Bad Request` - Unknown department
/// - `409 Conflict` - Item has been written off
#[utoipa::path(
    post,
    path = "/api/equipment/{id}/transfer",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = TransferEquipmentDto,
    responses(
        (status = 200, description = "Equipment transferred", body = EquipmentDto),
        (status = 400, description = "Unknown department", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or commander", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 409, description = "Equipment has been written off", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn transfer_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<TransferEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Commander])
        .await?;

    let item = EquipmentService::new(&state.db)
        .transfer(id, payload.department_id)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}
