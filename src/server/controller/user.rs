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
        user::{CreateUserDto, SetActiveDto, SetRolesDto, TokenDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct UserQuery {
    /// Only list members of this department
    pub department_id: Option<i32>,
}

/// Create a user account.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Blank username or unknown department
/// - `409 Conflict` - Username already taken
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserQuery, PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = PageDto<UserDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(query.department_id, params.checked_page()?, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(|u| u.into_dto()))))
}

/// Get the user the bearer token belongs to.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's profile.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Unknown department", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .update(id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Replace the roles of a user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The user with the new role set
/// - `409 Conflict` - Would remove ADMIN from the last active admin
#[utoipa::path(
    put,
    path = "/api/users/{id}/roles",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = SetRolesDto,
    responses(
        (status = 200, description = "Roles replaced", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Last active admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn set_user_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetRolesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_roles(id, payload.roles)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Activate or deactivate a user.
///
/// Deactivated users are rejected on every request, even with a valid token.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{id}/active",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "Active flag updated", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Last active admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn set_user_active(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_active(id, payload.active)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Issue a bearer token for a user.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Signed token and its expiry
/// - `404 Not Found` - User not found
/// - `409 Conflict` - User is deactivated
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/token",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 201, description = "Token issued", body = TokenDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User is deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn issue_user_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;
    if !user.active {
        return Err(AppError::Conflict(format!("User {} is deactivated", user.id)));
    }

    let (token, expires_at) = state.tokens.issue(user.id)?;
    tracing::info!("Admin {} issued a token for user {}", admin.id, user.id);

    Ok((StatusCode::CREATED, Json(TokenDto { token, expires_at })))
}
